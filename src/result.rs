//! Round outcome types.

use std::fmt;

/// Result of a completed round.
///
/// Produced exactly once per round, when the round settles. The `Display`
/// impl renders the terminal message shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player went over 21; the dealer wins without playing.
    PlayerBust,
    /// Dealer went over 21; the player wins.
    DealerBust,
    /// Player finished with the higher value.
    PlayerWin,
    /// Dealer finished with the higher value.
    DealerWin,
    /// Both finished with the same value.
    Push,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerBust => "player busts, dealer wins",
            Self::DealerBust => "dealer busts, player wins",
            Self::PlayerWin => "player wins",
            Self::DealerWin => "player loses",
            Self::Push => "push/tie",
        })
    }
}
