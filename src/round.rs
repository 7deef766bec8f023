//! Round engine: turn sequencing and outcome determination.

use std::str::FromStr;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, DealError, DealerError, ParseActionError, SettleError};
use crate::hand::Hand;
use crate::result::Outcome;

/// The dealer draws while below this value and stands at or above it.
const DEALER_STAND: u8 = 17;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Initial cards have not been dealt yet.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the outcome can be settled.
    Settled,
}

/// A player action during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw one more card.
    Hit,
    /// Keep the current hand and end the turn.
    Stand,
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Parses `"h"`/`"hit"` and `"s"`/`"stand"`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("h") || s.eq_ignore_ascii_case("hit") {
            Ok(Self::Hit)
        } else if s.eq_ignore_ascii_case("s") || s.eq_ignore_ascii_case("stand") {
            Ok(Self::Stand)
        } else {
            Err(ParseActionError)
        }
    }
}

/// A single round of blackjack against the dealer.
///
/// The round owns its deck and both hands for its whole lifetime. Flow:
/// [`deal`](Self::deal), then [`hit`](Self::hit)/[`stand`](Self::stand)
/// until the player stands or busts, then [`dealer_play`](Self::dealer_play),
/// then [`settle`](Self::settle).
///
/// # Example
///
/// ```
/// use twentyone::{Round, RoundState};
///
/// let mut round = Round::new(42);
/// round.deal().unwrap();
/// assert_eq!(round.state(), RoundState::PlayerTurn);
/// assert_eq!(round.player_hand().len(), 2);
/// assert_eq!(round.dealer_hand().len(), 2);
/// ```
#[derive(Debug)]
pub struct Round {
    /// Undealt cards.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
    /// Current state.
    state: RoundState,
    /// Final outcome, set once when the round settles.
    outcome: Option<Outcome>,
}

impl Round {
    /// Creates a round with a freshly shuffled deck seeded from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        Self::from_deck(deck)
    }

    /// Creates a round over a pre-ordered deck, without shuffling.
    ///
    /// The draw order is fixed: player, player, dealer, dealer, then hits
    /// and dealer draws in sequence. Intended for deterministic replay.
    #[must_use]
    pub const fn from_deck(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            state: RoundState::Dealing,
            outcome: None,
        }
    }

    /// Deals two cards to the player, then two to the dealer.
    ///
    /// Transitions to [`RoundState::PlayerTurn`]. The dealer's second card
    /// stays concealed until the dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealing state or the
    /// deck runs out of cards.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::Dealing {
            return Err(DealError::InvalidState);
        }

        for _ in 0..2 {
            let card = self.deck.draw().map_err(|_| DealError::DeckExhausted)?;
            self.player.add_card(card);
        }
        for _ in 0..2 {
            let card = self.deck.draw().map_err(|_| DealError::DeckExhausted)?;
            self.dealer.add_card(card);
        }

        self.state = RoundState::PlayerTurn;
        Ok(())
    }

    /// Player action: Hit (draw one more card).
    ///
    /// If the card takes the hand over 21 the round settles immediately
    /// with [`Outcome::PlayerBust`] and the dealer never plays.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let card = self.deck.draw().map_err(|_| ActionError::DeckExhausted)?;
        self.player.add_card(card);

        if self.player.is_bust() {
            self.state = RoundState::Settled;
            self.outcome = Some(Outcome::PlayerBust);
        }

        Ok(card)
    }

    /// Player action: Stand (keep the current hand).
    ///
    /// Transitions to [`RoundState::DealerTurn`], revealing the dealer's
    /// hand.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        self.state = RoundState::DealerTurn;
        Ok(())
    }

    /// Dealer plays their hand: draws while below 17, stands at 17 or more.
    ///
    /// The policy is fixed. Returns the cards drawn and transitions to
    /// [`RoundState::Settled`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck runs out
    /// while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, DealerError> {
        if self.state != RoundState::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        let mut drawn = Vec::new();

        while self.dealer.value() < DEALER_STAND {
            let card = self.deck.draw().map_err(|_| DealerError::DeckExhausted)?;
            self.dealer.add_card(card);
            drawn.push(card);
        }

        self.state = RoundState::Settled;
        Ok(drawn)
    }

    /// Computes the outcome of a settled round.
    ///
    /// The outcome is fixed once computed; repeated calls return the same
    /// value. If the player busted the outcome was already decided during
    /// [`hit`](Self::hit).
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not settled yet.
    pub fn settle(&mut self) -> Result<Outcome, SettleError> {
        if self.state != RoundState::Settled {
            return Err(SettleError::NotSettled);
        }

        if let Some(outcome) = self.outcome {
            return Ok(outcome);
        }

        // Only reachable via Stand, so the player is known to be at most 21.
        let player_value = self.player.value();
        let dealer_value = self.dealer.value();

        let outcome = if dealer_value > 21 {
            Outcome::DealerBust
        } else if player_value > dealer_value {
            Outcome::PlayerWin
        } else if player_value < dealer_value {
            Outcome::DealerWin
        } else {
            Outcome::Push
        };

        self.outcome = Some(outcome);
        Ok(outcome)
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    ///
    /// Whether the full hand should be shown is reported by
    /// [`dealer_revealed`](Self::dealer_revealed).
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the dealer's face-up card (the first card dealt to them).
    #[must_use]
    pub fn dealer_upcard(&self) -> Option<&Card> {
        self.dealer.cards().first()
    }

    /// Returns whether the dealer's full hand is revealed.
    ///
    /// The hand is concealed until the dealer's turn and stays concealed
    /// when the round ends by player bust, since the dealer never plays.
    #[must_use]
    pub fn dealer_revealed(&self) -> bool {
        match self.state {
            RoundState::Dealing | RoundState::PlayerTurn => false,
            RoundState::DealerTurn => true,
            RoundState::Settled => self.outcome != Some(Outcome::PlayerBust),
        }
    }

    /// Returns the outcome, if the round has settled.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
