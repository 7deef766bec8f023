//! A single-round blackjack engine.
//!
//! The crate provides a [`Round`] type that manages one full round against
//! the dealer: dealing, player hit/stand decisions, the dealer's fixed
//! draw-to-17 policy, and outcome determination.
//!
//! # Example
//!
//! ```
//! use twentyone::{Outcome, Round, RoundState};
//!
//! let mut round = Round::new(42);
//! round.deal().unwrap();
//!
//! round.stand().unwrap();
//! assert_eq!(round.state(), RoundState::DealerTurn);
//!
//! round.dealer_play().unwrap();
//! let outcome = round.settle().unwrap();
//! assert_eq!(round.outcome(), Some(outcome));
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod result;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, DealerError, DeckError, ParseActionError, SettleError};
pub use hand::Hand;
pub use result::Outcome;
pub use round::{Action, Round, RoundState};
