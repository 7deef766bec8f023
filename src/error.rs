//! Error types for round operations.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards remain in the deck.
    #[error("no cards remain in the deck")]
    Empty,
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round state for dealing.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// The deck ran out of cards while dealing.
    #[error("deck exhausted while dealing")]
    DeckExhausted,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// The deck ran out of cards while drawing.
    #[error("deck exhausted while drawing")]
    DeckExhausted,
}

/// Errors that can occur during dealer play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Invalid round state for dealer play.
    #[error("invalid round state for dealer play")]
    InvalidState,
    /// The deck ran out of cards while the dealer had to draw.
    #[error("deck exhausted during dealer play")]
    DeckExhausted,
}

/// Errors that can occur when settling the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// The round has not reached a settled state yet.
    #[error("round is not settled yet")]
    NotSettled,
}

/// Error returned when an action string is not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unrecognized action, expected \"h\" or \"s\"")]
pub struct ParseActionError;
