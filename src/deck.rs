//! Deck construction, shuffling, and drawing.

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckError;

/// An ordered deck of undealt cards.
///
/// A deck holds exactly [`DECK_SIZE`] unique cards at construction and only
/// shrinks, one card per [`draw`](Self::draw). It lives for a single round.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards; the front is drawn first.
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a fresh, unshuffled 52-card deck.
    ///
    /// Cards are ordered suit-major following [`Suit::ALL`], ranks ascending
    /// Ace through King within each suit.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), 52);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push_back(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck with a fixed card order.
    ///
    /// Cards are drawn in iteration order, front first. Intended for
    /// deterministic replay and tests; no shuffle is applied.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Card, Deck, Suit};
    ///
    /// let mut deck = Deck::from_cards([Card::new(Suit::Hearts, 1)]);
    /// assert_eq!(deck.draw().unwrap().rank, 1);
    /// assert!(deck.is_empty());
    /// ```
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Shuffles the remaining cards in place with an unbiased permutation.
    ///
    /// Must be called before any draw; shuffling a partially drawn deck is
    /// not a supported engine operation.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the top card, preserving the order of the rest.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Empty)
    }

    /// Returns the remaining cards, front (next drawn) first.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
