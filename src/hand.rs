//! Hand representation and blackjack scoring.

use crate::card::Card;

const fn card_value(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

/// An ordered hand of cards belonging to one party (player or dealer).
///
/// A hand only grows; cards are never removed once dealt.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand, in deal order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    /// An empty hand has value 0. The value is recomputed from the cards on
    /// every call, so it is always consistent with the current contents.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Card, Hand, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Suit::Hearts, 1));
    /// hand.add_card(Card::new(Suit::Spades, 1));
    /// assert_eq!(hand.value(), 12); // one Ace softened to 1
    /// ```
    #[must_use]
    pub fn value(&self) -> u8 {
        let mut value: u8 = 0;
        let mut aces: u8 = 0;

        for card in &self.cards {
            if card.rank == 1 {
                aces += 1;
            }
            value = value.saturating_add(card_value(card.rank));
        }

        while value > 21 && aces > 0 {
            value -= 10;
            aces -= 1;
        }

        value
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
