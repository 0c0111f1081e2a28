use super::card::Card;
use super::hand::Hand;

/// The working deck: cards not yet used by an encode or decode pass.
///
/// Wraps a [`Hand`] of remaining cards. Positions are always counted among
/// the *remaining* cards in canonical order, so removing a card closes the
/// gap it leaves and every later card shifts down by one. A fresh deck holds
/// all 52 cards; the canonical order itself is never mutated, each caller
/// owns its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck in canonical order.
    pub fn new() -> Self {
        Self(Hand::full())
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Position of a remaining card among the remaining cards.
    pub fn index_of(&self, card: &Card) -> usize {
        debug_assert!(self.contains(card));
        self.0.below(card).size()
    }
    /// Remove a specific card, closing the gap.
    pub fn remove(&mut self, card: Card) {
        self.0.remove(card);
    }
    /// Remove and return the card at a position among the remaining cards.
    pub fn draw(&mut self, index: usize) -> Card {
        debug_assert!(index < self.size());
        let mut ones = 0usize;
        let mut deck = u64::from(self.0);
        while ones < index {
            deck = deck & (deck - 1);
            ones = ones + 1;
        }
        let card = Card::at(deck.trailing_zeros() as u8);
        self.remove(card);
        card
    }
}

/// deterministic: yields the remaining cards in canonical order
impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}
