use super::card::Card;

/// Hand represents an unordered set of Cards, stored as a single u64 where
/// only the 52 least significant bits are used. Bit `i` is the card at
/// position `i` of the canonical deck, so iterating bits low to high walks
/// the cards in canonical order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }
    pub fn full() -> Self {
        Self(Self::mask())
    }

    pub fn add(lhs: Self, rhs: Self) -> Self {
        Self(lhs.0 | rhs.0)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    /// cards in this hand that sit strictly before `card` in canonical order
    pub fn below(&self, card: &Card) -> Self {
        Self(self.0 & (u64::from(*card) - 1))
    }

    const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() == 0 {
            None
        } else {
            let card = Card::at(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        iter.into_iter()
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// u64 isomorphism
/// we OR the cards to get the bitstring
/// [AS, 3S, TH]
/// xxxxxxxxxxxx 0000000000000000000000000000010000000000000000000101
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> u64 {
        h.0
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = (*self).map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}
