use super::rank::Rank;
use super::suit::Suit;
use crate::DECK_SIZE;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `suit * 13 + rank`. The byte is therefore the card's position in the
/// canonical deck: `AS` is 0, `KS` is 12, `AH` is 13, `KC` is 51.
///
/// # Representations
///
/// - `u8`: canonical deck position `0..52`
/// - `u64`: single-bit representation for set membership in [`Hand`]
///
/// # Parsing
///
/// Cards parse from two-character tokens like `"AS"` or `"th"`, rank first.
/// Output is always uppercase.
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Card at a canonical deck position already known to be below 52,
    /// such as a set bit of a [`Hand`].
    ///
    /// [`Hand`]: super::hand::Hand
    pub(crate) const fn at(n: u8) -> Self {
        debug_assert!((n as usize) < DECK_SIZE);
        Self(n)
    }
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 % 13)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 / 13)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(s) * 13 + u8::from(r))
    }
}

/// u8 isomorphism, checked on the way in
/// each card is mapped to its location in the canonical deck 0-51
/// TH
/// 22
/// 0b00010110
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl TryFrom<u8> for Card {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match (n as usize) < DECK_SIZE {
            true => Ok(Self(n)),
            false => Err(format!("invalid card u8: {}", n)),
        }
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// TH
/// xxxxxxxxxxxx 0000000000000000000000000000010000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => {
                let rank = Rank::try_from(r)?;
                let suit = Suit::try_from(s)?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err("2 characters".into()),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}
