use super::error::CodecError;
use crate::CHARACTERS;
use crate::HAND_SIZE;
use crate::TOKEN_WIDTH;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Rank;
use crate::cards::Suit;

/// An ordered selection of 31 pairwise distinct cards.
///
/// Order matters: the first card is the least significant digit of the
/// encoded value. Construction is only possible through validation, so a
/// `Sequence` in hand is always encodable.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Sequence([Card; HAND_SIZE]);

impl Sequence {
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.0.iter()
    }

    /// Only the caller that has just rebuilt a selection from a working deck
    /// may skip validation: every card it draws is already distinct.
    pub(super) fn unchecked(cards: [Card; HAND_SIZE]) -> Self {
        debug_assert!(Self::distinct(&cards));
        Self(cards)
    }

    fn distinct(cards: &[Card; HAND_SIZE]) -> bool {
        cards.iter().copied().collect::<Hand>().size() == HAND_SIZE
    }

    /// Rank and suit of one two-character token. Rank is checked first.
    fn token(pair: &[char]) -> Result<Card, CodecError> {
        let token = pair.iter().collect::<String>();
        let rank = Rank::try_from(pair[0])
            .map_err(|_| CodecError::UnrecognisedCardRank(token.clone()))?;
        let suit = Suit::try_from(pair[1])
            .map_err(|_| CodecError::UnrecognisedCardSuit(token))?;
        Ok(Card::from((rank, suit)))
    }
}

/// Validate a card listing. Whitespace is ignored and case does not matter;
/// the checks run in order: total length, then each token's rank and suit,
/// then distinctness.
impl TryFrom<&str> for Sequence {
    type Error = CodecError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars = s.chars().filter(|c| !c.is_whitespace()).collect::<Vec<char>>();
        match chars.len() {
            n if n < CHARACTERS => return Err(CodecError::TooFewCards(n)),
            n if n > CHARACTERS => return Err(CodecError::TooManyCards(n)),
            _ => {}
        }
        let mut cards = [Card::at(0); HAND_SIZE];
        for (slot, pair) in cards.iter_mut().zip(chars.chunks(TOKEN_WIDTH)) {
            *slot = Self::token(pair)?;
        }
        Self::try_from(cards)
    }
}

impl TryFrom<[Card; HAND_SIZE]> for Sequence {
    type Error = CodecError;
    fn try_from(cards: [Card; HAND_SIZE]) -> Result<Self, Self::Error> {
        if Self::distinct(&cards) {
            Ok(Self(cards))
        } else {
            Err(CodecError::DuplicatedCards)
        }
    }
}

impl From<Sequence> for [Card; HAND_SIZE] {
    fn from(sequence: Sequence) -> Self {
        sequence.0
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}
