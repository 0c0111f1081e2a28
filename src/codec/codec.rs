use super::basis::Basis;
use super::sequence::Sequence;
use super::value::Value;
use crate::HAND_SIZE;
use crate::cards::Card;
use crate::cards::Deck;
use num_bigint::BigUint;
use num_traits::Zero;

/// Encode. Each card becomes its position in the working deck, then leaves
/// the deck, so the i-th digit ranges over `0..52-i` and no value is skipped.
/// The result is the sum of digit × place value.
impl From<&Sequence> for Value {
    fn from(sequence: &Sequence) -> Self {
        let mut deck = Deck::new();
        let value = sequence
            .iter()
            .zip(Basis::weights())
            .map(|(card, weight)| {
                let digit = deck.index_of(card);
                deck.remove(*card);
                weight * digit
            })
            .fold(BigUint::zero(), |sum, term| sum + term);
        Value::unchecked(value)
    }
}
impl From<Sequence> for Value {
    fn from(sequence: Sequence) -> Self {
        Self::from(&sequence)
    }
}

/// Decode. Successive division by 52, 51, ..., 22 recovers the digits
/// least significant first; replaying them against a fresh working deck
/// reproduces the same shrinking deck the encoder saw.
impl From<&Value> for Sequence {
    fn from(value: &Value) -> Self {
        let mut n = value.inner().clone();
        let mut digits = [0usize; HAND_SIZE];
        for (i, digit) in digits.iter_mut().enumerate() {
            let divisor = Basis::divisor(i);
            let remainder = &n % divisor;
            n /= divisor;
            *digit = remainder.iter_u32_digits().next().unwrap_or(0) as usize;
        }
        debug_assert!(n.is_zero());
        let mut deck = Deck::new();
        let mut cards = [Card::at(0); HAND_SIZE];
        for (card, digit) in cards.iter_mut().zip(digits) {
            *card = deck.draw(digit);
        }
        Sequence::unchecked(cards)
    }
}
impl From<Value> for Sequence {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}
