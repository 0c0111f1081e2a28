use super::*;
use crate::DECK_SIZE;
use crate::HAND_SIZE;
use crate::cards::Card;
use crate::cards::Deck;
use num_bigint::BigUint;
use rand::seq::SliceRandom;
use std::collections::HashSet;

const TRIALS: usize = 1_000;

/// 31 cards from a uniformly shuffled deck
fn sequence() -> Sequence {
    let mut cards = Deck::new().collect::<Vec<Card>>();
    cards.shuffle(&mut rand::rng());
    let cards = <[Card; HAND_SIZE]>::try_from(&cards[..HAND_SIZE]).unwrap();
    Sequence::try_from(cards).unwrap()
}

/// 168 random bits folded into range
fn value() -> Value {
    let bytes = rand::random::<[u8; 21]>();
    let n = BigUint::from_bytes_be(&bytes) % (Basis::upper() + 1u32);
    Value::try_from(n).unwrap()
}

#[test]
fn cards_survive_round_trip() {
    for _ in 0..TRIALS {
        let cards = sequence();
        assert_eq!(cards, Sequence::from(Value::from(&cards)));
    }
}

#[test]
fn values_survive_round_trip() {
    for _ in 0..TRIALS {
        let value = value();
        assert_eq!(value, Value::from(Sequence::from(&value)));
    }
}

#[test]
fn text_survives_round_trip() {
    for _ in 0..TRIALS / 10 {
        let cards = sequence().to_string();
        let hex = encode(&cards).unwrap();
        assert_eq!(decode(&hex).unwrap(), cards);
        assert_eq!(decode(&cards).unwrap(), hex);
    }
}

#[test]
fn encoded_values_stay_in_range() {
    for _ in 0..TRIALS {
        assert!(Value::from(sequence()).inner() <= Basis::upper());
    }
}

#[test]
fn hex_output_is_canonical() {
    for _ in 0..TRIALS {
        let hex = encode(&sequence().to_string()).unwrap();
        assert!(hex.len() <= 41);
        assert!(hex == "0" || !hex.starts_with('0'));
        assert!(hex.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    }
}

#[test]
fn neighbours_of_the_boundaries() {
    let upper = Basis::upper();
    for n in [
        BigUint::from(0u32),
        BigUint::from(1u32),
        BigUint::from(DECK_SIZE as u32 - 1),
        BigUint::from(DECK_SIZE as u32),
        upper - 1u32,
        upper.clone(),
    ] {
        let value = Value::try_from(n).unwrap();
        assert_eq!(value, Value::from(Sequence::from(&value)));
    }
    assert!(Value::try_from(upper + 1u32).is_err());
}

/// every ordering of the last two cards over a fixed 29-card prefix
#[test]
fn last_two_positions_are_injective() {
    let prefix = Deck::new().take(HAND_SIZE - 2).collect::<Vec<Card>>();
    let remaining = Deck::new().skip(HAND_SIZE - 2).collect::<Vec<Card>>();
    let mut seen = HashSet::new();
    for a in remaining.iter() {
        for b in remaining.iter().filter(|b| *b != a) {
            let mut cards = [Card::at(0); HAND_SIZE];
            cards[..HAND_SIZE - 2].copy_from_slice(&prefix);
            cards[HAND_SIZE - 2] = *a;
            cards[HAND_SIZE - 1] = *b;
            let sequence = Sequence::try_from(cards).unwrap();
            let value = Value::from(&sequence);
            assert!(value.inner() <= Basis::upper());
            assert!(seen.insert(value));
        }
    }
    let n = DECK_SIZE - (HAND_SIZE - 2);
    assert_eq!(seen.len(), n * (n - 1));
}

/// the first few thousand integers decode to distinct selections
#[test]
fn small_values_are_injective() {
    let mut seen = HashSet::new();
    for n in 0u32..4096 {
        let value = Value::try_from(BigUint::from(n)).unwrap();
        let sequence = Sequence::from(&value);
        assert_eq!(Value::from(&sequence), value);
        assert!(seen.insert(sequence));
    }
}

#[test]
fn codec_is_safe_across_threads() {
    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..TRIALS / 10 {
                    let cards = sequence();
                    assert_eq!(cards, Sequence::from(Value::from(&cards)));
                }
            });
        }
    });
}
