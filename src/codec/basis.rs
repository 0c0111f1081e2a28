use crate::DECK_SIZE;
use crate::HAND_SIZE;
use num_bigint::BigUint;
use num_traits::One;
use std::sync::LazyLock;

/// positional weights 52!/(52-i)! for i in 0..31
static WEIGHTS: LazyLock<[BigUint; HAND_SIZE]> = LazyLock::new(|| {
    let mut weight = BigUint::one();
    std::array::from_fn(|i| {
        let this = weight.clone();
        weight *= Basis::divisor(i);
        this
    })
});

/// 52!/(52-31)! - 1
static UPPER: LazyLock<BigUint> = LazyLock::new(|| {
    (0..HAND_SIZE)
        .map(Basis::divisor)
        .fold(BigUint::one(), |product, divisor| product * divisor)
        - 1u32
});

/// The falling-factorial (drifting) basis.
///
/// Position `i` of a card selection is a digit in `0..52-i`, because `i`
/// cards have already left the deck. Its place value is the product of every
/// earlier radix: `1, 52, 52·51, 52·51·50, ..., 52!/22!`. Encoding sums
/// `digit × weight`; decoding peels digits off with successive division by
/// the radices `52, 51, ..., 22`.
///
/// The tables are exact `BigUint`s built once per process.
pub struct Basis;

impl Basis {
    /// Radix of position `i`: how many cards remain when it is chosen.
    pub const fn divisor(i: usize) -> u32 {
        (DECK_SIZE - i) as u32
    }
    /// Place value of position `i`.
    pub fn weight(i: usize) -> &'static BigUint {
        &WEIGHTS[i]
    }
    pub fn weights() -> &'static [BigUint; HAND_SIZE] {
        &WEIGHTS
    }
    /// Largest encodable value.
    pub fn upper() -> &'static BigUint {
        &UPPER
    }
    /// Largest encodable value in uppercase hexadecimal, as shown to users.
    pub fn hex() -> String {
        format!("{:X}", Self::upper())
    }
}
