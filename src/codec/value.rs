use super::basis::Basis;
use super::error::CodecError;
use num_bigint::BigUint;

/// An integer in `[0, 52!/(52-31)! - 1]`, the other side of the bijection.
///
/// Renders as lowercase hexadecimal with no prefix and no leading zeros,
/// `0` for zero.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Value(BigUint);

impl Value {
    pub fn inner(&self) -> &BigUint {
        &self.0
    }

    /// Parse a base-16 integer the way the dispatcher needs it: `None` means
    /// "not hexadecimal, try the card reader instead".
    ///
    /// Accepts ASCII hex digits in either case, an optional leading `+`, an
    /// optional `0x` prefix, and single `_` separators between digits (one may
    /// also follow the prefix). A minus sign is never accepted, so a negative
    /// value can never come out of here.
    pub fn hex(s: &str) -> Option<BigUint> {
        let s = s.strip_prefix('+').unwrap_or(s);
        let digits = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(rest) => rest.strip_prefix('_').unwrap_or(rest),
            None => s,
        };
        match digits
            .split('_')
            .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_hexdigit()))
        {
            true => BigUint::parse_bytes(digits.replace('_', "").as_bytes(), 16),
            false => None,
        }
    }

    /// Values assembled by the encoder are in range by construction.
    pub(super) fn unchecked(n: BigUint) -> Self {
        debug_assert!(&n <= Basis::upper());
        Self(n)
    }
}

impl TryFrom<BigUint> for Value {
    type Error = CodecError;
    fn try_from(n: BigUint) -> Result<Self, Self::Error> {
        if &n > Basis::upper() {
            Err(CodecError::HexValueTooLarge)
        } else {
            Ok(Self(n))
        }
    }
}

impl From<Value> for BigUint {
    fn from(value: Value) -> Self {
        value.0
    }
}

impl std::fmt::LowerHex for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::LowerHex::fmt(&self.0, f)
    }
}
impl std::fmt::UpperHex for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::UpperHex::fmt(&self.0, f)
    }
}
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_upper_limit() {
        let value = Value::try_from(Basis::upper().clone()).unwrap();
        assert_eq!(value.to_string(), "114882682e46b11eade9f57c1e3e0bbd47fffffff");
        assert_eq!(format!("{:X}", value), Basis::hex());
    }

    #[test]
    fn rejects_one_past_upper_limit() {
        let n = Basis::upper() + 1u32;
        assert_eq!(Value::try_from(n), Err(CodecError::HexValueTooLarge));
    }

    #[test]
    fn rejects_far_past_upper_limit() {
        let n = BigUint::from(1u32) << 256u32;
        assert_eq!(Value::try_from(n), Err(CodecError::HexValueTooLarge));
    }

    #[test]
    fn zero_renders_as_single_digit() {
        let value = Value::try_from(BigUint::from(0u32)).unwrap();
        assert_eq!(value.to_string(), "0");
    }

    #[test]
    fn hex_parses_either_case() {
        assert_eq!(Value::hex("DEADBEEF"), Some(BigUint::from(0xdeadbeefu32)));
        assert_eq!(Value::hex("deadbeef"), Some(BigUint::from(0xdeadbeefu32)));
        assert_eq!(Value::hex("0XFF"), Some(BigUint::from(255u32)));
        assert_eq!(Value::hex("0x00ff"), Some(BigUint::from(255u32)));
    }

    #[test]
    fn hex_drops_leading_zeros() {
        let n = Value::hex("000000000000000000000000000000000000000000000000001").unwrap();
        let value = Value::try_from(n).unwrap();
        assert_eq!(value.to_string(), "1");
    }

    #[test]
    fn hex_accepts_sign_and_separators() {
        assert_eq!(Value::hex("+FF"), Some(BigUint::from(255u32)));
        assert_eq!(Value::hex("DEAD_BEEF"), Some(BigUint::from(0xdeadbeefu32)));
        assert_eq!(Value::hex("0X_FF"), Some(BigUint::from(255u32)));
        assert_eq!(Value::hex("+0x_f_f"), Some(BigUint::from(255u32)));
    }

    #[test]
    fn hex_rejects_non_digits() {
        assert_eq!(Value::hex(""), None);
        assert_eq!(Value::hex("0x"), None);
        assert_eq!(Value::hex("0x_"), None);
        assert_eq!(Value::hex("+"), None);
        assert_eq!(Value::hex("-1"), None);
        assert_eq!(Value::hex("++1"), None);
        assert_eq!(Value::hex("_ff"), None);
        assert_eq!(Value::hex("ff_"), None);
        assert_eq!(Value::hex("f__f"), None);
        assert_eq!(Value::hex("0x__ff"), None);
        assert_eq!(Value::hex("ASKS"), None);
        assert_eq!(Value::hex("12 34"), None);
    }
}
