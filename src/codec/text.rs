use super::error::CodecError;
use super::sequence::Sequence;
use super::value::Value;

/// Drop every whitespace character and uppercase the rest.
pub fn clean(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Card listing in, lowercase hexadecimal out.
pub fn encode(text: &str) -> Result<String, CodecError> {
    let sequence = Sequence::try_from(clean(text).as_str())?;
    Ok(Value::from(&sequence).to_string())
}

/// Hexadecimal in, card listing out. Input that is not hexadecimal is read
/// as a card listing instead and comes back as hexadecimal.
pub fn decode(text: &str) -> Result<String, CodecError> {
    Conversion::try_from(text).map(|conversion| conversion.to_string())
}

/// One dispatched conversion, holding the validated input.
///
/// A valid listing of 31 distinct cards always includes at least five
/// spades or hearts, and `S`/`H` are not hex digits, so no text is valid
/// both ways. Text that is neither falls through to the card reader and is
/// rejected there with a card error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// read as cards, to be shown as a value
    Cards(Sequence),
    /// read as a value, to be shown as cards
    Value(Value),
}

impl TryFrom<&str> for Conversion {
    type Error = CodecError;
    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let ref text = clean(text);
        match Value::hex(text) {
            Some(n) => {
                log::debug!("reading {} hex digits as a value", text.len());
                Value::try_from(n).map(Conversion::Value)
            }
            None => {
                log::debug!("reading {} characters as cards", text.chars().count());
                Sequence::try_from(text.as_str()).map(Conversion::Cards)
            }
        }
    }
}

/// the converted form: hexadecimal for cards, cards for a value
impl std::fmt::Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Conversion::Cards(sequence) => write!(f, "{}", Value::from(sequence)),
            Conversion::Value(value) => write!(f, "{}", Sequence::from(value)),
        }
    }
}
