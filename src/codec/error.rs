use super::basis::Basis;
use crate::CHARACTERS;
use crate::HAND_SIZE;
use crate::cards::Rank;
use crate::cards::Suit;

/// Reasons an input cannot be read as either 31 cards or an encodable value.
///
/// Every variant is a terminal rejection of one call's input. The `Display`
/// text tells the user what a valid input looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// fewer non-whitespace characters than 31 two-character tokens
    TooFewCards(usize),
    /// more non-whitespace characters than 31 two-character tokens
    TooManyCards(usize),
    /// token whose first character is not a rank symbol
    UnrecognisedCardRank(String),
    /// token whose second character is not a suit symbol
    UnrecognisedCardSuit(String),
    /// some card appears more than once
    DuplicatedCards,
    /// integer above 52!/(52-31)! - 1
    HexValueTooLarge,
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewCards(n) => write!(
                f,
                "{} cards required, each 2 characters.\n\
                 {} characters required in total.\n\
                 Only {} nonwhitespace characters provided.",
                HAND_SIZE, CHARACTERS, n
            ),
            Self::TooManyCards(n) => write!(
                f,
                "{} cards required, each 2 characters.\n\
                 {} characters required in total.\n\
                 {} nonwhitespace characters provided.",
                HAND_SIZE, CHARACTERS, n
            ),
            Self::UnrecognisedCardRank(token) => {
                writeln!(f, "'{}' is not a recognised card rank.", token)?;
                write!(f, "A valid rank is a single character as follows:")?;
                Rank::all()
                    .iter()
                    .try_for_each(|r| write!(f, "\n'{}' ({})", r, r.name()))
            }
            Self::UnrecognisedCardSuit(token) => {
                writeln!(f, "'{}' is not a recognised card suit.", token)?;
                write!(f, "A valid suit is a single character as follows:")?;
                Suit::all()
                    .iter()
                    .try_for_each(|s| write!(f, "\n'{}' ({})", s, s.name()))
            }
            Self::DuplicatedCards => write!(
                f,
                "No two cards should be the same.\n\
                 Cards should be drawn from a single deck of 52 cards.\n\
                 Cards should be drawn without replacement."
            ),
            Self::HexValueTooLarge => write!(
                f,
                "The hexadecimal value is too large to be represented by {} cards.\n\
                 The maximum valid value is 52!/(52-{})! - 1\n\
                 In hexadecimal this maximum is\n\
                 {}",
                HAND_SIZE,
                HAND_SIZE,
                Basis::hex()
            ),
        }
    }
}

impl std::error::Error for CodecError {}
