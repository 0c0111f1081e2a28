use crate::SUIT_SYMBOLS;

/// Card suit: spades, hearts, diamonds, clubs.
///
/// This is the outer loop of the canonical deck, so every spade precedes
/// every heart, and so on. The order follows the Unicode playing card block.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    S = 0,
    H = 1,
    D = 2,
    C = 3,
}

impl Suit {
    /// All four suits in canonical order.
    pub const fn all() -> [Suit; 4] {
        [Suit::S, Suit::H, Suit::D, Suit::C]
    }
    /// English name, as listed in validation messages.
    pub const fn name(&self) -> &'static str {
        match self {
            Suit::S => "spades",
            Suit::H => "hearts",
            Suit::D => "diamonds",
            Suit::C => "clubs",
        }
    }
    /// Uppercase symbol, read from the canonical symbol table.
    pub const fn symbol(&self) -> char {
        SUIT_SYMBOLS.as_bytes()[*self as usize] as char
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::S,
            1 => Suit::H,
            2 => Suit::D,
            3 => Suit::C,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// char isomorphism
impl TryFrom<char> for Suit {
    type Error = String;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        SUIT_SYMBOLS
            .find(c.to_ascii_uppercase())
            .map(|i| Suit::from(i as u8))
            .ok_or_else(|| format!("invalid suit char: {}", c))
    }
}
impl From<Suit> for char {
    fn from(s: Suit) -> char {
        s.symbol()
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
