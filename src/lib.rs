//! Reversible conversion between 31 playing cards and one large integer.
//!
//! An ordered selection of 31 distinct cards from a standard deck carries
//! `52!/(52-31)!` possibilities, a little more than 2^160. This crate maps
//! every such selection to exactly one integer in `[0, 52!/21! - 1]` and back,
//! using a falling-factorial positional system in which each card is valued
//! against the cards that have not been used yet.
//!
//! ## Modules
//!
//! - [`cards`] — `Rank`, `Suit`, `Card`, the bitmask `Hand`, and the shrinking `Deck`
//! - [`codec`] — validation, the falling-factorial basis, and encode/decode
//! - `cli` — command-line front end (feature `cli`)
pub mod cards;
pub mod codec;

#[cfg(feature = "cli")]
pub mod cli;

// ============================================================================
// DECK GEOMETRY
// ============================================================================
/// Cards in a full pack.
pub const DECK_SIZE: usize = 52;
/// Cards in one encodable selection.
pub const HAND_SIZE: usize = 31;
/// Characters per card token, rank then suit.
pub const TOKEN_WIDTH: usize = 2;
/// Non-whitespace characters in a complete card listing.
pub const CHARACTERS: usize = HAND_SIZE * TOKEN_WIDTH;

// ============================================================================
// CANONICAL ORDERING
// Suits outer, ranks inner: AS 2S .. KS AH .. KH AD .. KD AC .. KC
// ============================================================================
/// Rank symbols in canonical order.
pub const RANK_SYMBOLS: &str = "A23456789TJQK";
/// Suit symbols in canonical order.
pub const SUIT_SYMBOLS: &str = "SHDC";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr.
/// Nothing is written to disk: inputs and outputs are key material.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    if simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("logger already initialized");
    }
}
