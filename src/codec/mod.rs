//! The card ↔ integer bijection.
//!
//! - [`Basis`] — falling-factorial place values and radices
//! - [`Sequence`] — 31 distinct cards, validated from text
//! - [`Value`] — an integer in range, validated from a `BigUint`
//! - `From<&Sequence> for Value` encodes, `From<&Value> for Sequence` decodes
//! - [`encode`], [`decode`], [`Conversion`] — text in, text out
pub mod basis;
pub use basis::*;

pub mod codec;

pub mod error;
pub use error::*;

pub mod sequence;
pub use sequence::*;

pub mod text;
pub use text::*;

pub mod value;
pub use value::*;

#[cfg(test)]
mod tests;
