//! Notation implementations
//!
//! Each notation reads into and writes from the fully bracketed string, routing
//! bracket strings through a shared [`Canonicalizer`](crate::canonical::Canonicalizer).

pub mod brackets;
pub mod church;

pub use brackets::BracketsNotation;
pub use church::ChurchNotation;
