//! Church's single-dot convention
//!
//!     In Church's notation a single dot stands for an opening parenthesis whose scope
//!     runs to the end of the enclosing scope, so the matching close is never written.
//!     This module converts between that notation and fully bracketed strings. It is
//!     purely syntactic: parentheses and dots are structure, everything else (including
//!     whitespace) is opaque content, and no logical grammar is assumed.
//!
//!     The pieces, leaf first:
//!     .
//!     ├── normalize.rs    # strips parentheses wrapping the whole input
//!     ├── pairs.rs        # open -> close index map
//!     ├── compress.rs     # brackets -> dots (tail-position rule)
//!     └── expand.rs       # dots -> brackets (marker stack)
//!
//!     Compression runs normalize, pairs and compress in that order. Expansion is a single
//!     scan and leaves re-parsing of its output to the caller (see [`crate::canonical`]).

pub mod compress;
pub mod expand;
pub mod normalize;
pub mod pairs;

pub use compress::compress;
pub use expand::expand;
pub use normalize::trim_outer_parens;
pub use pairs::{match_pairs, PairMap};

use crate::error::NotationError;
use serde::Serialize;

/// What the compressor sees before rewriting: the normalized input and its pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    pub normalized: String,
    pub pairs: Vec<(usize, usize)>,
}

/// Runs the normalizer and pair matcher without compressing.
pub fn inspect(bracketed: &str) -> Result<Inspection, NotationError> {
    let normalized = trim_outer_parens(bracketed);
    let pairs = match_pairs(&normalized)?.iter().collect();
    Ok(Inspection { normalized, pairs })
}
