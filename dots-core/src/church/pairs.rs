//! Parenthesis pair matching
//!
//!     Every `(` is paired with the `)` that closes it, using a stack of open positions:
//!     each `)` consumes the most recently pushed unmatched `(`. Positions are byte offsets
//!     into the scanned string; parentheses are ASCII so those offsets are always valid
//!     slice boundaries.

use crate::error::{NotationError, Side};
use std::collections::BTreeMap;

/// Mapping from each opening parenthesis to its matching close.
///
/// Only produced by [`match_pairs`], so it is total over the opening positions of the
/// string it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairMap {
    pairs: BTreeMap<usize, usize>,
}

impl PairMap {
    /// The close position for the `(` at `open`, if `open` is an opening position.
    pub fn close_of(&self, open: usize) -> Option<usize> {
        self.pairs.get(&open).copied()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `(open, close)` pairs ordered by opening position.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pairs.iter().map(|(open, close)| (*open, *close))
    }
}

/// Builds the [`PairMap`] for `source` in one forward scan.
///
/// # Errors
///
/// [`NotationError::UnbalancedParens`] for the first `)` that has no open partner, or
/// for the innermost `(` still open at the end of the scan.
pub fn match_pairs(source: &str) -> Result<PairMap, NotationError> {
    let mut stack = Vec::new();
    let mut pairs = BTreeMap::new();

    for (i, byte) in source.bytes().enumerate() {
        match byte {
            b'(' => stack.push(i),
            b')' => {
                let open = stack.pop().ok_or(NotationError::UnbalancedParens {
                    position: i,
                    side: Side::Close,
                })?;
                pairs.insert(open, i);
            }
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(NotationError::UnbalancedParens {
            position: open,
            side: Side::Open,
        });
    }

    Ok(PairMap { pairs })
}
