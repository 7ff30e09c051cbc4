//! Removal of redundant wrapping parentheses

use std::collections::HashMap;

/// Strips every layer of parentheses that wraps the whole input.
///
/// Surrounding whitespace is trimmed before the first check and after each
/// removed layer. A leading `(` is only removed when its partner is the last
/// character; `(p)(q)` is returned as is. Inputs without a matching partner
/// for the leading `(` are returned trimmed but otherwise unchanged.
pub fn trim_outer_parens(source: &str) -> String {
    let trimmed = source.trim();
    let partners = partners(trimmed);
    let (mut lo, mut hi) = (0, trimmed.len());

    while trimmed[lo..hi].starts_with('(') && partners.get(&lo) == Some(&(hi - 1)) {
        let inner = &trimmed[lo + 1..hi - 1];
        lo += 1 + inner.len() - inner.trim_start().len();
        hi = lo + inner.trim().len();
    }
    trimmed[lo..hi].to_string()
}

/// Close position for every `(` that has one. Stray `)` are skipped.
fn partners(s: &str) -> HashMap<usize, usize> {
    let mut open = Vec::new();
    let mut partners = HashMap::new();
    for (i, byte) in s.bytes().enumerate() {
        match byte {
            b'(' => open.push(i),
            b')' => {
                if let Some(start) = open.pop() {
                    partners.insert(start, i);
                }
            }
            _ => {}
        }
    }
    partners
}
