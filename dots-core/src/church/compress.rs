//! Brackets to dots
//!
//!     A pair of parentheses can be replaced by a single dot only when its extent is
//!     unambiguous without a closing delimiter, that is when the pair is the last thing in
//!     its enclosing scope (tail position). The rule is applied at every nesting level, so
//!     nested tail pairs collapse into consecutive dots:
//!
//!         a(b(c))     ->  a. b. c
//!         (p)(q)      ->  (p). q
//!         (a(b))c     ->  (a. b)c
//!
//!     Spans are rendered with an explicit stack instead of recursion, so arbitrarily
//!     deep input compresses in linear time without touching the call stack.

use super::normalize::trim_outer_parens;
use super::pairs::{match_pairs, PairMap};
use crate::error::{NotationError, Side};
use once_cell::sync::Lazy;
use regex::Regex;

/// Whitespace runs in front of a dot, collapsed to one space after compression.
static SPACE_BEFORE_DOT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+\.").unwrap());

/// Rewrites a balanced bracket string into Church's single-dot notation.
///
/// Redundant outer parentheses are removed first. No output is produced for
/// unbalanced input.
///
/// # Errors
///
/// [`NotationError::UnbalancedParens`] when the parentheses do not balance.
pub fn compress(bracketed: &str) -> Result<String, NotationError> {
    let normalized = trim_outer_parens(bracketed);
    let pairs = match_pairs(&normalized)?;
    let span = Span {
        source: &normalized,
        pairs: &pairs,
    };
    let dotted = span.render(0, normalized.len())?;
    tracing::trace!(input = bracketed, output = %dotted, "compressed span tree");
    Ok(SPACE_BEFORE_DOT.replace_all(&dotted, " .").into_owned())
}

struct Span<'a> {
    source: &'a str,
    pairs: &'a PairMap,
}

/// A span still being scanned, and how its text is closed off once the scan ends.
struct Frame {
    next: usize,
    hi: usize,
    trim_tail: bool,
    close_paren: bool,
}

impl Span<'_> {
    /// Renders the half-open byte range `[lo, hi)`.
    ///
    /// Nested spans are kept on an explicit stack, so nesting depth is limited by
    /// memory only. The output buffer is handed from span to span: whichever span
    /// is on top of the stack is the only one writing, and its text always forms
    /// the end of the buffer.
    fn render(&self, lo: usize, hi: usize) -> Result<String, NotationError> {
        let bytes = self.source.as_bytes();
        let mut out = String::with_capacity(hi - lo + 1);
        let mut open_spans = vec![Frame {
            next: lo,
            hi,
            trim_tail: false,
            close_paren: false,
        }];

        while let Some(mut frame) = open_spans.pop() {
            let open = bytes[frame.next..frame.hi]
                .iter()
                .position(|&b| b == b'(')
                .map(|offset| frame.next + offset);
            out.push_str(&self.source[frame.next..open.unwrap_or(frame.hi)]);

            let Some(open) = open else {
                if frame.trim_tail {
                    out.truncate(out.trim_end().len());
                }
                if frame.close_paren {
                    out.push(')');
                }
                continue;
            };

            let close = self
                .pairs
                .close_of(open)
                .ok_or(NotationError::UnbalancedParens {
                    position: open,
                    side: Side::Open,
                })?;

            if close + 1 == frame.hi {
                // Nothing may follow a dot inside its scope, so the interior takes
                // over the rest of this span.
                out.push_str(". ");
                open_spans.push(Frame {
                    next: open + 1,
                    hi: close,
                    trim_tail: true,
                    close_paren: frame.close_paren,
                });
                continue;
            }

            out.push('(');
            frame.next = close + 1;
            open_spans.push(frame);
            open_spans.push(Frame {
                next: open + 1,
                hi: close,
                trim_tail: false,
                close_paren: true,
            });
        }

        Ok(out)
    }
}
