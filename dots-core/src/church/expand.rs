//! Dots to brackets
//!
//!     One left-to-right scan with an explicit stack of open scopes. A lone `.` opens an
//!     implicit scope that runs until the nearest enclosing `)` or the end of the input.
//!
//!     `..` is an escape for a literal dot, but only the first dot of the pair is
//!     protected: the second one is looked at again on its own, so `a..b` expands to
//!     `a.(b)` rather than staying `a..b`. Kept as is; see DESIGN.md.

/// An entry on the expansion stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    /// An explicit `(` in the input
    OpenParen,
    /// A heavy dot, closed implicitly
    DotScope,
}

/// Rewrites Church dot notation into explicit parentheses.
///
/// Never fails; explicit parentheses are copied as they are, so unbalanced input
/// stays unbalanced.
pub fn expand(dotted: &str) -> String {
    let mut out = String::with_capacity(dotted.len() + 8);
    let mut stack: Vec<Marker> = Vec::new();
    let mut chars = dotted.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '.' if chars.peek() != Some(&'.') => {
                out.push('(');
                stack.push(Marker::DotScope);
            }
            '(' => {
                out.push('(');
                stack.push(Marker::OpenParen);
            }
            ')' => {
                while stack.last() == Some(&Marker::DotScope) {
                    stack.pop();
                    out.push(')');
                }
                out.push(')');
                if stack.last() == Some(&Marker::OpenParen) {
                    stack.pop();
                }
            }
            other => out.push(other),
        }
    }

    for marker in stack.iter().rev() {
        if *marker == Marker::DotScope {
            out.push(')');
        }
    }

    tracing::trace!(input = dotted, output = %out, "expanded dot scopes");
    out
}
