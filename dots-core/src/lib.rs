//! Bracket and dot notations for logical formulas
//!
//!     This crate converts formula text between fully bracketed notation and Church's
//!     single-dot notation, where a dot replaces an opening parenthesis whose scope runs
//!     to the end of the enclosing scope.
//!
//!     TLDR:
//!         - The conversion is purely syntactic. Parentheses and dots are structure, anything
//!           else is opaque content. No logical grammar is assumed or checked.
//!         - Every notation converts through the fully bracketed string.
//!         - Grammar-aware parsing plugs in through the Canonicalizer seam (./canonical.rs).
//!
//! Architecture
//!
//!     This is a pure lib, that is, it powers dots-cli but is shell agnostic: no code here
//!     prints, reads env vars or touches the filesystem.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── notation.rs             # Notation trait definition
//!     ├── registry.rs             # NotationRegistry for discovery and selection
//!     ├── canonical.rs            # Canonicalizer seam and built-in canonicalizers
//!     ├── church                  # The transcoder core
//!     │   ├── normalize.rs
//!     │   ├── pairs.rs
//!     │   ├── compress.rs
//!     │   └── expand.rs
//!     ├── notations
//!     │   ├── brackets.rs
//!     │   └── church.rs
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     └── church
//!         ├── scenarios.rs
//!         └── properties.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Core Algorithms
//!
//!     Compression strips redundant outer parentheses, matches pairs, then rewrites each
//!     pair in tail position (nothing follows its close inside the enclosing span) into a
//!     dot, recursively. Expansion is a single scan with a stack of open scopes.
//!     See ./church/mod.rs.
//!
//!     The two are inverse up to whitespace for dot-free, balanced input:
//!     expand(compress(b)) has the structure of trim_outer_parens(b).
//!
//! Notations
//!
//!     Notation specific capabilities are implemented with the Notation trait. Notations have a
//!     parse() (source -> brackets) and serialize() (brackets -> source) method, a name and file
//!     extensions.
//!     - Notation trait: uniform interface for all notations
//!     - NotationRegistry: centralized discovery and selection
//!     - brackets, church: the built-in notations
//!
//!     The Principia Mathematica multi-dot convention is a different algorithm and is not
//!     part of this crate.
pub mod canonical;
pub mod church;
pub mod error;
pub mod notation;
pub mod notations;
pub mod registry;

pub use canonical::{Canonicalizer, StructuralCanonicalizer, Verbatim};
pub use church::{compress, expand, trim_outer_parens};
pub use error::{NotationError, Side};
pub use notation::Notation;
pub use registry::NotationRegistry;
