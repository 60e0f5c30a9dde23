//! # ferroprop
//!
//! Unicode property escapes (`\p{...}` / `\P{...}`) for regular expression
//! engines, in pure Rust.
//!
//! Names are matched strictly: only the published canonical names and
//! aliases, byte for byte. No loose matching, no `is` prefix, no `\pL`
//! without braces, no `:` separator. Every malformed or unknown escape is a
//! compile-time error.
//!
//! ## Quick Start
//!
//! ```rust
//! use ferroprop::prelude::*;
//!
//! let cc = CharClass::new(r"[\p{Script=Greek}\d]").unwrap();
//! let m = cc.find("abc \u{3c0}").unwrap();
//! assert_eq!(m.as_str(), "\u{3c0}");
//! assert_eq!(m.start(), 4);
//! ```
//!
//! A pattern parser hands escapes to the subsystem as it meets them:
//!
//! ```rust
//! use ferroprop::prelude::*;
//!
//! match try_compile_property_escape(true, r"\P{Number}").unwrap() {
//!     EscapeOutcome::Compiled(atom) => {
//!         assert!(atom.matches_char('A'));
//!         assert!(!atom.matches_char('1'));
//!     }
//!     EscapeOutcome::NotApplicable => unreachable!(),
//! }
//!
//! let err = try_compile_property_escape(true, r"\p{IsGreek}").unwrap_err();
//! assert_eq!(err.code(), ferroprop::types::PROPERR_UNKNOWN_SHORTHAND_TOKEN);
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`types`] | Code point domain, options, error codes, limits |
//! | [`error`] | `PropertyError`, `RegistryBuildError` |
//! | [`errmsg`] | Error code to message conversion |
//! | [`rangeset`] | Normalized code point range sets |
//! | [`unicode`] | Metadata source trait and bundled Unicode tables |
//! | [`alias`] | Strict property and value alias lookup |
//! | [`registry`] | Canonical properties and their code point sets |
//! | [`escparse`] | `\p{...}` tokenizer |
//! | [`resolve`] | Token to RangeSet resolution |
//! | [`ccparse`] | Bracket expression composition |
//! | [`api`] | `CharClass`, `CompiledAtom`, `CodePointMatcher` |

// Enable #[coverage(off)] attribute when running under cargo-llvm-cov on nightly.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod alias;
pub mod api;
pub mod ccparse;
pub mod errmsg;
pub mod error;
pub mod escparse;
pub mod prelude;
pub mod rangeset;
pub mod registry;
pub mod resolve;
pub mod types;
pub mod unicode;
