// prelude.rs - Convenient re-exports for the idiomatic API.
//
//! # Prelude
//!
//! ```
//! use ferroprop::prelude::*;
//!
//! let cc = CharClass::new(r"\p{Lu}").unwrap();
//! let m = cc.find("answer: X").unwrap();
//! assert_eq!(m.as_str(), "X");
//! ```

pub use crate::api::{
    try_compile_property_escape, CharClass, CharClassBuilder, CodePointMatcher, CompiledAtom,
    EscapeOutcome, FindIter, Match,
};
pub use crate::error::PropertyError;
pub use crate::rangeset::{CodeRange, RangeSet};
pub use crate::types::{CodePoint, CompileOptions};
