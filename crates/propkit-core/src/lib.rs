//! Core vocabulary for PropKit: dynamic values, the registered conversion
//! ops, and the pattern matchers shared by the declaration and runtime
//! layers.

pub mod convert;
pub mod matcher;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
///

pub mod prelude {
    pub use crate::{
        convert::ConvertError,
        matcher::Matcher,
        value::{Value, ValueKind},
    };
}
