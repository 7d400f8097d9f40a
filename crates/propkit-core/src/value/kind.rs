use derive_more::Display;
use serde::Serialize;

///
/// ValueKind
///
/// Tag-level classification of a `Value`, used by matchers and by
/// conversion error reporting.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum ValueKind {
    Bool,
    Float,
    Int,
    List,
    Null,
    Symbol,
    Text,
}
