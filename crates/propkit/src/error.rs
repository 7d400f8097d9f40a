use crate::core::{convert::ConvertError, value::Value};
use thiserror::Error as ThisError;

///
/// Error
///
/// Property failures surface synchronously to the caller of the accessor
/// or constructor that triggered them. Nothing is retried, logged, or
/// suppressed.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
#[remain::sorted]
pub enum Error {
    #[error("{type_name} does not accept {value} as value for the property {property}")]
    InvalidPropertyValue {
        type_name: String,
        property: String,
        value: Value,
    },

    #[error("{type_name} requires the property {property} to be set")]
    MissingRequiredProperty { type_name: String, property: String },

    #[error("{type_name} has no property called {property}")]
    UnknownProperty { type_name: String, property: String },

    #[error(transparent)]
    UnsupportedConversion(#[from] ConvertError),
}
