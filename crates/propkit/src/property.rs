use crate::{
    core::{convert, matcher::Matcher, value::Value},
    error::Error,
    instance::View,
};
use std::{fmt, sync::Arc};

/// Context-aware converter callable.
pub type ConvertFn = dyn for<'a, 'b> Fn(Value, &'a View<'b>) -> Value + Send + Sync;

/// Context-aware validator callable.
pub type ValidateFn = dyn for<'a, 'b, 'c> Fn(&'a Value, &'b View<'c>) -> bool + Send + Sync;

///
/// Converter
///
/// Transformation applied to non-null input before validation.
///

#[derive(Clone)]
#[remain::sorted]
pub enum Converter {
    /// Context-aware transformation function.
    Func(Arc<ConvertFn>),
    /// Named op resolved against the registered conversion table.
    Op(String),
}

impl Converter {
    /// Wrap a context-aware conversion function.
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(Value, &View<'_>) -> Value + Send + Sync + 'static,
    {
        Self::Func(Arc::new(f))
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Func(_) => f.write_str("Converter::Func"),
            Self::Op(op) => write!(f, "Converter::Op({op})"),
        }
    }
}

impl fmt::Display for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Func(_) => f.write_str("fn"),
            Self::Op(op) => write!(f, "op:{op}"),
        }
    }
}

impl From<&str> for Converter {
    fn from(op: &str) -> Self {
        Self::Op(op.to_string())
    }
}

impl From<String> for Converter {
    fn from(op: String) -> Self {
        Self::Op(op)
    }
}

///
/// Validator
///
/// Governs which converted values a property accepts.
///

#[derive(Clone)]
#[remain::sorted]
pub enum Validator {
    /// Truthy/falsy callable.
    Func(Arc<ValidateFn>),
    /// Pattern-match semantics.
    Matches(Matcher),
    /// Membership in a finite set.
    OneOf(Vec<Value>),
}

impl Validator {
    /// Wrap a context-aware validation function.
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&Value, &View<'_>) -> bool + Send + Sync + 'static,
    {
        Self::Func(Arc::new(f))
    }

    /// Membership validator over the given values.
    pub fn one_of<I, V>(allowed: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::OneOf(allowed.into_iter().map(Into::into).collect())
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Func(_) => f.write_str("Validator::Func"),
            Self::Matches(matcher) => write!(f, "Validator::Matches({matcher:?})"),
            Self::OneOf(allowed) => write!(f, "Validator::OneOf({allowed:?})"),
        }
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Func(_) => f.write_str("fn"),
            Self::Matches(matcher) => write!(f, "match:{matcher}"),
            Self::OneOf(allowed) => {
                let joined = allowed
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");

                write!(f, "one_of:[{joined}]")
            }
        }
    }
}

impl From<Matcher> for Validator {
    fn from(matcher: Matcher) -> Self {
        Self::Matches(matcher)
    }
}

impl From<Vec<Value>> for Validator {
    fn from(allowed: Vec<Value>) -> Self {
        Self::OneOf(allowed)
    }
}

///
/// Property
///
/// Immutable descriptor of one named attribute: default, converter,
/// validator, required flag, and the write pipeline that enforces them.
///

#[derive(Clone, Debug)]
pub struct Property {
    name: String,
    default: Value,
    converter: Option<Converter>,
    validator: Option<Validator>,
    required: bool,
}

impl Property {
    pub(crate) const fn new(
        name: String,
        default: Value,
        converter: Option<Converter>,
        validator: Option<Validator>,
        required: bool,
    ) -> Self {
        Self {
            name,
            default,
            converter,
            validator,
            required,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn default(&self) -> &Value {
        &self.default
    }

    #[must_use]
    pub const fn converter(&self) -> Option<&Converter> {
        self.converter.as_ref()
    }

    #[must_use]
    pub const fn validator(&self) -> Option<&Validator> {
        self.validator.as_ref()
    }

    #[must_use]
    pub const fn required(&self) -> bool {
        self.required
    }

    /// Apply the configured converter. Values pass through untouched when
    /// none is set.
    pub fn convert(&self, value: Value, view: &View<'_>) -> Result<Value, Error> {
        match &self.converter {
            None => Ok(value),
            Some(Converter::Func(f)) => Ok(f(value, view)),
            Some(Converter::Op(op)) => Ok(convert::apply(op, value)?),
        }
    }

    /// Null is always valid, and so is everything when no validator is set.
    #[must_use]
    pub fn valid(&self, value: &Value, view: &View<'_>) -> bool {
        if value.is_null() {
            return true;
        }

        match &self.validator {
            None => true,
            Some(Validator::Func(f)) => f(value, view),
            Some(Validator::Matches(matcher)) => matcher.matches(value),
            Some(Validator::OneOf(allowed)) => allowed.contains(value),
        }
    }

    /// The write pipeline: required check, then conversion (exactly once,
    /// never for Null), then validation. Returns the value to store.
    pub fn prepare(&self, value: Value, view: &View<'_>) -> Result<Value, Error> {
        if self.required && value.is_null() {
            return Err(Error::MissingRequiredProperty {
                type_name: view.type_name().to_string(),
                property: self.name.clone(),
            });
        }

        let value = if value.is_null() {
            value
        } else {
            self.convert(value, view)?
        };

        if !self.valid(&value, view) {
            return Err(Error::InvalidPropertyValue {
                type_name: view.type_name().to_string(),
                property: self.name.clone(),
                value,
            });
        }

        Ok(value)
    }
}

///
/// TESTS
///
