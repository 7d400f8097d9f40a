use crate::{
    core::value::Value,
    model::type_def::TypeDef,
    property::{Converter, Property, Validator},
};
use std::sync::Arc;

///
/// PropertyDraft
///
/// Declaration-time options for one property. A draft stays open for
/// adjustment until the owning builder seals the type.
///

pub struct PropertyDraft {
    name: String,
    default: Value,
    converter: Option<Converter>,
    validator: Option<Validator>,
    required: bool,
}

impl PropertyDraft {
    const fn new(name: String) -> Self {
        Self {
            name,
            default: Value::Null,
            converter: None,
            validator: None,
            required: false,
        }
    }

    /// Fallback value used when construction supplies no attribute.
    pub fn default_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.default = value.into();
        self
    }

    /// Transform non-null input before validation.
    pub fn converts(&mut self, converter: impl Into<Converter>) -> &mut Self {
        self.converter = Some(converter.into());
        self
    }

    /// Govern which converted values are accepted.
    pub fn accepts(&mut self, validator: impl Into<Validator>) -> &mut Self {
        self.validator = Some(validator.into());
        self
    }

    /// Reject null at write time.
    pub fn required(&mut self, required: bool) -> &mut Self {
        self.required = required;
        self
    }

    fn freeze(self) -> Property {
        Property::new(
            self.name,
            self.default,
            self.converter,
            self.validator,
            self.required,
        )
    }
}

///
/// TypeBuilder
///
/// The declaration phase for one type. Properties are declared while the
/// builder is open; `seal` resolves inheritance once, binds accessors, and
/// closes the type for good.
///

pub struct TypeBuilder {
    name: String,
    parent: Option<Arc<TypeDef>>,
    drafts: Vec<PropertyDraft>,
}

impl TypeBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            drafts: Vec::new(),
        }
    }

    /// Declare a type deriving the parent's resolved property set. The
    /// parent is already sealed, so its own ancestors are never re-walked.
    #[must_use]
    pub fn extends(name: impl Into<String>, parent: &Arc<TypeDef>) -> Self {
        Self {
            name: name.into(),
            parent: Some(Arc::clone(parent)),
            drafts: Vec::new(),
        }
    }

    /// Declare a property and hand back its draft for configuration.
    /// Declaring a name again overrides the earlier declaration at seal
    /// time.
    pub fn property(&mut self, name: impl Into<String>) -> &mut PropertyDraft {
        self.drafts.push(PropertyDraft::new(name.into()));

        self.drafts.last_mut().expect("draft was just pushed")
    }

    /// Re-open the most recent draft declared under `name`, e.g. to flip
    /// `required` after the initial declaration.
    pub fn draft_mut(&mut self, name: &str) -> Option<&mut PropertyDraft> {
        self.drafts.iter_mut().rev().find(|d| d.name == name)
    }

    /// Resolve inheritance and close the type.
    #[must_use]
    pub fn seal(self) -> Arc<TypeDef> {
        let mut properties = self
            .parent
            .as_ref()
            .map(|parent| parent.properties())
            .unwrap_or_default();

        for draft in self.drafts {
            properties.merge(Arc::new(draft.freeze()));
        }

        TypeDef::seal(self.name, self.parent, properties)
    }
}
