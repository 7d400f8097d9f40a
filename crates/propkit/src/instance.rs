use crate::{attrs::AttrMap, core::value::Value, error::Error, model::TypeDef};
use std::{collections::BTreeMap, sync::Arc};

static NULL: Value = Value::Null;

///
/// Instance
///
/// One constructed object: its type and the private per-property value
/// store. The store is populated and mutated through generated accessors
/// only.
///

#[derive(Clone, Debug)]
pub struct Instance {
    ty: Arc<TypeDef>,
    values: BTreeMap<String, Value>,
}

impl Instance {
    /// Construct an instance from a name-to-value attribute map.
    ///
    /// Every resolved property is visited exactly once, in resolution
    /// order: the matching attribute is consumed, or the property's
    /// default stands in. The first pipeline failure aborts construction
    /// and drops the partial instance. Leftover attributes that match no
    /// declared property are ignored.
    pub fn new(ty: &Arc<TypeDef>, attrs: impl Into<AttrMap>) -> Result<Self, Error> {
        let mut attrs = attrs.into();
        let mut instance = Self {
            ty: Arc::clone(ty),
            values: BTreeMap::new(),
        };

        for property in ty.resolved().iter() {
            let value = attrs
                .remove(property.name())
                .unwrap_or_else(|| property.default().clone());

            instance.set(property.name(), value)?;
        }

        Ok(instance)
    }

    #[must_use]
    pub const fn type_def(&self) -> &Arc<TypeDef> {
        &self.ty
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        self.ty.name()
    }

    /// Read a property through its generated accessor. Unset slots read as
    /// Null.
    pub fn get(&self, name: &str) -> Result<&Value, Error> {
        self.ty
            .accessor(name)
            .ok_or_else(|| self.unknown(name))
            .map(|accessor| accessor.read(self))
    }

    /// Write a property through its generated accessor, replaying the full
    /// pipeline. A failed write leaves the previous value in place.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), Error> {
        let ty = Arc::clone(&self.ty);
        let accessor = ty.accessor(name).ok_or_else(|| self.unknown(name))?;

        accessor.write(self, value.into())
    }

    pub(crate) fn view(&self) -> View<'_> {
        View {
            type_name: self.ty.name(),
            values: &self.values,
        }
    }

    pub(crate) fn stored(&self, name: &str) -> &Value {
        self.values.get(name).unwrap_or(&NULL)
    }

    pub(crate) fn store(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    fn unknown(&self, name: &str) -> Error {
        Error::UnknownProperty {
            type_name: self.ty.name().to_string(),
            property: name.to_string(),
        }
    }
}

///
/// View
///
/// Read-only projection of an instance's currently assigned properties,
/// handed to context-aware converters and validators.
///

#[derive(Clone, Copy)]
pub struct View<'a> {
    type_name: &'a str,
    values: &'a BTreeMap<String, Value>,
}

impl<'a> View<'a> {
    #[cfg(test)]
    pub(crate) const fn detached(type_name: &'a str, values: &'a BTreeMap<String, Value>) -> Self {
        Self { type_name, values }
    }

    #[must_use]
    pub const fn type_name(&self) -> &'a str {
        self.type_name
    }

    /// Value currently assigned to `name`; Null when unset.
    #[must_use]
    pub fn get(&self, name: &str) -> &'a Value {
        self.values.get(name).unwrap_or(&NULL)
    }
}
