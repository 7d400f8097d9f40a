use crate::{
    accessor::{Accessor, AccessorMap},
    model::spec::TypeSpec,
    property::Property,
};
use derive_more::{Deref, IntoIterator};
use std::{fmt, sync::Arc};

///
/// PropertyList
///
/// Resolution-ordered property set for one type. Inherited properties come
/// first; an override keeps the original position. Names are unique within
/// a list.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator)]
pub struct PropertyList {
    #[into_iterator(owned, ref)]
    properties: Vec<Arc<Property>>,
}

impl PropertyList {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<Property>> {
        self.properties.iter().find(|p| p.name() == name)
    }

    /// Merge a definition per the override rule: a same-named entry is
    /// replaced in place, a new name is appended.
    pub fn merge(&mut self, property: Arc<Property>) {
        match self
            .properties
            .iter()
            .position(|p| p.name() == property.name())
        {
            Some(idx) => self.properties[idx] = property,
            None => self.properties.push(property),
        }
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.name()).collect()
    }
}

///
/// TypeDef
///
/// A sealed host type: name, parent link, resolved property set, and the
/// accessor table bound when the declaration closed. Never mutated
/// afterwards.
///

pub struct TypeDef {
    name: String,
    parent: Option<Arc<TypeDef>>,
    properties: PropertyList,
    accessors: AccessorMap,
}

impl TypeDef {
    pub(crate) fn seal(
        name: String,
        parent: Option<Arc<Self>>,
        properties: PropertyList,
    ) -> Arc<Self> {
        let accessors = AccessorMap::bind(&properties);

        Arc::new(Self {
            name,
            parent,
            properties,
            accessors,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn parent(&self) -> Option<&Arc<Self>> {
        self.parent.as_ref()
    }

    /// Defensive copy of the resolved property list; mutating the copy does
    /// not touch the type.
    #[must_use]
    pub fn properties(&self) -> PropertyList {
        self.properties.clone()
    }

    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Arc<Property>> {
        self.properties.get(name)
    }

    /// Serializable snapshot of the resolved configuration.
    #[must_use]
    pub fn spec(&self) -> TypeSpec {
        TypeSpec::of(self)
    }

    pub(crate) const fn resolved(&self) -> &PropertyList {
        &self.properties
    }

    pub(crate) fn accessor(&self, name: &str) -> Option<&Accessor> {
        self.accessors.get(name)
    }
}

impl fmt::Debug for TypeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDef")
            .field("name", &self.name)
            .field("properties", &self.properties.names())
            .finish_non_exhaustive()
    }
}
