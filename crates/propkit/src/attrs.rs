use crate::core::value::Value;
use std::collections::BTreeMap;

///
/// AttrMap
///
/// Name-to-value attributes consumed during construction. Keys that match
/// no declared property are left unconsumed and ignored.
///

#[derive(Clone, Debug, Default)]
pub struct AttrMap {
    entries: BTreeMap<String, Value>,
}

impl AttrMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.entries.insert(name.into(), value.into());
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.entries.remove(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// absent attribute maps construct like empty ones
impl From<Option<Self>> for AttrMap {
    fn from(attrs: Option<Self>) -> Self {
        attrs.unwrap_or_default()
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for AttrMap
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(entries: [(K, V); N]) -> Self {
        let mut attrs = Self::new();
        for (name, value) in entries {
            attrs.insert(name, value);
        }

        attrs
    }
}

/// Build an [`AttrMap`] from literal name/value pairs.
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::attrs::AttrMap::new()
    };
    ( $( $name:ident : $value:expr ),+ $(,)? ) => {{
        let mut attrs = $crate::attrs::AttrMap::new();
        $( attrs.insert(stringify!($name), $value); )+
        attrs
    }};
}
