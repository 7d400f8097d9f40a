use crate::{
    core::value::Value, error::Error, instance::Instance, model::PropertyList, property::Property,
};
use std::sync::Arc;

/// Generated read accessor.
type ReadFn = dyn for<'a> Fn(&'a Instance) -> &'a Value + Send + Sync;

/// Generated write accessor; replays the full pipeline on every call.
type WriteFn = dyn Fn(&mut Instance, Value) -> Result<(), Error> + Send + Sync;

///
/// Accessor
///
/// Read/write pair bound to one property when its type seals. Writes run
/// the property's pipeline and store on success; the store is never
/// reachable any other way.
///

pub(crate) struct Accessor {
    read: Box<ReadFn>,
    write: Box<WriteFn>,
}

impl Accessor {
    /// Bind the pair to its property definition.
    fn bind(property: &Arc<Property>) -> Self {
        let read = Arc::clone(property);
        let write = Arc::clone(property);

        Self {
            read: Box::new(move |instance| instance.stored(read.name())),
            write: Box::new(move |instance, value| {
                let value = write.prepare(value, &instance.view())?;
                instance.store(write.name(), value);

                Ok(())
            }),
        }
    }

    pub(crate) fn read<'a>(&self, instance: &'a Instance) -> &'a Value {
        (self.read)(instance)
    }

    pub(crate) fn write(&self, instance: &mut Instance, value: Value) -> Result<(), Error> {
        (self.write)(instance, value)
    }
}

///
/// AccessorMap
///
/// One accessor pair per resolved property, in resolution order.
///

pub(crate) struct AccessorMap {
    accessors: Vec<(String, Accessor)>,
}

impl AccessorMap {
    pub(crate) fn bind(properties: &PropertyList) -> Self {
        Self {
            accessors: properties
                .iter()
                .map(|p| (p.name().to_string(), Accessor::bind(p)))
                .collect(),
        }
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Accessor> {
        self.accessors
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, accessor)| accessor)
    }
}
