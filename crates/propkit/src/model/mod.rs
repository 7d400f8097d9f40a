mod builder;
mod spec;
mod type_def;

pub use builder::{PropertyDraft, TypeBuilder};
pub use spec::{PropertySpec, TypeSpec};
pub use type_def::{PropertyList, TypeDef};
