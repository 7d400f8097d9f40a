use crate::{core::value::Value, model::type_def::TypeDef};
use serde::Serialize;

///
/// TypeSpec
///
/// Immutable, serializable snapshot of a sealed type's resolved
/// properties, in resolution order.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TypeSpec {
    pub name: String,
    pub properties: Vec<PropertySpec>,
}

///
/// PropertySpec
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PropertySpec {
    pub name: String,
    pub default: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validator: Option<String>,

    pub required: bool,
}

impl TypeSpec {
    pub(crate) fn of(ty: &TypeDef) -> Self {
        Self {
            name: ty.name().to_string(),
            properties: ty
                .resolved()
                .iter()
                .map(|p| PropertySpec {
                    name: p.name().to_string(),
                    default: p.default().clone(),
                    converter: p.converter().map(ToString::to_string),
                    validator: p.validator().map(ToString::to_string),
                    required: p.required(),
                })
                .collect(),
        }
    }
}
