use crate::value::{Value, ValueKind};
use convert_case::{Case, Casing};
use thiserror::Error as ThisError;

///
/// ConvertError
///
/// A named conversion op could not be applied: either no op with that name
/// is registered, or the value's kind does not support it.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{kind} does not support conversion op '{op}'")]
pub struct ConvertError {
    pub kind: ValueKind,
    pub op: String,
}

/// A registered transformation. `None` means the op is not applicable to
/// the kind of value it was handed.
type OpFn = fn(Value) -> Option<Value>;

/// Registered conversion ops, resolved by name at write time.
/// Kept sorted by name.
const OPS: &[(&str, OpFn)] = &[
    ("downcase", downcase),
    ("kebab", kebab),
    ("snake", snake),
    ("title", title),
    ("to_float", to_float),
    ("to_int", to_int),
    ("to_sym", to_sym),
    ("to_text", to_text),
    ("trim", trim),
    ("upcase", upcase),
];

///
/// apply
/// Resolve `op` against the registered table and apply it to `value`.
///
pub fn apply(op: &str, value: Value) -> Result<Value, ConvertError> {
    let kind = value.kind();

    OPS.iter()
        .find(|(name, _)| *name == op)
        .and_then(|(_, f)| f(value))
        .ok_or_else(|| ConvertError {
            kind,
            op: op.to_string(),
        })
}

fn text_op(value: Value, f: impl FnOnce(String) -> String) -> Option<Value> {
    match value {
        Value::Text(s) => Some(Value::Text(f(s))),
        _ => None,
    }
}

fn downcase(value: Value) -> Option<Value> {
    // Unicode-aware lowercase; allocates
    text_op(value, |s| s.to_lowercase())
}

fn kebab(value: Value) -> Option<Value> {
    text_op(value, |s| s.to_case(Case::Kebab))
}

fn snake(value: Value) -> Option<Value> {
    text_op(value, |s| s.to_case(Case::Snake))
}

fn title(value: Value) -> Option<Value> {
    text_op(value, |s| s.to_case(Case::Title))
}

fn to_float(value: Value) -> Option<Value> {
    match value {
        Value::Float(v) => Some(Value::Float(v)),
        Value::Int(v) => Some(Value::Float(v as f64)),
        Value::Text(s) => s.trim().parse::<f64>().ok().map(Value::Float),
        _ => None,
    }
}

fn to_int(value: Value) -> Option<Value> {
    match value {
        Value::Float(v) => Some(Value::Int(v.trunc() as i64)),
        Value::Int(v) => Some(Value::Int(v)),
        Value::Text(s) => s.trim().parse::<i64>().ok().map(Value::Int),
        _ => None,
    }
}

fn to_sym(value: Value) -> Option<Value> {
    match value {
        Value::Symbol(s) | Value::Text(s) => Some(Value::Symbol(s)),
        _ => None,
    }
}

fn to_text(value: Value) -> Option<Value> {
    match value {
        Value::Bool(v) => Some(Value::Text(v.to_string())),
        Value::Float(v) => Some(Value::Text(v.to_string())),
        Value::Int(v) => Some(Value::Text(v.to_string())),
        Value::Symbol(s) | Value::Text(s) => Some(Value::Text(s)),
        _ => None,
    }
}

fn trim(value: Value) -> Option<Value> {
    text_op(value, |s| s.trim().to_string())
}

fn upcase(value: Value) -> Option<Value> {
    // Unicode-aware uppercase; allocates
    text_op(value, |s| s.to_uppercase())
}

///
/// TESTS
///
