use crate::value::{Value, ValueKind};
use regex::Regex;
use std::{fmt, ops::RangeInclusive};

///
/// Matcher
///
/// Pattern-style acceptance tests applied to converted values. Matching is
/// by shape, never by equality.
///

#[derive(Clone, Debug)]
#[remain::sorted]
pub enum Matcher {
    /// Floats within the inclusive range.
    FloatRange(RangeInclusive<f64>),
    /// Integers within the inclusive range.
    IntRange(RangeInclusive<i64>),
    /// Any value of the given kind.
    Kind(ValueKind),
    /// Text or symbols whose content matches the pattern.
    Pattern(Regex),
}

impl Matcher {
    /// Compile a pattern matcher from a regex source string.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self::Pattern)
    }

    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::FloatRange(range) => value.as_float().is_some_and(|v| range.contains(&v)),
            Self::IntRange(range) => value.as_int().is_some_and(|v| range.contains(&v)),
            Self::Kind(kind) => value.kind() == *kind,
            Self::Pattern(re) => match value {
                Value::Symbol(s) | Value::Text(s) => re.is_match(s),
                _ => false,
            },
        }
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FloatRange(r) => write!(f, "float:{}..={}", r.start(), r.end()),
            Self::IntRange(r) => write!(f, "int:{}..={}", r.start(), r.end()),
            Self::Kind(kind) => write!(f, "kind:{kind}"),
            Self::Pattern(re) => write!(f, "pattern:{}", re.as_str()),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn txt(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    #[test]
    fn kind_matches_by_tag() {
        let m = Matcher::Kind(ValueKind::Symbol);
        assert!(m.matches(&Value::symbol("de")));
        assert!(!m.matches(&txt("de")));
    }

    #[test]
    fn int_range_is_inclusive_and_kind_strict() {
        let m = Matcher::IntRange(1..=3);
        assert!(m.matches(&Value::Int(1)));
        assert!(m.matches(&Value::Int(3)));
        assert!(!m.matches(&Value::Int(4)));
        assert!(!m.matches(&Value::Float(2.0)));
    }

    #[test]
    fn float_range_is_inclusive() {
        let m = Matcher::FloatRange(0.0..=1.0);
        assert!(m.matches(&Value::Float(0.5)));
        assert!(!m.matches(&Value::Float(1.5)));
        assert!(!m.matches(&Value::Int(0)));
    }

    #[test]
    fn pattern_covers_text_and_symbols() {
        let m = Matcher::pattern("^[a-z]{2}$").unwrap();
        assert!(m.matches(&txt("de")));
        assert!(m.matches(&Value::symbol("en")));
        assert!(!m.matches(&txt("deu")));
        assert!(!m.matches(&Value::Int(5)));
    }

    #[test]
    fn display_summaries() {
        assert_eq!(Matcher::Kind(ValueKind::Int).to_string(), "kind:Int");
        assert_eq!(Matcher::IntRange(1..=3).to_string(), "int:1..=3");
        assert_eq!(
            Matcher::pattern("^x$").unwrap().to_string(),
            "pattern:^x$"
        );
    }
}
