//! End-to-end write-pipeline behavior on constructed instances.

use propkit::{attrs, prelude::*};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

fn page() -> Arc<TypeDef> {
    let mut builder = TypeBuilder::new("Page");

    builder
        .property("language_code")
        .accepts(Validator::one_of([Value::symbol("de"), Value::symbol("en")]))
        .converts("to_sym")
        .default_value(Value::symbol("de"))
        .required(true);

    builder.seal()
}

fn record() -> Arc<TypeDef> {
    let mut builder = TypeBuilder::new("Record");
    builder.property("id").required(true);

    builder.seal()
}

#[test]
fn defaults_apply_when_the_key_is_omitted() {
    let page = page();

    let instance = Instance::new(&page, attrs!()).unwrap();
    assert_eq!(instance.get("language_code").unwrap(), &Value::symbol("de"));
}

#[test]
fn supplied_text_is_converted_before_validation() {
    let page = page();

    let instance = Instance::new(&page, attrs! { language_code: "en" }).unwrap();
    assert_eq!(instance.get("language_code").unwrap(), &Value::symbol("en"));
}

#[test]
fn unlisted_symbol_is_rejected() {
    let page = page();

    let err = Instance::new(&page, attrs! { language_code: Value::symbol("fr") }).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidPropertyValue {
            type_name: "Page".to_string(),
            property: "language_code".to_string(),
            value: Value::symbol("fr"),
        }
    );
}

#[test]
fn required_without_default_fails_construction() {
    let record = record();

    let err = Instance::new(&record, attrs!()).unwrap_err();
    assert_eq!(
        err,
        Error::MissingRequiredProperty {
            type_name: "Record".to_string(),
            property: "id".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "Record requires the property id to be set"
    );
}

#[test]
fn required_with_supplied_value_succeeds() {
    let record = record();

    let instance = Instance::new(&record, attrs! { id: 42i64 }).unwrap();
    assert_eq!(instance.get("id").unwrap(), &Value::Int(42));
}

#[test]
fn callable_converter_coerces_text_input() {
    let mut builder = TypeBuilder::new("Basket");
    builder.property("count").converts(Converter::func(|v, _| match v {
        Value::Text(s) => s.trim().parse::<i64>().map_or(Value::Null, Value::Int),
        other => other,
    }));
    let basket = builder.seal();

    let instance = Instance::new(&basket, attrs! { count: "5" }).unwrap();
    assert_eq!(instance.get("count").unwrap(), &Value::Int(5));
}

#[test]
fn null_default_passes_validation_when_not_required() {
    let mut builder = TypeBuilder::new("Widget");
    builder
        .property("color")
        .accepts(Validator::one_of([Value::symbol("red")]));
    let widget = builder.seal();

    let instance = Instance::new(&widget, attrs!()).unwrap();
    assert_eq!(instance.get("color").unwrap(), &Value::Null);
}

#[test]
fn unknown_attribute_keys_are_ignored() {
    let record = record();

    let instance = Instance::new(&record, attrs! { id: 1i64, vintage: true }).unwrap();
    assert_eq!(instance.get("id").unwrap(), &Value::Int(1));
    assert_eq!(instance.get("vintage").unwrap_err(), Error::UnknownProperty {
        type_name: "Record".to_string(),
        property: "vintage".to_string(),
    });
}

#[test]
fn construction_aborts_before_visiting_later_properties() {
    let visits = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&visits);

    let mut builder = TypeBuilder::new("Job");
    builder.property("a").required(true);
    builder.property("b").accepts(Validator::func(move |_, _| {
        counted.fetch_add(1, Ordering::Relaxed);
        true
    }));
    let job = builder.seal();

    let err = Instance::new(&job, attrs! { b: 1i64 }).unwrap_err();
    assert!(matches!(err, Error::MissingRequiredProperty { .. }));
    assert_eq!(visits.load(Ordering::Relaxed), 0);
}

#[test]
fn failed_rewrite_keeps_the_previous_value() {
    let page = page();
    let mut instance = Instance::new(&page, attrs! { language_code: "en" }).unwrap();

    assert!(instance.set("language_code", "fr").is_err());
    assert_eq!(instance.get("language_code").unwrap(), &Value::symbol("en"));

    instance.set("language_code", "de").unwrap();
    assert_eq!(instance.get("language_code").unwrap(), &Value::symbol("de"));
}

#[test]
fn rewrites_replay_the_required_check() {
    let record = record();
    let mut instance = Instance::new(&record, attrs! { id: 7i64 }).unwrap();

    let err = instance.set("id", Value::Null).unwrap_err();
    assert!(matches!(err, Error::MissingRequiredProperty { .. }));
    assert_eq!(instance.get("id").unwrap(), &Value::Int(7));
}

#[test]
fn by_name_access_to_undeclared_properties_fails() {
    let record = record();
    let mut instance = Instance::new(&record, attrs! { id: 7i64 }).unwrap();

    assert!(matches!(
        instance.get("title"),
        Err(Error::UnknownProperty { .. })
    ));
    assert!(matches!(
        instance.set("title", "x"),
        Err(Error::UnknownProperty { .. })
    ));
}

#[test]
fn converters_see_previously_assigned_siblings() {
    let mut builder = TypeBuilder::new("Route");
    builder.property("city");
    builder.property("slug").converts(Converter::func(|v, ctx| match v {
        Value::Text(slug) => {
            let city = ctx.get("city").as_text().unwrap_or_default();

            Value::Text(format!("{city}-{slug}"))
        }
        other => other,
    }));
    let route = builder.seal();

    let instance = Instance::new(&route, attrs! { city: "berlin", slug: "home" }).unwrap();
    assert_eq!(instance.get("slug").unwrap(), &Value::from("berlin-home"));
}

#[test]
fn pattern_validators_use_match_semantics() {
    let mut builder = TypeBuilder::new("Locale");
    builder
        .property("code")
        .accepts(Matcher::pattern("^[a-z]{2}$").unwrap());
    let locale = builder.seal();

    assert!(Instance::new(&locale, attrs! { code: "de" }).is_ok());

    let err = Instance::new(&locale, attrs! { code: "deu" }).unwrap_err();
    assert!(matches!(err, Error::InvalidPropertyValue { .. }));
}
