use rowbridge_core::{CallableWithSource, NativeType, RowType, Timestamp, Value};

#[test]
fn optional_constructor_collapses_nesting() {
    let once = NativeType::optional(NativeType::Bool);
    let twice = NativeType::optional(NativeType::optional(NativeType::Bool));
    assert_eq!(once, twice);
    assert_eq!(once, NativeType::Optional(Box::new(NativeType::Bool)));
}

#[test]
fn row_identity_ignores_schema_id() {
    let fields = vec![
        ("a".to_string(), NativeType::I64),
        ("b".to_string(), NativeType::String),
    ];
    let unregistered = RowType::new("Point", fields.clone());
    let registered = RowType::new("Point", fields).with_schema_id("some-id");
    assert_eq!(unregistered, registered);

    let other = RowType::new("Point", vec![("a".to_string(), NativeType::I64)]);
    assert_ne!(unregistered, other);
}

#[test]
fn row_identity_distinguishes_names() {
    let fields = vec![("a".to_string(), NativeType::I64)];
    assert_ne!(
        RowType::new("Point", fields.clone()),
        RowType::new("Other", fields.clone()),
    );
    assert_ne!(RowType::new("Point", fields.clone()), RowType::anonymous(fields));
}

#[test]
fn value_accessors_match_variant() {
    assert_eq!(Value::I64(7).try_i64().unwrap(), Some(7));
    assert_eq!(Value::Null.try_i64().unwrap(), None);
    assert_eq!(Value::string("hi").try_str().unwrap(), Some("hi"));

    let err = Value::Bool(true).try_i64().unwrap_err();
    assert_eq!(err.expected(), "I64");
    assert_eq!(err.actual(), "Bool");
}

#[test]
fn timestamp_splits_with_floor_semantics() {
    let ts = Timestamp::from_micros(1_500_000);
    assert_eq!(ts.seconds(), 1);
    assert_eq!(ts.subsecond_micros(), 500_000);

    let negative = Timestamp::from_micros(-500_000);
    assert_eq!(negative.seconds(), -1);
    assert_eq!(negative.subsecond_micros(), 500_000);

    assert_eq!(Timestamp::new(1, 500_000), ts);
    assert_eq!(Timestamp::new(-1, 500_000), negative);
}

#[test]
fn callable_keeps_its_source() {
    let callable = CallableWithSource::new("fn main() {}");
    assert_eq!(callable.source(), "fn main() {}");
}
