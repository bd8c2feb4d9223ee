use std::sync::{Arc, Mutex};

use rowbridge::{
    NativeType, RowCodecSink, RowType, RowValue, SchemaRegistry, SchemaTranslator, TranslateError,
    Value, proto,
};
use rowbridge_proto::field_type::TypeInfo;

fn point_row() -> RowType {
    RowType::new(
        "Point",
        vec![
            ("x".to_string(), NativeType::F64),
            ("y".to_string(), NativeType::F64),
            ("label".to_string(), NativeType::optional(NativeType::String)),
        ],
    )
}

fn row_schema(descriptor: &proto::FieldType) -> &proto::Schema {
    let Some(TypeInfo::RowType(body)) = &descriptor.type_info else {
        panic!("expected row body, got {:?}", descriptor.type_info);
    };
    body.schema.as_ref().expect("row descriptor without schema")
}

#[derive(Default)]
struct RecordingSink(Arc<Mutex<Vec<(Option<String>, String, usize)>>>);

impl RowCodecSink for RecordingSink {
    fn register_row_type(&mut self, native: &RowType, schema: &proto::Schema) {
        self.0.lock().unwrap().push((
            native.name.clone(),
            schema.id.clone(),
            schema.fields.len(),
        ));
    }
}

#[test]
fn schema_id_is_stable_across_encodes() {
    let mut translator = SchemaTranslator::new();
    let first = translator.field_type_for(&NativeType::Row(point_row()));
    let second = translator.field_type_for(&NativeType::Row(point_row()));
    assert_eq!(first, second);

    let schema = row_schema(&first);
    assert!(!schema.id.is_empty());
    assert_eq!(schema.fields.len(), 3);
    assert_eq!(schema.fields[0].name, "x");
    assert_eq!(schema.fields[2].name, "label");
    assert_eq!(translator.schema_registry().len(), 1);
}

#[test]
fn attached_schema_id_is_reused() {
    let mut translator = SchemaTranslator::new();
    let row = point_row().with_schema_id("pre-assigned-id");
    let descriptor = translator.field_type_for(&NativeType::Row(row));
    assert_eq!(row_schema(&descriptor).id, "pre-assigned-id");
}

#[test]
fn row_round_trips_through_descriptor() {
    let mut translator = SchemaTranslator::new();
    let native = NativeType::Row(point_row());
    let descriptor = translator.field_type_for(&native);
    let decoded = translator.native_type_for(&descriptor).unwrap();
    // RowType identity ignores the schema id the registry attached.
    assert_eq!(decoded, native);
}

#[test]
fn unknown_schema_id_synthesizes_a_composite_once() {
    let mut translator = SchemaTranslator::new();
    let schema = proto::Schema {
        id: "11111111-2222-3333-4444-555555555555".to_string(),
        fields: vec![
            proto::Field::new("count", proto::FieldType::atomic(proto::AtomicType::Int64)),
            proto::Field::new(
                "tags",
                proto::FieldType::array(proto::FieldType::atomic(proto::AtomicType::String)),
            ),
        ],
    };
    let descriptor = SchemaTranslator::schema_field_type(schema);

    let first = translator.native_type_for(&descriptor).unwrap();
    let NativeType::Row(row) = &first else {
        panic!("expected a synthesized row, got {first:?}");
    };
    assert_eq!(
        row.name.as_deref(),
        Some("RowSchema_11111111_2222_3333_4444_555555555555"),
    );
    assert_eq!(row.schema_id.as_deref(), Some("11111111-2222-3333-4444-555555555555"));
    assert_eq!(row.fields[0], ("count".to_string(), NativeType::I64));
    assert_eq!(
        row.fields[1],
        ("tags".to_string(), NativeType::list(NativeType::String)),
    );

    let registry_len = translator.schema_registry().len();
    let second = translator.native_type_for(&descriptor).unwrap();
    assert_eq!(second, first);
    assert_eq!(translator.schema_registry().len(), registry_len);
}

#[test]
fn failing_field_reports_its_descriptor() {
    let mut translator = SchemaTranslator::new();
    let bad_field_type = proto::FieldType {
        nullable: false,
        type_info: Some(TypeInfo::AtomicType(999)),
    };
    let schema = proto::Schema {
        id: "bad-schema-id".to_string(),
        fields: vec![proto::Field::new("broken", bad_field_type)],
    };
    let descriptor = SchemaTranslator::schema_field_type(schema);

    match translator.native_type_for(&descriptor) {
        Err(TranslateError::Field {
            name,
            descriptor,
            source,
        }) => {
            assert_eq!(name, "broken");
            assert!(descriptor.contains("atomic"));
            assert!(matches!(
                *source,
                TranslateError::UnsupportedAtomicKind(999),
            ));
        }
        other => panic!("expected a wrapped field error, got {other:?}"),
    }
}

#[test]
fn codec_sink_sees_encode_registration_and_decode_synthesis() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let registry = SchemaRegistry::with_codec_sink(Box::new(RecordingSink(Arc::clone(&seen))));
    let mut translator =
        SchemaTranslator::with_registries(registry, rowbridge::LogicalTypeRegistry::standard());

    translator.field_type_for(&NativeType::Row(point_row()));
    translator.field_type_for(&NativeType::Row(point_row()));
    {
        let seen = seen.lock().unwrap();
        // One notification, with the completed schema, despite two encodes.
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0.as_deref(), Some("Point"));
        assert_eq!(seen[0].2, 3);
    }

    let foreign = proto::Schema {
        id: "foreign-id".to_string(),
        fields: vec![proto::Field::new(
            "v",
            proto::FieldType::atomic(proto::AtomicType::Boolean),
        )],
    };
    translator
        .native_type_for(&SchemaTranslator::schema_field_type(foreign))
        .unwrap();
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[1].1, "foreign-id");
}

#[test]
fn named_fields_helpers_round_trip() {
    let mut translator = SchemaTranslator::new();
    let fields = vec![
        ("id".to_string(), NativeType::I64),
        ("name".to_string(), NativeType::String),
    ];
    let schema = translator.named_fields_to_schema(&fields);
    assert_eq!(schema.fields.len(), 2);
    assert_eq!(
        translator.named_fields_from_schema(&schema).unwrap(),
        fields,
    );
}

#[test]
fn row_value_rebuilds_from_parts_in_a_fresh_process() {
    let mut sender = SchemaTranslator::new();
    let row = RowValue::new(
        point_row(),
        vec![
            Value::F64(1.5),
            Value::F64(-2.0),
            Value::string("origin"),
        ],
    )
    .unwrap();
    let (schema_bytes, values) = row.to_parts(&mut sender);

    // Receiving process: empty registry, no shared state with the sender.
    let mut receiver = SchemaTranslator::new();
    let rebuilt = RowValue::from_parts(&schema_bytes, values, &mut receiver).unwrap();
    assert_eq!(rebuilt.values(), row.values());
    assert_eq!(rebuilt.row_type().fields, point_row().fields);

    // Rebuilding again reuses the registered type.
    let (bytes_again, values_again) = rebuilt.to_parts(&mut receiver);
    let again = RowValue::from_parts(&bytes_again, values_again, &mut receiver).unwrap();
    assert_eq!(again.row_type(), rebuilt.row_type());
}

#[test]
fn row_value_arity_is_checked() {
    match RowValue::new(point_row(), vec![Value::F64(0.0)]) {
        Err(TranslateError::FieldCountMismatch { expected, actual }) => {
            assert_eq!(expected, 3);
            assert_eq!(actual, 1);
        }
        other => panic!("expected a field count mismatch, got {other:?}"),
    }
}
