//! Schema id registry and the codec-sink collaborator interface.

use std::collections::HashMap;

use rowbridge_core::{NativeType, RowType};
use rowbridge_proto as proto;
use uuid::Uuid;

const ID_GENERATION_ATTEMPTS: usize = 100;

/// Collaborating value-codec subsystem, notified whenever a composite type
/// is newly registered so runtime values of that type can be encoded with
/// the standard row-encoding convention.
pub trait RowCodecSink: Send + Sync {
    fn register_row_type(&mut self, native: &RowType, schema: &proto::Schema);
}

/// Registry mapping schema ids to `(native type, wire schema)` pairs, with a
/// reverse map from composite type to assigned id.
///
/// Once a composite type is assigned an id, every later translation of an
/// equal type reuses the identical id and schema. The registry is an
/// explicit object owned by its translator; there is no process-wide state.
#[derive(Default)]
pub struct SchemaRegistry {
    by_id: HashMap<String, (NativeType, proto::Schema)>,
    by_type: HashMap<RowType, String>,
    codec_sink: Option<Box<dyn RowCodecSink>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_codec_sink(codec_sink: Box<dyn RowCodecSink>) -> Self {
        Self {
            codec_sink: Some(codec_sink),
            ..Self::default()
        }
    }

    /// Generate a schema id not currently present in the registry.
    ///
    /// # Panics
    ///
    /// Panics after 100 colliding attempts. A working random source cannot
    /// reach this; hitting it means the id source is broken, which is not
    /// recoverable at runtime.
    pub fn generate_new_id(&self) -> String {
        for _ in 0..ID_GENERATION_ATTEMPTS {
            let schema_id = Uuid::new_v4().to_string();
            if !self.by_id.contains_key(&schema_id) {
                return schema_id;
            }
        }
        panic!(
            "failed to generate a unique schema id after {ID_GENERATION_ATTEMPTS} tries; \
             registry contains {} schemas",
            self.by_id.len()
        );
    }

    /// Register `native` under `schema.id` and notify the codec sink.
    pub fn add(&mut self, native: NativeType, schema: proto::Schema) {
        if let NativeType::Row(row) = &native {
            if let Some(sink) = &mut self.codec_sink {
                sink.register_row_type(row, &schema);
            }
            self.by_type.insert(row.clone(), schema.id.clone());
        }
        self.by_id.insert(schema.id.clone(), (native, schema));
    }

    /// Register a composite shell before its field descriptors are filled
    /// in, so a self-referential composite terminates during encoding. The
    /// codec sink is only notified once the completed schema is [`add`]ed.
    ///
    /// [`add`]: SchemaRegistry::add
    pub(crate) fn add_pending(&mut self, native: NativeType, schema: proto::Schema) {
        if let NativeType::Row(row) = &native {
            self.by_type.insert(row.clone(), schema.id.clone());
        }
        self.by_id.insert(schema.id.clone(), (native, schema));
    }

    pub fn typing_by_id(&self, schema_id: &str) -> Option<&NativeType> {
        self.by_id.get(schema_id).map(|(native, _)| native)
    }

    pub fn schema_by_id(&self, schema_id: &str) -> Option<&proto::Schema> {
        self.by_id.get(schema_id).map(|(_, schema)| schema)
    }

    pub fn id_for_type(&self, row: &RowType) -> Option<&str> {
        self.by_type.get(row).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
