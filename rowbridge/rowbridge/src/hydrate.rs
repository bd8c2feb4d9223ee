//! Row value re-hydration from `(serialized schema, ordered values)`.
//!
//! A row value's only persisted identity is its schema id, so a serialized
//! row carries the schema bytes alongside its field values. The receiving
//! process may have an empty registry: rebuilding goes through the
//! translator, which reuses a registered composite type for the id or
//! synthesizes one.

use prost::Message as _;
use rowbridge_core::{RowType, Value};
use rowbridge_proto as proto;

use crate::{error::TranslateError, translate::SchemaTranslator};

/// Composite value: a row type plus its field values in declared order.
#[derive(Debug, Clone, PartialEq)]
pub struct RowValue {
    row_type: RowType,
    values: Vec<Value>,
}

impl RowValue {
    pub fn new(row_type: RowType, values: Vec<Value>) -> Result<Self, TranslateError> {
        if row_type.fields.len() != values.len() {
            return Err(TranslateError::FieldCountMismatch {
                expected: row_type.fields.len(),
                actual: values.len(),
            });
        }
        Ok(Self { row_type, values })
    }

    pub fn row_type(&self) -> &RowType {
        &self.row_type
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Split into `(serialized schema, ordered values)` for transport or
    /// storage. The schema id is assigned through `translator` if the row
    /// type has none yet.
    pub fn to_parts(&self, translator: &mut SchemaTranslator) -> (Vec<u8>, Vec<Value>) {
        let schema = translator.row_type_to_schema(&self.row_type);
        (schema.encode_to_vec(), self.values.clone())
    }

    /// Rebuild from `(serialized schema, ordered values)` produced by
    /// [`to_parts`](Self::to_parts), possibly in a different process.
    pub fn from_parts(
        schema_bytes: &[u8],
        values: Vec<Value>,
        translator: &mut SchemaTranslator,
    ) -> Result<Self, TranslateError> {
        let schema = proto::Schema::decode(schema_bytes)?;
        let row_type = translator.row_type_from_schema(&schema)?;
        Self::new(row_type, values)
    }
}
