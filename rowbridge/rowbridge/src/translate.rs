//! Recursive translation between [`NativeType`] and wire [`proto::FieldType`].

use rowbridge_core::{NativeType, RowType};
use rowbridge_proto::{self as proto, field_type::TypeInfo};

use crate::{
    error::TranslateError,
    logical::LogicalTypeRegistry,
    registry::SchemaRegistry,
};

/// URN of the untyped placeholder emitted for native types unknown to the
/// system. Decodes to [`NativeType::Any`].
pub const ANY_URN: &str = "rowbridge:logical:any:v1";

/// Pairs that survive a round trip: `decode(encode(T)) == T`.
const BIJECTIVE_ATOMICS: &[(NativeType, proto::AtomicType)] = &[
    (NativeType::I8, proto::AtomicType::Byte),
    (NativeType::I16, proto::AtomicType::Int16),
    (NativeType::I32, proto::AtomicType::Int32),
    (NativeType::I64, proto::AtomicType::Int64),
    (NativeType::F32, proto::AtomicType::Float),
    (NativeType::F64, proto::AtomicType::Double),
    (NativeType::String, proto::AtomicType::String),
    (NativeType::Bool, proto::AtomicType::Boolean),
    (NativeType::Bytes, proto::AtomicType::Bytes),
];

/// One-way pairs: these encode onto a canonical atomic kind but never appear
/// as a decode target.
const LOSSY_ATOMICS: &[(NativeType, proto::AtomicType)] = &[
    (NativeType::Int, proto::AtomicType::Int64),
    (NativeType::Float, proto::AtomicType::Double),
    (NativeType::ByteString, proto::AtomicType::Bytes),
];

fn atomic_for(native: &NativeType) -> Option<proto::AtomicType> {
    BIJECTIVE_ATOMICS
        .iter()
        .chain(LOSSY_ATOMICS)
        .find(|(candidate, _)| candidate == native)
        .map(|(_, kind)| *kind)
}

fn native_for(kind: proto::AtomicType) -> Option<NativeType> {
    BIJECTIVE_ATOMICS
        .iter()
        .find(|(_, candidate)| *candidate == kind)
        .map(|(native, _)| native.clone())
}

/// Translation context: a schema registry plus a logical type registry.
///
/// All state lives in this object; translating through two independent
/// translators never shares ids. Operations take `&mut self` and are
/// synchronous; for concurrent use, wrap the translator in a mutex.
pub struct SchemaTranslator {
    schemas: SchemaRegistry,
    logical_types: LogicalTypeRegistry,
}

impl SchemaTranslator {
    /// Translator with an empty schema registry and the built-in logical
    /// types pre-registered.
    pub fn new() -> Self {
        Self {
            schemas: SchemaRegistry::new(),
            logical_types: LogicalTypeRegistry::standard(),
        }
    }

    pub fn with_registries(schemas: SchemaRegistry, logical_types: LogicalTypeRegistry) -> Self {
        Self {
            schemas,
            logical_types,
        }
    }

    pub fn schema_registry(&self) -> &SchemaRegistry {
        &self.schemas
    }

    pub fn schema_registry_mut(&mut self) -> &mut SchemaRegistry {
        &mut self.schemas
    }

    pub fn logical_types(&self) -> &LogicalTypeRegistry {
        &self.logical_types
    }

    pub fn logical_types_mut(&mut self) -> &mut LogicalTypeRegistry {
        &mut self.logical_types
    }

    /// Wrap a pre-built wire schema directly as a row descriptor.
    pub fn schema_field_type(schema: proto::Schema) -> proto::FieldType {
        proto::FieldType::row(schema)
    }

    /// Encode a native type as a wire descriptor.
    ///
    /// Total: a native type not matching any known shape or registered
    /// logical type degrades to the untyped placeholder ([`ANY_URN`],
    /// `nullable = true`) instead of failing.
    pub fn field_type_for(&mut self, native: &NativeType) -> proto::FieldType {
        match native {
            NativeType::Row(row) => proto::FieldType::row(self.schema_for(row)),
            NativeType::Optional(inner) => {
                // Collapse nesting built without NativeType::optional so
                // optional-of-optional encodes identically to optional.
                let mut base = inner.as_ref();
                while let NativeType::Optional(next) = base {
                    base = next.as_ref();
                }
                self.field_type_for(base).into_nullable()
            }
            NativeType::List(element) => proto::FieldType::array(self.field_type_for(element)),
            NativeType::Map(key, value) => {
                proto::FieldType::map(self.field_type_for(key), self.field_type_for(value))
            }
            other => {
                if let Some(kind) = atomic_for(other) {
                    return proto::FieldType::atomic(kind);
                }
                if let Some(logical) = self.logical_types.by_language_type(other) {
                    let representation = self.field_type_for(&logical.representation_type());
                    return proto::FieldType::logical(logical.urn(), Some(representation));
                }
                proto::FieldType::logical(ANY_URN, None).into_nullable()
            }
        }
    }

    /// Encode a composite type, resolving or assigning its schema id.
    ///
    /// The id and an empty schema shell are registered before the fields are
    /// translated, so a composite whose fields reference the composite
    /// itself terminates; the completed schema then replaces the shell.
    pub fn schema_for(&mut self, row: &RowType) -> proto::Schema {
        let known_id = row
            .schema_id
            .clone()
            .or_else(|| self.schemas.id_for_type(row).map(str::to_string));
        if let Some(id) = &known_id {
            if let Some(schema) = self.schemas.schema_by_id(id) {
                return schema.clone();
            }
        }
        let id = known_id.unwrap_or_else(|| self.schemas.generate_new_id());

        let registered = NativeType::Row(row.clone().with_schema_id(id.clone()));
        self.schemas.add_pending(
            registered.clone(),
            proto::Schema {
                id: id.clone(),
                fields: vec![],
            },
        );

        let fields = row
            .fields
            .iter()
            .map(|(name, field_type)| proto::Field::new(name, self.field_type_for(field_type)))
            .collect();
        let schema = proto::Schema { id, fields };
        self.schemas.add(registered, schema.clone());
        schema
    }

    /// Decode a wire descriptor back to a native type.
    pub fn native_type_for(
        &mut self,
        field_type: &proto::FieldType,
    ) -> Result<NativeType, TranslateError> {
        if field_type.nullable {
            let mut base = field_type.clone();
            base.nullable = false;
            return Ok(match self.native_type_for(&base)? {
                NativeType::Any => NativeType::Any,
                other => NativeType::optional(other),
            });
        }

        let Some(type_info) = &field_type.type_info else {
            return Err(TranslateError::MalformedDescriptor);
        };
        match type_info {
            TypeInfo::AtomicType(raw) => proto::AtomicType::try_from(*raw)
                .ok()
                .and_then(native_for)
                .ok_or(TranslateError::UnsupportedAtomicKind(*raw)),
            TypeInfo::ArrayType(array) => {
                let element = array
                    .element_type
                    .as_deref()
                    .ok_or(TranslateError::MalformedDescriptor)?;
                Ok(NativeType::list(self.native_type_for(element)?))
            }
            TypeInfo::MapType(map) => {
                let key = map
                    .key_type
                    .as_deref()
                    .ok_or(TranslateError::MalformedDescriptor)?;
                let value = map
                    .value_type
                    .as_deref()
                    .ok_or(TranslateError::MalformedDescriptor)?;
                Ok(NativeType::map(
                    self.native_type_for(key)?,
                    self.native_type_for(value)?,
                ))
            }
            TypeInfo::RowType(row) => {
                let schema = row
                    .schema
                    .as_ref()
                    .ok_or(TranslateError::MalformedDescriptor)?;
                self.native_row_type_for(schema)
            }
            TypeInfo::LogicalType(logical) => {
                if logical.urn == ANY_URN {
                    return Ok(NativeType::Any);
                }
                self.logical_types
                    .by_urn(&logical.urn)
                    .map(|plugin| plugin.language_type())
                    .ok_or_else(|| TranslateError::UnknownLogicalType(logical.urn.clone()))
            }
        }
    }

    /// Resolve a wire schema to its registered native type, synthesizing and
    /// registering a new composite type when the id is unknown.
    fn native_row_type_for(
        &mut self,
        schema: &proto::Schema,
    ) -> Result<NativeType, TranslateError> {
        if let Some(native) = self.schemas.typing_by_id(&schema.id) {
            return Ok(native.clone());
        }

        // Schema id absent from the registry: the descriptor likely came
        // from another SDK. Synthesize a composite type for it.
        let type_name = format!("RowSchema_{}", schema.id.replace('-', "_"));
        let mut fields = Vec::with_capacity(schema.fields.len());
        for field in &schema.fields {
            let field_type = field
                .r#type
                .as_ref()
                .ok_or(TranslateError::MalformedDescriptor)?;
            let native = self
                .native_type_for(field_type)
                .map_err(|source| TranslateError::Field {
                    name: field.name.clone(),
                    descriptor: proto::format_field_type(field_type).unwrap_or_default(),
                    source: Box::new(source),
                })?;
            fields.push((field.name.clone(), native));
        }

        let row = RowType::new(type_name, fields).with_schema_id(schema.id.clone());
        let native = NativeType::Row(row);
        self.schemas.add(native.clone(), schema.clone());
        Ok(native)
    }

    /// Encode a composite type and return its wire schema.
    pub fn row_type_to_schema(&mut self, row: &RowType) -> proto::Schema {
        self.schema_for(row)
    }

    /// Decode a wire schema to a composite type, reusing the registry or
    /// synthesizing as for any row descriptor.
    pub fn row_type_from_schema(
        &mut self,
        schema: &proto::Schema,
    ) -> Result<RowType, TranslateError> {
        match self.native_row_type_for(schema)? {
            NativeType::Row(row) => Ok(row),
            _ => Err(TranslateError::MalformedDescriptor),
        }
    }

    /// Build a wire schema with a fresh id from an ordered name/type list.
    pub fn named_fields_to_schema(
        &mut self,
        names_and_types: &[(String, NativeType)],
    ) -> proto::Schema {
        self.schema_for(&RowType::anonymous(names_and_types.to_vec()))
    }

    /// Decode every field of a wire schema to `(name, native type)` pairs.
    pub fn named_fields_from_schema(
        &mut self,
        schema: &proto::Schema,
    ) -> Result<Vec<(String, NativeType)>, TranslateError> {
        Ok(self.row_type_from_schema(schema)?.fields)
    }
}

impl Default for SchemaTranslator {
    fn default() -> Self {
        Self::new()
    }
}
