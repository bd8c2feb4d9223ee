//! Reified model of the host SDK's type system.

use std::hash::{Hash, Hasher};

/// Native type as seen by the translation layer.
///
/// Variants split into three groups: scalars with an exact portable atomic
/// equivalent (`Bool` through `Bytes`), scalars that encode onto a canonical
/// atomic kind but decode back to a different variant (`Int`, `Float`,
/// `ByteString`), and composites. [`NativeType::Domain`] is an opaque handle
/// for types served by a registered logical type, and [`NativeType::Any`] is
/// the universal type produced by the untyped placeholder descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NativeType {
    Bool,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    String,
    Bytes,
    /// Arbitrary-precision integer. Encodes to the 64-bit atomic kind;
    /// decoding that kind yields [`NativeType::I64`], not this variant.
    Int,
    /// Width-unspecified float. Encodes to the double atomic kind;
    /// decoding yields [`NativeType::F64`].
    Float,
    /// Generic byte sequence. Encodes to the bytes atomic kind;
    /// decoding yields [`NativeType::Bytes`].
    ByteString,
    Optional(Box<NativeType>),
    List(Box<NativeType>),
    Map(Box<NativeType>, Box<NativeType>),
    Row(RowType),
    /// Named domain type with no structural equivalent, resolved through the
    /// logical type registry (e.g. `Timestamp`).
    Domain(String),
    Any,
}

impl NativeType {
    /// Wrap `inner` as optional. Nested optionality collapses:
    /// `optional(optional(T))` is the same type as `optional(T)`.
    pub fn optional(inner: NativeType) -> NativeType {
        match inner {
            NativeType::Optional(_) => inner,
            other => NativeType::Optional(Box::new(other)),
        }
    }

    pub fn list(element: NativeType) -> NativeType {
        NativeType::List(Box::new(element))
    }

    pub fn map(key: NativeType, value: NativeType) -> NativeType {
        NativeType::Map(Box::new(key), Box::new(value))
    }

    pub fn domain(name: impl Into<String>) -> NativeType {
        NativeType::Domain(name.into())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            NativeType::Bool => "bool",
            NativeType::I8 => "i8",
            NativeType::I16 => "i16",
            NativeType::I32 => "i32",
            NativeType::I64 => "i64",
            NativeType::F32 => "f32",
            NativeType::F64 => "f64",
            NativeType::String => "string",
            NativeType::Bytes => "bytes",
            NativeType::Int => "int",
            NativeType::Float => "float",
            NativeType::ByteString => "bytestring",
            NativeType::Optional(_) => "optional",
            NativeType::List(_) => "list",
            NativeType::Map(_, _) => "map",
            NativeType::Row(_) => "row",
            NativeType::Domain(_) => "domain",
            NativeType::Any => "any",
        }
    }
}

/// Composite ("row") type: an ordered collection of named fields, optionally
/// carrying the schema id it was registered under.
///
/// Identity covers `name` and `fields` only. The schema id is assigned by
/// the schema registry on first translation, and a row must compare equal to
/// itself before and after that assignment.
#[derive(Debug, Clone)]
pub struct RowType {
    pub name: Option<String>,
    pub fields: Vec<(String, NativeType)>,
    pub schema_id: Option<String>,
}

impl RowType {
    pub fn new(
        name: impl Into<String>,
        fields: Vec<(String, NativeType)>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            fields,
            schema_id: None,
        }
    }

    /// Ad hoc record shape with no nominal identity. Gets a fresh schema id
    /// on first translation unless one is attached via [`with_schema_id`].
    ///
    /// [`with_schema_id`]: RowType::with_schema_id
    pub fn anonymous(fields: Vec<(String, NativeType)>) -> Self {
        Self {
            name: None,
            fields,
            schema_id: None,
        }
    }

    pub fn with_schema_id(mut self, schema_id: impl Into<String>) -> Self {
        self.schema_id = Some(schema_id.into());
        self
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

impl PartialEq for RowType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.fields == other.fields
    }
}

impl Eq for RowType {}

impl Hash for RowType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.fields.hash(state);
    }
}
