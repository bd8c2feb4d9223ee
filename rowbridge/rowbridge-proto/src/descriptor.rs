//! Wire descriptor message definitions.

/// Atomic (primitive scalar) kinds of the portable schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum AtomicType {
    Unspecified = 0,
    Byte = 1,
    Int16 = 2,
    Int32 = 3,
    Int64 = 4,
    Float = 5,
    Double = 6,
    String = 7,
    Boolean = 8,
    Bytes = 9,
}

/// Type of a single schema field: a `nullable` flag orthogonal to an
/// exclusive-choice body selecting the structural variant.
#[derive(Clone, PartialEq, prost::Message)]
pub struct FieldType {
    #[prost(bool, tag = "1")]
    pub nullable: bool,
    #[prost(oneof = "field_type::TypeInfo", tags = "2, 3, 4, 5, 6")]
    pub type_info: Option<field_type::TypeInfo>,
}

pub mod field_type {
    /// Exclusive-choice body of a [`FieldType`](super::FieldType).
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum TypeInfo {
        #[prost(enumeration = "super::AtomicType", tag = "2")]
        AtomicType(i32),
        #[prost(message, tag = "3")]
        ArrayType(super::ArrayType),
        #[prost(message, tag = "4")]
        MapType(super::MapType),
        #[prost(message, tag = "5")]
        RowType(super::RowType),
        #[prost(message, tag = "6")]
        LogicalType(super::LogicalType),
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ArrayType {
    #[prost(message, optional, boxed, tag = "1")]
    pub element_type: Option<Box<FieldType>>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct MapType {
    #[prost(message, optional, boxed, tag = "1")]
    pub key_type: Option<Box<FieldType>>,
    #[prost(message, optional, boxed, tag = "2")]
    pub value_type: Option<Box<FieldType>>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RowType {
    #[prost(message, optional, tag = "1")]
    pub schema: Option<Schema>,
}

/// Reference to a registered logical type by URN, with the descriptor of its
/// wire representation attached so receivers without the plugin can still
/// interpret the bytes.
#[derive(Clone, PartialEq, prost::Message)]
pub struct LogicalType {
    #[prost(string, tag = "1")]
    pub urn: String,
    #[prost(message, optional, boxed, tag = "2")]
    pub representation: Option<Box<FieldType>>,
}

/// Field layout of one composite type. `id` is globally unique and is the
/// persisted join key between encode-time and decode-time identity; field
/// order is significant.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Schema {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(message, repeated, tag = "2")]
    pub fields: Vec<Field>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Field {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub r#type: Option<FieldType>,
}

impl FieldType {
    pub fn atomic(kind: AtomicType) -> Self {
        Self {
            nullable: false,
            type_info: Some(field_type::TypeInfo::AtomicType(kind as i32)),
        }
    }

    pub fn array(element: FieldType) -> Self {
        Self {
            nullable: false,
            type_info: Some(field_type::TypeInfo::ArrayType(ArrayType {
                element_type: Some(Box::new(element)),
            })),
        }
    }

    pub fn map(key: FieldType, value: FieldType) -> Self {
        Self {
            nullable: false,
            type_info: Some(field_type::TypeInfo::MapType(MapType {
                key_type: Some(Box::new(key)),
                value_type: Some(Box::new(value)),
            })),
        }
    }

    pub fn row(schema: Schema) -> Self {
        Self {
            nullable: false,
            type_info: Some(field_type::TypeInfo::RowType(RowType {
                schema: Some(schema),
            })),
        }
    }

    pub fn logical(urn: impl Into<String>, representation: Option<FieldType>) -> Self {
        Self {
            nullable: false,
            type_info: Some(field_type::TypeInfo::LogicalType(LogicalType {
                urn: urn.into(),
                representation: representation.map(Box::new),
            })),
        }
    }

    pub fn into_nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Atomic kind of this descriptor, if the body is an atomic variant with
    /// a known enum value.
    pub fn atomic_kind(&self) -> Option<AtomicType> {
        match self.type_info {
            Some(field_type::TypeInfo::AtomicType(raw)) => AtomicType::try_from(raw).ok(),
            _ => None,
        }
    }
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            r#type: Some(field_type),
        }
    }
}
