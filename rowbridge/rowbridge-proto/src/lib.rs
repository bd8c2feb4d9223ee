//! Portable, language-agnostic schema descriptor messages.
//!
//! These are the wire messages exchanged between SDK components: a
//! [`FieldType`] with a `nullable` flag and a oneof body selecting atomic,
//! array, map, row, or logical variants, and the [`Schema`] message that
//! identifies a composite type's field layout by id. The messages are
//! hand-written prost types; the byte format is plain protobuf.

mod descriptor;
mod format;

pub use descriptor::{
    ArrayType, AtomicType, Field, FieldType, LogicalType, MapType, RowType, Schema, field_type,
};
pub use format::{format_field_type, format_schema};
