//! Human-readable rendering of wire descriptors for logs and error messages.

use std::fmt::{Error, Result, Write as _};

use crate::descriptor::{Field, FieldType, Schema, field_type::TypeInfo};

/// Format a field descriptor in a readable multi-line style. Composite
/// bodies are indented; nested descriptors follow the same rule.
pub fn format_field_type(field_type: &FieldType) -> std::result::Result<String, Error> {
    let mut out = String::new();
    write_field_type(field_type, 0, &mut out)?;
    Ok(out)
}

/// Format a schema with its id and every field.
pub fn format_schema(schema: &Schema) -> std::result::Result<String, Error> {
    let mut out = String::new();
    writeln!(out, "schema id: {}", schema.id)?;
    for field in &schema.fields {
        write_field(field, 0, &mut out)?;
    }
    Ok(out)
}

fn write_field(field: &Field, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    writeln!(out, "{pad}field: {}", field.name)?;
    match &field.r#type {
        Some(field_type) => write_field_type(field_type, indent + 4, out),
        None => writeln!(out, "{pad}    type: <unset>"),
    }
}

fn write_field_type(field_type: &FieldType, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    writeln!(out, "{pad}type: {}", type_info_name(field_type))?;
    writeln!(out, "{pad}nullable: {}", field_type.nullable)?;

    match &field_type.type_info {
        Some(TypeInfo::ArrayType(array)) => {
            if let Some(element) = &array.element_type {
                writeln!(out, "{pad}element:")?;
                write_field_type(element, indent + 4, out)?;
            }
        }
        Some(TypeInfo::MapType(map)) => {
            if let Some(key) = &map.key_type {
                writeln!(out, "{pad}key:")?;
                write_field_type(key, indent + 4, out)?;
            }
            if let Some(value) = &map.value_type {
                writeln!(out, "{pad}value:")?;
                write_field_type(value, indent + 4, out)?;
            }
        }
        Some(TypeInfo::RowType(row)) => {
            if let Some(schema) = &row.schema {
                writeln!(out, "{pad}schema id: {}", schema.id)?;
                for field in &schema.fields {
                    write_field(field, indent + 4, out)?;
                }
            }
        }
        Some(TypeInfo::LogicalType(logical)) => {
            writeln!(out, "{pad}urn: {}", logical.urn)?;
            if let Some(representation) = &logical.representation {
                writeln!(out, "{pad}representation:")?;
                write_field_type(representation, indent + 4, out)?;
            }
        }
        Some(TypeInfo::AtomicType(_)) | None => {}
    }
    Ok(())
}

fn type_info_name(field_type: &FieldType) -> String {
    match &field_type.type_info {
        Some(TypeInfo::AtomicType(_)) => match field_type.atomic_kind() {
            Some(kind) => format!("atomic ({kind:?})"),
            None => "atomic (unknown)".to_string(),
        },
        Some(TypeInfo::ArrayType(_)) => "array".to_string(),
        Some(TypeInfo::MapType(_)) => "map".to_string(),
        Some(TypeInfo::RowType(_)) => "row".to_string(),
        Some(TypeInfo::LogicalType(_)) => "logical".to_string(),
        None => "<unset>".to_string(),
    }
}
