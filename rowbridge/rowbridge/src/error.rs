//! Error types for the translation layer.

use rowbridge_core::ValueTypeError;

/// Errors produced when decoding a wire descriptor back to a native type or
/// re-hydrating a row value. Encoding never fails: unknown native types
/// degrade to the untyped placeholder descriptor instead.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// Atomic kind value not present in the reverse mapping table.
    #[error("unsupported atomic type value {0}")]
    UnsupportedAtomicKind(i32),

    /// Logical-type URN with no registered implementation.
    #[error("no logical type registered for URN '{0}'")]
    UnknownLogicalType(String),

    /// The descriptor's oneof selector is unset, or a required nested
    /// descriptor (array element, map key/value, row schema) is missing.
    #[error("malformed field descriptor: missing type_info or nested descriptor")]
    MalformedDescriptor,

    /// A field of a composite failed to decode. Carries the offending
    /// field's rendered descriptor for diagnostics.
    #[error("failed to decode field '{name}': {source}\noffending descriptor:\n{descriptor}")]
    Field {
        name: String,
        descriptor: String,
        source: Box<TranslateError>,
    },

    /// A logical type was registered for a language type already claimed by
    /// a different URN.
    #[error("language type already claimed by logical type '{existing_urn}' (registering '{urn}')")]
    DuplicateLogicalType { urn: String, existing_urn: String },

    /// Serialized schema bytes could not be parsed during row re-hydration.
    #[error("failed to parse schema bytes: {0}")]
    SchemaDecode(#[from] prost::DecodeError),

    /// Row value arity does not match its schema's field count.
    #[error("row has {actual} values but its schema declares {expected} fields")]
    FieldCountMismatch { expected: usize, actual: usize },

    /// A logical type conversion received a value of the wrong variant.
    #[error(transparent)]
    Value(#[from] ValueTypeError),
}
