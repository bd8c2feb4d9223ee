//! Bidirectional translation between the native type model and the portable
//! schema descriptor format.
//!
//! [`SchemaTranslator`] is the entry point: it owns a [`SchemaRegistry`]
//! (schema id ⇄ composite type) and a [`LogicalTypeRegistry`] (URN ⇄ domain
//! type plugin) and converts [`NativeType`] values to wire
//! [`proto::FieldType`] descriptors and back. Encoding is total; decoding
//! reports failures through [`TranslateError`].

mod error;
mod hydrate;
mod logical;
mod registry;
mod translate;

pub use error::TranslateError;
pub use hydrate::RowValue;
pub use logical::{
    LogicalType, LogicalTypeRegistry, MICROS_INSTANT_URN, MicrosInstant, SOURCED_CALLABLE_URN,
    SourcedCallable,
};
pub use registry::{RowCodecSink, SchemaRegistry};
pub use rowbridge_core as core;
pub use rowbridge_core::{
    CallableWithSource, NativeType, RowType, Timestamp, Value, ValueTypeError,
};
pub use rowbridge_proto as proto;
pub use translate::{ANY_URN, SchemaTranslator};
