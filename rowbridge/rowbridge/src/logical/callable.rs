//! Source-backed callable logical type.

use rowbridge_core::{CallableWithSource, NativeType, Value, ValueTypeError};

use super::LogicalType;

pub const SOURCED_CALLABLE_URN: &str = "rowbridge:logical:sourced_callable:v1";

/// Encodes a [`CallableWithSource`] as its source string; decoding recreates
/// the callable from that string.
pub struct SourcedCallable;

impl LogicalType for SourcedCallable {
    fn urn(&self) -> &str {
        SOURCED_CALLABLE_URN
    }

    fn language_type(&self) -> NativeType {
        NativeType::domain(CallableWithSource::TYPE_NAME)
    }

    fn representation_type(&self) -> NativeType {
        NativeType::String
    }

    fn to_representation(&self, value: &Value) -> Result<Value, ValueTypeError> {
        let Some(callable) = value.try_callable()? else {
            return Err(value.type_mismatch("Callable"));
        };
        Ok(Value::string(callable.source()))
    }

    fn to_language(&self, value: &Value) -> Result<Value, ValueTypeError> {
        let Some(source) = value.try_str()? else {
            return Err(value.type_mismatch("String"));
        };
        Ok(Value::Callable(CallableWithSource::new(source)))
    }
}
