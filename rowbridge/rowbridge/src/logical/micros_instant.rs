//! Instant-with-microsecond-precision logical type.

use rowbridge_core::{NativeType, RowType, Timestamp, Value, ValueTypeError};

use super::LogicalType;

pub const MICROS_INSTANT_URN: &str = "rowbridge:logical:micros_instant:v1";

/// Encodes a [`Timestamp`] as a two-field `(seconds: i64, micros: i64)`
/// record. The split uses floor semantics, so the micros component is always
/// in `0..1_000_000` even for instants before the epoch.
pub struct MicrosInstant;

impl MicrosInstant {
    fn representation_row() -> RowType {
        RowType::new(
            "MicrosInstantRepresentation",
            vec![
                ("seconds".to_string(), NativeType::I64),
                ("micros".to_string(), NativeType::I64),
            ],
        )
    }
}

impl LogicalType for MicrosInstant {
    fn urn(&self) -> &str {
        MICROS_INSTANT_URN
    }

    fn language_type(&self) -> NativeType {
        NativeType::domain(Timestamp::TYPE_NAME)
    }

    fn representation_type(&self) -> NativeType {
        NativeType::Row(Self::representation_row())
    }

    fn to_representation(&self, value: &Value) -> Result<Value, ValueTypeError> {
        let Some(timestamp) = value.try_timestamp()? else {
            return Err(value.type_mismatch("Timestamp"));
        };
        Ok(Value::Row(vec![
            Value::I64(timestamp.seconds()),
            Value::I64(timestamp.subsecond_micros()),
        ]))
    }

    fn to_language(&self, value: &Value) -> Result<Value, ValueTypeError> {
        let Some(parts) = value.try_row()? else {
            return Err(value.type_mismatch("Row"));
        };
        let [seconds, micros] = parts else {
            return Err(value.type_mismatch("Row with seconds and micros"));
        };
        let seconds = seconds
            .try_i64()?
            .ok_or_else(|| seconds.type_mismatch("I64"))?;
        let micros = micros
            .try_i64()?
            .ok_or_else(|| micros.type_mismatch("I64"))?;
        Ok(Value::Timestamp(Timestamp::new(seconds, micros)))
    }
}
