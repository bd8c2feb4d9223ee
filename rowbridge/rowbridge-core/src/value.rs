//! Runtime value representation used by logical type conversions and row
//! re-hydration.

use std::sync::Arc;

use crate::error::ValueTypeError;

/// Runtime value. All types are explicit; no lossy conversions.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    String(Arc<str>),
    Bytes(Arc<[u8]>),
    List(Vec<Value>),
    Map(Vec<(Value, Value)>),
    /// Composite value: field values in schema field order.
    Row(Vec<Value>),
    Timestamp(Timestamp),
    Callable(CallableWithSource),
}

impl Value {
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::String(Arc::from(s.as_ref()))
    }

    pub fn bytes(b: impl AsRef<[u8]>) -> Self {
        Self::Bytes(Arc::from(b.as_ref()))
    }

    pub fn try_bool(&self) -> Result<Option<bool>, ValueTypeError> {
        match self {
            Value::Bool(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Bool")),
        }
    }

    pub fn try_i64(&self) -> Result<Option<i64>, ValueTypeError> {
        match self {
            Value::I64(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("I64")),
        }
    }

    pub fn try_f64(&self) -> Result<Option<f64>, ValueTypeError> {
        match self {
            Value::F64(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("F64")),
        }
    }

    pub fn try_str(&self) -> Result<Option<&str>, ValueTypeError> {
        match self {
            Value::String(v) => Ok(Some(v.as_ref())),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("String")),
        }
    }

    pub fn try_bytes(&self) -> Result<Option<&[u8]>, ValueTypeError> {
        match self {
            Value::Bytes(v) => Ok(Some(v.as_ref())),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Bytes")),
        }
    }

    pub fn try_row(&self) -> Result<Option<&[Value]>, ValueTypeError> {
        match self {
            Value::Row(v) => Ok(Some(v.as_slice())),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Row")),
        }
    }

    pub fn try_timestamp(&self) -> Result<Option<Timestamp>, ValueTypeError> {
        match self {
            Value::Timestamp(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Timestamp")),
        }
    }

    pub fn try_callable(&self) -> Result<Option<&CallableWithSource>, ValueTypeError> {
        match self {
            Value::Callable(v) => Ok(Some(v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Callable")),
        }
    }

    pub fn type_mismatch(&self, expected: impl Into<String>) -> ValueTypeError {
        ValueTypeError::new(expected, self.variant_name())
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::I8(_) => "I8",
            Value::I16(_) => "I16",
            Value::I32(_) => "I32",
            Value::I64(_) => "I64",
            Value::F32(_) => "F32",
            Value::F64(_) => "F64",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::List(_) => "List",
            Value::Map(_) => "Map",
            Value::Row(_) => "Row",
            Value::Timestamp(_) => "Timestamp",
            Value::Callable(_) => "Callable",
        }
    }
}

/// Microsecond-resolution instant, stored as an offset from the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Timestamp {
    micros: i64,
}

impl Timestamp {
    /// Name of the domain type handle this value is translated under.
    pub const TYPE_NAME: &'static str = "Timestamp";

    pub const MICROS_PER_SECOND: i64 = 1_000_000;

    pub fn from_micros(micros: i64) -> Self {
        Self { micros }
    }

    pub fn new(seconds: i64, micros: i64) -> Self {
        Self {
            micros: seconds * Self::MICROS_PER_SECOND + micros,
        }
    }

    pub fn micros(&self) -> i64 {
        self.micros
    }

    /// Whole-second component, rounding toward negative infinity so that the
    /// microsecond-of-second component is always in `0..1_000_000`.
    pub fn seconds(&self) -> i64 {
        self.micros.div_euclid(Self::MICROS_PER_SECOND)
    }

    /// Microsecond-of-second component, always in `0..1_000_000`.
    pub fn subsecond_micros(&self) -> i64 {
        self.micros.rem_euclid(Self::MICROS_PER_SECOND)
    }
}

/// Callable wrapper that carries its own source text, so it can cross
/// process boundaries as a string and be recreated on the far side.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallableWithSource {
    source: String,
}

impl CallableWithSource {
    /// Name of the domain type handle this value is translated under.
    pub const TYPE_NAME: &'static str = "CallableWithSource";

    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}
