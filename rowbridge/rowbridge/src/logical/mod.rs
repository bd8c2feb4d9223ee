//! Pluggable logical types: domain types with a custom wire representation.

mod callable;
mod micros_instant;

use std::{collections::HashMap, sync::Arc};

use rowbridge_core::{NativeType, Value, ValueTypeError};

use crate::error::TranslateError;

pub use callable::{SOURCED_CALLABLE_URN, SourcedCallable};
pub use micros_instant::{MICROS_INSTANT_URN, MicrosInstant};

/// Mapping between a native domain type and its wire representation,
/// identified across processes by a stable URN.
///
/// `argument_type` / `argument` are the extension point for parameterized
/// variants; only the no-argument case is currently supported.
pub trait LogicalType: Send + Sync {
    /// Stable URN identifying this logical type across SDKs.
    fn urn(&self) -> &str;

    /// Native type this logical type encodes.
    fn language_type(&self) -> NativeType;

    /// Native type of the wire representation.
    fn representation_type(&self) -> NativeType;

    fn argument_type(&self) -> Option<NativeType> {
        None
    }

    fn argument(&self) -> Option<Value> {
        None
    }

    /// Convert a language-type value to its representation value.
    fn to_representation(&self, value: &Value) -> Result<Value, ValueTypeError>;

    /// Convert a representation value back to a language-type value.
    fn to_language(&self, value: &Value) -> Result<Value, ValueTypeError>;
}

/// Registry of logical type implementations, indexed by URN (decode path)
/// and by language type (encode path).
///
/// Registration is explicit: implementations are assembled at startup via
/// [`LogicalTypeRegistry::standard`] or [`register`](Self::register), never
/// as a side effect of type definition.
#[derive(Default)]
pub struct LogicalTypeRegistry {
    by_urn: HashMap<String, Arc<dyn LogicalType>>,
    by_language_type: HashMap<NativeType, Arc<dyn LogicalType>>,
}

impl LogicalTypeRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry pre-loaded with the built-in logical types
    /// ([`MicrosInstant`], [`SourcedCallable`]).
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.insert(Arc::new(MicrosInstant));
        registry.insert(Arc::new(SourcedCallable));
        registry
    }

    /// Register a logical type implementation.
    ///
    /// Re-registering the same URN replaces the implementation. Registering
    /// a different URN for a language type that is already claimed is
    /// rejected, since it would silently change how that type encodes.
    pub fn register(&mut self, logical: Arc<dyn LogicalType>) -> Result<(), TranslateError> {
        if let Some(existing) = self.by_language_type.get(&logical.language_type()) {
            if existing.urn() != logical.urn() {
                return Err(TranslateError::DuplicateLogicalType {
                    urn: logical.urn().to_string(),
                    existing_urn: existing.urn().to_string(),
                });
            }
        }
        self.insert(logical);
        Ok(())
    }

    fn insert(&mut self, logical: Arc<dyn LogicalType>) {
        self.by_urn
            .insert(logical.urn().to_string(), Arc::clone(&logical));
        self.by_language_type
            .insert(logical.language_type(), logical);
    }

    pub fn by_urn(&self, urn: &str) -> Option<Arc<dyn LogicalType>> {
        self.by_urn.get(urn).cloned()
    }

    pub fn by_language_type(&self, native: &NativeType) -> Option<Arc<dyn LogicalType>> {
        self.by_language_type.get(native).cloned()
    }
}
