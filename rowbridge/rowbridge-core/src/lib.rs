//! Wire-independent native type model and value types for `rowbridge`.
//!
//! This crate provides the reified model of the host SDK's type system
//! ([`NativeType`] / [`RowType`]), the runtime [`Value`] representation, and
//! the domain value types used by the built-in logical types
//! ([`Timestamp`], [`CallableWithSource`]).

mod error;
mod types;
mod value;

pub use error::ValueTypeError;
pub use types::{NativeType, RowType};
pub use value::{CallableWithSource, Timestamp, Value};
