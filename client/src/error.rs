//! Error types for filter construction
//!
//! Almost every builder method is statically typed and cannot fail; the
//! errors here cover the one generic span entry point where slot routing is
//! resolved at call time, plus the request codec.

use thiserror::Error;

use crate::schema::{SpanSlot, ValueKind};

/// Error from the generic span filter entry point.
///
/// A failed call appends nothing; the builder is left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The slot names a schema region with no scalar field (attributes,
    /// events, links, status, resource, scope), so there is nothing a scalar
    /// filter could target.
    #[error("span slot `{slot}` has no scalar schema field")]
    SchemaSlotNotFound { slot: SpanSlot },

    /// The supplied value's type disagrees with the slot's declared type.
    #[error("type mismatch for span slot `{slot}`: expected {expected}, got {actual}")]
    TypeMismatch {
        slot: SpanSlot,
        expected: ValueKind,
        actual: ValueKind,
    },
}

impl FilterError {
    /// Create a slot-not-found error
    pub fn slot_not_found(slot: SpanSlot) -> Self {
        Self::SchemaSlotNotFound { slot }
    }

    /// Create a type-mismatch error
    pub fn type_mismatch(slot: SpanSlot, expected: ValueKind, actual: ValueKind) -> Self {
        Self::TypeMismatch {
            slot,
            expected,
            actual,
        }
    }
}

/// Error encoding a finished request for transmission.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// JSON serialization failed
    #[error("Failed to encode JSON request: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error decoding a request from bytes (used by tooling and tests).
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Protobuf decoding failed
    #[error("Failed to decode protobuf request: {0}")]
    Protobuf(#[from] prost::DecodeError),

    /// JSON decoding failed
    #[error("Failed to decode JSON request: {0}")]
    Json(#[from] serde_json::Error),
}
