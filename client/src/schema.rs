//! Span slot table for the generic filter entry point
//!
//! The span schema has far more scalar slots than the other record kinds, so
//! its builder also exposes a single generalized method spanning all of them
//! (`SpanFilterBuilder::add_filter`). That method validates the supplied
//! value against the fixed slot table here instead of relying on per-slot
//! method signatures.

use std::fmt;

/// The value kinds a property slot can declare: the seven scalar kinds,
/// plus the enum kind shared by the enum-typed slots (span kind, status
/// code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Int64,
    UInt64,
    UInt32,
    Double,
    Bytes,
    Bool,
    Enum,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Int64 => "int64",
            ValueKind::UInt64 => "uint64",
            ValueKind::UInt32 => "uint32",
            ValueKind::Double => "double",
            ValueKind::Bytes => "bytes",
            ValueKind::Bool => "bool",
            ValueKind::Enum => "enum",
        };
        write!(f, "{}", name)
    }
}

/// Identifier for a span schema field targetable by the generic entry point.
///
/// Every field of the span tree is listed, including composite regions;
/// only slots with a declared scalar type accept a generic filter. The
/// composite ones (`Attributes`, `Events`, `Links`, `Status`, `Resource`,
/// `Scope`) and the enum-typed ones (`Kind`, `StatusCode`) are reachable
/// through the typed builder methods instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanSlot {
    TraceId,
    SpanId,
    TraceState,
    ParentSpanId,
    Flags,
    Name,
    Kind,
    StartTimeUnixNano,
    EndTimeUnixNano,
    Attributes,
    DroppedAttributesCount,
    Events,
    DroppedEventsCount,
    Links,
    DroppedLinksCount,
    Status,
    StatusMessage,
    StatusCode,
    Resource,
    Scope,
}

impl SpanSlot {
    /// Declared scalar value kind of the slot, or `None` for composite
    /// schema regions. This is the compile-time table the generic entry
    /// point validates against.
    pub fn value_kind(self) -> Option<ValueKind> {
        match self {
            SpanSlot::TraceId | SpanSlot::SpanId | SpanSlot::ParentSpanId => {
                Some(ValueKind::Bytes)
            }
            SpanSlot::TraceState | SpanSlot::Name | SpanSlot::StatusMessage => {
                Some(ValueKind::String)
            }
            SpanSlot::Flags
            | SpanSlot::DroppedAttributesCount
            | SpanSlot::DroppedEventsCount
            | SpanSlot::DroppedLinksCount => Some(ValueKind::UInt32),
            SpanSlot::StartTimeUnixNano | SpanSlot::EndTimeUnixNano => Some(ValueKind::UInt64),
            SpanSlot::Kind | SpanSlot::StatusCode => Some(ValueKind::Enum),
            SpanSlot::Attributes
            | SpanSlot::Events
            | SpanSlot::Links
            | SpanSlot::Status
            | SpanSlot::Resource
            | SpanSlot::Scope => None,
        }
    }
}

impl fmt::Display for SpanSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpanSlot::TraceId => "trace_id",
            SpanSlot::SpanId => "span_id",
            SpanSlot::TraceState => "trace_state",
            SpanSlot::ParentSpanId => "parent_span_id",
            SpanSlot::Flags => "flags",
            SpanSlot::Name => "name",
            SpanSlot::Kind => "kind",
            SpanSlot::StartTimeUnixNano => "start_time_unix_nano",
            SpanSlot::EndTimeUnixNano => "end_time_unix_nano",
            SpanSlot::Attributes => "attributes",
            SpanSlot::DroppedAttributesCount => "dropped_attributes_count",
            SpanSlot::Events => "events",
            SpanSlot::DroppedEventsCount => "dropped_events_count",
            SpanSlot::Links => "links",
            SpanSlot::DroppedLinksCount => "dropped_links_count",
            SpanSlot::Status => "status",
            SpanSlot::StatusMessage => "status.message",
            SpanSlot::StatusCode => "status.code",
            SpanSlot::Resource => "resource",
            SpanSlot::Scope => "scope",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_slots_declare_a_kind() {
        assert_eq!(SpanSlot::TraceId.value_kind(), Some(ValueKind::Bytes));
        assert_eq!(SpanSlot::Name.value_kind(), Some(ValueKind::String));
        assert_eq!(SpanSlot::Flags.value_kind(), Some(ValueKind::UInt32));
        assert_eq!(
            SpanSlot::StartTimeUnixNano.value_kind(),
            Some(ValueKind::UInt64)
        );
        assert_eq!(
            SpanSlot::StatusMessage.value_kind(),
            Some(ValueKind::String)
        );
    }

    #[test]
    fn enum_slots_declare_the_enum_kind() {
        assert_eq!(SpanSlot::Kind.value_kind(), Some(ValueKind::Enum));
        assert_eq!(SpanSlot::StatusCode.value_kind(), Some(ValueKind::Enum));
    }

    #[test]
    fn composite_slots_declare_none() {
        for slot in [
            SpanSlot::Attributes,
            SpanSlot::Events,
            SpanSlot::Links,
            SpanSlot::Status,
            SpanSlot::Resource,
            SpanSlot::Scope,
        ] {
            assert_eq!(slot.value_kind(), None, "slot {}", slot);
        }
    }

    #[test]
    fn slot_display_uses_schema_paths() {
        assert_eq!(SpanSlot::StatusCode.to_string(), "status.code");
        assert_eq!(
            SpanSlot::StartTimeUnixNano.to_string(),
            "start_time_unix_nano"
        );
    }
}
