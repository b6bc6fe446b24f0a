//! Span predicate builder
//!
//! Spans are the one record kind with a generic entry point
//! ([`SpanFilterBuilder::add_filter`]) next to the usual typed methods: the
//! span schema has around twenty scalar slots, and one validated method
//! replaces twenty near-identical overloads. Validation is a lookup in the
//! slot table of [`crate::schema`].

use lookout_proto::common::{
    BytesCompare, BytesProperty, EnumCompare, NumberCompare, StringCompare, StringProperty,
    Uint32Property, Uint64Property, resource_filter, scope_filter,
};
use lookout_proto::otlp::{SpanKind, StatusCode};
use lookout_proto::query::{WhereFilter, property_filter};
use lookout_proto::trace::{
    SpanEventFilter, SpanFilter, SpanKindProperty, SpanLinkFilter, StatusCodeProperty,
    StatusFilter, span_event_filter, span_filter, span_link_filter, status_filter,
};

use crate::error::FilterError;
use crate::schema::SpanSlot;
use crate::value::{ArrayFilterBuilder, KeyValueListFilterBuilder, ScalarFilter};

use super::common::{ResourceFilterBuilder, ScopeFilterBuilder, wrap_resource, wrap_scope};
use super::{array_value, keyed_property, kvlist_value, push_property};

fn wrap(value: span_filter::Value) -> property_filter::Value {
    property_filter::Value::Span(SpanFilter { value: Some(value) })
}

fn wrap_span_resource(value: resource_filter::Value) -> property_filter::Value {
    wrap(span_filter::Value::Resource(wrap_resource(value)))
}

fn wrap_span_scope(value: scope_filter::Value) -> property_filter::Value {
    wrap(span_filter::Value::Scope(wrap_scope(value)))
}

fn status(value: status_filter::Value) -> span_filter::Value {
    span_filter::Value::Status(StatusFilter { value: Some(value) })
}

/// Builds predicates over span fields.
#[derive(Debug)]
pub struct SpanFilterBuilder<'a> {
    filters: &'a mut Vec<WhereFilter>,
}

impl<'a> SpanFilterBuilder<'a> {
    pub(crate) fn new(filters: &'a mut Vec<WhereFilter>) -> Self {
        Self { filters }
    }

    /// Generic entry point: route a scalar filter to the named slot.
    ///
    /// The value's type is checked against the slot's declared type at call
    /// time; on error nothing is appended. Composite regions (attributes,
    /// events, links, status, resource, scope) have no scalar slot and
    /// report [`FilterError::SchemaSlotNotFound`]; the enum-typed slots
    /// (kind, status code) declare the enum kind, which no scalar value
    /// satisfies, so they report [`FilterError::TypeMismatch`]. Use the
    /// typed methods for both.
    pub fn add_filter(
        &mut self,
        slot: SpanSlot,
        value: ScalarFilter,
    ) -> Result<&mut Self, FilterError> {
        let actual = value.kind();
        let routed = match (slot, value) {
            (SpanSlot::TraceId, ScalarFilter::Bytes(value, compare)) => {
                span_filter::Value::TraceId(BytesProperty {
                    value,
                    compare: compare as i32,
                })
            }
            (SpanSlot::SpanId, ScalarFilter::Bytes(value, compare)) => {
                span_filter::Value::SpanId(BytesProperty {
                    value,
                    compare: compare as i32,
                })
            }
            (SpanSlot::ParentSpanId, ScalarFilter::Bytes(value, compare)) => {
                span_filter::Value::ParentSpanId(BytesProperty {
                    value,
                    compare: compare as i32,
                })
            }
            (SpanSlot::TraceState, ScalarFilter::String(value, compare)) => {
                span_filter::Value::TraceState(StringProperty {
                    value,
                    compare: compare as i32,
                })
            }
            (SpanSlot::Name, ScalarFilter::String(value, compare)) => {
                span_filter::Value::Name(StringProperty {
                    value,
                    compare: compare as i32,
                })
            }
            (SpanSlot::StatusMessage, ScalarFilter::String(value, compare)) => {
                status(status_filter::Value::Message(StringProperty {
                    value,
                    compare: compare as i32,
                }))
            }
            (SpanSlot::Flags, ScalarFilter::UInt32(value, compare)) => {
                span_filter::Value::Flags(Uint32Property {
                    value,
                    compare: compare as i32,
                })
            }
            (SpanSlot::DroppedAttributesCount, ScalarFilter::UInt32(value, compare)) => {
                span_filter::Value::DroppedAttributesCount(Uint32Property {
                    value,
                    compare: compare as i32,
                })
            }
            (SpanSlot::DroppedEventsCount, ScalarFilter::UInt32(value, compare)) => {
                span_filter::Value::DroppedEventsCount(Uint32Property {
                    value,
                    compare: compare as i32,
                })
            }
            (SpanSlot::DroppedLinksCount, ScalarFilter::UInt32(value, compare)) => {
                span_filter::Value::DroppedLinksCount(Uint32Property {
                    value,
                    compare: compare as i32,
                })
            }
            (SpanSlot::StartTimeUnixNano, ScalarFilter::UInt64(value, compare)) => {
                span_filter::Value::StartTimeUnixNano(Uint64Property {
                    value,
                    compare: compare as i32,
                })
            }
            (SpanSlot::EndTimeUnixNano, ScalarFilter::UInt64(value, compare)) => {
                span_filter::Value::EndTimeUnixNano(Uint64Property {
                    value,
                    compare: compare as i32,
                })
            }
            (slot, _) => {
                return Err(match slot.value_kind() {
                    None => FilterError::slot_not_found(slot),
                    Some(expected) => FilterError::type_mismatch(slot, expected, actual),
                });
            }
        };
        self.push(routed);
        Ok(self)
    }

    pub fn add_trace_id_filter(
        &mut self,
        value: impl Into<Vec<u8>>,
        compare: BytesCompare,
    ) -> &mut Self {
        self.push(span_filter::Value::TraceId(BytesProperty {
            value: value.into(),
            compare: compare as i32,
        }))
    }

    pub fn add_span_id_filter(
        &mut self,
        value: impl Into<Vec<u8>>,
        compare: BytesCompare,
    ) -> &mut Self {
        self.push(span_filter::Value::SpanId(BytesProperty {
            value: value.into(),
            compare: compare as i32,
        }))
    }

    pub fn add_parent_span_id_filter(
        &mut self,
        value: impl Into<Vec<u8>>,
        compare: BytesCompare,
    ) -> &mut Self {
        self.push(span_filter::Value::ParentSpanId(BytesProperty {
            value: value.into(),
            compare: compare as i32,
        }))
    }

    pub fn add_trace_state_filter(
        &mut self,
        value: impl Into<String>,
        compare: StringCompare,
    ) -> &mut Self {
        self.push(span_filter::Value::TraceState(StringProperty {
            value: value.into(),
            compare: compare as i32,
        }))
    }

    pub fn add_name_filter(
        &mut self,
        value: impl Into<String>,
        compare: StringCompare,
    ) -> &mut Self {
        self.push(span_filter::Value::Name(StringProperty {
            value: value.into(),
            compare: compare as i32,
        }))
    }

    pub fn add_kind_filter(&mut self, value: SpanKind, compare: EnumCompare) -> &mut Self {
        self.push(span_filter::Value::Kind(SpanKindProperty {
            value: value as i32,
            compare: compare as i32,
        }))
    }

    pub fn add_start_time_filter(&mut self, nanos: u64, compare: NumberCompare) -> &mut Self {
        self.push(span_filter::Value::StartTimeUnixNano(Uint64Property {
            value: nanos,
            compare: compare as i32,
        }))
    }

    pub fn add_end_time_filter(&mut self, nanos: u64, compare: NumberCompare) -> &mut Self {
        self.push(span_filter::Value::EndTimeUnixNano(Uint64Property {
            value: nanos,
            compare: compare as i32,
        }))
    }

    pub fn add_flags_filter(&mut self, value: u32, compare: NumberCompare) -> &mut Self {
        self.push(span_filter::Value::Flags(Uint32Property {
            value,
            compare: compare as i32,
        }))
    }

    /// Filter on one span attribute by key.
    pub fn add_attribute_filter(
        &mut self,
        key: impl Into<String>,
        value: ScalarFilter,
    ) -> &mut Self {
        self.push(span_filter::Value::Attribute(keyed_property(
            key,
            value.into_property_value(),
        )))
    }

    /// Filter on a span attribute whose value is an array.
    pub fn add_attribute_array_filter(
        &mut self,
        key: impl Into<String>,
        configure: impl FnOnce(&mut ArrayFilterBuilder),
    ) -> &mut Self {
        self.push(span_filter::Value::Attribute(keyed_property(
            key,
            array_value(configure),
        )))
    }

    /// Filter on a span attribute whose value is a key/value list.
    pub fn add_attribute_key_value_list_filter(
        &mut self,
        key: impl Into<String>,
        configure: impl FnOnce(&mut KeyValueListFilterBuilder),
    ) -> &mut Self {
        self.push(span_filter::Value::Attribute(keyed_property(
            key,
            kvlist_value(configure),
        )))
    }

    pub fn add_dropped_attributes_count_filter(
        &mut self,
        value: u32,
        compare: NumberCompare,
    ) -> &mut Self {
        self.push(span_filter::Value::DroppedAttributesCount(Uint32Property {
            value,
            compare: compare as i32,
        }))
    }

    pub fn add_dropped_events_count_filter(
        &mut self,
        value: u32,
        compare: NumberCompare,
    ) -> &mut Self {
        self.push(span_filter::Value::DroppedEventsCount(Uint32Property {
            value,
            compare: compare as i32,
        }))
    }

    pub fn add_dropped_links_count_filter(
        &mut self,
        value: u32,
        compare: NumberCompare,
    ) -> &mut Self {
        self.push(span_filter::Value::DroppedLinksCount(Uint32Property {
            value,
            compare: compare as i32,
        }))
    }

    pub fn add_status_message_filter(
        &mut self,
        value: impl Into<String>,
        compare: StringCompare,
    ) -> &mut Self {
        self.push(status(status_filter::Value::Message(StringProperty {
            value: value.into(),
            compare: compare as i32,
        })))
    }

    pub fn add_status_code_filter(&mut self, value: StatusCode, compare: EnumCompare) -> &mut Self {
        self.push(status(status_filter::Value::Code(StatusCodeProperty {
            value: value as i32,
            compare: compare as i32,
        })))
    }

    /// Façade for span events.
    pub fn event(&mut self) -> SpanEventFilterBuilder<'_> {
        SpanEventFilterBuilder {
            filters: self.filters,
        }
    }

    /// Façade for span links.
    pub fn link(&mut self) -> SpanLinkFilterBuilder<'_> {
        SpanLinkFilterBuilder {
            filters: self.filters,
        }
    }

    /// Façade for the resource wrapping this span.
    pub fn resource(&mut self) -> ResourceFilterBuilder<'_> {
        ResourceFilterBuilder::new(self.filters, wrap_span_resource)
    }

    /// Façade for the instrumentation scope wrapping this span.
    pub fn scope(&mut self) -> ScopeFilterBuilder<'_> {
        ScopeFilterBuilder::new(self.filters, wrap_span_scope)
    }

    fn push(&mut self, value: span_filter::Value) -> &mut Self {
        push_property(self.filters, wrap(value));
        self
    }
}

/// Routes predicates into the span-event branch; owns nothing.
pub struct SpanEventFilterBuilder<'a> {
    filters: &'a mut Vec<WhereFilter>,
}

impl SpanEventFilterBuilder<'_> {
    pub fn add_time_filter(&mut self, nanos: u64, compare: NumberCompare) -> &mut Self {
        self.push(span_event_filter::Value::TimeUnixNano(Uint64Property {
            value: nanos,
            compare: compare as i32,
        }))
    }

    pub fn add_name_filter(
        &mut self,
        value: impl Into<String>,
        compare: StringCompare,
    ) -> &mut Self {
        self.push(span_event_filter::Value::Name(StringProperty {
            value: value.into(),
            compare: compare as i32,
        }))
    }

    /// Filter on one event attribute by key.
    pub fn add_attribute_filter(
        &mut self,
        key: impl Into<String>,
        value: ScalarFilter,
    ) -> &mut Self {
        self.push(span_event_filter::Value::Attribute(keyed_property(
            key,
            value.into_property_value(),
        )))
    }

    pub fn add_dropped_attributes_count_filter(
        &mut self,
        value: u32,
        compare: NumberCompare,
    ) -> &mut Self {
        self.push(span_event_filter::Value::DroppedAttributesCount(
            Uint32Property {
                value,
                compare: compare as i32,
            },
        ))
    }

    fn push(&mut self, value: span_event_filter::Value) -> &mut Self {
        push_property(
            self.filters,
            wrap(span_filter::Value::Event(SpanEventFilter {
                value: Some(value),
            })),
        );
        self
    }
}

/// Routes predicates into the span-link branch; owns nothing.
pub struct SpanLinkFilterBuilder<'a> {
    filters: &'a mut Vec<WhereFilter>,
}

impl SpanLinkFilterBuilder<'_> {
    pub fn add_trace_id_filter(
        &mut self,
        value: impl Into<Vec<u8>>,
        compare: BytesCompare,
    ) -> &mut Self {
        self.push(span_link_filter::Value::TraceId(BytesProperty {
            value: value.into(),
            compare: compare as i32,
        }))
    }

    pub fn add_span_id_filter(
        &mut self,
        value: impl Into<Vec<u8>>,
        compare: BytesCompare,
    ) -> &mut Self {
        self.push(span_link_filter::Value::SpanId(BytesProperty {
            value: value.into(),
            compare: compare as i32,
        }))
    }

    pub fn add_trace_state_filter(
        &mut self,
        value: impl Into<String>,
        compare: StringCompare,
    ) -> &mut Self {
        self.push(span_link_filter::Value::TraceState(StringProperty {
            value: value.into(),
            compare: compare as i32,
        }))
    }

    /// Filter on one link attribute by key.
    pub fn add_attribute_filter(
        &mut self,
        key: impl Into<String>,
        value: ScalarFilter,
    ) -> &mut Self {
        self.push(span_link_filter::Value::Attribute(keyed_property(
            key,
            value.into_property_value(),
        )))
    }

    pub fn add_dropped_attributes_count_filter(
        &mut self,
        value: u32,
        compare: NumberCompare,
    ) -> &mut Self {
        self.push(span_link_filter::Value::DroppedAttributesCount(
            Uint32Property {
                value,
                compare: compare as i32,
            },
        ))
    }

    pub fn add_flags_filter(&mut self, value: u32, compare: NumberCompare) -> &mut Self {
        self.push(span_link_filter::Value::Flags(Uint32Property {
            value,
            compare: compare as i32,
        }))
    }

    fn push(&mut self, value: span_link_filter::Value) -> &mut Self {
        push_property(
            self.filters,
            wrap(span_filter::Value::Link(SpanLinkFilter {
                value: Some(value),
            })),
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use lookout_proto::query::{PropertyFilter, where_filter};

    use crate::schema::ValueKind;

    use super::*;

    fn unwrap_span(filter: &WhereFilter) -> &span_filter::Value {
        match &filter.value {
            Some(where_filter::Value::Property(PropertyFilter {
                value: Some(property_filter::Value::Span(span)),
            })) => span.value.as_ref().unwrap(),
            other => panic!("expected span property, got {:?}", other),
        }
    }

    #[test]
    fn generic_dispatch_routes_bytes_to_trace_id() {
        let mut filters = Vec::new();
        let mut builder = SpanFilterBuilder::new(&mut filters);
        builder
            .add_filter(
                SpanSlot::TraceId,
                ScalarFilter::bytes(vec![0x01; 16], BytesCompare::Equals),
            )
            .unwrap();

        match unwrap_span(&filters[0]) {
            span_filter::Value::TraceId(p) => {
                assert_eq!(p.value, vec![0x01; 16]);
                assert_eq!(p.compare, BytesCompare::Equals as i32);
            }
            other => panic!("wrong slot: {:?}", other),
        }
    }

    #[test]
    fn generic_dispatch_rejects_mismatched_value_type() {
        let mut filters = Vec::new();
        let mut builder = SpanFilterBuilder::new(&mut filters);
        let err = builder
            .add_filter(
                SpanSlot::TraceId,
                ScalarFilter::string("not-bytes", StringCompare::Equals),
            )
            .unwrap_err();

        assert_eq!(
            err,
            FilterError::type_mismatch(SpanSlot::TraceId, ValueKind::Bytes, ValueKind::String)
        );
        // No partial mutation on failure.
        assert!(filters.is_empty());
    }

    #[test]
    fn generic_dispatch_rejects_composite_slots() {
        let mut filters = Vec::new();
        let mut builder = SpanFilterBuilder::new(&mut filters);
        let err = builder
            .add_filter(
                SpanSlot::Events,
                ScalarFilter::string("x", StringCompare::Equals),
            )
            .unwrap_err();

        assert_eq!(err, FilterError::slot_not_found(SpanSlot::Events));
        assert!(filters.is_empty());
    }

    #[test]
    fn generic_dispatch_reports_mismatch_for_enum_slots() {
        // Kind and status code are declared schema fields of the enum kind,
        // so a scalar value is a type mismatch, not a missing slot.
        let mut filters = Vec::new();
        let mut builder = SpanFilterBuilder::new(&mut filters);

        let err = builder
            .add_filter(
                SpanSlot::Kind,
                ScalarFilter::string("server", StringCompare::Equals),
            )
            .unwrap_err();
        assert_eq!(
            err,
            FilterError::type_mismatch(SpanSlot::Kind, ValueKind::Enum, ValueKind::String)
        );

        let err = builder
            .add_filter(
                SpanSlot::StatusCode,
                ScalarFilter::int64(2, NumberCompare::Equals),
            )
            .unwrap_err();
        assert_eq!(
            err,
            FilterError::type_mismatch(SpanSlot::StatusCode, ValueKind::Enum, ValueKind::Int64)
        );
        assert!(filters.is_empty());
    }

    #[test]
    fn generic_dispatch_routes_status_message() {
        let mut filters = Vec::new();
        let mut builder = SpanFilterBuilder::new(&mut filters);
        builder
            .add_filter(
                SpanSlot::StatusMessage,
                ScalarFilter::string("deadline exceeded", StringCompare::Contains),
            )
            .unwrap();

        match unwrap_span(&filters[0]) {
            span_filter::Value::Status(status) => {
                assert!(matches!(
                    status.value,
                    Some(status_filter::Value::Message(_))
                ));
            }
            other => panic!("wrong slot: {:?}", other),
        }
    }

    #[test]
    fn event_facade_appends_event_predicates_to_parent() {
        let mut filters = Vec::new();
        let mut builder = SpanFilterBuilder::new(&mut filters);
        builder
            .event()
            .add_name_filter("exception", StringCompare::Equals)
            .add_attribute_filter(
                "exception.type",
                ScalarFilter::string("io", StringCompare::Contains),
            );

        assert_eq!(filters.len(), 2);
        assert!(matches!(
            unwrap_span(&filters[0]),
            span_filter::Value::Event(_)
        ));
        assert!(matches!(
            unwrap_span(&filters[1]),
            span_filter::Value::Event(_)
        ));
    }

    #[test]
    fn kind_filter_uses_otlp_enum() {
        let mut filters = Vec::new();
        SpanFilterBuilder::new(&mut filters)
            .add_kind_filter(SpanKind::Server, EnumCompare::Equals);

        match unwrap_span(&filters[0]) {
            span_filter::Value::Kind(p) => assert_eq!(p.value, SpanKind::Server as i32),
            other => panic!("wrong slot: {:?}", other),
        }
    }
}
