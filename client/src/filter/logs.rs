//! Log record predicate builder

use lookout_proto::common::{
    BytesCompare, BytesProperty, EnumCompare, NumberCompare, StringCompare, StringProperty,
    Uint32Property, Uint64Property, resource_filter, scope_filter,
};
use lookout_proto::logs::{LogFilter, SeverityNumberProperty, log_filter};
use lookout_proto::otlp::SeverityNumber;
use lookout_proto::query::{WhereFilter, property_filter};

use crate::value::{ArrayFilterBuilder, KeyValueListFilterBuilder, ScalarFilter};

use super::common::{ResourceFilterBuilder, ScopeFilterBuilder, wrap_resource, wrap_scope};
use super::{array_value, keyed_property, kvlist_value, push_property};

fn wrap(value: log_filter::Value) -> property_filter::Value {
    property_filter::Value::Log(LogFilter { value: Some(value) })
}

fn wrap_log_resource(value: resource_filter::Value) -> property_filter::Value {
    wrap(log_filter::Value::Resource(wrap_resource(value)))
}

fn wrap_log_scope(value: scope_filter::Value) -> property_filter::Value {
    wrap(log_filter::Value::Scope(wrap_scope(value)))
}

/// Builds predicates over log record fields. Every method appends exactly
/// one predicate to the owning request's filter list.
pub struct LogFilterBuilder<'a> {
    filters: &'a mut Vec<WhereFilter>,
}

impl<'a> LogFilterBuilder<'a> {
    pub(crate) fn new(filters: &'a mut Vec<WhereFilter>) -> Self {
        Self { filters }
    }

    pub fn add_time_filter(&mut self, nanos: u64, compare: NumberCompare) -> &mut Self {
        self.push(log_filter::Value::TimeUnixNano(Uint64Property {
            value: nanos,
            compare: compare as i32,
        }))
    }

    pub fn add_observed_time_filter(&mut self, nanos: u64, compare: NumberCompare) -> &mut Self {
        self.push(log_filter::Value::ObservedTimeUnixNano(Uint64Property {
            value: nanos,
            compare: compare as i32,
        }))
    }

    pub fn add_severity_number_filter(
        &mut self,
        value: SeverityNumber,
        compare: EnumCompare,
    ) -> &mut Self {
        self.push(log_filter::Value::SeverityNumber(SeverityNumberProperty {
            value: value as i32,
            compare: compare as i32,
        }))
    }

    pub fn add_severity_text_filter(
        &mut self,
        value: impl Into<String>,
        compare: StringCompare,
    ) -> &mut Self {
        self.push(log_filter::Value::SeverityText(StringProperty {
            value: value.into(),
            compare: compare as i32,
        }))
    }

    /// Filter on the log body with any scalar value shape.
    pub fn add_body_filter(&mut self, value: ScalarFilter) -> &mut Self {
        self.push(log_filter::Value::Body(value.into_property_value()))
    }

    /// Filter on an array-shaped log body.
    pub fn add_body_array_filter(
        &mut self,
        configure: impl FnOnce(&mut ArrayFilterBuilder),
    ) -> &mut Self {
        self.push(log_filter::Value::Body(array_value(configure)))
    }

    /// Filter on a key/value-list-shaped log body.
    pub fn add_body_key_value_list_filter(
        &mut self,
        configure: impl FnOnce(&mut KeyValueListFilterBuilder),
    ) -> &mut Self {
        self.push(log_filter::Value::Body(kvlist_value(configure)))
    }

    /// Filter on one log attribute by key.
    pub fn add_attribute_filter(
        &mut self,
        key: impl Into<String>,
        value: ScalarFilter,
    ) -> &mut Self {
        self.push(log_filter::Value::Attribute(keyed_property(
            key,
            value.into_property_value(),
        )))
    }

    /// Filter on a log attribute whose value is an array.
    pub fn add_attribute_array_filter(
        &mut self,
        key: impl Into<String>,
        configure: impl FnOnce(&mut ArrayFilterBuilder),
    ) -> &mut Self {
        self.push(log_filter::Value::Attribute(keyed_property(
            key,
            array_value(configure),
        )))
    }

    /// Filter on a log attribute whose value is a key/value list.
    pub fn add_attribute_key_value_list_filter(
        &mut self,
        key: impl Into<String>,
        configure: impl FnOnce(&mut KeyValueListFilterBuilder),
    ) -> &mut Self {
        self.push(log_filter::Value::Attribute(keyed_property(
            key,
            kvlist_value(configure),
        )))
    }

    pub fn add_dropped_attributes_count_filter(
        &mut self,
        value: u32,
        compare: NumberCompare,
    ) -> &mut Self {
        self.push(log_filter::Value::DroppedAttributesCount(Uint32Property {
            value,
            compare: compare as i32,
        }))
    }

    pub fn add_flags_filter(&mut self, value: u32, compare: NumberCompare) -> &mut Self {
        self.push(log_filter::Value::Flags(Uint32Property {
            value,
            compare: compare as i32,
        }))
    }

    pub fn add_trace_id_filter(
        &mut self,
        value: impl Into<Vec<u8>>,
        compare: BytesCompare,
    ) -> &mut Self {
        self.push(log_filter::Value::TraceId(BytesProperty {
            value: value.into(),
            compare: compare as i32,
        }))
    }

    pub fn add_span_id_filter(
        &mut self,
        value: impl Into<Vec<u8>>,
        compare: BytesCompare,
    ) -> &mut Self {
        self.push(log_filter::Value::SpanId(BytesProperty {
            value: value.into(),
            compare: compare as i32,
        }))
    }

    pub fn add_event_name_filter(
        &mut self,
        value: impl Into<String>,
        compare: StringCompare,
    ) -> &mut Self {
        self.push(log_filter::Value::EventName(StringProperty {
            value: value.into(),
            compare: compare as i32,
        }))
    }

    /// Façade for the resource wrapping this log record.
    pub fn resource(&mut self) -> ResourceFilterBuilder<'_> {
        ResourceFilterBuilder::new(self.filters, wrap_log_resource)
    }

    /// Façade for the instrumentation scope wrapping this log record.
    pub fn scope(&mut self) -> ScopeFilterBuilder<'_> {
        ScopeFilterBuilder::new(self.filters, wrap_log_scope)
    }

    fn push(&mut self, value: log_filter::Value) -> &mut Self {
        push_property(self.filters, wrap(value));
        self
    }
}

#[cfg(test)]
mod tests {
    use lookout_proto::query::{where_filter, PropertyFilter};

    use super::*;

    fn unwrap_log(filter: &WhereFilter) -> &log_filter::Value {
        match &filter.value {
            Some(where_filter::Value::Property(PropertyFilter {
                value: Some(property_filter::Value::Log(log)),
            })) => log.value.as_ref().unwrap(),
            other => panic!("expected log property, got {:?}", other),
        }
    }

    #[test]
    fn severity_number_filter_targets_the_right_slot() {
        let mut filters = Vec::new();
        LogFilterBuilder::new(&mut filters)
            .add_severity_number_filter(SeverityNumber::Error, EnumCompare::Equals);

        match unwrap_log(&filters[0]) {
            log_filter::Value::SeverityNumber(p) => {
                assert_eq!(p.value, SeverityNumber::Error as i32);
                assert_eq!(p.compare, EnumCompare::Equals as i32);
            }
            other => panic!("wrong slot: {:?}", other),
        }
    }

    #[test]
    fn attribute_filter_carries_key_and_value() {
        let mut filters = Vec::new();
        LogFilterBuilder::new(&mut filters).add_attribute_filter(
            "http.method",
            ScalarFilter::string("POST", StringCompare::Equals),
        );

        match unwrap_log(&filters[0]) {
            log_filter::Value::Attribute(kv) => {
                assert_eq!(kv.key, "http.method");
                assert!(kv.value.is_some());
            }
            other => panic!("wrong slot: {:?}", other),
        }
    }

    #[test]
    fn resource_facade_appends_to_parent_list() {
        let mut filters = Vec::new();
        let mut builder = LogFilterBuilder::new(&mut filters);
        builder
            .resource()
            .add_attribute_filter(
                "service.name",
                ScalarFilter::string("checkout", StringCompare::Equals),
            )
            .add_schema_url_filter("https://opentelemetry.io/schemas/1.21.0", StringCompare::Equals);

        // Both façade calls landed in the one flat list, wrapped as log
        // resource predicates.
        assert_eq!(filters.len(), 2);
        assert!(matches!(
            unwrap_log(&filters[0]),
            log_filter::Value::Resource(_)
        ));
        assert!(matches!(
            unwrap_log(&filters[1]),
            log_filter::Value::Resource(_)
        ));
    }

    #[test]
    fn body_filters_accept_composite_shapes() {
        let mut filters = Vec::new();
        let mut builder = LogFilterBuilder::new(&mut filters);
        builder.add_body_key_value_list_filter(|kv| {
            kv.add_string_filter("message", "timeout", StringCompare::Contains);
        });

        match unwrap_log(&filters[0]) {
            log_filter::Value::Body(body) => {
                assert!(body.value.is_some());
            }
            other => panic!("wrong slot: {:?}", other),
        }
    }
}
