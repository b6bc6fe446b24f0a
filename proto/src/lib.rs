//! # Lookout wire schema
//!
//! Hand-maintained prost definitions for the Lookout telemetry query
//! protocol. A [`query::QueryRequest`] carries a cardinality policy, a wait
//! duration and an ordered list of [`query::WhereFilter`] predicates over
//! OTLP logs, spans and metrics.
//!
//! Field numbers are part of the wire contract; do not renumber.
//!
//! Record-level enums (severity number, span kind, status code, aggregation
//! temporality) are the `opentelemetry-proto` generated types, re-exported
//! from [`otlp`].

pub mod common;
pub mod logs;
pub mod metrics;
pub mod query;
pub mod trace;

/// OTLP enum types referenced by the filter schema.
pub mod otlp {
    pub use opentelemetry_proto::tonic::logs::v1::SeverityNumber;
    pub use opentelemetry_proto::tonic::metrics::v1::AggregationTemporality;
    pub use opentelemetry_proto::tonic::trace::v1::span::SpanKind;
    pub use opentelemetry_proto::tonic::trace::v1::status::StatusCode;
}

#[cfg(test)]
mod tests {
    use prost::Message;

    use crate::common::{NumberCompare, PropertyValue, Uint64Property};
    use crate::logs::{LogFilter, log_filter};
    use crate::query::{PropertyFilter, QueryRequest, WhereFilter, property_filter, where_filter};

    fn time_predicate(nanos: u64) -> WhereFilter {
        WhereFilter {
            value: Some(where_filter::Value::Property(PropertyFilter {
                value: Some(property_filter::Value::Log(LogFilter {
                    value: Some(log_filter::Value::TimeUnixNano(Uint64Property {
                        value: nanos,
                        compare: NumberCompare::GreaterThan as i32,
                    })),
                })),
            })),
        }
    }

    #[test]
    fn request_roundtrips_through_protobuf() {
        let request = QueryRequest {
            take: Some(crate::query::query_request::Take::Exact(3)),
            wait_ms: 250,
            filters: vec![time_predicate(1_700_000_000_000_000_000)],
        };

        let bytes = request.encode_to_vec();
        let decoded = QueryRequest::decode(bytes.as_slice()).unwrap();

        assert_eq!(decoded, request);
    }

    #[test]
    fn empty_property_value_is_valid_wire_data() {
        // An AnyValue-style union with no variant set still decodes.
        let value = PropertyValue { value: None };
        let bytes = value.encode_to_vec();
        assert!(bytes.is_empty());
        assert_eq!(PropertyValue::decode(bytes.as_slice()).unwrap(), value);
    }

    #[test]
    fn request_serializes_to_json() {
        let request = QueryRequest {
            take: None,
            wait_ms: 30_000,
            filters: vec![time_predicate(0)],
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("30000"));
        assert!(json.contains("TimeUnixNano"));

        let decoded: QueryRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, request);
    }
}
