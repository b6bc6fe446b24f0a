//! Log record filters
//!
//! Mirrors the field tree of the OTLP `LogRecord` message. Exactly one slot is
//! populated per filter instance.

use crate::common::{
    BytesProperty, EnumCompare, KeyValueProperty, PropertyValue, ResourceFilter, ScopeFilter,
    StringProperty, Uint32Property, Uint64Property,
};

/// A severity number plus its comparator.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct SeverityNumberProperty {
    #[prost(
        enumeration = "opentelemetry_proto::tonic::logs::v1::SeverityNumber",
        tag = "1"
    )]
    pub value: i32,
    #[prost(enumeration = "EnumCompare", tag = "2")]
    pub compare: i32,
}

/// Filter targeting exactly one slot of a log record.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct LogFilter {
    #[prost(
        oneof = "log_filter::Value",
        tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13"
    )]
    pub value: Option<log_filter::Value>,
}

/// Nested types in `LogFilter`.
pub mod log_filter {
    #[derive(Clone, PartialEq, ::prost::Oneof, serde::Serialize, serde::Deserialize)]
    pub enum Value {
        #[prost(message, tag = "1")]
        TimeUnixNano(super::Uint64Property),
        #[prost(message, tag = "2")]
        ObservedTimeUnixNano(super::Uint64Property),
        #[prost(message, tag = "3")]
        SeverityNumber(super::SeverityNumberProperty),
        #[prost(message, tag = "4")]
        SeverityText(super::StringProperty),
        #[prost(message, tag = "5")]
        Body(super::PropertyValue),
        #[prost(message, tag = "6")]
        Attribute(super::KeyValueProperty),
        #[prost(message, tag = "7")]
        DroppedAttributesCount(super::Uint32Property),
        #[prost(message, tag = "8")]
        Flags(super::Uint32Property),
        #[prost(message, tag = "9")]
        TraceId(super::BytesProperty),
        #[prost(message, tag = "10")]
        SpanId(super::BytesProperty),
        #[prost(message, tag = "11")]
        EventName(super::StringProperty),
        #[prost(message, tag = "12")]
        Resource(super::ResourceFilter),
        #[prost(message, tag = "13")]
        Scope(super::ScopeFilter),
    }
}
