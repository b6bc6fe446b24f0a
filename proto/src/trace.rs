//! Span filters
//!
//! Mirrors the field tree of the OTLP `Span` message, including events, links
//! and status. Exactly one slot is populated per filter instance.

use crate::common::{
    BytesProperty, EnumCompare, KeyValueProperty, ResourceFilter, ScopeFilter, StringProperty,
    Uint32Property, Uint64Property,
};

/// A span kind plus its comparator.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct SpanKindProperty {
    #[prost(
        enumeration = "opentelemetry_proto::tonic::trace::v1::span::SpanKind",
        tag = "1"
    )]
    pub value: i32,
    #[prost(enumeration = "EnumCompare", tag = "2")]
    pub compare: i32,
}

/// A span status code plus its comparator.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct StatusCodeProperty {
    #[prost(
        enumeration = "opentelemetry_proto::tonic::trace::v1::status::StatusCode",
        tag = "1"
    )]
    pub value: i32,
    #[prost(enumeration = "EnumCompare", tag = "2")]
    pub compare: i32,
}

/// Filter targeting one slot of a span event.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct SpanEventFilter {
    #[prost(oneof = "span_event_filter::Value", tags = "1, 2, 3, 4")]
    pub value: Option<span_event_filter::Value>,
}

/// Nested types in `SpanEventFilter`.
pub mod span_event_filter {
    #[derive(Clone, PartialEq, ::prost::Oneof, serde::Serialize, serde::Deserialize)]
    pub enum Value {
        #[prost(message, tag = "1")]
        TimeUnixNano(super::Uint64Property),
        #[prost(message, tag = "2")]
        Name(super::StringProperty),
        #[prost(message, tag = "3")]
        Attribute(super::KeyValueProperty),
        #[prost(message, tag = "4")]
        DroppedAttributesCount(super::Uint32Property),
    }
}

/// Filter targeting one slot of a span link.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct SpanLinkFilter {
    #[prost(oneof = "span_link_filter::Value", tags = "1, 2, 3, 4, 5, 6")]
    pub value: Option<span_link_filter::Value>,
}

/// Nested types in `SpanLinkFilter`.
pub mod span_link_filter {
    #[derive(Clone, PartialEq, ::prost::Oneof, serde::Serialize, serde::Deserialize)]
    pub enum Value {
        #[prost(message, tag = "1")]
        TraceId(super::BytesProperty),
        #[prost(message, tag = "2")]
        SpanId(super::BytesProperty),
        #[prost(message, tag = "3")]
        TraceState(super::StringProperty),
        #[prost(message, tag = "4")]
        Attribute(super::KeyValueProperty),
        #[prost(message, tag = "5")]
        DroppedAttributesCount(super::Uint32Property),
        #[prost(message, tag = "6")]
        Flags(super::Uint32Property),
    }
}

/// Filter targeting one slot of a span status.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct StatusFilter {
    #[prost(oneof = "status_filter::Value", tags = "1, 2")]
    pub value: Option<status_filter::Value>,
}

/// Nested types in `StatusFilter`.
pub mod status_filter {
    #[derive(Clone, PartialEq, ::prost::Oneof, serde::Serialize, serde::Deserialize)]
    pub enum Value {
        #[prost(message, tag = "1")]
        Message(super::StringProperty),
        #[prost(message, tag = "2")]
        Code(super::StatusCodeProperty),
    }
}

/// Filter targeting exactly one slot of a span.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct SpanFilter {
    #[prost(
        oneof = "span_filter::Value",
        tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18"
    )]
    pub value: Option<span_filter::Value>,
}

/// Nested types in `SpanFilter`.
pub mod span_filter {
    #[derive(Clone, PartialEq, ::prost::Oneof, serde::Serialize, serde::Deserialize)]
    pub enum Value {
        #[prost(message, tag = "1")]
        TraceId(super::BytesProperty),
        #[prost(message, tag = "2")]
        SpanId(super::BytesProperty),
        #[prost(message, tag = "3")]
        TraceState(super::StringProperty),
        #[prost(message, tag = "4")]
        ParentSpanId(super::BytesProperty),
        #[prost(message, tag = "5")]
        Flags(super::Uint32Property),
        #[prost(message, tag = "6")]
        Name(super::StringProperty),
        #[prost(message, tag = "7")]
        Kind(super::SpanKindProperty),
        #[prost(message, tag = "8")]
        StartTimeUnixNano(super::Uint64Property),
        #[prost(message, tag = "9")]
        EndTimeUnixNano(super::Uint64Property),
        #[prost(message, tag = "10")]
        Attribute(super::KeyValueProperty),
        #[prost(message, tag = "11")]
        DroppedAttributesCount(super::Uint32Property),
        #[prost(message, tag = "12")]
        Event(super::SpanEventFilter),
        #[prost(message, tag = "13")]
        DroppedEventsCount(super::Uint32Property),
        #[prost(message, tag = "14")]
        Link(super::SpanLinkFilter),
        #[prost(message, tag = "15")]
        DroppedLinksCount(super::Uint32Property),
        #[prost(message, tag = "16")]
        Status(super::StatusFilter),
        #[prost(message, tag = "17")]
        Resource(super::ResourceFilter),
        #[prost(message, tag = "18")]
        Scope(super::ScopeFilter),
    }
}
