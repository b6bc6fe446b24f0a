//! Metric filters
//!
//! Mirrors the OTLP `Metric` field tree for the gauge and sum data kinds,
//! down to individual number data points and their exemplars.

use crate::common::{
    BoolProperty, BytesProperty, DoubleProperty, EnumCompare, Int64Property, KeyValueProperty,
    ResourceFilter, ScopeFilter, StringProperty, Uint32Property, Uint64Property,
};

/// An aggregation temporality plus its comparator.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct AggregationTemporalityProperty {
    #[prost(
        enumeration = "opentelemetry_proto::tonic::metrics::v1::AggregationTemporality",
        tag = "1"
    )]
    pub value: i32,
    #[prost(enumeration = "EnumCompare", tag = "2")]
    pub compare: i32,
}

/// Filter targeting one slot of an exemplar attached to a data point.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct ExemplarFilter {
    #[prost(oneof = "exemplar_filter::Value", tags = "1, 2, 3, 4, 5, 6")]
    pub value: Option<exemplar_filter::Value>,
}

/// Nested types in `ExemplarFilter`.
pub mod exemplar_filter {
    #[derive(Clone, PartialEq, ::prost::Oneof, serde::Serialize, serde::Deserialize)]
    pub enum Value {
        #[prost(message, tag = "1")]
        FilteredAttribute(super::KeyValueProperty),
        #[prost(message, tag = "2")]
        TimeUnixNano(super::Uint64Property),
        #[prost(message, tag = "3")]
        ValueDouble(super::DoubleProperty),
        #[prost(message, tag = "4")]
        ValueInt(super::Int64Property),
        #[prost(message, tag = "5")]
        SpanId(super::BytesProperty),
        #[prost(message, tag = "6")]
        TraceId(super::BytesProperty),
    }
}

/// Filter targeting one slot of a number data point.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct NumberDataPointFilter {
    #[prost(oneof = "number_data_point_filter::Value", tags = "1, 2, 3, 4, 5, 6, 7")]
    pub value: Option<number_data_point_filter::Value>,
}

/// Nested types in `NumberDataPointFilter`.
pub mod number_data_point_filter {
    #[derive(Clone, PartialEq, ::prost::Oneof, serde::Serialize, serde::Deserialize)]
    pub enum Value {
        #[prost(message, tag = "1")]
        Attribute(super::KeyValueProperty),
        #[prost(message, tag = "2")]
        StartTimeUnixNano(super::Uint64Property),
        #[prost(message, tag = "3")]
        TimeUnixNano(super::Uint64Property),
        #[prost(message, tag = "4")]
        ValueDouble(super::DoubleProperty),
        #[prost(message, tag = "5")]
        ValueInt(super::Int64Property),
        #[prost(message, tag = "6")]
        Exemplar(super::ExemplarFilter),
        #[prost(message, tag = "7")]
        Flags(super::Uint32Property),
    }
}

/// Filter scoped to the gauge branch of a metric.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct GaugeFilter {
    #[prost(oneof = "gauge_filter::Value", tags = "1")]
    pub value: Option<gauge_filter::Value>,
}

/// Nested types in `GaugeFilter`.
pub mod gauge_filter {
    #[derive(Clone, PartialEq, ::prost::Oneof, serde::Serialize, serde::Deserialize)]
    pub enum Value {
        #[prost(message, tag = "1")]
        DataPoint(super::NumberDataPointFilter),
    }
}

/// Filter scoped to the sum branch of a metric.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct SumFilter {
    #[prost(oneof = "sum_filter::Value", tags = "1, 2, 3")]
    pub value: Option<sum_filter::Value>,
}

/// Nested types in `SumFilter`.
pub mod sum_filter {
    #[derive(Clone, PartialEq, ::prost::Oneof, serde::Serialize, serde::Deserialize)]
    pub enum Value {
        #[prost(message, tag = "1")]
        DataPoint(super::NumberDataPointFilter),
        #[prost(message, tag = "2")]
        AggregationTemporality(super::AggregationTemporalityProperty),
        #[prost(message, tag = "3")]
        IsMonotonic(super::BoolProperty),
    }
}

/// Filter targeting exactly one slot of a metric.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct MetricFilter {
    #[prost(oneof = "metric_filter::Value", tags = "1, 2, 3, 4, 5, 6, 7, 8")]
    pub value: Option<metric_filter::Value>,
}

/// Nested types in `MetricFilter`.
pub mod metric_filter {
    #[derive(Clone, PartialEq, ::prost::Oneof, serde::Serialize, serde::Deserialize)]
    pub enum Value {
        #[prost(message, tag = "1")]
        Name(super::StringProperty),
        #[prost(message, tag = "2")]
        Description(super::StringProperty),
        #[prost(message, tag = "3")]
        Unit(super::StringProperty),
        #[prost(message, tag = "4")]
        Metadata(super::KeyValueProperty),
        #[prost(message, tag = "5")]
        Gauge(super::GaugeFilter),
        #[prost(message, tag = "6")]
        Sum(super::SumFilter),
        #[prost(message, tag = "7")]
        Resource(super::ResourceFilter),
        #[prost(message, tag = "8")]
        Scope(super::ScopeFilter),
    }
}
