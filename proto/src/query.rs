//! Query request envelope
//!
//! The top-level request handed to a query service: how many matching records
//! to return, how long the service may wait for them, and the predicate list.

use crate::logs::LogFilter;
use crate::metrics::MetricFilter;
use crate::trace::SpanFilter;

/// Discriminated union identifying which record field tree a predicate
/// targets.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct PropertyFilter {
    #[prost(oneof = "property_filter::Value", tags = "1, 2, 3")]
    pub value: Option<property_filter::Value>,
}

/// Nested types in `PropertyFilter`.
pub mod property_filter {
    #[derive(Clone, PartialEq, ::prost::Oneof, serde::Serialize, serde::Deserialize)]
    pub enum Value {
        #[prost(message, tag = "1")]
        Log(super::LogFilter),
        #[prost(message, tag = "2")]
        Span(super::SpanFilter),
        #[prost(message, tag = "3")]
        Metric(super::MetricFilter),
    }
}

/// One node of the filter expression tree: a single-field test or an OR
/// group.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct WhereFilter {
    #[prost(oneof = "where_filter::Value", tags = "1, 2")]
    pub value: Option<where_filter::Value>,
}

/// Nested types in `WhereFilter`.
pub mod where_filter {
    #[derive(Clone, PartialEq, ::prost::Oneof, serde::Serialize, serde::Deserialize)]
    pub enum Value {
        #[prost(message, tag = "1")]
        Property(super::PropertyFilter),
        #[prost(message, tag = "2")]
        Or(super::OrFilter),
    }
}

/// An ordered OR group. Matches if any child matches; child order is
/// preserved because engines may short-circuit in order.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct OrFilter {
    #[prost(message, repeated, tag = "1")]
    pub filters: Vec<WhereFilter>,
}

/// The finished query request.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct QueryRequest {
    /// How many matching records the query should return. Absent means
    /// first-match.
    #[prost(oneof = "query_request::Take", tags = "1, 2, 3")]
    pub take: Option<query_request::Take>,
    /// How long the service may wait for matches, in milliseconds.
    #[prost(uint64, tag = "4")]
    pub wait_ms: u64,
    /// Predicates combined with AND semantics, in insertion order.
    #[prost(message, repeated, tag = "5")]
    pub filters: Vec<WhereFilter>,
}

/// Nested types in `QueryRequest`.
pub mod query_request {
    /// Cardinality policy for the query.
    #[derive(Clone, PartialEq, ::prost::Oneof, serde::Serialize, serde::Deserialize)]
    pub enum Take {
        /// Return the first matching record.
        #[prost(bool, tag = "1")]
        First(bool),
        /// Return exactly this many matching records.
        #[prost(uint64, tag = "2")]
        Exact(u64),
        /// Return every matching record.
        #[prost(bool, tag = "3")]
        All(bool),
    }
}
