//! # Lookout
//!
//! Typed query-filter builders for OTLP telemetry. Build a structured
//! predicate tree over logs, spans and metrics, then serialize it into a
//! [`QueryRequest`] for a query service.
//!
//! ```
//! use chrono::Duration;
//! use lookout::{NumberCompare, QueryRequestBuilder, StringCompare};
//!
//! let mut builder = QueryRequestBuilder::new();
//! builder
//!     .take_exact(5)
//!     .wait(Duration::seconds(10))
//!     .where_filter(|w| {
//!         w.span()
//!             .add_name_filter("GET /checkout", StringCompare::Equals)
//!             .add_start_time_filter(1_700_000_000_000_000_000, NumberCompare::GreaterThan);
//!         w.add_or_filter(|or| {
//!             or.log().add_severity_text_filter("ERROR", StringCompare::Equals);
//!             or.log().add_severity_text_filter("FATAL", StringCompare::Equals);
//!         });
//!     });
//! let request = builder.build();
//! assert_eq!(request.filters.len(), 3);
//! ```
//!
//! Construction is synchronous and single-writer: configuration closures run
//! to completion before the invoking method returns, and every builder in a
//! chain appends into one flat, insertion-ordered predicate list. Matching
//! semantics belong to the query service; this crate only guarantees the
//! shape and order of what it sends.

pub mod encoding;
pub mod error;
pub mod filter;
pub mod request;
pub mod schema;
pub mod value;

pub use encoding::{ContentType, decode_request, encode_request};
pub use error::{DecodeError, EncodeError, FilterError};
pub use filter::{
    ExemplarFilterBuilder, GaugeFilterBuilder, LogFilterBuilder, MetricFilterBuilder,
    NumberDataPointFilterBuilder, ResourceFilterBuilder, ScopeFilterBuilder,
    SpanEventFilterBuilder, SpanFilterBuilder, SpanLinkFilterBuilder, SumFilterBuilder,
    WhereFilterBuilder,
};
pub use request::{DEFAULT_WAIT_MS, QueryRequestBuilder, Take};
pub use schema::{SpanSlot, ValueKind};
pub use value::{ArrayFilterBuilder, KeyValueListFilterBuilder, ScalarFilter};

// Comparator enums and the request message are part of the public API.
pub use lookout_proto::common::{
    BoolCompare, BytesCompare, EnumCompare, NumberCompare, StringCompare,
};
pub use lookout_proto::otlp::{AggregationTemporality, SeverityNumber, SpanKind, StatusCode};
pub use lookout_proto::query::QueryRequest;
