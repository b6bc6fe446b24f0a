//! Predicate builders
//!
//! One builder per record kind, plus the OR-group combinator. Every builder
//! (including the nested scope façades) routes its predicates into a single
//! flat, insertion-ordered `Vec<WhereFilter>` owned by the request builder.

mod common;
mod logs;
mod metrics;
mod spans;

pub use common::{ResourceFilterBuilder, ScopeFilterBuilder};
pub use logs::LogFilterBuilder;
pub use metrics::{
    ExemplarFilterBuilder, GaugeFilterBuilder, MetricFilterBuilder, NumberDataPointFilterBuilder,
    SumFilterBuilder,
};
pub use spans::{SpanEventFilterBuilder, SpanFilterBuilder, SpanLinkFilterBuilder};

use lookout_proto::common::{KeyValueProperty, PropertyValue, property_value};
use lookout_proto::query::{OrFilter, PropertyFilter, WhereFilter, property_filter, where_filter};

use crate::value::{ArrayFilterBuilder, KeyValueListFilterBuilder};

/// Append one property predicate to a shared filter list.
pub(crate) fn push_property(filters: &mut Vec<WhereFilter>, value: property_filter::Value) {
    filters.push(WhereFilter {
        value: Some(where_filter::Value::Property(PropertyFilter {
            value: Some(value),
        })),
    });
}

/// Pair a key with an already-built value.
pub(crate) fn keyed_property(key: impl Into<String>, value: PropertyValue) -> KeyValueProperty {
    KeyValueProperty {
        key: key.into(),
        value: Some(value),
    }
}

/// Fold a configured array builder into a composite value.
pub(crate) fn array_value(configure: impl FnOnce(&mut ArrayFilterBuilder)) -> PropertyValue {
    let mut builder = ArrayFilterBuilder::new();
    configure(&mut builder);
    PropertyValue {
        value: Some(property_value::Value::ArrayValue(builder.build())),
    }
}

/// Fold a configured key/value-list builder into a composite value.
pub(crate) fn kvlist_value(
    configure: impl FnOnce(&mut KeyValueListFilterBuilder),
) -> PropertyValue {
    let mut builder = KeyValueListFilterBuilder::new();
    configure(&mut builder);
    PropertyValue {
        value: Some(property_value::Value::KvlistValue(builder.build())),
    }
}

/// Entry point for predicate construction.
///
/// Holds a non-owning handle to the request builder's filter list; the
/// record-kind builders returned by [`log`](Self::log), [`span`](Self::span)
/// and [`metric`](Self::metric) append into that same list.
pub struct WhereFilterBuilder<'a> {
    filters: &'a mut Vec<WhereFilter>,
}

impl<'a> WhereFilterBuilder<'a> {
    pub(crate) fn new(filters: &'a mut Vec<WhereFilter>) -> Self {
        Self { filters }
    }

    /// Builder for log record predicates.
    pub fn log(&mut self) -> LogFilterBuilder<'_> {
        LogFilterBuilder::new(self.filters)
    }

    /// Builder for span predicates.
    pub fn span(&mut self) -> SpanFilterBuilder<'_> {
        SpanFilterBuilder::new(self.filters)
    }

    /// Builder for metric predicates.
    pub fn metric(&mut self) -> MetricFilterBuilder<'_> {
        MetricFilterBuilder::new(self.filters)
    }

    /// Add an OR group: the closure configures a fresh nested builder, and
    /// the predicates it accumulates become the group's children, in
    /// configured order. Groups nest to arbitrary depth.
    pub fn add_or_filter(&mut self, configure: impl FnOnce(&mut WhereFilterBuilder)) -> &mut Self {
        let mut children = Vec::new();
        configure(&mut WhereFilterBuilder::new(&mut children));
        self.filters.push(WhereFilter {
            value: Some(where_filter::Value::Or(OrFilter { filters: children })),
        });
        self
    }

    /// Number of predicates accumulated so far.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use lookout_proto::common::{BytesCompare, StringCompare};
    use lookout_proto::query::where_filter;

    use super::*;

    #[test]
    fn or_group_children_preserve_configured_order() {
        let mut filters = Vec::new();
        let mut builder = WhereFilterBuilder::new(&mut filters);
        builder.add_or_filter(|or| {
            or.log()
                .add_severity_text_filter("ERROR", StringCompare::Equals);
            or.log()
                .add_severity_text_filter("FATAL", StringCompare::Equals);
        });

        assert_eq!(filters.len(), 1);
        let or = match &filters[0].value {
            Some(where_filter::Value::Or(or)) => or,
            other => panic!("expected or group, got {:?}", other),
        };
        assert_eq!(or.filters.len(), 2);
        // Children must stay in configured order; engines short-circuit.
        let texts: Vec<String> = or
            .filters
            .iter()
            .map(|f| format!("{:?}", f))
            .collect();
        assert!(texts[0].contains("ERROR"));
        assert!(texts[1].contains("FATAL"));
    }

    #[test]
    fn or_groups_nest() {
        let mut filters = Vec::new();
        let mut builder = WhereFilterBuilder::new(&mut filters);
        builder.add_or_filter(|or| {
            or.add_or_filter(|inner| {
                inner
                    .span()
                    .add_trace_id_filter(vec![0xab; 16], BytesCompare::Equals);
            });
        });

        let outer = match &filters[0].value {
            Some(where_filter::Value::Or(or)) => or,
            other => panic!("expected or group, got {:?}", other),
        };
        let inner = match &outer.filters[0].value {
            Some(where_filter::Value::Or(or)) => or,
            other => panic!("expected nested or group, got {:?}", other),
        };
        assert_eq!(inner.filters.len(), 1);
    }

    #[test]
    fn record_kind_builders_share_one_flat_list() {
        let mut filters = Vec::new();
        let mut builder = WhereFilterBuilder::new(&mut filters);
        builder
            .log()
            .add_severity_text_filter("WARN", StringCompare::Equals);
        builder
            .span()
            .add_name_filter("GET /health", StringCompare::Equals);

        assert_eq!(filters.len(), 2);
    }
}
