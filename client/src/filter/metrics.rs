//! Metric predicate builder
//!
//! Covers the gauge and sum data kinds. The nested façades (`gauge()` /
//! `sum()` → `data_point()` → `exemplar()`) each carry the routing fn of
//! their parent, so a deep chain still appends into the request's flat
//! filter list.

use lookout_proto::common::{
    BoolCompare, BoolProperty, BytesCompare, BytesProperty, DoubleProperty, EnumCompare,
    Int64Property, NumberCompare, StringCompare, StringProperty, Uint32Property, Uint64Property,
    resource_filter, scope_filter,
};
use lookout_proto::metrics::{
    AggregationTemporalityProperty, ExemplarFilter, GaugeFilter, MetricFilter,
    NumberDataPointFilter, SumFilter, exemplar_filter, gauge_filter, metric_filter,
    number_data_point_filter, sum_filter,
};
use lookout_proto::otlp::AggregationTemporality;
use lookout_proto::query::{WhereFilter, property_filter};

use crate::value::{ArrayFilterBuilder, KeyValueListFilterBuilder, ScalarFilter};

use super::common::{ResourceFilterBuilder, ScopeFilterBuilder, wrap_resource, wrap_scope};
use super::{array_value, keyed_property, kvlist_value, push_property};

fn wrap(value: metric_filter::Value) -> property_filter::Value {
    property_filter::Value::Metric(MetricFilter { value: Some(value) })
}

fn wrap_metric_resource(value: resource_filter::Value) -> property_filter::Value {
    wrap(metric_filter::Value::Resource(wrap_resource(value)))
}

fn wrap_metric_scope(value: scope_filter::Value) -> property_filter::Value {
    wrap(metric_filter::Value::Scope(wrap_scope(value)))
}

fn gauge_data_point(value: number_data_point_filter::Value) -> metric_filter::Value {
    metric_filter::Value::Gauge(GaugeFilter {
        value: Some(gauge_filter::Value::DataPoint(NumberDataPointFilter {
            value: Some(value),
        })),
    })
}

fn sum_data_point(value: number_data_point_filter::Value) -> metric_filter::Value {
    metric_filter::Value::Sum(SumFilter {
        value: Some(sum_filter::Value::DataPoint(NumberDataPointFilter {
            value: Some(value),
        })),
    })
}

/// Builds predicates over metric fields.
pub struct MetricFilterBuilder<'a> {
    filters: &'a mut Vec<WhereFilter>,
}

impl<'a> MetricFilterBuilder<'a> {
    pub(crate) fn new(filters: &'a mut Vec<WhereFilter>) -> Self {
        Self { filters }
    }

    pub fn add_name_filter(
        &mut self,
        value: impl Into<String>,
        compare: StringCompare,
    ) -> &mut Self {
        self.push(metric_filter::Value::Name(StringProperty {
            value: value.into(),
            compare: compare as i32,
        }))
    }

    pub fn add_description_filter(
        &mut self,
        value: impl Into<String>,
        compare: StringCompare,
    ) -> &mut Self {
        self.push(metric_filter::Value::Description(StringProperty {
            value: value.into(),
            compare: compare as i32,
        }))
    }

    pub fn add_unit_filter(
        &mut self,
        value: impl Into<String>,
        compare: StringCompare,
    ) -> &mut Self {
        self.push(metric_filter::Value::Unit(StringProperty {
            value: value.into(),
            compare: compare as i32,
        }))
    }

    /// Filter on one metadata entry by key.
    pub fn add_metadata_filter(
        &mut self,
        key: impl Into<String>,
        value: ScalarFilter,
    ) -> &mut Self {
        self.push(metric_filter::Value::Metadata(keyed_property(
            key,
            value.into_property_value(),
        )))
    }

    /// Façade for the gauge branch.
    pub fn gauge(&mut self) -> GaugeFilterBuilder<'_> {
        GaugeFilterBuilder {
            filters: self.filters,
        }
    }

    /// Façade for the sum branch.
    pub fn sum(&mut self) -> SumFilterBuilder<'_> {
        SumFilterBuilder {
            filters: self.filters,
        }
    }

    /// Façade for the resource wrapping this metric.
    pub fn resource(&mut self) -> ResourceFilterBuilder<'_> {
        ResourceFilterBuilder::new(self.filters, wrap_metric_resource)
    }

    /// Façade for the instrumentation scope wrapping this metric.
    pub fn scope(&mut self) -> ScopeFilterBuilder<'_> {
        ScopeFilterBuilder::new(self.filters, wrap_metric_scope)
    }

    fn push(&mut self, value: metric_filter::Value) -> &mut Self {
        push_property(self.filters, wrap(value));
        self
    }
}

/// Routes predicates into the gauge branch; owns nothing.
pub struct GaugeFilterBuilder<'a> {
    filters: &'a mut Vec<WhereFilter>,
}

impl GaugeFilterBuilder<'_> {
    /// Façade for gauge data points.
    pub fn data_point(&mut self) -> NumberDataPointFilterBuilder<'_> {
        NumberDataPointFilterBuilder {
            filters: self.filters,
            wrap: gauge_data_point,
        }
    }
}

/// Routes predicates into the sum branch; owns nothing.
pub struct SumFilterBuilder<'a> {
    filters: &'a mut Vec<WhereFilter>,
}

impl SumFilterBuilder<'_> {
    /// Façade for sum data points.
    pub fn data_point(&mut self) -> NumberDataPointFilterBuilder<'_> {
        NumberDataPointFilterBuilder {
            filters: self.filters,
            wrap: sum_data_point,
        }
    }

    pub fn add_aggregation_temporality_filter(
        &mut self,
        value: AggregationTemporality,
        compare: EnumCompare,
    ) -> &mut Self {
        push_property(
            self.filters,
            wrap(metric_filter::Value::Sum(SumFilter {
                value: Some(sum_filter::Value::AggregationTemporality(
                    AggregationTemporalityProperty {
                        value: value as i32,
                        compare: compare as i32,
                    },
                )),
            })),
        );
        self
    }

    pub fn add_is_monotonic_filter(&mut self, value: bool, compare: BoolCompare) -> &mut Self {
        push_property(
            self.filters,
            wrap(metric_filter::Value::Sum(SumFilter {
                value: Some(sum_filter::Value::IsMonotonic(BoolProperty {
                    value,
                    compare: compare as i32,
                })),
            })),
        );
        self
    }
}

/// Routes predicates into a gauge or sum data point, depending on the branch
/// it was created from.
pub struct NumberDataPointFilterBuilder<'a> {
    filters: &'a mut Vec<WhereFilter>,
    wrap: fn(number_data_point_filter::Value) -> metric_filter::Value,
}

impl NumberDataPointFilterBuilder<'_> {
    /// Filter on one data-point attribute by key.
    pub fn add_attribute_filter(
        &mut self,
        key: impl Into<String>,
        value: ScalarFilter,
    ) -> &mut Self {
        self.push(number_data_point_filter::Value::Attribute(keyed_property(
            key,
            value.into_property_value(),
        )))
    }

    /// Filter on a data-point attribute whose value is an array.
    pub fn add_attribute_array_filter(
        &mut self,
        key: impl Into<String>,
        configure: impl FnOnce(&mut ArrayFilterBuilder),
    ) -> &mut Self {
        self.push(number_data_point_filter::Value::Attribute(keyed_property(
            key,
            array_value(configure),
        )))
    }

    /// Filter on a data-point attribute whose value is a key/value list.
    pub fn add_attribute_key_value_list_filter(
        &mut self,
        key: impl Into<String>,
        configure: impl FnOnce(&mut KeyValueListFilterBuilder),
    ) -> &mut Self {
        self.push(number_data_point_filter::Value::Attribute(keyed_property(
            key,
            kvlist_value(configure),
        )))
    }

    pub fn add_start_time_filter(&mut self, nanos: u64, compare: NumberCompare) -> &mut Self {
        self.push(number_data_point_filter::Value::StartTimeUnixNano(
            Uint64Property {
                value: nanos,
                compare: compare as i32,
            },
        ))
    }

    pub fn add_time_filter(&mut self, nanos: u64, compare: NumberCompare) -> &mut Self {
        self.push(number_data_point_filter::Value::TimeUnixNano(
            Uint64Property {
                value: nanos,
                compare: compare as i32,
            },
        ))
    }

    pub fn add_value_double_filter(&mut self, value: f64, compare: NumberCompare) -> &mut Self {
        self.push(number_data_point_filter::Value::ValueDouble(DoubleProperty {
            value,
            compare: compare as i32,
        }))
    }

    pub fn add_value_int_filter(&mut self, value: i64, compare: NumberCompare) -> &mut Self {
        self.push(number_data_point_filter::Value::ValueInt(Int64Property {
            value,
            compare: compare as i32,
        }))
    }

    pub fn add_flags_filter(&mut self, value: u32, compare: NumberCompare) -> &mut Self {
        self.push(number_data_point_filter::Value::Flags(Uint32Property {
            value,
            compare: compare as i32,
        }))
    }

    /// Façade for exemplars attached to this data point.
    pub fn exemplar(&mut self) -> ExemplarFilterBuilder<'_> {
        ExemplarFilterBuilder {
            filters: self.filters,
            wrap: self.wrap,
        }
    }

    fn push(&mut self, value: number_data_point_filter::Value) -> &mut Self {
        push_property(self.filters, wrap((self.wrap)(value)));
        self
    }
}

/// Routes predicates into an exemplar of the owning data-point branch.
pub struct ExemplarFilterBuilder<'a> {
    filters: &'a mut Vec<WhereFilter>,
    wrap: fn(number_data_point_filter::Value) -> metric_filter::Value,
}

impl ExemplarFilterBuilder<'_> {
    /// Filter on one filtered attribute by key.
    pub fn add_filtered_attribute_filter(
        &mut self,
        key: impl Into<String>,
        value: ScalarFilter,
    ) -> &mut Self {
        self.push(exemplar_filter::Value::FilteredAttribute(keyed_property(
            key,
            value.into_property_value(),
        )))
    }

    pub fn add_time_filter(&mut self, nanos: u64, compare: NumberCompare) -> &mut Self {
        self.push(exemplar_filter::Value::TimeUnixNano(Uint64Property {
            value: nanos,
            compare: compare as i32,
        }))
    }

    pub fn add_value_double_filter(&mut self, value: f64, compare: NumberCompare) -> &mut Self {
        self.push(exemplar_filter::Value::ValueDouble(DoubleProperty {
            value,
            compare: compare as i32,
        }))
    }

    pub fn add_value_int_filter(&mut self, value: i64, compare: NumberCompare) -> &mut Self {
        self.push(exemplar_filter::Value::ValueInt(Int64Property {
            value,
            compare: compare as i32,
        }))
    }

    pub fn add_span_id_filter(
        &mut self,
        value: impl Into<Vec<u8>>,
        compare: BytesCompare,
    ) -> &mut Self {
        self.push(exemplar_filter::Value::SpanId(BytesProperty {
            value: value.into(),
            compare: compare as i32,
        }))
    }

    pub fn add_trace_id_filter(
        &mut self,
        value: impl Into<Vec<u8>>,
        compare: BytesCompare,
    ) -> &mut Self {
        self.push(exemplar_filter::Value::TraceId(BytesProperty {
            value: value.into(),
            compare: compare as i32,
        }))
    }

    fn push(&mut self, value: exemplar_filter::Value) -> &mut Self {
        push_property(
            self.filters,
            wrap((self.wrap)(number_data_point_filter::Value::Exemplar(
                ExemplarFilter { value: Some(value) },
            ))),
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use lookout_proto::query::{PropertyFilter, where_filter};

    use super::*;

    fn unwrap_metric(filter: &WhereFilter) -> &metric_filter::Value {
        match &filter.value {
            Some(where_filter::Value::Property(PropertyFilter {
                value: Some(property_filter::Value::Metric(metric)),
            })) => metric.value.as_ref().unwrap(),
            other => panic!("expected metric property, got {:?}", other),
        }
    }

    #[test]
    fn gauge_data_point_chain_lands_in_flat_list() {
        let mut filters = Vec::new();
        let mut builder = MetricFilterBuilder::new(&mut filters);
        builder
            .gauge()
            .data_point()
            .add_value_double_filter(0.95, NumberCompare::GreaterThan);

        assert_eq!(filters.len(), 1);
        let gauge = match unwrap_metric(&filters[0]) {
            metric_filter::Value::Gauge(g) => g,
            other => panic!("wrong branch: {:?}", other),
        };
        let dp = match gauge.value.as_ref().unwrap() {
            gauge_filter::Value::DataPoint(dp) => dp,
        };
        assert!(matches!(
            dp.value,
            Some(number_data_point_filter::Value::ValueDouble(_))
        ));
    }

    #[test]
    fn sum_exemplar_chain_routes_through_sum_branch() {
        let mut filters = Vec::new();
        let mut builder = MetricFilterBuilder::new(&mut filters);
        builder
            .sum()
            .data_point()
            .exemplar()
            .add_time_filter(123, NumberCompare::GreaterThanOrEqual);

        let sum = match unwrap_metric(&filters[0]) {
            metric_filter::Value::Sum(s) => s,
            other => panic!("wrong branch: {:?}", other),
        };
        let dp = match sum.value.as_ref().unwrap() {
            sum_filter::Value::DataPoint(dp) => dp,
            other => panic!("wrong slot: {:?}", other),
        };
        let exemplar = match dp.value.as_ref().unwrap() {
            number_data_point_filter::Value::Exemplar(e) => e,
            other => panic!("wrong slot: {:?}", other),
        };
        assert!(matches!(
            exemplar.value,
            Some(exemplar_filter::Value::TimeUnixNano(_))
        ));
    }

    #[test]
    fn sum_scalar_slots_are_reachable() {
        let mut filters = Vec::new();
        let mut builder = MetricFilterBuilder::new(&mut filters);
        builder
            .sum()
            .add_aggregation_temporality_filter(
                AggregationTemporality::Cumulative,
                EnumCompare::Equals,
            )
            .add_is_monotonic_filter(true, BoolCompare::Equals);

        assert_eq!(filters.len(), 2);
    }

    #[test]
    fn metadata_filter_keeps_key() {
        let mut filters = Vec::new();
        MetricFilterBuilder::new(&mut filters).add_metadata_filter(
            "prometheus.type",
            ScalarFilter::string("counter", StringCompare::Equals),
        );

        match unwrap_metric(&filters[0]) {
            metric_filter::Value::Metadata(kv) => assert_eq!(kv.key, "prometheus.type"),
            other => panic!("wrong slot: {:?}", other),
        }
    }
}
