//! Resource and instrumentation-scope façades
//!
//! Logs, spans and metrics all carry a resource and an instrumentation
//! scope, so these two façades are shared. Each one holds the parent's
//! filter list plus a routing fn that wraps the slot value into the right
//! record-kind branch; the façade itself never owns predicates.

use lookout_proto::common::{
    NumberCompare, ResourceFilter, ScopeFilter, StringCompare, StringProperty, Uint32Property,
    resource_filter, scope_filter,
};
use lookout_proto::query::{WhereFilter, property_filter};

use crate::value::{ArrayFilterBuilder, KeyValueListFilterBuilder, ScalarFilter};

use super::{array_value, keyed_property, kvlist_value, push_property};

/// Routes predicates into the resource branch of the owning record kind.
pub struct ResourceFilterBuilder<'a> {
    filters: &'a mut Vec<WhereFilter>,
    wrap: fn(resource_filter::Value) -> property_filter::Value,
}

impl<'a> ResourceFilterBuilder<'a> {
    pub(crate) fn new(
        filters: &'a mut Vec<WhereFilter>,
        wrap: fn(resource_filter::Value) -> property_filter::Value,
    ) -> Self {
        Self { filters, wrap }
    }

    /// Filter on one resource attribute by key.
    pub fn add_attribute_filter(
        &mut self,
        key: impl Into<String>,
        value: ScalarFilter,
    ) -> &mut Self {
        self.push(resource_filter::Value::Attribute(keyed_property(
            key,
            value.into_property_value(),
        )))
    }

    /// Filter on a resource attribute whose value is an array.
    pub fn add_attribute_array_filter(
        &mut self,
        key: impl Into<String>,
        configure: impl FnOnce(&mut ArrayFilterBuilder),
    ) -> &mut Self {
        self.push(resource_filter::Value::Attribute(keyed_property(
            key,
            array_value(configure),
        )))
    }

    /// Filter on a resource attribute whose value is a key/value list.
    pub fn add_attribute_key_value_list_filter(
        &mut self,
        key: impl Into<String>,
        configure: impl FnOnce(&mut KeyValueListFilterBuilder),
    ) -> &mut Self {
        self.push(resource_filter::Value::Attribute(keyed_property(
            key,
            kvlist_value(configure),
        )))
    }

    pub fn add_dropped_attributes_count_filter(
        &mut self,
        value: u32,
        compare: NumberCompare,
    ) -> &mut Self {
        self.push(resource_filter::Value::DroppedAttributesCount(
            Uint32Property {
                value,
                compare: compare as i32,
            },
        ))
    }

    pub fn add_schema_url_filter(
        &mut self,
        value: impl Into<String>,
        compare: StringCompare,
    ) -> &mut Self {
        self.push(resource_filter::Value::SchemaUrl(StringProperty {
            value: value.into(),
            compare: compare as i32,
        }))
    }

    fn push(&mut self, value: resource_filter::Value) -> &mut Self {
        push_property(self.filters, (self.wrap)(value));
        self
    }
}

/// Routes predicates into the instrumentation-scope branch of the owning
/// record kind.
pub struct ScopeFilterBuilder<'a> {
    filters: &'a mut Vec<WhereFilter>,
    wrap: fn(scope_filter::Value) -> property_filter::Value,
}

impl<'a> ScopeFilterBuilder<'a> {
    pub(crate) fn new(
        filters: &'a mut Vec<WhereFilter>,
        wrap: fn(scope_filter::Value) -> property_filter::Value,
    ) -> Self {
        Self { filters, wrap }
    }

    pub fn add_name_filter(
        &mut self,
        value: impl Into<String>,
        compare: StringCompare,
    ) -> &mut Self {
        self.push(scope_filter::Value::Name(StringProperty {
            value: value.into(),
            compare: compare as i32,
        }))
    }

    pub fn add_version_filter(
        &mut self,
        value: impl Into<String>,
        compare: StringCompare,
    ) -> &mut Self {
        self.push(scope_filter::Value::Version(StringProperty {
            value: value.into(),
            compare: compare as i32,
        }))
    }

    /// Filter on one scope attribute by key.
    pub fn add_attribute_filter(
        &mut self,
        key: impl Into<String>,
        value: ScalarFilter,
    ) -> &mut Self {
        self.push(scope_filter::Value::Attribute(keyed_property(
            key,
            value.into_property_value(),
        )))
    }

    pub fn add_dropped_attributes_count_filter(
        &mut self,
        value: u32,
        compare: NumberCompare,
    ) -> &mut Self {
        self.push(scope_filter::Value::DroppedAttributesCount(Uint32Property {
            value,
            compare: compare as i32,
        }))
    }

    pub fn add_schema_url_filter(
        &mut self,
        value: impl Into<String>,
        compare: StringCompare,
    ) -> &mut Self {
        self.push(scope_filter::Value::SchemaUrl(StringProperty {
            value: value.into(),
            compare: compare as i32,
        }))
    }

    fn push(&mut self, value: scope_filter::Value) -> &mut Self {
        push_property(self.filters, (self.wrap)(value));
        self
    }
}

pub(crate) fn wrap_resource(value: resource_filter::Value) -> ResourceFilter {
    ResourceFilter { value: Some(value) }
}

pub(crate) fn wrap_scope(value: scope_filter::Value) -> ScopeFilter {
    ScopeFilter { value: Some(value) }
}
