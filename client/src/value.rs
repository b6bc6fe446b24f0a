//! Scalar and composite value builders
//!
//! A [`ScalarFilter`] bundles one primitive value with the comparator enum
//! that is valid for its type, so a comparator can never be paired with a
//! value of the wrong kind. The array and key/value-list builders assemble
//! the recursive composite values of the schema.

use lookout_proto::common::{
    ArrayProperty, BoolCompare, BoolProperty, BytesCompare, BytesProperty, DoubleProperty,
    Int64Property, KeyValueListProperty, KeyValueProperty, NumberCompare, PropertyValue,
    StringCompare, StringProperty, Uint32Property, Uint64Property, property_value,
};

use crate::schema::ValueKind;

/// One primitive value paired with a comparator of the matching operator set.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarFilter {
    String(String, StringCompare),
    Int64(i64, NumberCompare),
    UInt64(u64, NumberCompare),
    UInt32(u32, NumberCompare),
    Double(f64, NumberCompare),
    Bytes(Vec<u8>, BytesCompare),
    Bool(bool, BoolCompare),
}

impl ScalarFilter {
    pub fn string(value: impl Into<String>, compare: StringCompare) -> Self {
        Self::String(value.into(), compare)
    }

    pub fn int64(value: i64, compare: NumberCompare) -> Self {
        Self::Int64(value, compare)
    }

    pub fn uint64(value: u64, compare: NumberCompare) -> Self {
        Self::UInt64(value, compare)
    }

    pub fn uint32(value: u32, compare: NumberCompare) -> Self {
        Self::UInt32(value, compare)
    }

    pub fn double(value: f64, compare: NumberCompare) -> Self {
        Self::Double(value, compare)
    }

    pub fn bytes(value: impl Into<Vec<u8>>, compare: BytesCompare) -> Self {
        Self::Bytes(value.into(), compare)
    }

    pub fn boolean(value: bool, compare: BoolCompare) -> Self {
        Self::Bool(value, compare)
    }

    /// The value kind carried by this filter, for slot-table validation.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::String(..) => ValueKind::String,
            Self::Int64(..) => ValueKind::Int64,
            Self::UInt64(..) => ValueKind::UInt64,
            Self::UInt32(..) => ValueKind::UInt32,
            Self::Double(..) => ValueKind::Double,
            Self::Bytes(..) => ValueKind::Bytes,
            Self::Bool(..) => ValueKind::Bool,
        }
    }

    /// Convert into the wire value union.
    pub(crate) fn into_value(self) -> property_value::Value {
        match self {
            Self::String(value, compare) => property_value::Value::StringValue(StringProperty {
                value,
                compare: compare as i32,
            }),
            Self::Int64(value, compare) => property_value::Value::IntValue(Int64Property {
                value,
                compare: compare as i32,
            }),
            Self::UInt64(value, compare) => property_value::Value::UintValue(Uint64Property {
                value,
                compare: compare as i32,
            }),
            Self::UInt32(value, compare) => property_value::Value::Uint32Value(Uint32Property {
                value,
                compare: compare as i32,
            }),
            Self::Double(value, compare) => property_value::Value::DoubleValue(DoubleProperty {
                value,
                compare: compare as i32,
            }),
            Self::Bytes(value, compare) => property_value::Value::BytesValue(BytesProperty {
                value,
                compare: compare as i32,
            }),
            Self::Bool(value, compare) => property_value::Value::BoolValue(BoolProperty {
                value,
                compare: compare as i32,
            }),
        }
    }

    pub(crate) fn into_property_value(self) -> PropertyValue {
        PropertyValue {
            value: Some(self.into_value()),
        }
    }
}

/// Builds the ordered element list of an array value.
///
/// Each `add_*_filter` call appends one typed element; `add_array_filter`
/// and `add_key_value_list_filter` run their configuration closure against a
/// fresh nested builder and append the folded composite.
#[derive(Debug, Default)]
pub struct ArrayFilterBuilder {
    values: Vec<PropertyValue>,
}

impl ArrayFilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_string_filter(
        &mut self,
        value: impl Into<String>,
        compare: StringCompare,
    ) -> &mut Self {
        self.push(ScalarFilter::string(value, compare))
    }

    pub fn add_int64_filter(&mut self, value: i64, compare: NumberCompare) -> &mut Self {
        self.push(ScalarFilter::int64(value, compare))
    }

    pub fn add_uint64_filter(&mut self, value: u64, compare: NumberCompare) -> &mut Self {
        self.push(ScalarFilter::uint64(value, compare))
    }

    pub fn add_uint32_filter(&mut self, value: u32, compare: NumberCompare) -> &mut Self {
        self.push(ScalarFilter::uint32(value, compare))
    }

    pub fn add_double_filter(&mut self, value: f64, compare: NumberCompare) -> &mut Self {
        self.push(ScalarFilter::double(value, compare))
    }

    pub fn add_bytes_filter(
        &mut self,
        value: impl Into<Vec<u8>>,
        compare: BytesCompare,
    ) -> &mut Self {
        self.push(ScalarFilter::bytes(value, compare))
    }

    pub fn add_bool_filter(&mut self, value: bool, compare: BoolCompare) -> &mut Self {
        self.push(ScalarFilter::boolean(value, compare))
    }

    /// Append a nested array element.
    pub fn add_array_filter(&mut self, configure: impl FnOnce(&mut ArrayFilterBuilder)) -> &mut Self {
        let mut nested = ArrayFilterBuilder::new();
        configure(&mut nested);
        self.values.push(PropertyValue {
            value: Some(property_value::Value::ArrayValue(nested.build())),
        });
        self
    }

    /// Append a nested key/value-list element.
    pub fn add_key_value_list_filter(
        &mut self,
        configure: impl FnOnce(&mut KeyValueListFilterBuilder),
    ) -> &mut Self {
        let mut nested = KeyValueListFilterBuilder::new();
        configure(&mut nested);
        self.values.push(PropertyValue {
            value: Some(property_value::Value::KvlistValue(nested.build())),
        });
        self
    }

    /// Number of elements accumulated so far.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Elements accumulated so far, in call order.
    pub fn values(&self) -> &[PropertyValue] {
        &self.values
    }

    pub(crate) fn build(self) -> ArrayProperty {
        ArrayProperty {
            values: self.values,
        }
    }

    fn push(&mut self, filter: ScalarFilter) -> &mut Self {
        self.values.push(filter.into_property_value());
        self
    }
}

/// Builds the ordered entry list of a key/value-list value.
#[derive(Debug, Default)]
pub struct KeyValueListFilterBuilder {
    values: Vec<KeyValueProperty>,
}

impl KeyValueListFilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_string_filter(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        compare: StringCompare,
    ) -> &mut Self {
        self.push(key, ScalarFilter::string(value, compare))
    }

    pub fn add_int64_filter(
        &mut self,
        key: impl Into<String>,
        value: i64,
        compare: NumberCompare,
    ) -> &mut Self {
        self.push(key, ScalarFilter::int64(value, compare))
    }

    pub fn add_uint64_filter(
        &mut self,
        key: impl Into<String>,
        value: u64,
        compare: NumberCompare,
    ) -> &mut Self {
        self.push(key, ScalarFilter::uint64(value, compare))
    }

    pub fn add_uint32_filter(
        &mut self,
        key: impl Into<String>,
        value: u32,
        compare: NumberCompare,
    ) -> &mut Self {
        self.push(key, ScalarFilter::uint32(value, compare))
    }

    pub fn add_double_filter(
        &mut self,
        key: impl Into<String>,
        value: f64,
        compare: NumberCompare,
    ) -> &mut Self {
        self.push(key, ScalarFilter::double(value, compare))
    }

    pub fn add_bytes_filter(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Vec<u8>>,
        compare: BytesCompare,
    ) -> &mut Self {
        self.push(key, ScalarFilter::bytes(value, compare))
    }

    pub fn add_bool_filter(
        &mut self,
        key: impl Into<String>,
        value: bool,
        compare: BoolCompare,
    ) -> &mut Self {
        self.push(key, ScalarFilter::boolean(value, compare))
    }

    /// Append an entry whose value is a nested array.
    pub fn add_array_filter(
        &mut self,
        key: impl Into<String>,
        configure: impl FnOnce(&mut ArrayFilterBuilder),
    ) -> &mut Self {
        let mut nested = ArrayFilterBuilder::new();
        configure(&mut nested);
        self.values.push(KeyValueProperty {
            key: key.into(),
            value: Some(PropertyValue {
                value: Some(property_value::Value::ArrayValue(nested.build())),
            }),
        });
        self
    }

    /// Append an entry whose value is a nested key/value list.
    pub fn add_key_value_list_filter(
        &mut self,
        key: impl Into<String>,
        configure: impl FnOnce(&mut KeyValueListFilterBuilder),
    ) -> &mut Self {
        let mut nested = KeyValueListFilterBuilder::new();
        configure(&mut nested);
        self.values.push(KeyValueProperty {
            key: key.into(),
            value: Some(PropertyValue {
                value: Some(property_value::Value::KvlistValue(nested.build())),
            }),
        });
        self
    }

    /// Number of entries accumulated so far.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries accumulated so far, in call order.
    pub fn values(&self) -> &[KeyValueProperty] {
        &self.values
    }

    pub(crate) fn build(self) -> KeyValueListProperty {
        KeyValueListProperty {
            values: self.values,
        }
    }

    fn push(&mut self, key: impl Into<String>, filter: ScalarFilter) -> &mut Self {
        self.values.push(KeyValueProperty {
            key: key.into(),
            value: Some(filter.into_property_value()),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_filters_append_in_call_order() {
        let mut builder = ArrayFilterBuilder::new();
        builder
            .add_string_filter("hello", StringCompare::Equals)
            .add_int64_filter(42, NumberCompare::GreaterThan)
            .add_bool_filter(true, BoolCompare::NotEquals);

        assert_eq!(builder.len(), 3);
        assert_eq!(
            builder.values()[0].value,
            Some(property_value::Value::StringValue(StringProperty {
                value: "hello".into(),
                compare: StringCompare::Equals as i32,
            }))
        );
        assert_eq!(
            builder.values()[2].value,
            Some(property_value::Value::BoolValue(BoolProperty {
                value: true,
                compare: BoolCompare::NotEquals as i32,
            }))
        );
    }

    #[test]
    fn array_nesting_is_preserved() {
        let mut builder = ArrayFilterBuilder::new();
        builder.add_array_filter(|outer| {
            outer.add_array_filter(|inner| {
                inner.add_int64_filter(1, NumberCompare::Equals);
            });
        });

        let outer = match &builder.values()[0].value {
            Some(property_value::Value::ArrayValue(a)) => a,
            other => panic!("expected array, got {:?}", other),
        };
        assert_eq!(outer.values.len(), 1);
        let inner = match &outer.values[0].value {
            Some(property_value::Value::ArrayValue(a)) => a,
            other => panic!("expected array, got {:?}", other),
        };
        assert_eq!(
            inner.values[0].value,
            Some(property_value::Value::IntValue(Int64Property {
                value: 1,
                compare: NumberCompare::Equals as i32,
            }))
        );
    }

    #[test]
    fn kvlist_entries_keep_keys_and_order() {
        let mut builder = KeyValueListFilterBuilder::new();
        builder
            .add_string_filter("service", "checkout", StringCompare::StartsWith)
            .add_double_filter("latency", 1.5, NumberCompare::LessThan)
            .add_key_value_list_filter("nested", |kv| {
                kv.add_bool_filter("flag", false, BoolCompare::Equals);
            });

        assert_eq!(builder.len(), 3);
        assert_eq!(builder.values()[0].key, "service");
        assert_eq!(builder.values()[1].key, "latency");
        let nested = match &builder.values()[2].value {
            Some(PropertyValue {
                value: Some(property_value::Value::KvlistValue(kv)),
            }) => kv,
            other => panic!("expected kvlist, got {:?}", other),
        };
        assert_eq!(nested.values[0].key, "flag");
    }

    #[test]
    fn scalar_filter_reports_its_kind() {
        use crate::schema::ValueKind;

        assert_eq!(
            ScalarFilter::string("x", StringCompare::Equals).kind(),
            ValueKind::String
        );
        assert_eq!(
            ScalarFilter::bytes(vec![1u8], BytesCompare::Equals).kind(),
            ValueKind::Bytes
        );
        assert_eq!(
            ScalarFilter::uint32(7, NumberCompare::Equals).kind(),
            ValueKind::UInt32
        );
    }
}
