//! Value properties shared by every record filter
//!
//! A property pairs one typed value with the comparator that should be applied
//! to it. Composite properties (arrays, key/value lists) nest arbitrarily, the
//! same way OTLP `AnyValue` nests.

/// Comparison operators valid for string-typed properties.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ::prost::Enumeration,
    serde::Serialize,
    serde::Deserialize,
)]
#[repr(i32)]
pub enum StringCompare {
    Unspecified = 0,
    Equals = 1,
    NotEquals = 2,
    Contains = 3,
    NotContains = 4,
    StartsWith = 5,
    NotStartsWith = 6,
    EndsWith = 7,
    NotEndsWith = 8,
    Regex = 9,
    NotRegex = 10,
}

/// Comparison operators valid for numeric properties (signed, unsigned,
/// double).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ::prost::Enumeration,
    serde::Serialize,
    serde::Deserialize,
)]
#[repr(i32)]
pub enum NumberCompare {
    Unspecified = 0,
    Equals = 1,
    NotEquals = 2,
    GreaterThan = 3,
    GreaterThanOrEqual = 4,
    LessThan = 5,
    LessThanOrEqual = 6,
}

/// Comparison operators valid for byte-sequence properties.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ::prost::Enumeration,
    serde::Serialize,
    serde::Deserialize,
)]
#[repr(i32)]
pub enum BytesCompare {
    Unspecified = 0,
    Equals = 1,
    NotEquals = 2,
    Contains = 3,
}

/// Comparison operators valid for boolean properties.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ::prost::Enumeration,
    serde::Serialize,
    serde::Deserialize,
)]
#[repr(i32)]
pub enum BoolCompare {
    Unspecified = 0,
    Equals = 1,
    NotEquals = 2,
}

/// Comparison operators valid for enum-typed properties (severity number,
/// span kind, status code, aggregation temporality).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ::prost::Enumeration,
    serde::Serialize,
    serde::Deserialize,
)]
#[repr(i32)]
pub enum EnumCompare {
    Unspecified = 0,
    Equals = 1,
    NotEquals = 2,
}

/// A string value plus its comparator.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct StringProperty {
    #[prost(string, tag = "1")]
    pub value: String,
    #[prost(enumeration = "StringCompare", tag = "2")]
    pub compare: i32,
}

/// A 64-bit signed integer value plus its comparator.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct Int64Property {
    #[prost(int64, tag = "1")]
    pub value: i64,
    #[prost(enumeration = "NumberCompare", tag = "2")]
    pub compare: i32,
}

/// A 64-bit unsigned integer value plus its comparator. Used for the
/// nanosecond timestamp fields of the OTLP schema.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct Uint64Property {
    #[prost(uint64, tag = "1")]
    pub value: u64,
    #[prost(enumeration = "NumberCompare", tag = "2")]
    pub compare: i32,
}

/// A 32-bit unsigned integer value plus its comparator. Used for flags and
/// dropped counts.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct Uint32Property {
    #[prost(uint32, tag = "1")]
    pub value: u32,
    #[prost(enumeration = "NumberCompare", tag = "2")]
    pub compare: i32,
}

/// A double value plus its comparator.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct DoubleProperty {
    #[prost(double, tag = "1")]
    pub value: f64,
    #[prost(enumeration = "NumberCompare", tag = "2")]
    pub compare: i32,
}

/// A byte-sequence value plus its comparator. Used for trace and span ids.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct BytesProperty {
    #[prost(bytes = "vec", tag = "1")]
    pub value: Vec<u8>,
    #[prost(enumeration = "BytesCompare", tag = "2")]
    pub compare: i32,
}

/// A boolean value plus its comparator.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct BoolProperty {
    #[prost(bool, tag = "1")]
    pub value: bool,
    #[prost(enumeration = "BoolCompare", tag = "2")]
    pub compare: i32,
}

/// An ordered list of typed values. Present as a message because `oneof`
/// fields cannot be repeated.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct ArrayProperty {
    #[prost(message, repeated, tag = "1")]
    pub values: Vec<PropertyValue>,
}

/// One key → typed-value entry of a key/value list, or a keyed attribute
/// lookup on a record filter.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct KeyValueProperty {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(message, optional, tag = "2")]
    pub value: Option<PropertyValue>,
}

/// An ordered list of key → typed-value entries.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct KeyValueListProperty {
    #[prost(message, repeated, tag = "1")]
    pub values: Vec<KeyValueProperty>,
}

/// The tagged union over every value shape a predicate can compare against.
/// Exactly one variant is populated; arrays and key/value lists nest
/// arbitrarily deep.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct PropertyValue {
    #[prost(oneof = "property_value::Value", tags = "1, 2, 3, 4, 5, 6, 7, 8, 9")]
    pub value: Option<property_value::Value>,
}

/// Nested types in `PropertyValue`.
pub mod property_value {
    #[derive(Clone, PartialEq, ::prost::Oneof, serde::Serialize, serde::Deserialize)]
    pub enum Value {
        #[prost(message, tag = "1")]
        StringValue(super::StringProperty),
        #[prost(message, tag = "2")]
        IntValue(super::Int64Property),
        #[prost(message, tag = "3")]
        UintValue(super::Uint64Property),
        #[prost(message, tag = "4")]
        Uint32Value(super::Uint32Property),
        #[prost(message, tag = "5")]
        DoubleValue(super::DoubleProperty),
        #[prost(message, tag = "6")]
        BytesValue(super::BytesProperty),
        #[prost(message, tag = "7")]
        BoolValue(super::BoolProperty),
        #[prost(message, tag = "8")]
        ArrayValue(super::ArrayProperty),
        #[prost(message, tag = "9")]
        KvlistValue(super::KeyValueListProperty),
    }
}

/// Filter over the resource wrapping a record.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct ResourceFilter {
    #[prost(oneof = "resource_filter::Value", tags = "1, 2, 3")]
    pub value: Option<resource_filter::Value>,
}

/// Nested types in `ResourceFilter`.
pub mod resource_filter {
    #[derive(Clone, PartialEq, ::prost::Oneof, serde::Serialize, serde::Deserialize)]
    pub enum Value {
        #[prost(message, tag = "1")]
        Attribute(super::KeyValueProperty),
        #[prost(message, tag = "2")]
        DroppedAttributesCount(super::Uint32Property),
        #[prost(message, tag = "3")]
        SchemaUrl(super::StringProperty),
    }
}

/// Filter over the instrumentation scope wrapping a record.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
pub struct ScopeFilter {
    #[prost(oneof = "scope_filter::Value", tags = "1, 2, 3, 4, 5")]
    pub value: Option<scope_filter::Value>,
}

/// Nested types in `ScopeFilter`.
pub mod scope_filter {
    #[derive(Clone, PartialEq, ::prost::Oneof, serde::Serialize, serde::Deserialize)]
    pub enum Value {
        #[prost(message, tag = "1")]
        Name(super::StringProperty),
        #[prost(message, tag = "2")]
        Version(super::StringProperty),
        #[prost(message, tag = "3")]
        Attribute(super::KeyValueProperty),
        #[prost(message, tag = "4")]
        DroppedAttributesCount(super::Uint32Property),
        #[prost(message, tag = "5")]
        SchemaUrl(super::StringProperty),
    }
}
