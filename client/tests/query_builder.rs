//! End-to-end construction and encoding of query requests.

use chrono::Duration;
use lookout::{
    BoolCompare, BytesCompare, ContentType, EnumCompare, NumberCompare, QueryRequest,
    QueryRequestBuilder, ScalarFilter, SeverityNumber, SpanKind, SpanSlot, StringCompare,
    decode_request, encode_request,
};
use lookout_proto::query::{query_request, where_filter};

fn trace_id() -> Vec<u8> {
    hex::decode("0af7651916cd43dd8448eb211c80319c").unwrap()
}

#[test]
fn realistic_query_roundtrips_over_both_wire_formats() {
    let mut builder = QueryRequestBuilder::new();
    builder
        .take_all()
        .wait(Duration::seconds(5))
        .where_filter(|w| {
            w.span()
                .add_trace_id_filter(trace_id(), BytesCompare::Equals)
                .add_kind_filter(SpanKind::Server, EnumCompare::Equals)
                .add_attribute_filter(
                    "http.status_code",
                    ScalarFilter::int64(500, NumberCompare::GreaterThanOrEqual),
                );
            w.span()
                .resource()
                .add_attribute_filter(
                    "service.name",
                    ScalarFilter::string("checkout", StringCompare::Equals),
                );
            w.add_or_filter(|or| {
                or.log()
                    .add_severity_number_filter(SeverityNumber::Error, EnumCompare::Equals);
                or.metric()
                    .gauge()
                    .data_point()
                    .add_value_double_filter(0.99, NumberCompare::GreaterThan);
            });
        });

    let request = builder.build();
    assert_eq!(request.wait_ms, 5_000);
    assert_eq!(request.take, Some(query_request::Take::All(true)));
    assert_eq!(request.filters.len(), 5);

    for content_type in [ContentType::Protobuf, ContentType::Json] {
        let bytes = encode_request(&request, content_type).unwrap();
        let decoded: QueryRequest = decode_request(&bytes, content_type).unwrap();
        assert_eq!(decoded, request, "content type {:?}", content_type);
    }
}

#[test]
fn generic_span_dispatch_and_typed_methods_interleave() {
    let mut builder = QueryRequestBuilder::new();
    builder.where_filter(|w| {
        let mut span = w.span();
        span.add_filter(
            SpanSlot::Name,
            ScalarFilter::string("POST /orders", StringCompare::StartsWith),
        )
        .unwrap()
        .add_filter(
            SpanSlot::EndTimeUnixNano,
            ScalarFilter::uint64(1_700_000_100_000_000_000, NumberCompare::LessThan),
        )
        .unwrap()
        .add_dropped_attributes_count_filter(0, NumberCompare::Equals);
    });

    assert_eq!(builder.filter_count(), 3);
}

#[test]
fn failed_generic_dispatch_leaves_the_request_untouched() {
    let mut builder = QueryRequestBuilder::new();
    builder.where_filter(|w| {
        let mut span = w.span();
        let result = span.add_filter(
            SpanSlot::TraceId,
            ScalarFilter::boolean(true, BoolCompare::Equals),
        );
        assert!(result.is_err());
    });

    assert_eq!(builder.filter_count(), 0);
    assert!(builder.build().filters.is_empty());
}

#[test]
fn or_groups_keep_nested_order_after_roundtrip() {
    let mut builder = QueryRequestBuilder::new();
    builder.where_filter(|w| {
        w.add_or_filter(|or| {
            or.log()
                .add_severity_text_filter("WARN", StringCompare::Equals);
            or.add_or_filter(|inner| {
                inner
                    .log()
                    .add_event_name_filter("retry", StringCompare::Equals);
            });
        });
    });

    let request = builder.build();
    let bytes = encode_request(&request, ContentType::Protobuf).unwrap();
    let decoded: QueryRequest = decode_request(&bytes, ContentType::Protobuf).unwrap();

    let or = match &decoded.filters[0].value {
        Some(where_filter::Value::Or(or)) => or,
        other => panic!("expected or group, got {:?}", other),
    };
    assert_eq!(or.filters.len(), 2);
    assert!(matches!(
        or.filters[1].value,
        Some(where_filter::Value::Or(_))
    ));
}
