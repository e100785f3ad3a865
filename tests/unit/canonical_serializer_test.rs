// Property-based tests for the canonical serializer
//
// The canonical string is both the HTTP body and the HMAC input, so the
// property that matters is byte-level determinism: same field values, same
// bytes, regardless of how the value was put together.

use proptest::prelude::*;

use finrep_client::reports::services::canonical::to_canonical_json;
use finrep_client::reports::{
    ActionType, DriverTripTransactionReportRequest, GatewayRequest, Sorter,
};

fn arb_request() -> impl Strategy<Value = DriverTripTransactionReportRequest> {
    (
        proptest::option::of(any::<u64>()),
        proptest::option::of(any::<u64>()),
        proptest::option::of(any::<i64>()),
        proptest::option::of("[a-z0-9 ]{0,16}"),
        1u32..=100u32,
        proptest::collection::vec(("[a-z]{1,12}", any::<bool>()), 0..4),
    )
        .prop_map(
            |(driver_id, trip_id, min_cents, description, page_size, sorters)| {
                let mut request = DriverTripTransactionReportRequest::new();
                request.driver_id = driver_id;
                request.trip_id = trip_id;
                request.min_amount_in_cents = min_cents;
                request.description = description;
                request.base.page_size = page_size;
                request.base.sorters = sorters
                    .into_iter()
                    .map(|(field, descending)| Sorter::new(field, descending))
                    .collect();
                request
            },
        )
}

proptest! {
    #[test]
    fn test_serialization_is_deterministic(request in arb_request()) {
        let first = to_canonical_json(&request).unwrap();
        let second = to_canonical_json(&request).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_clone_serializes_identically(request in arb_request()) {
        let copy = request.clone();
        prop_assert_eq!(
            to_canonical_json(&request).unwrap(),
            to_canonical_json(&copy).unwrap()
        );
    }

    #[test]
    fn test_envelope_keys_emitted_in_alphabetical_order(request in arb_request()) {
        let envelope = GatewayRequest::with_parts(
            ActionType::DriverTripTransaction,
            request,
            "a2c81e4e-0000-4000-8000-000000000001".to_string(),
            "2019-05-01T10:15:30.000Z".to_string(),
        );
        let rendered = to_canonical_json(&envelope).unwrap();

        let positions: Vec<usize> = [
            "\"actionType\"",
            "\"apiVersion\"",
            "\"messageId\"",
            "\"requestData\"",
            "\"requestDate\"",
            "\"validateOnly\"",
        ]
        .iter()
        .map(|key| rendered.find(key).expect("envelope key present"))
        .collect();

        for window in positions.windows(2) {
            prop_assert!(window[0] < window[1]);
        }
    }
}

#[test]
fn test_flattened_base_fields_render_inside_request_data() {
    let mut request = DriverTripTransactionReportRequest::new();
    request.base.sorters.push(Sorter::new("transactionId", true));
    let envelope = GatewayRequest::with_parts(
        ActionType::DriverTripTransaction,
        request,
        "a2c81e4e-0000-4000-8000-000000000001".to_string(),
        "2019-05-01T10:15:30.000Z".to_string(),
    );
    let rendered = to_canonical_json(&envelope).unwrap();
    let tree: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    let data = tree["requestData"].as_object().unwrap();
    assert_eq!(data["pagingEnabled"], serde_json::json!(true));
    assert_eq!(data["pageSize"], serde_json::json!(10));
    assert_eq!(data["sorters"][0]["DESC"], serde_json::json!(true));
}

#[test]
fn test_indentation_is_four_spaces() {
    let rendered = to_canonical_json(&serde_json::json!({"key": {"inner": 1}})).unwrap();
    assert_eq!(
        rendered,
        "{\n    \"key\": {\n        \"inner\": 1\n    }\n}"
    );
}
