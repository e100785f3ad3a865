// Envelope construction tests: identity fields must be fresh per call.

use std::collections::HashSet;

use finrep_client::reports::{
    ActionType, ApiVersion, DriverProfileReportRequest, GatewayRequest,
};

#[test]
fn test_message_ids_pairwise_distinct() {
    let ids: HashSet<String> = (0..1000)
        .map(|_| {
            GatewayRequest::new(ActionType::DriverProfile, DriverProfileReportRequest::new())
                .message_id
        })
        .collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn test_message_id_is_a_uuid() {
    let envelope =
        GatewayRequest::new(ActionType::DriverProfile, DriverProfileReportRequest::new());
    assert!(uuid::Uuid::parse_str(&envelope.message_id).is_ok());
}

#[test]
fn test_request_date_reflects_construction_time() {
    let before = chrono::Utc::now();
    let envelope =
        GatewayRequest::new(ActionType::DriverProfile, DriverProfileReportRequest::new());
    let after = chrono::Utc::now();

    let request_date = chrono::DateTime::parse_from_rfc3339(&envelope.request_date)
        .expect("requestDate is RFC 3339")
        .with_timezone(&chrono::Utc);

    // millisecond precision truncates; allow for it on the lower bound
    assert!(request_date >= before - chrono::Duration::milliseconds(1));
    assert!(request_date <= after);
}

#[test]
fn test_envelope_wire_shape() {
    let envelope = GatewayRequest::with_parts(
        ActionType::DriverTripSummary,
        DriverProfileReportRequest::new(),
        "a2c81e4e-0000-4000-8000-000000000001".to_string(),
        "2019-05-01T10:15:30.000Z".to_string(),
    );
    assert_eq!(envelope.api_version, ApiVersion::V2_10_0);

    let value = serde_json::to_value(&envelope).unwrap();
    assert_eq!(value["apiVersion"], serde_json::json!("v2_10_0"));
    assert_eq!(value["actionType"], serde_json::json!("DRIVER_TRIP_SUMMARY"));
    assert_eq!(value["validateOnly"], serde_json::json!(false));
    assert_eq!(
        value["messageId"],
        serde_json::json!("a2c81e4e-0000-4000-8000-000000000001")
    );
    assert_eq!(
        value["requestDate"],
        serde_json::json!("2019-05-01T10:15:30.000Z")
    );
    assert!(value["requestData"].is_object());
}

#[test]
fn test_two_envelopes_same_payload_differ_in_identity_only() {
    let first =
        GatewayRequest::new(ActionType::DriverProfile, DriverProfileReportRequest::new());
    let second =
        GatewayRequest::new(ActionType::DriverProfile, DriverProfileReportRequest::new());

    assert_ne!(first.message_id, second.message_id);

    let mut first_value = serde_json::to_value(&first).unwrap();
    let mut second_value = serde_json::to_value(&second).unwrap();
    for value in [&mut first_value, &mut second_value] {
        let object = value.as_object_mut().unwrap();
        object.remove("messageId");
        object.remove("requestDate");
    }
    assert_eq!(first_value, second_value);
}
