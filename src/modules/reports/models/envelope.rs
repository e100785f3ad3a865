use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::action::{ActionType, ApiVersion};

/// Protocol envelope wrapping one report request
///
/// Built fresh for every call: `message_id` is a new v4 UUID (the server uses
/// it for idempotency tracing) and `request_date` is the construction time.
/// Envelopes must never be reused across calls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest<R> {
    pub api_version: ApiVersion,
    pub message_id: String,
    pub request_date: String,
    pub validate_only: bool,
    pub action_type: ActionType,
    pub request_data: R,
}

impl<R: Serialize> GatewayRequest<R> {
    /// Build an envelope with a fresh message id and the current UTC time
    pub fn new(action_type: ActionType, request_data: R) -> Self {
        Self::with_parts(
            action_type,
            request_data,
            Uuid::new_v4().to_string(),
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        )
    }

    /// Build an envelope with explicit identity fields
    ///
    /// For reproducing exact wire bytes and signatures; production calls go
    /// through [`GatewayRequest::new`].
    pub fn with_parts(
        action_type: ActionType,
        request_data: R,
        message_id: String,
        request_date: String,
    ) -> Self {
        GatewayRequest {
            api_version: ApiVersion::CURRENT,
            message_id,
            request_date,
            validate_only: false,
            action_type,
            request_data,
        }
    }
}
