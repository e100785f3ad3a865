use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, info};

use crate::config::ClientConfig;
use crate::core::Result;
use crate::modules::reports::models::{
    ActionType, DriverBlockReasonSummaryReportRequest, DriverCancelReasonProfileReportRequest,
    DriverCreditDebitReportRequest, DriverProfileReportRequest, DriverTripSummaryReportRequest,
    DriverTripTransactionReportRequest, GatewayRequest, GatewayResponse, HttpHeader,
    PeopleProfileReportRequest, ResponseData, TaxiProfileReportRequest,
    VehicleModelProfileReportRequest,
};

use super::canonical::to_canonical_json;
use super::signature::sign;
use super::transport::{HttpTransport, Transport};

/// Client for the finance reporting gateway
///
/// Orchestrates one call end to end: wrap the report request in a fresh
/// envelope, render the canonical body, sign it, POST it, materialize the
/// response, and hand back its `responseData`. Calls are independent; the
/// only state shared between them is the immutable configuration and the
/// transport.
pub struct ReportGatewayClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl ReportGatewayClient {
    /// Create a client using the default HTTP transport
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            transport: Arc::new(HttpTransport::new()),
        })
    }

    /// Create a client with an injected transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    /// Run one report call for the given action
    ///
    /// The signed bytes and the transmitted bytes are the same string; the
    /// signature travels in the `HMAC` header. Configured auth/CSRF tokens
    /// ride along as `AUTH`/`CSRF` headers.
    pub async fn call<R: Serialize>(
        &self,
        action_type: ActionType,
        request_data: &R,
    ) -> Result<ResponseData> {
        let envelope = GatewayRequest::new(action_type, request_data);
        self.dispatch(action_type, envelope).await
    }

    async fn dispatch<R: Serialize>(
        &self,
        action_type: ActionType,
        envelope: GatewayRequest<R>,
    ) -> Result<ResponseData> {
        let message_id = envelope.message_id.clone();
        let body = to_canonical_json(&envelope)?;
        let signature = sign(&self.config.hmac_secret, &body);

        info!(
            action = %action_type,
            message_id = %message_id,
            endpoint = %self.config.service_endpoint,
            "Sending report request"
        );
        debug!(hmac = %signature, body = %body, "Signed request body");

        let mut headers = vec![(HttpHeader::Hmac.name(), signature)];
        if let Some(token) = &self.config.auth_token {
            headers.push((HttpHeader::Auth.name(), token.clone()));
        }
        if let Some(token) = &self.config.csrf_token {
            headers.push((HttpHeader::Csrf.name(), token.clone()));
        }

        let raw = match self
            .transport
            .post(&self.config.service_endpoint, body, headers)
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                error!(action = %action_type, message_id = %message_id, error = %e, "Report call failed");
                return Err(e);
            }
        };

        GatewayResponse::from_json(&raw)?.response_data()
    }

    /// Fetch people profile(s)
    pub async fn fetch_people_profile(
        &self,
        request: &PeopleProfileReportRequest,
    ) -> Result<ResponseData> {
        self.call(ActionType::PeopleProfile, request).await
    }

    /// Fetch driver profile(s)
    pub async fn fetch_driver_profile(
        &self,
        request: &DriverProfileReportRequest,
    ) -> Result<ResponseData> {
        self.call(ActionType::DriverProfile, request).await
    }

    /// Fetch taxi profile(s)
    pub async fn fetch_taxi_profile(
        &self,
        request: &TaxiProfileReportRequest,
    ) -> Result<ResponseData> {
        self.call(ActionType::TaxiProfile, request).await
    }

    /// Fetch taxi-driver mapping(s)
    pub async fn fetch_taxi_driver_mapping(
        &self,
        request: &TaxiProfileReportRequest,
    ) -> Result<ResponseData> {
        self.call(ActionType::TaxiDriverMapping, request).await
    }

    /// Fetch vehicle model profile(s)
    pub async fn fetch_vehicle_model_profile(
        &self,
        request: &VehicleModelProfileReportRequest,
    ) -> Result<ResponseData> {
        self.call(ActionType::VehicleModelProfile, request).await
    }

    /// Fetch driver trip transaction(s)
    pub async fn fetch_driver_trip_transaction(
        &self,
        request: &DriverTripTransactionReportRequest,
    ) -> Result<ResponseData> {
        self.call(ActionType::DriverTripTransaction, request).await
    }

    /// Fetch driver trip summary(ies)
    pub async fn fetch_driver_trip_summary(
        &self,
        request: &DriverTripSummaryReportRequest,
    ) -> Result<ResponseData> {
        self.call(ActionType::DriverTripSummary, request).await
    }

    /// Fetch driver recent trip summary(ies)
    pub async fn fetch_driver_recent_trip_summary(
        &self,
        request: &DriverTripSummaryReportRequest,
    ) -> Result<ResponseData> {
        self.call(ActionType::DriverRecentTripSummary, request).await
    }

    /// Fetch driver block reason(s)
    pub async fn fetch_driver_block_reason(
        &self,
        request: &DriverBlockReasonSummaryReportRequest,
    ) -> Result<ResponseData> {
        self.call(ActionType::DriverBlockReason, request).await
    }

    /// Fetch driver cancel reason(s)
    pub async fn fetch_driver_cancel_reason(
        &self,
        request: &DriverCancelReasonProfileReportRequest,
    ) -> Result<ResponseData> {
        self.call(ActionType::DriverCancelReason, request).await
    }

    /// Fetch driver credit-debit entries
    pub async fn fetch_driver_credit_debit(
        &self,
        request: &DriverCreditDebitReportRequest,
    ) -> Result<ResponseData> {
        self.call(ActionType::DriverCreditDebit, request).await
    }
}
