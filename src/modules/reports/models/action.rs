use serde::{Deserialize, Serialize};

/// Protocol version tag carried in every envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiVersion {
    #[serde(rename = "v2_10_0")]
    V2_10_0,
}

impl ApiVersion {
    /// The protocol version this client speaks
    pub const CURRENT: ApiVersion = ApiVersion::V2_10_0;
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiVersion::V2_10_0 => write!(f, "v2_10_0"),
        }
    }
}

/// Which report a request targets
///
/// Closed catalog; each enumerant pairs with exactly one report request shape
/// and one `responseData` collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    // Registry
    PeopleProfile,
    DriverProfile,
    TaxiProfile,
    TaxiDriverMapping,
    VehicleModelProfile,

    // Transaction
    DriverTripTransaction,
    DriverTripSummary,
    DriverRecentTripSummary,
    DriverBlockReason,
    DriverCancelReason,
    DriverCreditDebit,
}

impl ActionType {
    /// Wire tag for this action, as serialized into the envelope
    pub fn tag(&self) -> &'static str {
        match self {
            ActionType::PeopleProfile => "PEOPLE_PROFILE",
            ActionType::DriverProfile => "DRIVER_PROFILE",
            ActionType::TaxiProfile => "TAXI_PROFILE",
            ActionType::TaxiDriverMapping => "TAXI_DRIVER_MAPPING",
            ActionType::VehicleModelProfile => "VEHICLE_MODEL_PROFILE",
            ActionType::DriverTripTransaction => "DRIVER_TRIP_TRANSACTION",
            ActionType::DriverTripSummary => "DRIVER_TRIP_SUMMARY",
            ActionType::DriverRecentTripSummary => "DRIVER_RECENT_TRIP_SUMMARY",
            ActionType::DriverBlockReason => "DRIVER_BLOCK_REASON",
            ActionType::DriverCancelReason => "DRIVER_CANCEL_REASON",
            ActionType::DriverCreditDebit => "DRIVER_CREDIT_DEBIT",
        }
    }

    /// Name of the record collection the server populates under
    /// `responseData` for this action
    pub fn collection_key(&self) -> &'static str {
        match self {
            ActionType::PeopleProfile
            | ActionType::DriverProfile
            | ActionType::TaxiProfile
            | ActionType::VehicleModelProfile => "profiles",
            ActionType::TaxiDriverMapping => "mappings",
            ActionType::DriverTripTransaction | ActionType::DriverCreditDebit => "transactions",
            ActionType::DriverTripSummary
            | ActionType::DriverRecentTripSummary
            | ActionType::DriverBlockReason => "summaries",
            ActionType::DriverCancelReason => "reasons",
        }
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Which timestamp column date-range filters apply to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DateType {
    CreateTime,
    CreateDate,
}

impl Default for DateType {
    fn default() -> Self {
        DateType::CreateTime
    }
}

/// Ledger entry direction for credit-debit filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Credit,
    Debit,
}

/// Custom headers the gateway understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpHeader {
    Hmac,
    Auth,
    Csrf,
}

impl HttpHeader {
    pub fn name(&self) -> &'static str {
        match self {
            HttpHeader::Hmac => "HMAC",
            HttpHeader::Auth => "AUTH",
            HttpHeader::Csrf => "CSRF",
        }
    }
}
