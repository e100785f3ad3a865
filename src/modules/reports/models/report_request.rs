use serde::Serialize;

use super::action::{DateType, TransactionType};

/// One ordering key; the server applies a request's sorters left-to-right
///
/// The wire key for the direction flag is literally `DESC`.
#[derive(Debug, Clone, Serialize)]
pub struct Sorter {
    pub field: String,
    #[serde(rename = "DESC")]
    pub descending: bool,
}

impl Sorter {
    pub fn new(field: impl Into<String>, descending: bool) -> Self {
        Sorter {
            field: field.into(),
            descending,
        }
    }
}

/// Fields shared by every report request
///
/// Embedded (flattened) into each concrete request so the full field set of a
/// variant is explicit and serializes into a single flat object. Defaults are
/// contractual: consumers rely on `paging_enabled = true`, `page_size = 10`,
/// `page_index = 0` out of the box. No client-side validation is performed on
/// any of these; malformed combinations are the server's to reject.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseReportRequest {
    pub from_staff: bool,
    pub from_portal: bool,
    pub paging_enabled: bool,
    pub page_size: u32,
    pub page_index: u32,
    pub export_enabled: bool,
    pub sorters: Vec<Sorter>,
}

impl Default for BaseReportRequest {
    fn default() -> Self {
        BaseReportRequest {
            from_staff: false,
            from_portal: false,
            paging_enabled: true,
            page_size: 10,
            page_index: 0,
            export_enabled: false,
            sorters: Vec::new(),
        }
    }
}

/// People profile report, optionally embedding driver trip summaries
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeopleProfileReportRequest {
    #[serde(flatten)]
    pub base: BaseReportRequest,
    pub people_id: Option<u64>,
    pub with_driver_trip_summary: bool,
    pub without_empty_driver_trip_summary: bool,
}

impl PeopleProfileReportRequest {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Driver profile report, optionally embedding driver trip summaries
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverProfileReportRequest {
    #[serde(flatten)]
    pub base: BaseReportRequest,
    pub driver_id: Option<u64>,
    pub with_driver_trip_summary: bool,
    pub without_empty_driver_trip_summary: bool,
}

impl DriverProfileReportRequest {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Taxi profile report
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxiProfileReportRequest {
    #[serde(flatten)]
    pub base: BaseReportRequest,
    pub taxi_id: Option<u64>,
}

impl TaxiProfileReportRequest {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Vehicle model profile report
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleModelProfileReportRequest {
    #[serde(flatten)]
    pub base: BaseReportRequest,
    pub model_id: Option<u64>,
}

impl VehicleModelProfileReportRequest {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Driver trip transaction report
///
/// The widest filter surface in the catalog: id filters, type/category
/// filters, amount ranges in both rupees and cents, a date range interpreted
/// per `date_type`, and a flag to embed the driver profile in each record.
/// Dates pass through as strings; the gateway accepts both
/// `yyyy-MM-dd'T'HH:mm:ss.SSSZ` and `yyyy-MM-dd HH:mm:ss` forms.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverTripTransactionReportRequest {
    #[serde(flatten)]
    pub base: BaseReportRequest,
    pub transaction_id: Option<u64>,
    pub driver_id: Option<u64>,
    pub trip_id: Option<u64>,
    pub transaction_types: Vec<TransactionType>,
    pub transaction_categories: Vec<String>,
    pub min_amount_in_rupee: Option<i64>,
    pub max_amount_in_rupee: Option<i64>,
    pub min_amount_in_cents: Option<i64>,
    pub max_amount_in_cents: Option<i64>,
    pub description: Option<String>,
    pub date_type: DateType,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub created_by: Option<String>,
    pub with_driver_profile: bool,
}

impl Default for DriverTripTransactionReportRequest {
    fn default() -> Self {
        DriverTripTransactionReportRequest {
            base: BaseReportRequest::default(),
            transaction_id: None,
            driver_id: None,
            trip_id: None,
            transaction_types: Vec::new(),
            transaction_categories: Vec::new(),
            min_amount_in_rupee: None,
            max_amount_in_rupee: None,
            min_amount_in_cents: None,
            max_amount_in_cents: None,
            description: None,
            date_type: DateType::CreateTime,
            from_date: None,
            to_date: None,
            created_by: None,
            with_driver_profile: false,
        }
    }
}

impl DriverTripTransactionReportRequest {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Driver trip summary report: the same request shape as trip transactions
/// with no added state, only a different action tag
pub type DriverTripSummaryReportRequest = DriverTripTransactionReportRequest;

/// Driver block reason report
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverBlockReasonSummaryReportRequest {
    #[serde(flatten)]
    pub base: BaseReportRequest,
    pub driver_id: Option<u64>,
}

impl DriverBlockReasonSummaryReportRequest {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Driver cancel reason report
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverCancelReasonProfileReportRequest {
    #[serde(flatten)]
    pub base: BaseReportRequest,
    pub reason_id: Option<u64>,
}

impl DriverCancelReasonProfileReportRequest {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Driver credit-debit ledger report
///
/// Extends the trip-transaction filter surface with one flag to embed the
/// taxi-driver mapping. The intended default for that flag is unconfirmed
/// with the API owner; it is off here.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverCreditDebitReportRequest {
    #[serde(flatten)]
    pub transaction: DriverTripTransactionReportRequest,
    pub with_taxi_driver_mapping: bool,
}

impl DriverCreditDebitReportRequest {
    pub fn new() -> Self {
        Self::default()
    }
}
