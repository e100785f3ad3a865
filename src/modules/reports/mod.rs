pub mod models;
pub mod services;

pub use models::{
    ActionType, ApiVersion, BaseReportRequest, DateType, DriverBlockReasonSummaryReportRequest,
    DriverCancelReasonProfileReportRequest, DriverCreditDebitReportRequest,
    DriverProfileReportRequest, DriverTripSummaryReportRequest,
    DriverTripTransactionReportRequest, GatewayRequest, GatewayResponse, HttpHeader,
    PeopleProfileReportRequest, ResponseData, Sorter, TaxiProfileReportRequest, TransactionType,
    VehicleModelProfileReportRequest,
};
pub use services::{to_canonical_json, sign, HttpTransport, ReportGatewayClient, Transport};
