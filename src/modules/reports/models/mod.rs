pub mod action;
pub mod envelope;
pub mod report_request;
pub mod response;

pub use action::{ActionType, ApiVersion, DateType, HttpHeader, TransactionType};
pub use envelope::GatewayRequest;
pub use report_request::{
    BaseReportRequest, DriverBlockReasonSummaryReportRequest,
    DriverCancelReasonProfileReportRequest, DriverCreditDebitReportRequest,
    DriverProfileReportRequest, DriverTripSummaryReportRequest,
    DriverTripTransactionReportRequest, PeopleProfileReportRequest, Sorter,
    TaxiProfileReportRequest, VehicleModelProfileReportRequest,
};
pub use response::{GatewayResponse, ResponseData};
