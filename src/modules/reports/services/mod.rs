pub mod canonical;
pub mod report_client;
pub mod signature;
pub mod transport;

pub use canonical::to_canonical_json;
pub use report_client::ReportGatewayClient;
pub use signature::sign;
pub use transport::{HttpTransport, Transport};
