//! Response value objects shared by the retail status service.

pub mod responses;
pub mod types;

pub use responses::{HelloResponse, RootResponse, SERVICE_NAME, STATUS_OK, WELCOME_MESSAGE};
pub use types::Timestamp;
