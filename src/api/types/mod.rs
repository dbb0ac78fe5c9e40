//! Request and response types shared by handlers

pub mod error;
pub mod responses;

pub use error::{ApiError, ApiErrorKind, ApiErrorResponse, PAYLOAD_TOO_LARGE_MESSAGE};
pub use responses::{ModelUploadResponse, StatusResponse};
