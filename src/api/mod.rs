//! API layer - HTTP endpoints and middleware

pub mod health;
pub mod middleware;
pub mod model_upload;
pub mod multipart;
pub mod pages;
pub mod router;
pub mod state;
pub mod status;
pub mod types;
pub mod upload;


pub use router::create_router;
pub use state::{AppState, UploadPolicy};
