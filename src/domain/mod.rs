//! Domain layer - Core types and the seams infrastructure plugs into

pub mod analysis;
pub mod error;
pub mod model_artifact;
pub mod upload;

pub use analysis::{AnalysisResult, Analyzer, Outcome};
pub use error::DomainError;
pub use model_artifact::{ModelStatus, ModelStore};
pub use upload::{UploadedFile, extension_of, has_allowed_extension, secure_filename};
