//! Upload domain - transient uploaded files and filename rules

mod filename;

use bytes::Bytes;

pub use filename::{extension_of, has_allowed_extension, secure_filename};

/// A file received in a multipart request.
///
/// Lives only for the duration of the request that carried it.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub contents: Bytes,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, contents: Bytes) -> Self {
        Self {
            filename: filename.into(),
            contents,
        }
    }

    /// Filename reduced to a single safe path component
    pub fn sanitized_name(&self) -> String {
        secure_filename(&self.filename)
    }
}
