//! Single-file extraction from multipart bodies

use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use tracing::debug;

use crate::domain::{DomainError, UploadedFile};

pub const NO_SELECTED_FILE: &str = "No selected file";

/// How to look up one file field and what to say when it is unusable
pub struct FileField<'a> {
    pub name: &'a str,
    pub missing_message: &'a str,
    pub invalid_type_message: &'a str,
}

/// Reads the first file part called `wanted.name`.
///
/// Parts without a `filename` parameter are not files and are skipped like
/// any other field. The filename and extension are checked before the body
/// is read, so a rejected upload is never buffered.
pub async fn take_file(
    multipart: &mut Multipart,
    wanted: &FileField<'_>,
    max_body_size: usize,
    accepts: impl Fn(&str) -> bool,
) -> Result<UploadedFile, DomainError> {
    let to_domain = |err: MultipartError| read_error(err, max_body_size);

    while let Some(field) = multipart.next_field().await.map_err(to_domain)? {
        if field.name() != Some(wanted.name) {
            continue;
        }

        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        if filename.is_empty() {
            return Err(DomainError::validation(NO_SELECTED_FILE));
        }

        if !accepts(&filename) {
            debug!(field = wanted.name, filename = %filename, "Rejected upload extension");
            return Err(DomainError::validation(wanted.invalid_type_message));
        }

        let contents = field.bytes().await.map_err(to_domain)?;

        return Ok(UploadedFile::new(filename, contents));
    }

    Err(DomainError::validation(wanted.missing_message))
}

/// Maps a body read failure, keeping oversized bodies distinct
fn read_error(err: MultipartError, max_body_size: usize) -> DomainError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return DomainError::payload_too_large(max_body_size);
    }

    debug!(error = %err.body_text(), "Malformed multipart body");
    DomainError::validation(format!("Failed to read multipart body: {}", err.body_text()))
}
