//! Client filename rules: extension whitelisting and sanitising

/// Name used when sanitising leaves nothing behind
const FALLBACK_FILENAME: &str = "upload";

/// Maximum length kept from a client supplied filename
const MAX_FILENAME_LENGTH: usize = 128;

/// Returns the lowercased extension after the last dot, if any
pub fn extension_of(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;

    if ext.is_empty() {
        return None;
    }

    Some(ext.to_ascii_lowercase())
}

/// Checks the filename's extension against a whitelist (case-insensitive)
pub fn has_allowed_extension<S: AsRef<str>>(filename: &str, allowed: &[S]) -> bool {
    extension_of(filename)
        .map(|ext| allowed.iter().any(|a| a.as_ref().eq_ignore_ascii_case(&ext)))
        .unwrap_or(false)
}

/// Reduces a client filename to a safe single path component.
///
/// Only ASCII alphanumerics, `.`, `_` and `-` survive. Path separators and
/// whitespace become `_`, leading dots and underscores are dropped, so the
/// result can never name a parent directory or a hidden file.
pub fn secure_filename(filename: &str) -> String {
    let mut out = String::with_capacity(filename.len());

    for c in filename.chars() {
        match c {
            c if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' => out.push(c),
            '/' | '\\' => out.push('_'),
            c if c.is_whitespace() => out.push('_'),
            _ => {}
        }
    }

    let trimmed = out.trim_start_matches(['.', '_']);
    let mut name: String = trimmed.chars().take(MAX_FILENAME_LENGTH).collect();

    if name.is_empty() {
        name = FALLBACK_FILENAME.to_string();
    }

    name
}
