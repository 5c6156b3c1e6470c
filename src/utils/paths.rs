use std::borrow::Cow;
use std::env;
use std::fs::File;
use std::path::Path;

use crate::error::{NbuError, Result};

// Maximum backup file size: 256MB
const MAX_FILE_SIZE_BYTES: u64 = 256 * 1024 * 1024;

/// Validates that an open file is within the supported size
///
/// The whole backup is decoded in memory, so oversized inputs are rejected up front.
///
/// # Errors
///
/// Returns [`NbuError::Decode`] if:
/// - The file metadata cannot be read
/// - The file is larger than 256MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file.metadata().map_err(|e| NbuError::Decode {
        path: path.to_path_buf(),
        reason: format!("failed to read file metadata: {}", e),
    })?;

    check_size(metadata.len(), path)
}

fn check_size(file_size: u64, path: &Path) -> Result<()> {
    if file_size > MAX_FILE_SIZE_BYTES {
        return Err(NbuError::Decode {
            path: path.to_path_buf(),
            reason: format!(
                "file too large ({} bytes, max {} bytes)",
                file_size, MAX_FILE_SIZE_BYTES
            ),
        });
    }

    Ok(())
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use nbu_explorer::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/backups/phone.nbu");
/// // Returns "~/backups/phone.nbu" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
