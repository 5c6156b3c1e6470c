use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{NbuError, Result};
use crate::utils::validate_file_size;

/// Decode UTF-16 little-endian bytes, dropping anything that does not decode
///
/// Unpaired surrogates and a trailing odd byte are discarded rather than replaced, so a
/// damaged backup still yields as much text as possible.
pub fn decode_utf16le(bytes: &[u8]) -> String {
    let units = bytes.chunks_exact(2).map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
    char::decode_utf16(units).filter_map(|c| c.ok()).collect()
}

/// Read a backup file and decode it as UTF-16LE text
///
/// # Errors
///
/// Returns [`NbuError::Decode`] if the file cannot be opened, is larger than the supported
/// maximum, or cannot be read.
pub fn read_backup_file(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| NbuError::Decode {
        path: path.to_path_buf(),
        reason: format!("failed to open: {}", e),
    })?;
    // Validate on the open handle to avoid a stat/open race
    validate_file_size(&file, path)?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|e| NbuError::Decode {
        path: path.to_path_buf(),
        reason: format!("failed to read: {}", e),
    })?;

    if bytes.len() % 2 != 0 {
        debug!("Dropping trailing odd byte in {}", path.display());
    }

    Ok(decode_utf16le(&bytes))
}
