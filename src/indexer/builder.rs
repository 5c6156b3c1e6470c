//! Index builder for phone backup files.

use std::path::Path;

use tracing::info;

use crate::error::{NbuError, Result};
use crate::indexer::index::MessageIndex;
use crate::parsers::{lex_records, read_backup_file};

/// Build a [`MessageIndex`] from a backup file
///
/// Runs the whole pipeline eagerly: decode → lex → parse → build. The returned index holds
/// sent and received messages in file order.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or read, or exceeds the size limit ([`NbuError::Decode`])
/// - The file contains no `VMSG` records ([`NbuError::Decode`])
/// - Any record is malformed ([`NbuError::MalformedRecord`], [`NbuError::UnbalancedMarker`])
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use nbu_explorer::build_message_index;
///
/// let index = build_message_index(Path::new("backup.nbu"))?;
/// println!("{} sent, {} received", index.sent.len(), index.received.len());
/// # Ok::<(), nbu_explorer::NbuError>(())
/// ```
pub fn build_message_index(path: &Path) -> Result<MessageIndex> {
    let text = read_backup_file(path)?;
    let blocks = lex_records(&text);

    if blocks.is_empty() {
        return Err(NbuError::Decode {
            path: path.to_path_buf(),
            reason: "no VMSG records found".to_string(),
        });
    }

    let index = MessageIndex::from_blocks(&blocks)?;

    info!(
        "Indexed {} messages from {} ({} sent, {} received)",
        index.len(),
        path.display(),
        index.sent.len(),
        index.received.len()
    );

    Ok(index)
}
