use tracing::trace;

use crate::error::{NbuError, Result};
use crate::models::NestedTree;

const BEGIN_KEY: &str = "BEGIN";
const END_KEY: &str = "END";

/// Parse one record block into a [`NestedTree`]
///
/// Each line is `KEY:VALUE`, split at the first colon so values may contain colons. `BEGIN`
/// and `END` lines open and close nesting levels; every other line is stored under the path
/// of currently open levels. Later duplicates overwrite earlier ones. Blank lines are skipped.
///
/// # Errors
///
/// - [`NbuError::MalformedRecord`] if a non-blank line has no colon
/// - [`NbuError::UnbalancedMarker`] if an `END` does not close the innermost open level, or a
///   level is still open when the block ends
pub fn parse_block(block: &str) -> Result<NestedTree> {
    let mut tree = NestedTree::new();
    let mut open: Vec<&str> = Vec::new();

    for line in block.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| NbuError::malformed(format!("line without ':' separator: {:?}", line)))?;

        match key {
            BEGIN_KEY => open.push(value),
            END_KEY => match open.last() {
                Some(&top) if top == value => {
                    open.pop();
                }
                top => return Err(NbuError::unbalanced(top.copied(), line)),
            },
            _ => {
                let mut path = open.clone();
                path.push(key);
                trace!("Setting {}", path.join("/"));
                tree.set(&path, value);
            }
        }
    }

    if let Some(&unclosed) = open.last() {
        return Err(NbuError::unbalanced(Some(unclosed), "end of record"));
    }

    Ok(tree)
}
