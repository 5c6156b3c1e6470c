//! NBU Explorer - Search SMS messages in legacy phone backups
//!
//! This library parses the line-oriented `VMSG` container found in legacy phone backup files
//! (UTF-16LE text, vCard-like `BEGIN`/`END` nesting) into typed messages and queries them. It
//! supports:
//!
//! - Decoding and lexing the backup into one block per message record
//! - Parsing each block into a nested key/value tree and a typed [`Message`]
//! - Building an in-memory [`MessageIndex`] partitioned into sent and received messages
//! - Regex content search with date-bucketed match counts, and phone number search
//!
//! # Example
//!
//! ```no_run
//! use nbu_explorer::{ContentQuery, Direction, build_message_index};
//! use std::path::PathBuf;
//!
//! let backup = PathBuf::from("/Users/alice/backups/phone.nbu");
//! let index = build_message_index(&backup)?;
//! let buckets = index.search_content(Direction::Received, &ContentQuery::new("dinner"))?;
//! println!("{} matches", buckets.total_count());
//! # Ok::<(), nbu_explorer::NbuError>(())
//! ```

pub mod cli;
pub mod error;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod search;
pub mod utils;

// Re-export commonly used types
pub use error::NbuError;
pub use indexer::{MessageIndex, build_message_index};
pub use models::{Direction, Message, NestedTree, SearchBucket, SearchBuckets};
pub use parsers::{lex_records, parse_block};
pub use search::ContentQuery;
pub use utils::format_path_with_tilde;
