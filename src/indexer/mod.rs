//! Message index building for phone backups
//!
//! # Error Handling Strategy
//!
//! Ingestion is all-or-nothing per file:
//!
//! - **Decode failures**: an unreadable or oversized file, or one with no `VMSG` records at
//!   all, is reported as [`NbuError::Decode`](crate::error::NbuError::Decode).
//!
//! - **Record failures**: the first record that cannot be parsed aborts ingestion. The error
//!   carries the 1-based record number so the offending block can be located.
//!
//! - **Summary reporting**: counts per direction are logged at info level once the index is
//!   built.

pub mod builder;
pub mod index;

pub use builder::build_message_index;
pub use index::MessageIndex;
