//! Data models for parsed phone backups.
//!
//! - [`NestedTree`] - key/value tree built from one record block
//! - [`Message`] - typed SMS record with its [`Direction`]
//! - [`SearchBucket`] / [`SearchBuckets`] - date-bucketed content search results
//!
//! Models derive `Serialize` so the CLI can emit them as JSON.

pub mod message;
pub mod search;
pub mod tree;

pub use message::{Direction, Message};
pub use search::{SearchBucket, SearchBuckets};
pub use tree::{NestedTree, Node};
