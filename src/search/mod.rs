//! Queries over a built [`MessageIndex`](crate::indexer::MessageIndex)
//!
//! - [`content`] - regex search with date-bucketed match counts
//! - [`phone`] - substring search on the counterpart phone number
//!
//! Queries never mutate the index; every call builds its results from scratch.

pub mod content;
pub mod phone;

pub use content::{ContentQuery, DEFAULT_BUCKET_FORMAT};
