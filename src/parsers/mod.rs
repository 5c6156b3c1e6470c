//! Parsers for the legacy `VMSG` backup format
//!
//! # Pipeline
//!
//! 1. [`decode`] - read the file and decode UTF-16LE, dropping undecodable units
//! 2. [`lexer`] - split text into one block per `VMSG` record, joining wrapped body lines
//! 3. [`tree`] - turn a block into a [`NestedTree`](crate::models::NestedTree)
//! 4. [`Message::from_tree`](crate::models::Message::from_tree) - interpret the tree
//!
//! # Error Handling Strategy
//!
//! Unlike a best-effort importer, these parsers **fail fast**: a malformed record or an
//! unbalanced marker stops ingestion with a typed [`NbuError`](crate::error::NbuError). The
//! only tolerance is at the byte and line level: undecodable input is dropped by the decoder
//! and a trailing record with no `END:VMSG` is discarded by the lexer.

pub mod decode;
pub mod lexer;
pub mod tree;

pub use decode::{decode_utf16le, read_backup_file};
pub use lexer::{RecordLexer, lex_records};
pub use tree::parse_block;
