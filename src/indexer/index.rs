use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::models::{Direction, Message};
use crate::parsers::parse_block;

/// In-memory messages from one backup, partitioned by direction
///
/// Both collections keep ingestion order. The index is immutable once built, so queries only
/// need `&self` and may share it freely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MessageIndex {
    pub sent: Vec<Message>,
    pub received: Vec<Message>,
}

impl MessageIndex {
    /// Build an index from lexed record blocks
    ///
    /// # Errors
    ///
    /// Returns the first record-level error with its 1-based record number; no partial index
    /// is returned.
    pub fn from_blocks<S: AsRef<str>>(blocks: &[S]) -> Result<Self> {
        let mut index = MessageIndex::default();

        for (position, block) in blocks.iter().enumerate() {
            let record = position + 1;
            let message = parse_block(block.as_ref())
                .and_then(|tree| Message::from_tree(&tree))
                .map_err(|e| e.at_record(record))?;
            debug!(
                "Record #{}: {} {} at {}",
                record, message.direction, message.phone_number, message.timestamp
            );
            index.push(message);
        }

        Ok(index)
    }

    /// Append a message to the collection for its direction
    pub fn push(&mut self, message: Message) {
        match message.direction {
            Direction::Sent => self.sent.push(message),
            Direction::Received => self.received.push(message),
        }
    }

    /// Messages of one direction, in ingestion order
    pub fn messages(&self, direction: Direction) -> &[Message] {
        match direction {
            Direction::Sent => &self.sent,
            Direction::Received => &self.received,
        }
    }

    pub fn len(&self) -> usize {
        self.sent.len() + self.received.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sent.is_empty() && self.received.is_empty()
    }

    /// All messages of both directions
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.sent.iter().chain(self.received.iter())
    }
}
