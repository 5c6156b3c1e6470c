use crate::indexer::MessageIndex;
use crate::models::{Direction, Message};

impl MessageIndex {
    /// Messages of one direction whose phone number contains `fragment`, in ingestion order
    ///
    /// Matching is a plain substring test. Numbers are not normalized, so `+44 7700` will not
    /// match a stored `07700`.
    pub fn search_phone(&self, direction: Direction, fragment: &str) -> Vec<&Message> {
        self.messages(direction)
            .iter()
            .filter(|message| message.phone_number.contains(fragment))
            .collect()
    }
}
