use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::message::Message;

/// Matches that fall into one date bucket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchBucket<'a> {
    /// Total number of non-overlapping matches across the bucket's messages
    pub count: usize,
    /// Messages with at least one match, in ingestion order
    pub messages: Vec<&'a Message>,
}

/// Content search results keyed by formatted date, sorted by key
///
/// Every date that has a message in the searched direction gets a bucket, even when nothing
/// in it matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchBuckets<'a> {
    buckets: BTreeMap<String, SearchBucket<'a>>,
}

impl<'a> SearchBuckets<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the bucket for `key`, creating an empty one if needed
    pub fn bucket_mut(&mut self, key: String) -> &mut SearchBucket<'a> {
        self.buckets.entry(key).or_default()
    }

    pub fn get(&self, key: &str) -> Option<&SearchBucket<'a>> {
        self.buckets.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SearchBucket<'a>)> {
        self.buckets.iter().map(|(key, bucket)| (key.as_str(), bucket))
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Sum of match counts over all buckets
    pub fn total_count(&self) -> usize {
        self.buckets.values().map(|bucket| bucket.count).sum()
    }

    /// Number of matching messages over all buckets
    pub fn total_messages(&self) -> usize {
        self.buckets.values().map(|bucket| bucket.messages.len()).sum()
    }
}
