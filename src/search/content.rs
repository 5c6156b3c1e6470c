use std::fmt::Write;

use chrono::NaiveDateTime;
use chrono::format::{Item, StrftimeItems};
use regex::{Regex, RegexBuilder};

use crate::error::{NbuError, Result};
use crate::indexer::MessageIndex;
use crate::models::{Direction, SearchBuckets};

/// Monthly buckets
pub const DEFAULT_BUCKET_FORMAT: &str = "%Y-%m";

/// Options for [`MessageIndex::search_content`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentQuery {
    pub pattern: String,
    pub case_sensitive: bool,
    /// strftime-style format applied to each message timestamp to form its bucket key
    pub bucket_format: String,
}

impl ContentQuery {
    /// Case-insensitive query with monthly buckets
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            case_sensitive: false,
            bucket_format: DEFAULT_BUCKET_FORMAT.to_string(),
        }
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn bucket_format(mut self, bucket_format: impl Into<String>) -> Self {
        self.bucket_format = bucket_format.into();
        self
    }

    fn compile(&self) -> Result<Regex> {
        RegexBuilder::new(&self.pattern)
            .case_insensitive(!self.case_sensitive)
            .build()
            .map_err(|source| NbuError::InvalidPattern { pattern: self.pattern.clone(), source })
    }

    fn bucket_items(&self) -> Result<Vec<Item<'_>>> {
        let items: Vec<Item<'_>> = StrftimeItems::new(&self.bucket_format).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            return Err(self.invalid_bucket_format());
        }
        Ok(items)
    }

    /// Format `timestamp` into a bucket key
    ///
    /// Timezone specifiers (`%z`, `%Z`, `%:z`) parse fine but cannot be rendered for a naive
    /// timestamp, so formatting goes through `write!` and a failure becomes an error.
    fn bucket_key(&self, items: &[Item<'_>], timestamp: &NaiveDateTime) -> Result<String> {
        let mut key = String::new();
        write!(key, "{}", timestamp.format_with_items(items.iter()))
            .map_err(|_| self.invalid_bucket_format())?;
        Ok(key)
    }

    fn invalid_bucket_format(&self) -> NbuError {
        NbuError::InvalidBucketFormat { format: self.bucket_format.clone() }
    }
}

impl MessageIndex {
    /// Search message bodies of one direction for a regex, grouping matches by date
    ///
    /// Every message contributes a bucket for its formatted date, so dates without a match
    /// still appear with a zero count. A message with several matches adds all of them to the
    /// count but is listed once.
    ///
    /// Matches are counted with [`Regex::find_iter`]. An empty match directly after a previous
    /// match is not reported, so patterns that can match the empty string (`\w*`) count fewer
    /// matches than engines that report it (`\w*` on `"ab"` counts 1, not 2).
    ///
    /// # Errors
    ///
    /// - [`NbuError::InvalidPattern`] if the pattern does not compile
    /// - [`NbuError::InvalidBucketFormat`] if the bucket format has invalid specifiers or
    ///   specifiers a timestamp without timezone cannot render
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use std::path::Path;
    /// use nbu_explorer::{ContentQuery, Direction, build_message_index};
    ///
    /// let index = build_message_index(Path::new("backup.nbu"))?;
    /// let buckets = index.search_content(Direction::Sent, &ContentQuery::new("call"))?;
    /// for (month, bucket) in buckets.iter() {
    ///     println!("{}: {}", month, bucket.count);
    /// }
    /// # Ok::<(), nbu_explorer::NbuError>(())
    /// ```
    pub fn search_content(
        &self,
        direction: Direction,
        query: &ContentQuery,
    ) -> Result<SearchBuckets<'_>> {
        let regex = query.compile()?;
        let items = query.bucket_items()?;

        let mut buckets = SearchBuckets::new();
        for message in self.messages(direction) {
            let key = query.bucket_key(&items, &message.timestamp)?;
            let bucket = buckets.bucket_mut(key);

            let matches = regex.find_iter(&message.content).count();
            if matches > 0 {
                bucket.count += matches;
                bucket.messages.push(message);
            }
        }

        Ok(buckets)
    }
}
