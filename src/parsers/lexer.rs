//! Splits decoded backup text into self-contained `VMSG` record blocks.
//!
//! The lexer is a three-state machine driven by marker lines:
//!
//! ```text
//! Outside --BEGIN:VMSG--> InRecord --BEGIN:VBODY--> InBody
//!    ^                       |  ^                      |
//!    +-------END:VMSG--------+  +------END:VBODY-------+
//! ```
//!
//! Marker detection is by substring because the decoder may leave stray characters around a
//! marker. Body lines are wrapped by the phone, so the lexer joins them back into a single
//! synthetic `CONTENT:` line placed just before `END:VBODY`.

use tracing::{debug, warn};

const BEGIN_VMSG: &str = "BEGIN:VMSG";
const END_VMSG: &str = "END:VMSG";
const BEGIN_VBODY: &str = "BEGIN:VBODY";
const END_VBODY: &str = "END:VBODY";
const CONTENT_KEY: &str = "CONTENT";
/// Per-line timestamp inside a body; duplicates `X-NOK-DT` and would pollute the text
const BODY_DATE_PREFIX: &str = "Date:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Outside,
    InRecord,
    InBody,
}

/// Incremental record lexer; feed lines with [`RecordLexer::feed_line`]
#[derive(Debug)]
pub struct RecordLexer {
    state: LexState,
    record: String,
    body: String,
    records: Vec<String>,
}

impl RecordLexer {
    pub fn new() -> Self {
        Self {
            state: LexState::Outside,
            record: String::new(),
            body: String::new(),
            records: Vec::new(),
        }
    }

    /// Process one line; any line terminator must already be removed
    pub fn feed_line(&mut self, line: &str) {
        match self.state {
            LexState::Outside => {
                if line.contains(BEGIN_VMSG) {
                    self.record.clear();
                    self.push_line(BEGIN_VMSG);
                    self.state = LexState::InRecord;
                }
            }
            LexState::InRecord => {
                if line.contains(BEGIN_VMSG) {
                    self.push_line(BEGIN_VMSG);
                } else if line.contains(BEGIN_VBODY) {
                    self.push_line(BEGIN_VBODY);
                    self.state = LexState::InBody;
                } else if line.contains(END_VMSG) {
                    self.push_line(END_VMSG);
                    let record = std::mem::take(&mut self.record);
                    debug!("Lexed record #{} ({} bytes)", self.records.len() + 1, record.len());
                    self.records.push(record);
                    self.state = LexState::Outside;
                } else {
                    self.push_line(line);
                }
            }
            LexState::InBody => {
                if line.trim_start().starts_with(BODY_DATE_PREFIX) {
                    return;
                }
                if line.contains(END_VBODY) {
                    let content = std::mem::take(&mut self.body);
                    self.record.push_str(CONTENT_KEY);
                    self.record.push(':');
                    self.record.push_str(&content);
                    self.record.push('\n');
                    self.push_line(END_VBODY);
                    self.state = LexState::InRecord;
                } else {
                    self.body.push_str(line);
                }
            }
        }
    }

    /// Finish lexing and return the completed records
    ///
    /// A record still open at end of input is dropped.
    pub fn finish(self) -> Vec<String> {
        if self.state != LexState::Outside {
            warn!(
                "Dropping unterminated record at end of input ({} records kept)",
                self.records.len()
            );
        }
        self.records
    }

    fn push_line(&mut self, line: &str) {
        self.record.push_str(line);
        self.record.push('\n');
    }
}

impl Default for RecordLexer {
    fn default() -> Self {
        Self::new()
    }
}

/// Split decoded backup text into record blocks
///
/// Accepts `\n`, `\r\n` and bare `\r` line endings. Each returned block starts with
/// `BEGIN:VMSG` and ends with `END:VMSG`, one line per `\n`.
pub fn lex_records(text: &str) -> Vec<String> {
    let mut lexer = RecordLexer::new();
    for line in text.lines().flat_map(|line| line.split('\r')) {
        lexer.feed_line(line);
    }
    lexer.finish()
}
