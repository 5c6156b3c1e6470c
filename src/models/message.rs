use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::{NbuError, Result};
use crate::models::tree::NestedTree;

const MESSAGE_TYPE_PATH: [&str; 2] = ["VMSG", "X-MESSAGE-TYPE"];
const TIMESTAMP_PATH: [&str; 2] = ["VMSG", "X-NOK-DT"];
const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Sent,
    Received,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Sent => f.write_str("sent"),
            Direction::Received => f.write_str("received"),
        }
    }
}

/// Value of the `X-MESSAGE-TYPE` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    /// Inbound message
    Deliver,
    /// Outbound message
    Submit,
}

impl MessageType {
    pub fn direction(self) -> Direction {
        match self {
            MessageType::Deliver => Direction::Received,
            MessageType::Submit => Direction::Sent,
        }
    }

    /// Path of the body text; outbound records nest the body one envelope deeper
    fn content_path(self) -> &'static [&'static str] {
        match self {
            MessageType::Deliver => &["VMSG", "VENV", "VBODY", "CONTENT"],
            MessageType::Submit => &["VMSG", "VENV", "VENV", "VBODY", "CONTENT"],
        }
    }

    /// Path of the counterpart's phone number
    fn phone_path(self) -> &'static [&'static str] {
        match self {
            MessageType::Deliver => &["VMSG", "VCARD", "TEL"],
            MessageType::Submit => &["VMSG", "VENV", "VCARD", "TEL"],
        }
    }
}

impl FromStr for MessageType {
    type Err = NbuError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "DELIVER" => Ok(MessageType::Deliver),
            "SUBMIT" => Ok(MessageType::Submit),
            other => Err(NbuError::malformed(format!("unknown X-MESSAGE-TYPE '{}'", other))),
        }
    }
}

/// One SMS record from a backup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub direction: Direction,
    pub timestamp: NaiveDateTime,
    pub phone_number: String,
    pub content: String,
}

impl Message {
    /// Build a message from the tree of a single record block
    ///
    /// # Errors
    ///
    /// Returns [`NbuError::MalformedRecord`] if the discriminator is missing or unknown, if a
    /// field expected for that discriminator is missing, or if the timestamp does not match
    /// `YYYYMMDDTHHMMSSZ`.
    pub fn from_tree(tree: &NestedTree) -> Result<Self> {
        let message_type: MessageType = require(tree, &MESSAGE_TYPE_PATH)?.parse()?;

        let content = require(tree, message_type.content_path())?.to_string();
        let phone_number = require(tree, message_type.phone_path())?.to_string();

        let raw_timestamp = require(tree, &TIMESTAMP_PATH)?.trim_end_matches(['\r', '\n']);
        let timestamp =
            NaiveDateTime::parse_from_str(raw_timestamp, TIMESTAMP_FORMAT).map_err(|e| {
                NbuError::malformed(format!("invalid X-NOK-DT '{}': {}", raw_timestamp, e))
            })?;

        Ok(Message { direction: message_type.direction(), timestamp, phone_number, content })
    }
}

fn require<'a>(tree: &'a NestedTree, path: &[&str]) -> Result<&'a str> {
    tree.get_value(path).ok_or_else(|| NbuError::malformed(format!("missing {}", path.join("/"))))
}
