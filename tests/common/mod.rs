//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Encode text the way the phone writes backups
pub fn utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(|unit| unit.to_le_bytes()).collect()
}

/// Builder for a backup file inside a temporary directory
pub struct BackupFileBuilder {
    temp_dir: TempDir,
    records: Vec<String>,
    trailer: String,
}

impl BackupFileBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, records: Vec::new(), trailer: String::new() }
    }

    /// Add a record
    pub fn with_record(mut self, record: RecordBuilder) -> Self {
        self.records.push(record.to_vmsg());
        self
    }

    /// Add raw text verbatim (for malformed input)
    pub fn with_raw(mut self, text: &str) -> Self {
        self.records.push(text.to_string());
        self
    }

    /// Text appended after all records
    pub fn with_trailer(mut self, text: &str) -> Self {
        self.trailer = text.to_string();
        self
    }

    /// Write `backup.nbu` and return the directory guard with the file path
    pub fn build(self) -> (TempDir, PathBuf) {
        let path = self.temp_dir.path().join("backup.nbu");
        let mut text = self.records.concat();
        text.push_str(&self.trailer);

        let mut file = fs::File::create(&path).expect("Failed to create backup file");
        file.write_all(&utf16le(&text)).expect("Failed to write backup file");
        (self.temp_dir, path)
    }
}

impl Default for BackupFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one VMSG record
pub struct RecordBuilder {
    message_type: Option<String>,
    timestamp: String,
    phone_number: String,
    body_lines: Vec<String>,
}

impl RecordBuilder {
    /// An inbound message
    pub fn deliver() -> Self {
        Self {
            message_type: Some("DELIVER".to_string()),
            timestamp: "20210101T120000Z".to_string(),
            phone_number: "+15550001".to_string(),
            body_lines: vec!["Test message".to_string()],
        }
    }

    /// An outbound message
    pub fn submit() -> Self {
        Self {
            message_type: Some("SUBMIT".to_string()),
            timestamp: "20210101T120000Z".to_string(),
            phone_number: "+15550002".to_string(),
            body_lines: vec!["Test reply".to_string()],
        }
    }

    /// Remove the X-MESSAGE-TYPE line
    pub fn without_message_type(mut self) -> Self {
        self.message_type = None;
        self
    }

    pub fn message_type(mut self, message_type: &str) -> Self {
        self.message_type = Some(message_type.to_string());
        self
    }

    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = timestamp.to_string();
        self
    }

    pub fn phone(mut self, phone_number: &str) -> Self {
        self.phone_number = phone_number.to_string();
        self
    }

    /// Body split over several wrapped lines
    pub fn body_lines(mut self, lines: &[&str]) -> Self {
        self.body_lines = lines.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn text(self, text: &str) -> Self {
        self.body_lines(&[text])
    }

    /// Render the record in the backup layout
    pub fn to_vmsg(&self) -> String {
        let mut header = String::from("BEGIN:VMSG\nVERSION:1.1\nX-IRMC-STATUS:READ\n");
        header.push_str(&format!("X-NOK-DT:{}\n", self.timestamp));
        if let Some(message_type) = &self.message_type {
            header.push_str(&format!("X-MESSAGE-TYPE:{}\n", message_type));
        }

        let card = format!("BEGIN:VCARD\nVERSION:3.0\nN:\nTEL:{}\nEND:VCARD\n", self.phone_number);
        let body = format!(
            "BEGIN:VBODY\nDate:01.01.2021 12:00:00\n{}\nEND:VBODY\n",
            self.body_lines.join("\n")
        );

        if self.message_type.as_deref() == Some("SUBMIT") {
            format!("{header}BEGIN:VENV\n{card}BEGIN:VENV\n{body}END:VENV\nEND:VENV\nEND:VMSG\n")
        } else {
            format!("{header}{card}BEGIN:VENV\n{body}END:VENV\nEND:VMSG\n")
        }
    }
}

/// Helper to create a realistic backup with a mix of messages
pub fn realistic_backup() -> (TempDir, PathBuf) {
    BackupFileBuilder::new()
        .with_record(
            RecordBuilder::deliver()
                .timestamp("20210105T081500Z")
                .phone("+447700900001")
                .body_lines(&["Are we still on for ", "dinner tonight?"]),
        )
        .with_record(
            RecordBuilder::submit()
                .timestamp("20210105T082000Z")
                .phone("+447700900001")
                .text("Yes, dinner at 8. Call me if late"),
        )
        .with_record(
            RecordBuilder::deliver()
                .timestamp("20210214T190000Z")
                .phone("07700900002")
                .text("Happy Valentine's"),
        )
        .with_record(
            RecordBuilder::submit()
                .timestamp("20210301T100000Z")
                .phone("+447700900003")
                .text("call call CALL"),
        )
        .with_record(
            RecordBuilder::deliver()
                .timestamp("20210302T110000Z")
                .phone("+447700900001")
                .text("Dinner next week?"),
        )
        .build()
}

/// Path that does not exist
pub fn missing_backup_path(dir: &Path) -> PathBuf {
    dir.join("does-not-exist.nbu")
}
