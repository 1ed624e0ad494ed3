// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log record type for the teelog logging system.
//!
//! This module defines [`LogRecord`], the value that carries one emitted
//! event from the facade to the renderer: severity, wall-clock timestamp,
//! caller location and the pre-formatted message.  A record is stamped once
//! when the level method is called and then rendered exactly once; the
//! rendered line is what fans out to the sinks.

use crate::Level;
use chrono::{DateTime, Local};
use std::panic::Location;
use std::path::Path;

/**
A single emitted log event.

Records are created by the facade's level methods and handed to the
[`Render`](crate::Render) implementation.  They are not reused; each
emission builds a fresh record.
*/
#[derive(Debug, Clone)]
pub struct LogRecord {
    level: Level,
    timestamp: DateTime<Local>,
    location: &'static Location<'static>,
    message: String,
}

impl LogRecord {
    /// Stamps a new record with the current local time.
    pub fn new(level: Level, location: &'static Location<'static>, message: String) -> Self {
        Self {
            level,
            timestamp: Local::now(),
            location,
            message,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Path of the source file that invoked the level method, as recorded
    /// by the compiler (e.g. `src/worker.rs`).
    pub fn file(&self) -> &'static str {
        self.location.file()
    }

    /// Base name of [`Self::file`].
    pub fn short_file(&self) -> &str {
        Path::new(self.location.file())
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_else(|| self.location.file())
    }

    pub fn line(&self) -> u32 {
        self.location.line()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/*
Boilerplate notes for LogRecord:

IMPLEMENTED:
- Debug: derived, essential for diagnostics
- Clone: derived, records may be duplicated for capture in tests

NOT IMPLEMENTED:
- PartialEq/Eq/Hash: the timestamp makes value equality more confusing
  than useful
- Default: a record without a level, location and message is meaningless
- Display: rendering belongs to the injectable Render implementation,
  not the record itself
*/

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn probe() -> LogRecord {
        LogRecord::new(Level::Info, Location::caller(), "probe".to_string())
    }

    #[test]
    fn short_file_is_base_name() {
        let record = probe();
        assert_eq!(record.short_file(), "log_record.rs");
        assert!(!record.short_file().contains('/'));
        assert!(record.line() > 0);
    }

    #[test]
    fn carries_level_and_message() {
        let record = probe();
        assert_eq!(record.level(), Level::Info);
        assert_eq!(record.message(), "probe");
    }
}
