// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! This module provides an in-memory sink for testing and debugging.  The
//! [`MemorySink`] captures rendered lines in memory rather than writing them
//! to the console or a file, making it ideal for:
//!
//! - Unit testing code that logs through a [`Logger`](crate::Logger)
//! - Capturing output where stdout is redirected or unavailable
//! - Programmatically examining rendered records
//!
//! ## Architecture
//!
//! The sink stores lines in a `Mutex<Vec<String>>`.  Multiple threads can
//! write concurrently; each call to [`Sink::write_line`](crate::Sink)
//! appends exactly one whole rendered line, so the buffer never contains a
//! partial record.
//!
//! ## Example
//!
//! ```rust
//! use teelog::{Logger, MemorySink};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = Logger::with_sinks(vec![sink.clone()]);
//!
//! logger.info("captured in memory");
//!
//! let lines = sink.drain();
//! assert_eq!(lines.len(), 1);
//! assert!(lines[0].ends_with("captured in memory"));
//! ```

use crate::sink::Sink;
use std::sync::Mutex;

/// A sink that stores rendered lines in a `Vec<String>`.
///
/// Thread-safe; share it across threads with `Arc`.  Retrieve captured
/// lines with [`Self::drain`] or inspect them with [`Self::lines`].
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// Design decisions for MemorySink trait implementations:
//
// - Debug: Derived - required by the Sink trait
// - Default: Derived - the obvious zero value is an empty buffer
// - Clone: NOT implemented - a clone would capture nothing the original
//   sees, which is a trap in tests
// - PartialEq/Eq/Hash: NOT implemented - equality of capture buffers is
//   not a meaningful operation

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns all captured lines, oldest first.
    pub fn drain(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(mut lines) => std::mem::take(&mut *lines),
            Err(_) => Vec::new(),
        }
    }

    /// Returns a copy of the captured lines without clearing the buffer.
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(_) => Vec::new(),
        }
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }

    fn flush(&self) {
        // Nothing buffered beyond the Vec itself.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_the_buffer() {
        let sink = MemorySink::new();
        sink.write_line("one");
        sink.write_line("two");

        assert_eq!(sink.lines(), vec!["one", "two"]);
        assert_eq!(sink.drain(), vec!["one", "two"]);
        assert!(sink.drain().is_empty());
    }
}
