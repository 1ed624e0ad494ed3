// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::sink::Sink;
use std::io::Write;

/**
A sink that writes to the process's standard output.

The whole rendered line plus its newline is written under a single stdout
lock, so records from concurrent callers never interleave mid-line.  The
handle is owned by the sink rather than grabbed globally per call; every
facade targeting the console shares the same underlying stream, and the
stream's own lock is what serializes them.
 */
#[derive(Debug)]
pub struct ConsoleSink {
    stdout: std::io::Stdout,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// Design decisions for ConsoleSink trait implementations:
//
// - Debug: Derived - required by the Sink trait
// - Default: Implemented - convenient zero-argument constructor
// - Clone/Copy: NOT implemented - the sink models ownership of the console
//   destination; clones would suggest independent streams that don't exist
// - PartialEq/Eq/Hash: NOT implemented - no meaningful equality beyond
//   "it's stdout"
// - Send/Sync: Automatic - std::io::Stdout is internally synchronized

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            stdout: std::io::stdout(),
        }
    }
}

impl Sink for ConsoleSink {
    fn write_line(&self, line: &str) {
        let mut lock = self.stdout.lock();
        // A failed console write must not surface to the emitting caller.
        let _ = lock.write_all(line.as_bytes());
        let _ = lock.write_all(b"\n");
    }

    fn flush(&self) {
        let _ = self.stdout.lock().flush();
    }
}
