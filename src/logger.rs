// SPDX-License-Identifier: MIT OR Apache-2.0

//! The logging facade.
//!
//! A [`Logger`] owns a fixed set of sinks and a renderer.  Each level
//! method stamps a record with the current time and the application's call
//! site, renders it once, and writes the rendered line to every sink.  The
//! sinks are independent paths; one sink failing never suppresses delivery
//! to another, and no failure ever reaches the emitting caller.

use crate::config::FileOutput;
use crate::console_sink::ConsoleSink;
use crate::error::BuildError;
use crate::file_sink::FileSink;
use crate::level::Level;
use crate::log_record::LogRecord;
use crate::render::{Render, TextRenderer};
use crate::rotating_sink::RotatingFileSink;
use crate::sink::Sink;
use std::panic::Location;
use std::sync::Arc;

/// Every sink emits at this severity and above; `debug` records are dropped
/// before rendering.  Fixed by design, not per-sink overridable.
const MIN_LEVEL: Level = Level::Info;

/**
A caller-aware logging facade that tees every record to all of its sinks.

The sink set is chosen once, at construction, and is fixed for the
facade's lifetime.  Emission is safe from concurrent threads without
external locking; each sink serializes its own writes.

```rust
use teelog::Logger;

let logger = Logger::console();
logger.info("ready");
```

A rotating file sink owns exclusive write access to its path.  Do not
construct two facades against the same rotating-file path.
*/
#[derive(Debug)]
pub struct Logger {
    sinks: Vec<Arc<dyn Sink>>,
    renderer: Box<dyn Render>,
}

impl Logger {
    /// A console-only facade.  Cannot fail.
    pub fn console() -> Self {
        Self::with_sinks(vec![Arc::new(ConsoleSink::new())])
    }

    /**
    Builds a facade writing to the console plus the selected file output.

    | `output` | behavior |
    |---|---|
    | [`FileOutput::None`] | console only |
    | [`FileOutput::Plain`] | console + append-mode file, parents created |
    | [`FileOutput::Rotating`] | console + size-rotated file per the config |

    Any file-side failure aborts construction with a [`BuildError`];
    console-only operation is never silently substituted.
    */
    pub fn new(output: FileOutput) -> Result<Self, BuildError> {
        let mut sinks: Vec<Arc<dyn Sink>> = vec![Arc::new(ConsoleSink::new())];
        match output {
            FileOutput::None => {}
            FileOutput::Plain(path) => {
                sinks.push(Arc::new(FileSink::create(path)?));
            }
            FileOutput::Rotating(config) => {
                sinks.push(Arc::new(RotatingFileSink::new(config)?));
            }
        }
        Ok(Self::with_sinks(sinks))
    }

    /// Builds a facade over an explicit sink set, with the default
    /// renderer.  This is the seam tests use to capture output via
    /// [`MemorySink`](crate::MemorySink).
    pub fn with_sinks(sinks: Vec<Arc<dyn Sink>>) -> Self {
        Self {
            sinks,
            renderer: Box::new(TextRenderer::new()),
        }
    }

    /// Replaces the renderer, keeping the sink set.
    pub fn with_renderer(mut self, renderer: Box<dyn Render>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Logs an info message.
    #[track_caller]
    pub fn info(&self, msg: &str) {
        self.emit(Level::Info, msg);
    }

    /// Logs a warning message.
    #[track_caller]
    pub fn warn(&self, msg: &str) {
        self.emit(Level::Warning, msg);
    }

    /// Logs an error message.
    #[track_caller]
    pub fn error(&self, msg: &str) {
        self.emit(Level::Error, msg);
    }

    /// Logs a debug message.  Dropped under the fixed Info threshold; the
    /// call is still attributed correctly if the threshold ever moves.
    #[track_caller]
    pub fn debug(&self, msg: &str) {
        self.emit(Level::Debug, msg);
    }

    // Both this method and the public level methods are #[track_caller], so
    // Location::caller() resolves through exactly these two wrapper frames
    // to the application's call site.  If another internal layer is added it
    // must be annotated too; the attribution tests pin this.
    #[track_caller]
    fn emit(&self, level: Level, msg: &str) {
        if level < MIN_LEVEL {
            return;
        }
        let record = LogRecord::new(level, Location::caller(), msg.to_string());
        let line = self.renderer.render(&record);
        for sink in &self.sinks {
            sink.write_line(&line);
        }
    }

    /// Flushes every sink.
    pub fn flush(&self) {
        for sink in &self.sinks {
            sink.flush();
        }
    }
}

/*
Boilerplate notes.

# Logger

Clone is deliberately absent: two handles sharing sinks is fine (wrap in
Arc), but a cloned facade would blur who owns the file destinations.
Default could mean Logger::console(), but an implicit console sink in a
struct literal position seems more surprising than helpful.
PartialEq/Eq/Hash: no meaningful equality for a bundle of trait objects.
*/
