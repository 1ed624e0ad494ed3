// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# teelog

teelog is a small caller-aware logging facade.

# The problem

A logging call usually happens behind a wrapper: your application calls a
convenience method, which calls the real logger, which calls the output
stream.  Two things tend to go wrong in that arrangement:

* The reported call site is a line inside the wrapper, not the line in your
  application that actually emitted the event.
* Output destinations get chained rather than teed, so one slow or broken
  destination takes the others down with it.

teelog fixes both.  Every record carries the application's true call site,
resolved through the facade's own wrapper frames, and every record is
rendered once and delivered to each configured sink independently.

# The facade

[`Logger`] exposes four level methods, each taking a single pre-formatted
message: [`info`](Logger::info), [`warn`](Logger::warn),
[`error`](Logger::error) and [`debug`](Logger::debug).  All sinks emit at
Info and above; `debug` is filtered.  Emission never fails outwardly:
construction is where errors surface, so that logging can never crash
application logic later.

The file destination is picked once, at construction, via [`FileOutput`]:

```rust
use teelog::{FileOutput, Logger, SinkConfig};

// Console only.  Cannot fail.
let logger = Logger::console();
logger.info("ready");

// Console plus a plain append-mode file; parent directories are created.
# let dir = tempfile::tempdir().unwrap();
# let plain_path = dir.path().join("plain/app.log");
let logger = Logger::new(FileOutput::Plain(plain_path)).unwrap();
logger.warn("disk almost full");

// Console plus a size-rotated file.
# let rotating_path = dir.path().join("rotating/app.log");
let logger = Logger::new(FileOutput::Rotating(SinkConfig {
    max_size_mb: 25,
    max_backups: 7,
    compress: true,
    ..SinkConfig::new(rotating_path)
}))
.unwrap();
logger.error("still delivered to console and file");
```

Rotation itself (renaming the full file aside, compressing it, pruning old
backups) is the `logroller` crate's job; teelog only supplies the policy.

# Call-site resolution

The [`caller`] module resolves stack frames independently of the facade.
[`caller::here`]`(0)` identifies whoever called it, with deeper frames
reachable by a larger skip, and degrades to an explicit `"unknown"`
sentinel [`caller::Frame`] instead of failing:

```rust
let frame = teelog::caller::here(0);
println!("called from {}", frame.format_short());
```

# Multithreading

A [`Logger`] is `Send + Sync`; call it from as many threads as you like
without external locking.  Each sink serializes its own writes, so a record
always lands whole, never interleaved with another thread's output.
*/

pub mod caller;
mod config;
mod console_sink;
mod error;
mod file_sink;
mod level;
mod log_record;
mod logger;
mod memory_sink;
mod render;
mod rotating_sink;
mod sink;

pub use config::{FileOutput, SinkConfig};
pub use console_sink::ConsoleSink;
pub use error::BuildError;
pub use file_sink::FileSink;
pub use level::Level;
pub use log_record::LogRecord;
pub use logger::Logger;
pub use memory_sink::MemorySink;
pub use render::{Render, TextRenderer};
pub use rotating_sink::RotatingFileSink;
pub use sink::Sink;
