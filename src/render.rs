// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record rendering.
//!
//! The facade renders each [`LogRecord`] to a line of text exactly once and
//! fans the line out to every sink.  [`Render`] is the seam for swapping the
//! layout; [`TextRenderer`] is the provided implementation and the default.

use crate::log_record::LogRecord;
use std::fmt::Debug;

/// Turns one record into the line that every sink receives.
pub trait Render: Debug + Send + Sync {
    fn render(&self, record: &LogRecord) -> String;
}

/// Timestamp layout used by [`TextRenderer`]: local time, second precision.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/**
The default line layout:

```text
2026-08-29 14:03:05 [INFO] worker.rs:42 queue drained
```

Time, bracketed level, short caller location, then the message.
*/
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextRenderer;

impl TextRenderer {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Render for TextRenderer {
    fn render(&self, record: &LogRecord) -> String {
        format!(
            "{} {} {}:{} {}",
            record.timestamp().format(TIME_FORMAT),
            record.level().bracketed(),
            record.short_file(),
            record.line(),
            record.message()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;
    use std::panic::Location;

    #[test]
    fn layout_is_time_level_caller_message() {
        let record = LogRecord::new(Level::Warning, Location::caller(), "disk almost full".to_string());
        let line = TextRenderer::new().render(&record);

        let mut parts = line.splitn(4, ' ');
        let date = parts.next().unwrap();
        let time = parts.next().unwrap();
        let level = parts.next().unwrap();
        let rest = parts.next().unwrap();

        assert_eq!(date.len(), "2026-08-29".len());
        assert_eq!(time.len(), "14:03:05".len());
        assert_eq!(level, "[WARN]");
        assert!(rest.starts_with("render.rs:"));
        assert!(rest.ends_with(" disk almost full"));
    }

    #[test]
    fn rendering_is_deterministic_for_a_fixed_record() {
        let record = LogRecord::new(Level::Info, Location::caller(), "same".to_string());
        let renderer = TextRenderer::new();
        assert_eq!(renderer.render(&record), renderer.render(&record));
    }
}
