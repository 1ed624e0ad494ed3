// SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt::Display;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Print-style debugging.  Filtered out by every sink in this design.
    Debug,
    /// Ordinary operational messages.  The minimum severity any sink emits.
    Info,
    /// Suspicious condition.
    Warning,
    /// Runtime error.
    Error,
}

impl Level {
    /**
    Returns the bracketed token used in rendered records, e.g. `[INFO]`.

    The three common levels use fixed tokens.  Any other level renders as
    its uppercased name in brackets.
    */
    pub fn bracketed(&self) -> String {
        match self {
            Level::Info => "[INFO]".to_string(),
            Level::Warning => "[WARN]".to_string(),
            Level::Error => "[ERROR]".to_string(),
            other => format!("[{}]", other.to_string().to_uppercase()),
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
        };
        f.write_str(name)
    }
}

/*
Boilerplate notes.

# Level

Copy is cheap and obvious for a fieldless enum.
Ord reflects severity: Debug < Info < Warning < Error, which the facade's
minimum-severity check relies on.
Default is not sensible; there is no neutral level.
*/
