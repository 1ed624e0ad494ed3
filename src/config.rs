// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sink configuration.
//!
//! [`FileOutput`] selects the facade's file destination once, at
//! construction.  [`SinkConfig`] carries the rotation policy handed to the
//! rotating-file collaborator; the facade configures rotation, it never
//! implements it.

use std::path::PathBuf;

/**
The file destination of a [`Logger`](crate::Logger), chosen once by the
caller.

Console output is always present; this enum only picks what sits next to
it.  There is deliberately no way to supply both a plain path and a
rotation config: earlier designs that accepted loosely-typed construction
arguments had to document that the rotation config silently won, and this
type makes that case unrepresentable.
*/
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FileOutput {
    /// Console only.
    #[default]
    None,
    /// Console plus a plain append-mode file.  Parent directories are
    /// created if missing.
    Plain(PathBuf),
    /// Console plus a size-rotated file governed by the config's policy.
    Rotating(SinkConfig),
}

/**
Rotation policy for one rotating-file destination.

The policy is passed through to the rotation collaborator at construction;
numeric fields are normalized to positive defaults rather than rejected.
Only an empty [`Self::filename`] fails construction.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    /// Target path, e.g. `logs/app.log`.  Required, must be non-empty.
    pub filename: PathBuf,
    /// Size a file may reach before it is rotated, in megabytes.
    /// 0 is normalized to 1.
    pub max_size_mb: u64,
    /// Rotated files retained before the oldest is deleted.
    /// 0 is normalized to 1.
    pub max_backups: u64,
    /// Days a rotated file may be retained; 0 means unbounded.  Carried for
    /// parity with the rotation policy surface, but the current rotation
    /// collaborator prunes backups by [`Self::max_backups`] only, so this
    /// field is validated and passed through without being enforced.
    pub max_age_days: u64,
    /// Gzip-compress rotated files.
    pub compress: bool,
}

impl SinkConfig {
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }

    /// Returns a copy with non-positive numeric fields replaced by their
    /// defaults.  The filename is left untouched; emptiness is checked at
    /// sink construction, not here.
    pub fn normalized(mut self) -> Self {
        if self.max_size_mb == 0 {
            self.max_size_mb = 1;
        }
        if self.max_backups == 0 {
            self.max_backups = 1;
        }
        self
    }
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            filename: PathBuf::new(),
            max_size_mb: 1,
            max_backups: 1,
            max_age_days: 0,
            compress: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sizes_normalize_to_one() {
        let config = SinkConfig {
            filename: PathBuf::from("logs/app.log"),
            max_size_mb: 0,
            max_backups: 0,
            max_age_days: 0,
            compress: false,
        }
        .normalized();

        assert_eq!(config.max_size_mb, 1);
        assert_eq!(config.max_backups, 1);
        assert_eq!(config.max_age_days, 0, "0 age means unbounded, not defaulted");
    }

    #[test]
    fn positive_values_survive_normalization() {
        let config = SinkConfig {
            filename: PathBuf::from("logs/app.log"),
            max_size_mb: 25,
            max_backups: 7,
            max_age_days: 28,
            compress: true,
        }
        .normalized();

        assert_eq!(config.max_size_mb, 25);
        assert_eq!(config.max_backups, 7);
        assert_eq!(config.max_age_days, 28);
        assert!(config.compress);
    }

    #[test]
    fn default_file_output_is_console_only() {
        assert_eq!(FileOutput::default(), FileOutput::None);
    }
}
