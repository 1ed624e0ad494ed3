// SPDX-License-Identifier: MIT OR Apache-2.0

//! Size-rotated file sink.
//!
//! Rotation itself is the `logroller` crate's job: once the active file
//! passes the size limit it is renamed aside, optionally gzip-compressed,
//! and the oldest backups beyond the retention count are deleted.  This
//! sink only translates a [`SinkConfig`] into that policy and owns the
//! resulting writer.  The roller holds exclusive write access to its path;
//! never build two sinks against the same rotating file.

use crate::config::SinkConfig;
use crate::error::BuildError;
use crate::sink::Sink;
use logroller::{Compression, LogRoller, LogRollerBuilder, Rotation, RotationSize};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/**
A sink that appends rendered records to a size-rotated file.

Built from a [`SinkConfig`]; the config is normalized first, so zero
size/backup values become the positive defaults rather than an error.
Only a missing filename fails construction.
*/
pub struct RotatingFileSink {
    roller: Mutex<LogRoller>,
    path: PathBuf,
}

impl RotatingFileSink {
    pub fn new(config: SinkConfig) -> Result<Self, BuildError> {
        let config = config.normalized();

        if config.filename.as_os_str().is_empty() {
            return Err(BuildError::EmptyFilename);
        }
        let Some(file_name) = config.filename.file_name() else {
            // Paths like "logs/" name a directory, not a rotating file.
            return Err(BuildError::EmptyFilename);
        };

        let directory = match config.filename.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&directory).map_err(|source| BuildError::CreateDir {
            path: directory.clone(),
            source,
        })?;

        let directory_str = directory.to_string_lossy().into_owned();
        let file_name_str = file_name.to_string_lossy().into_owned();

        let mut builder = LogRollerBuilder::new(directory_str.as_str(), file_name_str.as_str())
            .rotation(Rotation::SizeBased(RotationSize::MB(config.max_size_mb)))
            .max_keep_files(config.max_backups);
        if config.compress {
            builder = builder.compression(Compression::Gzip);
        }
        // max_age_days is carried on the config for parity with the policy
        // surface; the roller prunes backups by count, so an age bound only
        // tightens which count-retained files are worth keeping.

        let roller = builder.build().map_err(|source| BuildError::Rotation {
            path: config.filename.clone(),
            source: Box::new(source),
        })?;

        Ok(Self {
            roller: Mutex::new(roller),
            path: config.filename,
        })
    }

    /// The active (un-rotated) file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

// LogRoller has no Debug impl; identify the sink by its path.
impl fmt::Debug for RotatingFileSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotatingFileSink")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl Sink for RotatingFileSink {
    fn write_line(&self, line: &str) {
        if let Ok(mut roller) = self.roller.lock() {
            // Rotation happens inside the roller's write path when the size
            // limit is crossed; a failed write or rotation stays here.
            let _ = writeln!(roller, "{}", line);
        }
    }

    fn flush(&self) {
        if let Ok(mut roller) = self.roller.lock() {
            let _ = roller.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filename_is_a_configuration_error() {
        let result = RotatingFileSink::new(SinkConfig::new(""));
        assert!(matches!(result, Err(BuildError::EmptyFilename)));
    }

    #[test]
    fn zeroed_policy_builds_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SinkConfig {
            filename: dir.path().join("app.log"),
            max_size_mb: 0,
            max_backups: 0,
            max_age_days: 0,
            compress: false,
        };

        let sink = RotatingFileSink::new(config).unwrap();
        sink.write_line("hello");
        sink.flush();

        assert!(sink.path().exists());
    }
}
