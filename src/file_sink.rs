// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plain append-mode file sink.
//!
//! No rotation: the file grows until something external truncates it.  For
//! bounded files use [`RotatingFileSink`](crate::RotatingFileSink) instead.

use crate::error::BuildError;
use crate::sink::Sink;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/**
A sink that appends rendered records to a single file.

Thread-safe via `Mutex<BufWriter<File>>`.  Each record is flushed through
to the file as it is written so a crash loses at most the record in
flight, and the buffer is flushed again on `Drop`.
*/
#[derive(Debug)]
pub struct FileSink {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl FileSink {
    /**
    Opens `path` in append/create mode, creating missing parent directories.

    Both the directory creation and the open are construction-time failures;
    the caller gets a [`BuildError`] rather than a sink that silently drops
    records.
    */
    pub fn create(path: impl AsRef<Path>) -> Result<Self, BuildError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| BuildError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|source| BuildError::OpenFile {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// The path this sink appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }

    fn flush(&self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
