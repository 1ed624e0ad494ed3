// SPDX-License-Identifier: MIT OR Apache-2.0

//! Construction-time errors.
//!
//! Everything that can go wrong happens while building a
//! [`Logger`](crate::Logger): bad configuration or I/O failures opening the
//! file destination.  Emission never fails outwardly; sink write errors are
//! swallowed at the sink layer so logging cannot take down application
//! logic.

use std::path::PathBuf;
use thiserror::Error;

/// Why a [`Logger`](crate::Logger) could not be built.  When construction
/// fails, no facade is returned and no partially-configured sink set is left
/// behind; console-only operation is never silently substituted.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BuildError {
    /// A rotating sink was requested without a target path.
    #[error("rotating sink requires a non-empty filename")]
    EmptyFilename,

    /// The parent directory of a file destination could not be created.
    #[error("failed to create log directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The plain log file could not be opened in append/create mode.
    #[error("failed to open log file {}: {source}", path.display())]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The rotation collaborator rejected the policy or its target path.
    #[error("failed to build rotating sink at {}: {source}", path.display())]
    Rotation {
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
