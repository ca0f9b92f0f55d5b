//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: layout error (bad palette, bad config, planner bounds bug)
//! - 11: I/O error (decode, encode, file write)
//! - 12: input error (bad stride, unreadable source)
//! - 13: serialization error

use palette_ramp_core::RampError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// A core layout error (empty palette, invalid config, bounds bug).
    Layout(RampError),
    /// An I/O error (decode, encode, file write).
    Io(String),
    /// A user input error (stride mismatch against the source image).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Layout(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Layout(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<RampError> for CliError {
    fn from(e: RampError) -> Self {
        match e {
            RampError::Io(msg) => CliError::Io(msg),
            RampError::StrideMismatch { .. } => CliError::Input(e.to_string()),
            other => CliError::Layout(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
