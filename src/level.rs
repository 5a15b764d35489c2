// SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt::Display;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Very detailed debugging, normally filtered upstream
    Trace,
    /// Print-style debugging
    Debug,
    /// Normal operation
    Info,
    /// Suspicious condition
    Warning,
    /// Runtime error
    Error,
    /// Unrecoverable failure
    Critical,
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Level::Trace => "Trace",
            Level::Debug => "Debug",
            Level::Info => "Info",
            Level::Warning => "Warning",
            Level::Error => "Error",
            Level::Critical => "Critical",
        };
        f.write_str(name)
    }
}
