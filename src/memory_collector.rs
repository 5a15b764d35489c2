// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Collector
//!
//! This module provides an in-memory output collector for testing and debugging.
//! The `InMemoryCollector` captures forwarded lines in memory rather than writing
//! them to a console, making it ideal for:
//!
//! - Asserting on the exact lines a logger produced
//! - Capturing output in environments where stderr is redirected or unavailable
//! - Examining log output programmatically
//!
//! ## Architecture
//!
//! The collector stores lines behind a mutex, so multiple execution contexts can
//! forward lines concurrently while tests get a consistent view of the result.

use crate::collector::Collector;
use parking_lot::Mutex;

/// An output collector that stores forwarded lines in a `Vec<String>`.
///
/// # Example
///
/// ```rust
/// use scopelog::{Collector, InMemoryCollector};
///
/// let collector = InMemoryCollector::new();
/// collector.write_line("10:04:00.123 cat Info : hello");
///
/// let lines = collector.drain_lines();
/// assert_eq!(lines.len(), 1);
/// assert!(lines[0].ends_with(": hello"));
///
/// // The buffer is now empty.
/// assert!(collector.drain_lines().is_empty());
/// ```
#[derive(Debug)]
pub struct InMemoryCollector {
    lines: Mutex<Vec<String>>,
}

// Clone is NOT implemented: a collector is a unique capture buffer, and tests
// share one instance behind an Arc instead.

impl Default for InMemoryCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCollector {
    /// Creates a collector with an empty capture buffer.
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Returns a copy of the captured lines, leaving the buffer intact.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Takes all captured lines out of the buffer.
    ///
    /// Subsequent calls return an empty vector until new lines are forwarded.
    pub fn drain_lines(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl Collector for InMemoryCollector {
    fn write_line(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}
