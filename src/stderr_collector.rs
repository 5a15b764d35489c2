// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::collector::Collector;

/**
A reference collector that writes lines to stderr.

This is the collector to use when the surrounding test harness captures stderr
itself. Write failures are discarded: the sink contract is that logging never
fails the caller, and there is nowhere left to report a broken stderr anyway.
 */
#[derive(Debug, Clone)]
pub struct StdErrorCollector {}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// Design decisions for StdErrorCollector trait implementations:
//
// - Debug/Clone: Derived - appropriate for zero-sized struct
// - Copy: Implemented - safe for zero-sized struct with no heap allocation
// - PartialEq/Eq: Implemented - all instances are equivalent (zero-sized)
// - Hash: Implemented - consistent with Eq, enables use as hash map keys
// - Default: Implemented - provides convenient zero-argument constructor
// - Display: NOT implemented - no meaningful string representation
// - From/Into: NOT implemented - no obvious conversions
// - Send/Sync: Automatically implemented - zero-sized struct is always thread-safe

impl Copy for StdErrorCollector {}

impl PartialEq for StdErrorCollector {
    fn eq(&self, _other: &Self) -> bool {
        // All instances of a zero-sized struct are equal
        true
    }
}

impl Eq for StdErrorCollector {}

impl std::hash::Hash for StdErrorCollector {
    fn hash<H: std::hash::Hasher>(&self, _state: &mut H) {
        // Zero-sized struct has no data to hash - this is consistent with Eq
    }
}

impl Default for StdErrorCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl StdErrorCollector {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Collector for StdErrorCollector {
    fn write_line(&self, line: &str) {
        use std::io::Write;
        let mut lock = std::io::stderr().lock();
        let _ = lock.write_all(line.as_bytes());
        let _ = lock.write_all(b"\n");
    }
}
