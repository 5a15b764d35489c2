// SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt::Debug;

/**
The output collector a log sink forwards to, such as a test runner's console.

Collectors receive one call per formatted log line, and one more per error
detail line. Implementations are expected to interleave concurrent writers at
line granularity and to absorb their own I/O failures; logging never fails the
operation that logged.
*/
pub trait Collector: Debug + Send + Sync {
    /**
        Writes one line to the underlying output.
    */
    fn write_line(&self, line: &str);
}

/*
Boilerplate notes.

# Collector

Clone on a trait object is out, and collectors typically hold unique resources anyway.
PartialEq/Eq are possible but it's unclear whether we mean data equality or provenance, so skip.
Ord/Hash make no sense here.
Default doesn't generalize (a file collector needs a path, etc.)
Display is not sensible.
Send/Sync are required: one collector is shared by every logger the factory hands out.
*/
