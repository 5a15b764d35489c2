//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# scopelog

scopelog routes structured log lines into a test runner's output stream, tagging
each line with a hierarchical chain of "scopes" so that interleaved output from
concurrent operations stays attributable.

# The problem

A test that drives concurrent code through one shared output stream gets one
interleaved transcript back. A line like `connection reset` is useless without
knowing *which* logical operation produced it, and threading that information
through every call site pollutes every signature along the way.

scopelog's answer is a per-execution-context stack of named scopes. An operation
enters a scope, logs through an ordinary category logger, and every line it
produces carries the scope chain:

```text
10:04:00.123 M.S.InvoiceGenerator Info | invoice 7 | request 42 | : wrote total
```

# The API

Scopes live in an explicit [`ScopeStack`] handle rather than ambient
thread-local state, so propagation to a child execution context is a visible
[`fork`](ScopeStack::fork) at the spawn site, and siblings cannot observe each
other's scopes.

```rust
use scopelog::{Builder, InMemoryCollector, Level, Logger, ScopeStack, TestLoggerProvider};
use std::sync::Arc;

let collector = Arc::new(InMemoryCollector::new());
let scopes = ScopeStack::new();
let factory = Builder::new()
    .add_provider(Arc::new(TestLoggerProvider::new(collector.clone(), scopes.clone())))
    .build();

let logger = factory.create_logger("MyApp.Worker");
let _job = scopes.enter("MyApp.Worker", "job 42").unwrap();
logger.log(Level::Info, None, "running");

assert!(collector.lines()[0].ends_with("| job 42 | : running"));
```

# Line format

`<HH:MM:SS.mmm> <category> <level> <scope chain>: <message>`, one collector call
per line. Dotted category names of 30 characters or more are abbreviated to
their segment initials, keeping the last two segments whole. An event carrying
an error forwards a second line with the error's full textual form, source
chain included.

# Filtering

The sink itself never filters ([`Logger::enabled`] on a [`TestLogger`] is
unconditionally true); the factory drops events below the minimum level
configured at [`Builder::set_minimum_level`] before any sink sees them.
*/

mod collector;
mod factory;
mod level;
mod logger;
mod memory_collector;
pub mod scope;
mod stderr_collector;
mod test_logger;

pub use collector::Collector;
pub use factory::{Builder, CategoryLogger, LoggerFactory, LoggerProvider, TestLoggerProvider};
pub use level::Level;
pub use logger::Logger;
pub use memory_collector::InMemoryCollector;
pub use scope::{Scope, ScopeError, ScopeGuard, ScopeStack};
pub use stderr_collector::StdErrorCollector;
pub use test_logger::TestLogger;
