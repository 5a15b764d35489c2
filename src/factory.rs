// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider registration and logger construction.
//!
//! This module is the consumed half of the logging-framework contract: providers
//! create one category-scoped logger on demand, a builder collects providers and a
//! minimum level, and the built factory hands out loggers that fan each event out
//! to every registered provider.
//!
//! # Examples
//!
//! ```rust
//! use scopelog::{Builder, InMemoryCollector, Level, Logger, ScopeStack, TestLoggerProvider};
//! use std::sync::Arc;
//!
//! let collector = Arc::new(InMemoryCollector::new());
//! let scopes = ScopeStack::new();
//! let factory = Builder::new()
//!     .set_minimum_level(Level::Info)
//!     .add_provider(Arc::new(TestLoggerProvider::new(collector.clone(), scopes.clone())))
//!     .build();
//!
//! let logger = factory.create_logger("MyApp.Worker");
//! logger.log(Level::Info, None, "started");
//! logger.log(Level::Debug, None, "filtered out");
//! assert_eq!(collector.lines().len(), 1);
//! ```

use crate::collector::Collector;
use crate::level::Level;
use crate::logger::Logger;
use crate::scope::ScopeStack;
use crate::test_logger::TestLogger;
use std::error::Error;
use std::fmt::Debug;
use std::sync::Arc;

/// Creates category-scoped loggers on demand.
pub trait LoggerProvider: Debug + Send + Sync {
    fn create_logger(&self, category: &str) -> Arc<dyn Logger>;
}

/// The provider for [`TestLogger`] sinks.
///
/// Holds the output collector and the execution context's scope stack; every
/// created logger shares both. Loggers are created fresh per request, with no
/// caching beyond what the caller does itself.
#[derive(Debug)]
pub struct TestLoggerProvider {
    collector: Arc<dyn Collector>,
    scopes: ScopeStack,
}

impl TestLoggerProvider {
    pub fn new(collector: Arc<dyn Collector>, scopes: ScopeStack) -> Self {
        Self { collector, scopes }
    }
}

impl LoggerProvider for TestLoggerProvider {
    fn create_logger(&self, category: &str) -> Arc<dyn Logger> {
        Arc::new(TestLogger::new(
            self.collector.clone(),
            self.scopes.clone(),
            category,
        ))
    }
}

/// Builder-style provider registration.
///
/// The minimum level defaults to [`Level::Debug`]; events below the minimum are
/// dropped by the factory before any provider's logger sees them.
#[derive(Debug)]
pub struct Builder {
    providers: Vec<Arc<dyn LoggerProvider>>,
    minimum_level: Level,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            minimum_level: Level::Debug,
        }
    }

    /// Sets the level below which the factory drops events.
    pub fn set_minimum_level(mut self, level: Level) -> Self {
        self.minimum_level = level;
        self
    }

    /// Registers a provider. Every registered provider receives every event at
    /// or above the minimum level.
    pub fn add_provider(mut self, provider: Arc<dyn LoggerProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Registers a [`TestLoggerProvider`] on hosts where the test runner output
    /// stream is known to interleave badly with the console.
    ///
    /// The platform predicate is host policy inherited from the environment this
    /// adapter was written for (Windows test hosts); elsewhere this is a no-op
    /// and callers register the provider themselves via
    /// [`add_provider`](Builder::add_provider).
    pub fn add_test_output(self, collector: Arc<dyn Collector>, scopes: ScopeStack) -> Self {
        if cfg!(target_os = "windows") {
            self.add_provider(Arc::new(TestLoggerProvider::new(collector, scopes)))
        } else {
            self
        }
    }

    pub fn build(self) -> LoggerFactory {
        LoggerFactory {
            providers: self.providers,
            minimum_level: self.minimum_level,
        }
    }
}

/// Creates per-category loggers backed by every registered provider.
#[derive(Debug)]
pub struct LoggerFactory {
    providers: Vec<Arc<dyn LoggerProvider>>,
    minimum_level: Level,
}

impl LoggerFactory {
    /// Creates a logger for `category`, on demand and uncached.
    pub fn create_logger(&self, category: &str) -> CategoryLogger {
        CategoryLogger {
            minimum_level: self.minimum_level,
            loggers: self
                .providers
                .iter()
                .map(|provider| provider.create_logger(category))
                .collect(),
        }
    }
}

/// A factory-built logger that filters by minimum level and fans out.
#[derive(Debug)]
pub struct CategoryLogger {
    minimum_level: Level,
    loggers: Vec<Arc<dyn Logger>>,
}

impl Logger for CategoryLogger {
    fn enabled(&self, level: Level) -> bool {
        level >= self.minimum_level
    }

    fn log(&self, level: Level, error: Option<&(dyn Error + 'static)>, message: &str) {
        if !self.enabled(level) {
            return;
        }
        for logger in &self.loggers {
            logger.log(level, error, message);
        }
    }
}
