// SPDX-License-Identifier: MIT OR Apache-2.0

//! The log sink adapter: formats events and forwards them to a collector.

use crate::collector::Collector;
use crate::level::Level;
use crate::logger::Logger;
use crate::scope::{ScopeError, ScopeGuard, ScopeStack};
use std::error::Error;
use std::fmt::Display;
use std::sync::Arc;

/// Category names this long or longer are abbreviated to their segment initials.
const CATEGORY_SHORTEN_THRESHOLD: usize = 30;

/// A logger that formats events into test-runner output lines.
///
/// Each event becomes one line of the form
/// `<HH:MM:SS.mmm> <shortened-category> <level> <scope-chain>: <message>`,
/// forwarded to the collector; an attached error adds a second line with the
/// error's full textual form. Formatting is defensive and the collector contract
/// is infallible, so logging never fails the caller.
///
/// Instances are created per category name by
/// [`TestLoggerProvider`](crate::TestLoggerProvider), with the category
/// abbreviation computed once up front.
#[derive(Debug)]
pub struct TestLogger {
    category: String,
    short_category: String,
    collector: Arc<dyn Collector>,
    scopes: ScopeStack,
}

impl TestLogger {
    pub fn new(collector: Arc<dyn Collector>, scopes: ScopeStack, category: &str) -> Self {
        Self {
            category: category.to_string(),
            short_category: shorten_category(category),
            collector,
            scopes,
        }
    }

    /// Returns the full category name this logger was created for.
    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Pushes a scope under this logger's category.
    ///
    /// Shorthand for [`ScopeStack::enter`] with the logger's own category name.
    pub fn begin_scope(&self, state: impl Display) -> Result<ScopeGuard, ScopeError> {
        self.scopes.enter(&self.category, state)
    }
}

impl Logger for TestLogger {
    fn enabled(&self, _level: Level) -> bool {
        // No filtering at the sink; the factory filters upstream.
        true
    }

    fn log(&self, level: Level, error: Option<&(dyn Error + 'static)>, message: &str) {
        let line = format!(
            "{} {} {} {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            self.short_category,
            level,
            self.scopes.render_chain(),
            message
        );
        self.collector.write_line(&line);
        if let Some(error) = error {
            self.collector.write_line(&render_error(error));
        }
    }
}

/// Abbreviates a dotted category name for line output.
///
/// Names under 30 characters, and names with fewer than 3 dot-separated
/// segments, are used verbatim. Otherwise every segment except the last two is
/// truncated to its first character.
fn shorten_category(category: &str) -> String {
    if category.len() < CATEGORY_SHORTEN_THRESHOLD {
        return category.to_string();
    }
    let segments: Vec<&str> = category.split('.').collect();
    if segments.len() < 3 {
        return category.to_string();
    }
    let mut shortened = Vec::with_capacity(segments.len());
    for segment in &segments[..segments.len() - 2] {
        // An empty segment stays empty rather than panicking on a missing char.
        shortened.push(segment.chars().next().map(String::from).unwrap_or_default());
    }
    for segment in &segments[segments.len() - 2..] {
        shortened.push((*segment).to_string());
    }
    shortened.join(".")
}

/// Renders an error and its source chain into one line.
fn render_error(error: &(dyn Error + 'static)) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
