// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-execution-context scope stack for nested log context.
//!
//! This module provides the scope system that lets concurrent operations sharing a
//! single output collector disambiguate which logical operation produced which line,
//! without threading context through every call site.
//!
//! # Overview
//!
//! The scope system consists of three types:
//!
//! - [`Scope`]: one named, immutable logging context carrying a rendered state value
//!   and a reference to its parent scope
//! - [`ScopeStack`]: the mutable cell holding one execution context's innermost live
//!   scope
//! - [`ScopeGuard`]: the handle returned by [`ScopeStack::enter`], which restores the
//!   parent scope when dropped
//!
//! # Execution-context storage
//!
//! A [`ScopeStack`] is an explicit handle rather than ambient thread-local state.
//! Clones of one stack share a single context's view; a child execution context is
//! seeded with [`ScopeStack::fork`], which copies the current scope at spawn time and
//! is isolated from the parent afterwards:
//!
//! ```rust
//! use scopelog::ScopeStack;
//!
//! let stack = ScopeStack::new();
//! let _request = stack.enter("server", "request 7").unwrap();
//!
//! // A worker spawned here starts from the same scope chain...
//! let worker = stack.fork();
//! assert_eq!(worker.render_chain(), "| request 7 | ");
//!
//! // ...but its own scopes never appear in the parent's view.
//! let _retry = worker.enter("server", "retry 1").unwrap();
//! assert_eq!(stack.render_chain(), "| request 7 | ");
//! ```
//!
//! # Stack discipline
//!
//! Scopes form a strict stack per execution context. The guard restores the parent on
//! every exit path, normal or unwinding, so a fully unwound stack always reads the
//! same as before the first `enter`.

use parking_lot::Mutex;
use std::fmt::Display;
use std::sync::Arc;
use thiserror::Error;

/// Error produced when entering a scope with invalid state.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScopeError {
    /// The attached state rendered to an empty string.
    #[error("scope state must render to non-empty text")]
    EmptyState,
}

#[derive(Debug)]
struct ScopeInner {
    category: String,
    state: String,
    parent: Option<Scope>,
}

/// One nested logging context.
///
/// A `Scope` is an immutable node in a chain from innermost to outermost context.
/// It holds the category name it was entered under, the textual rendering of its
/// attached state, and its parent. Scopes are cheap to clone (Arc-based) and
/// compare by identity, not contents.
///
/// Scopes are created through [`ScopeStack::enter`]; on exit they become
/// unreachable from the stack but remain valid through any outstanding clone.
#[derive(Debug, Clone)]
pub struct Scope {
    inner: Arc<ScopeInner>,
}

impl PartialEq for Scope {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Scope {}

impl std::hash::Hash for Scope {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.inner).hash(state);
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner.state)
    }
}

impl Scope {
    /// Returns the category name this scope was entered under.
    #[inline]
    pub fn category(&self) -> &str {
        &self.inner.category
    }

    /// Returns the textual rendering of the attached state.
    #[inline]
    pub fn state_text(&self) -> &str {
        &self.inner.state
    }

    /// Returns the enclosing scope, if any.
    #[inline]
    pub fn parent(&self) -> Option<&Scope> {
        self.inner.parent.as_ref()
    }
}

/// The per-execution-context cell holding the innermost live scope.
///
/// Cloning a `ScopeStack` shares the same cell; use [`fork`](ScopeStack::fork) to
/// seed an independent child context instead.
///
/// # Examples
///
/// ```rust
/// use scopelog::ScopeStack;
///
/// let stack = ScopeStack::new();
/// assert!(stack.current().is_none());
/// {
///     let _outer = stack.enter("worker", "outer").unwrap();
///     let _inner = stack.enter("worker", "inner").unwrap();
///     assert_eq!(stack.render_chain(), "| inner | outer | ");
/// }
/// assert!(stack.current().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScopeStack {
    current: Arc<Mutex<Option<Scope>>>,
}

impl ScopeStack {
    /// Creates an empty stack for a new execution context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the innermost live scope, or `None` if no scope is active.
    ///
    /// Pure read, no side effects.
    pub fn current(&self) -> Option<Scope> {
        self.current.lock().clone()
    }

    /// Pushes a new scope whose parent is the current one.
    ///
    /// `state` is rendered to text immediately; the scope is immutable from then on.
    /// Fails fast with [`ScopeError::EmptyState`] if the rendering is empty; a
    /// scope that cannot annotate a log line is a caller bug, not something to
    /// silently default.
    ///
    /// The returned guard restores the parent scope when dropped. Nesting depth is
    /// unbounded.
    pub fn enter(&self, category: &str, state: impl Display) -> Result<ScopeGuard, ScopeError> {
        let rendered = state.to_string();
        if rendered.is_empty() {
            return Err(ScopeError::EmptyState);
        }
        let mut current = self.current.lock();
        let parent = current.clone();
        *current = Some(Scope {
            inner: Arc::new(ScopeInner {
                category: category.to_string(),
                state: rendered,
                parent: parent.clone(),
            }),
        });
        Ok(ScopeGuard {
            stack: self.clone(),
            parent,
        })
    }

    /// Creates an independent stack for a child execution context.
    ///
    /// The child starts from this stack's current scope, captured at the time of
    /// the call. Subsequent pushes and pops on either side do not affect the other.
    pub fn fork(&self) -> ScopeStack {
        ScopeStack {
            current: Arc::new(Mutex::new(self.current())),
        }
    }

    /// Renders the active scope chain from innermost to outermost.
    ///
    /// Each entry is the textual form of the scope's attached state, as
    /// `| <state1> | <state2> ... | `. An empty chain renders as the empty string.
    pub fn render_chain(&self) -> String {
        let mut chain = String::new();
        let mut scope = self.current();
        while let Some(s) = scope {
            chain.push_str("| ");
            chain.push_str(s.state_text());
            chain.push(' ');
            scope = s.parent().cloned();
        }
        if !chain.is_empty() {
            chain.push_str("| ");
        }
        chain
    }
}

/// Handle that releases an entered scope.
///
/// Dropping the guard sets the stack's current scope back to the entered scope's
/// parent. Release runs on every exit path, including panic unwind, and at most
/// once per guard by construction.
#[derive(Debug)]
#[must_use = "dropping the guard releases the scope immediately"]
pub struct ScopeGuard {
    stack: ScopeStack,
    parent: Option<Scope>,
}

impl ScopeGuard {
    /// Returns the scope that will become current again on release.
    pub fn parent(&self) -> Option<&Scope> {
        self.parent.as_ref()
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        *self.stack.current.lock() = self.parent.take();
    }
}
