// SPDX-License-Identifier: MIT OR Apache-2.0

//! Concurrent execution contexts share one collector but never share scope chains.

use scopelog::{InMemoryCollector, Level, Logger, ScopeStack, TestLogger};
use std::sync::Arc;

#[test]
fn forked_contexts_keep_independent_chains_through_one_collector() {
    let collector = Arc::new(InMemoryCollector::new());
    let scopes = ScopeStack::new();
    let _server = scopes.enter("server", "listener").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|request| {
            let collector = collector.clone();
            let worker_scopes = scopes.fork();
            std::thread::spawn(move || {
                let logger = TestLogger::new(collector, worker_scopes.clone(), "server");
                let _request = worker_scopes
                    .enter("server", format!("request {request}"))
                    .unwrap();
                for step in 0..10 {
                    logger.log(Level::Info, None, &format!("step {step}"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // The parent context never saw any worker scope.
    assert_eq!(scopes.render_chain(), "| listener | ");

    // 4 workers x 10 steps, interleaved at line granularity, each line tagged
    // with exactly its own worker's chain over the inherited one.
    let lines = collector.drain_lines();
    assert_eq!(lines.len(), 40);
    for request in 0..4 {
        let tagged = lines
            .iter()
            .filter(|line| line.contains(&format!("| request {request} | listener | : step")))
            .count();
        assert_eq!(tagged, 10);
    }
}

#[test]
fn scopes_entered_in_a_child_are_invisible_to_the_parent_logger() {
    let collector = Arc::new(InMemoryCollector::new());
    let scopes = ScopeStack::new();
    let logger = TestLogger::new(collector.clone(), scopes.clone(), "app");

    let child = scopes.fork();
    let _child_scope = child.enter("app", "background flush").unwrap();

    logger.log(Level::Info, None, "foreground");
    let lines = collector.drain_lines();
    assert!(lines[0].ends_with(" app Info : foreground"));
}
