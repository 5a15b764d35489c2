// SPDX-License-Identifier: MIT OR Apache-2.0

//! Drives a trivial calculator through the factory-built logger and asserts on
//! the captured output, the way the adapter is used from a real test suite.

use scopelog::{Builder, InMemoryCollector, Level, Logger, ScopeStack, TestLoggerProvider};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("division by zero")]
struct DivideByZero;

struct Calculator;

impl Calculator {
    fn add(&self, a: i64, b: i64) -> i64 {
        a + b
    }

    fn subtract(&self, a: i64, b: i64) -> i64 {
        a - b
    }

    fn divide(&self, a: i64, b: i64) -> Result<i64, DivideByZero> {
        if b == 0 {
            return Err(DivideByZero);
        }
        Ok(a / b)
    }
}

struct Harness {
    collector: Arc<InMemoryCollector>,
    scopes: ScopeStack,
    factory: scopelog::LoggerFactory,
}

fn harness() -> Harness {
    let collector = Arc::new(InMemoryCollector::new());
    let scopes = ScopeStack::new();
    let factory = Builder::new()
        .set_minimum_level(Level::Debug)
        .add_provider(Arc::new(TestLoggerProvider::new(
            collector.clone(),
            scopes.clone(),
        )))
        .build();
    Harness {
        collector,
        scopes,
        factory,
    }
}

/// `HH:MM:SS.mmm`, 12 characters.
fn has_timestamp(line: &str) -> bool {
    let bytes = line.as_bytes();
    bytes.len() > 12
        && bytes[2] == b':'
        && bytes[5] == b':'
        && bytes[8] == b'.'
        && [0, 1, 3, 4, 6, 7, 9, 10, 11]
            .iter()
            .all(|&i| bytes[i].is_ascii_digit())
}

#[test]
fn add_two_numbers_logs_sum() {
    let h = harness();
    let logger = h.factory.create_logger("Calculator.Tests.Addition");

    let _scope = h.scopes.enter("Calculator.Tests.Addition", "add 2 + 3").unwrap();
    logger.log(Level::Info, None, "testing addition");
    let result = Calculator.add(2, 3);
    assert_eq!(result, 5);
    logger.log(Level::Info, None, &format!("result: {result}"));

    let lines = h.collector.drain_lines();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| has_timestamp(line)));
    assert!(lines[0].ends_with(" Calculator.Tests.Addition Info | add 2 + 3 | : testing addition"));
    assert!(lines[1].ends_with(" Calculator.Tests.Addition Info | add 2 + 3 | : result: 5"));
}

#[test]
fn subtract_two_numbers_logs_difference() {
    let h = harness();
    let logger = h.factory.create_logger("Calculator.Tests.Subtraction");

    let _scope = h
        .scopes
        .enter("Calculator.Tests.Subtraction", "subtract 5 - 3")
        .unwrap();
    let result = Calculator.subtract(5, 3);
    assert_eq!(result, 2);
    logger.log(Level::Info, None, &format!("result: {result}"));

    let lines = h.collector.drain_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("| subtract 5 - 3 | : result: 2"));
}

#[test]
fn divide_by_zero_logs_error_detail_line() {
    let h = harness();
    let logger = h.factory.create_logger("Calculator.Tests.Division");

    let error = Calculator.divide(1, 0).unwrap_err();
    logger.log(Level::Error, Some(&error), "division failed");

    let lines = h.collector.drain_lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" Calculator.Tests.Division Error : division failed"));
    assert_eq!(lines[1], "division by zero");
}

#[test]
fn nested_operations_unwind_to_a_clean_stack() {
    let h = harness();
    let logger = h.factory.create_logger("Calculator.Tests.Nesting");
    let before = h.scopes.current();
    assert!(before.is_none());

    {
        let _suite = h.scopes.enter("Calculator.Tests.Nesting", "suite").unwrap();
        let _case = h.scopes.enter("Calculator.Tests.Nesting", "case 1").unwrap();
        logger.log(Level::Debug, None, "checking");
    }
    logger.log(Level::Debug, None, "done");

    let lines = h.collector.drain_lines();
    assert!(lines[0].ends_with("| case 1 | suite | : checking"));
    assert!(lines[1].ends_with(" Calculator.Tests.Nesting Debug : done"));
    assert!(h.scopes.current().is_none());
}

#[test]
fn long_category_names_are_abbreviated_in_output() {
    let h = harness();
    let logger = h
        .factory
        .create_logger("Calculator.Tests.Regression.LongDivisionEdgeCases");
    logger.log(Level::Info, None, "ok");

    let lines = h.collector.drain_lines();
    assert!(lines[0].contains(" C.T.Regression.LongDivisionEdgeCases Info "));
}
