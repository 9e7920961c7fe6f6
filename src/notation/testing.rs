//! Fluent assertion API for conversion traces
//!
//! ```rust,ignore
//! use notation::notation::testing::assert_trace;
//!
//! let result = notation::convert_postfix_to_prefix("A B +");
//! assert_trace(&result)
//!     .result("+AB")
//!     .step_count(6)
//!     .step(2, |step| {
//!         step.operation(Operation::PopOperand2).stack(&["A"]).operands(None, Some("B"));
//!     })
//!     .ends_in_done();
//! ```
//!
//! Every assertion panics with the step index in its message, so a failing
//! test points straight at the offending step.

use crate::notation::conversion::ConversionResult;
use crate::notation::trace::{Operation, Step};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a conversion result
pub fn assert_trace(result: &ConversionResult) -> TraceAssertion<'_> {
    TraceAssertion { result }
}

// ============================================================================
// Trace Assertions
// ============================================================================

pub struct TraceAssertion<'a> {
    result: &'a ConversionResult,
}

impl<'a> TraceAssertion<'a> {
    pub fn result(self, expected: &str) -> Self {
        assert_eq!(
            self.result.result, expected,
            "{}: unexpected result",
            self.result.kind
        );
        self
    }

    pub fn step_count(self, expected: usize) -> Self {
        assert_eq!(
            self.result.steps.len(),
            expected,
            "{}: expected {} steps, found {}",
            self.result.kind,
            expected,
            self.result.steps.len()
        );
        self
    }

    /// Assert the run produced no steps at all.
    pub fn empty(self) -> Self {
        self.step_count(0)
    }

    pub fn operations(self, expected: &[Operation]) -> Self {
        let actual: Vec<Operation> = self.result.steps.iter().map(|s| s.operation).collect();
        assert_eq!(actual, expected, "{}: operation sequence", self.result.kind);
        self
    }

    /// Assert the last step, and only the last step, is the terminal one.
    pub fn ends_in_done(self) -> Self {
        let kind = self.result.kind;
        let Some((last, rest)) = self.result.steps.split_last() else {
            panic!("{}: expected a terminal step, trace is empty", kind);
        };
        assert!(last.is_terminal(), "{}: last step is {}", kind, last.operation);
        if let Some(early) = rest.iter().find(|s| s.is_terminal()) {
            panic!("{}: terminal step {} before the end", kind, early.step);
        }
        self
    }

    /// Assert steps are numbered 1, 2, 3, ...
    pub fn numbered_consecutively(self) -> Self {
        for (index, step) in self.result.steps.iter().enumerate() {
            assert_eq!(
                step.step,
                index + 1,
                "{}: step at index {} is numbered {}",
                self.result.kind,
                index,
                step.step
            );
        }
        self
    }

    pub fn step<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(StepAssertion<'a>),
    {
        let Some(step) = self.result.steps.get(index) else {
            panic!(
                "{}: no step at index {} (trace has {})",
                self.result.kind,
                index,
                self.result.steps.len()
            );
        };
        check(StepAssertion {
            step,
            context: format!("{} step[{}]", self.result.kind, index),
        });
        self
    }

    pub fn last_step<F>(self, check: F) -> Self
    where
        F: FnOnce(StepAssertion<'a>),
    {
        let index = self.result.steps.len().saturating_sub(1);
        self.step(index, check)
    }
}

// ============================================================================
// Step Assertions
// ============================================================================

pub struct StepAssertion<'a> {
    step: &'a Step,
    context: String,
}

impl<'a> StepAssertion<'a> {
    pub fn operation(self, expected: Operation) -> Self {
        assert_eq!(self.step.operation, expected, "{}: operation", self.context);
        self
    }

    pub fn symbol(self, expected: &str) -> Self {
        assert_eq!(self.step.input_symbol, expected, "{}: input symbol", self.context);
        self
    }

    /// Stack contents, bottom first.
    pub fn stack(self, expected: &[&str]) -> Self {
        assert_eq!(self.step.current_stack, expected, "{}: stack", self.context);
        self
    }

    pub fn output(self, expected: &[&str]) -> Self {
        match &self.step.current_output {
            Some(output) => assert_eq!(output, expected, "{}: output", self.context),
            None => panic!("{}: expected output {:?}, found none", self.context, expected),
        }
        self
    }

    pub fn no_output(self) -> Self {
        assert!(
            self.step.current_output.is_none(),
            "{}: expected no output, found {:?}",
            self.context,
            self.step.current_output
        );
        self
    }

    pub fn operands(self, operand1: Option<&str>, operand2: Option<&str>) -> Self {
        assert_eq!(
            self.step.operand1.as_deref(),
            operand1,
            "{}: operand 1",
            self.context
        );
        assert_eq!(
            self.step.operand2.as_deref(),
            operand2,
            "{}: operand 2",
            self.context
        );
        self
    }

    pub fn narration(self, expected: &str) -> Self {
        assert_eq!(self.step.narration, expected, "{}: narration", self.context);
        self
    }

    pub fn narration_contains(self, needle: &str) -> Self {
        assert!(
            self.step.narration.contains(needle),
            "{}: narration {:?} does not contain {:?}",
            self.context,
            self.step.narration,
            needle
        );
        self
    }
}
