//! Trace steps
//!
//! A trace is the ordered list of micro-operations one conversion performed.
//! Every [`Step`] owns copies of the stack and output as they were when the
//! step was emitted, so the working containers can keep changing without
//! rewriting history.
//!
//! Steps serialize with the field names the rendering layer expects:
//!
//! ```json
//! {
//!   "step": 1,
//!   "inputSymbol": "A",
//!   "operation": "PUSH",
//!   "currentStack": ["A"],
//!   "narration": "Scanning 'A' (L-R). It's an **operand**. Pushing onto the stack."
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Input symbol recorded on the terminal step.
pub const END_SYMBOL: &str = "END";

/// The micro-operation a step records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    Push,
    #[serde(rename = "POP_OP1")]
    PopOperand1,
    #[serde(rename = "POP_OP2")]
    PopOperand2,
    CombinePush,
    AddToOutput,
    PopParenthesis,
    PopPrecedenceThenPush,
    Done,
}

impl Operation {
    pub fn tag(&self) -> &'static str {
        match self {
            Operation::Push => "PUSH",
            Operation::PopOperand1 => "POP_OP1",
            Operation::PopOperand2 => "POP_OP2",
            Operation::CombinePush => "COMBINE_PUSH",
            Operation::AddToOutput => "ADD_TO_OUTPUT",
            Operation::PopParenthesis => "POP_PARENTHESIS",
            Operation::PopPrecedenceThenPush => "POP_PRECEDENCE_THEN_PUSH",
            Operation::Done => "DONE",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One recorded micro-operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// 1-based position in the trace.
    pub step: usize,
    /// The symbol being scanned, or [`END_SYMBOL`] for the terminal step.
    pub input_symbol: String,
    pub operation: Operation,
    pub current_stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_output: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operand1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operand2: Option<String>,
    /// Human-readable description using the `**emphasis**` markup.
    pub narration: String,
}

impl Step {
    pub fn is_terminal(&self) -> bool {
        self.operation == Operation::Done
    }

    /// The stack with its top element first.
    pub fn stack_top_first(&self) -> impl Iterator<Item = &str> {
        self.current_stack.iter().rev().map(String::as_str)
    }

    pub fn with_operand1(&mut self, operand: &str) -> &mut Self {
        self.operand1 = Some(operand.to_string());
        self
    }

    pub fn with_operand2(&mut self, operand: &str) -> &mut Self {
        self.operand2 = Some(operand.to_string());
        self
    }
}

/// Accumulates steps for a single conversion run.
///
/// The counter starts at 1 and covers the terminal step as well.
#[derive(Debug)]
pub struct TraceBuilder {
    next_step: usize,
    steps: Vec<Step>,
}

impl TraceBuilder {
    pub fn new() -> Self {
        TraceBuilder {
            next_step: 1,
            steps: Vec::new(),
        }
    }

    /// Record a step, copying the live containers.
    pub fn emit(
        &mut self,
        symbol: char,
        operation: Operation,
        stack: &[String],
        output: Option<&[String]>,
        narration: String,
    ) -> &mut Step {
        log::trace!("step {}: {} on '{}'", self.next_step, operation, symbol);
        self.push(Step {
            step: self.next_step,
            input_symbol: symbol.to_string(),
            operation,
            current_stack: stack.to_vec(),
            current_output: output.map(<[String]>::to_vec),
            operand1: None,
            operand2: None,
            narration,
        })
    }

    /// Append the terminal step and hand back the finished trace.
    ///
    /// `target` names the notation produced ("Prefix", "Postfix").
    pub fn finish(
        mut self,
        result: &str,
        target: &str,
        stack: &[String],
        output: &[String],
    ) -> Vec<Step> {
        log::trace!("step {}: {} -> {}", self.next_step, Operation::Done, result);
        self.push(Step {
            step: self.next_step,
            input_symbol: END_SYMBOL.to_string(),
            operation: Operation::Done,
            current_stack: stack.to_vec(),
            current_output: Some(output.to_vec()),
            operand1: None,
            operand2: None,
            narration: format!(
                "**Conversion complete!** The final {} expression is: **{}**",
                target, result
            ),
        });
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    fn push(&mut self, step: Step) -> &mut Step {
        self.next_step += 1;
        self.steps.push(step);
        let last = self.steps.len() - 1;
        &mut self.steps[last]
    }
}

impl Default for TraceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_snapshots_are_independent_copies() {
        let mut stack = strings(&["A"]);
        let mut trace = TraceBuilder::new();
        trace.emit('A', Operation::Push, &stack, None, "push".into());

        stack.push("B".to_string());
        stack[0] = "Z".to_string();
        let steps = trace.finish("Z", "Prefix", &stack, &[]);

        assert_eq!(steps[0].current_stack, strings(&["A"]));
        assert_eq!(steps[1].current_stack, strings(&["Z", "B"]));
    }

    #[test]
    fn test_numbering_includes_terminal_step() {
        let mut trace = TraceBuilder::new();
        trace.emit('A', Operation::Push, &[], None, String::new());
        trace.emit('B', Operation::Push, &[], None, String::new());
        let steps = trace.finish("AB", "Postfix", &[], &[]);

        let numbers: Vec<_> = steps.iter().map(|s| s.step).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(steps[2].is_terminal());
        assert_eq!(steps[2].input_symbol, END_SYMBOL);
    }

    #[test]
    fn test_terminal_narration_names_result() {
        let steps = TraceBuilder::new().finish("*+AB-CD", "Prefix", &[], &[]);
        assert_eq!(
            steps[0].narration,
            "**Conversion complete!** The final Prefix expression is: ***+AB-CD**"
        );
    }

    #[test]
    fn test_operands_attach_to_emitted_step() {
        let mut trace = TraceBuilder::new();
        trace
            .emit('+', Operation::PopOperand1, &[], None, String::new())
            .with_operand1("A")
            .with_operand2("B");
        let steps = trace.finish("", "Prefix", &[], &[]);
        assert_eq!(steps[0].operand1.as_deref(), Some("A"));
        assert_eq!(steps[0].operand2.as_deref(), Some("B"));
    }

    #[test]
    fn test_operation_serializes_as_tag() {
        for op in [
            Operation::Push,
            Operation::PopOperand1,
            Operation::PopOperand2,
            Operation::CombinePush,
            Operation::AddToOutput,
            Operation::PopParenthesis,
            Operation::PopPrecedenceThenPush,
            Operation::Done,
        ] {
            let json = serde_json::to_string(&op).unwrap();
            assert_eq!(json, format!("\"{}\"", op.tag()));
        }
    }

    #[test]
    fn test_step_serializes_camel_case_without_absent_fields() {
        let mut trace = TraceBuilder::new();
        trace.emit('A', Operation::Push, &strings(&["A"]), None, "n".into());
        let steps = trace.finish("A", "Prefix", &strings(&["A"]), &strings(&["A"]));

        let value = serde_json::to_value(&steps[0]).unwrap();
        assert_eq!(value["inputSymbol"], "A");
        assert_eq!(value["currentStack"][0], "A");
        assert!(value.get("currentOutput").is_none());
        assert!(value.get("operand1").is_none());

        let value = serde_json::to_value(&steps[1]).unwrap();
        assert_eq!(value["operation"], "DONE");
        assert_eq!(value["currentOutput"][0], "A");
    }
}
