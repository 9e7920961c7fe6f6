//! Postfix to prefix
//!
//! Scan left to right. Operands are pushed as-is; an operator pops operand 2
//! (the most recent entry), then operand 1, and pushes `operator + op1 + op2`
//! back as a single entry. A valid expression leaves exactly one entry.
//!
//! Parentheses have no meaning in postfix and are pushed like operands.

use super::{ConversionKind, ConversionResult};
use crate::notation::error::ConversionError;
use crate::notation::expression::Expression;
use crate::notation::symbol::is_operator;
use crate::notation::trace::{Operation, TraceBuilder};

const KIND: ConversionKind = ConversionKind::PostfixToPrefix;

pub fn convert(raw: &str) -> ConversionResult {
    let expression = Expression::normalize(raw);
    if expression.is_empty() {
        return ConversionResult::empty(KIND);
    }
    log::debug!("{}: scanning '{}'", KIND, expression);

    let (stack, trace) = match scan(&expression) {
        Ok(state) => state,
        Err(error) => return ConversionResult::failed(KIND, error),
    };

    let result = match stack.as_slice() {
        [prefix] => prefix.clone(),
        _ => ConversionError::InvalidPostfix.sentinel().to_string(),
    };
    let steps = trace.finish(&result, KIND.target(), &stack, std::slice::from_ref(&result));
    ConversionResult::completed(KIND, result, steps)
}

fn scan(expression: &Expression) -> Result<(Vec<String>, TraceBuilder), ConversionError> {
    let mut stack: Vec<String> = Vec::new();
    let mut trace = TraceBuilder::new();

    for symbol in expression.symbols() {
        if !is_operator(symbol) {
            stack.push(symbol.to_string());
            trace.emit(
                symbol,
                Operation::Push,
                &stack,
                None,
                format!(
                    "Scanning '{}' (L-R). It's an **operand**. Pushing onto the stack.",
                    symbol
                ),
            );
            continue;
        }

        if stack.len() < 2 {
            return Err(ConversionError::InvalidPostfix);
        }

        let operand2 = stack.pop().ok_or(ConversionError::InvalidPostfix)?;
        trace
            .emit(
                symbol,
                Operation::PopOperand2,
                &stack,
                None,
                format!("Operator '{}'. Popping Operand 2: **{}**.", symbol, operand2),
            )
            .with_operand2(&operand2);

        let operand1 = stack.pop().ok_or(ConversionError::InvalidPostfix)?;
        trace
            .emit(
                symbol,
                Operation::PopOperand1,
                &stack,
                None,
                format!("Popping Operand 1: **{}**.", operand1),
            )
            .with_operand1(&operand1)
            .with_operand2(&operand2);

        let combined = format!("{}{}{}", symbol, operand1, operand2);
        stack.push(combined.clone());
        trace.emit(
            symbol,
            Operation::CombinePush,
            &stack,
            None,
            format!("Combining: **{}**. Pushing the result.", combined),
        );
    }

    Ok((stack, trace))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::error::INVALID_POSTFIX;

    fn ops(result: &ConversionResult) -> Vec<Operation> {
        result.steps.iter().map(|s| s.operation).collect()
    }

    #[test]
    fn test_converts_sample_expression() {
        let result = convert("A B + C D - *");
        assert_eq!(result.result, "*+AB-CD");
        // 4 operands, 3 operators x 3 steps, 1 terminal
        assert_eq!(result.steps.len(), 14);
    }

    #[test]
    fn test_single_operator_trace() {
        let result = convert("ab+");
        assert_eq!(
            ops(&result),
            vec![
                Operation::Push,
                Operation::Push,
                Operation::PopOperand2,
                Operation::PopOperand1,
                Operation::CombinePush,
                Operation::Done,
            ]
        );

        let pop2 = &result.steps[2];
        assert_eq!(pop2.operand2.as_deref(), Some("B"));
        assert_eq!(pop2.operand1, None);
        assert_eq!(pop2.current_stack, vec!["A"]);

        let pop1 = &result.steps[3];
        assert_eq!(pop1.operand1.as_deref(), Some("A"));
        assert_eq!(pop1.operand2.as_deref(), Some("B"));
        assert!(pop1.current_stack.is_empty());

        assert_eq!(result.steps[4].current_stack, vec!["+AB"]);
        assert_eq!(result.steps[4].narration, "Combining: **+AB**. Pushing the result.");
    }

    #[test]
    fn test_underflow_fails_fast() {
        let result = convert("A +");
        assert_eq!(result.result, INVALID_POSTFIX);
        assert!(result.steps.is_empty());
    }

    #[test]
    fn test_leftover_operands_keep_trace() {
        let result = convert("A B");
        assert_eq!(result.result, INVALID_POSTFIX);
        assert_eq!(ops(&result), vec![Operation::Push, Operation::Push, Operation::Done]);

        let done = &result.steps[2];
        assert_eq!(done.current_stack, vec!["A", "B"]);
        assert_eq!(
            done.narration,
            "**Conversion complete!** The final Prefix expression is: **ERROR: Invalid Postfix**"
        );
    }

    #[test]
    fn test_single_operand_is_its_own_prefix() {
        let result = convert("x");
        assert_eq!(result.result, "X");
        assert_eq!(result.steps.len(), 2);
    }

    #[test]
    fn test_parentheses_are_pushed_as_operands() {
        let result = convert("( ) +");
        assert_eq!(result.result, "+()");
    }

    #[test]
    fn test_terminal_step_carries_result_as_output() {
        let result = convert("AB*");
        let done = result.steps.last().unwrap();
        assert_eq!(done.input_symbol, "END");
        assert_eq!(done.current_output, Some(vec!["*AB".to_string()]));
        assert!(result.steps[..result.steps.len() - 1]
            .iter()
            .all(|s| s.current_output.is_none()));
    }
}
