//! Infix to postfix (shunting-yard)
//!
//! Operands go straight to the output queue. Operators wait on the operator
//! stack until something of lower precedence arrives. Equal precedence pops,
//! so every operator, `^` included, associates to the left.
//!
//! Each scanned symbol emits exactly one step: a `)` that pops several
//! operators, or an operator that displaces several others, is summarised in a
//! single step. The final drain of the operator stack emits no steps of its own;
//! its effect shows in the terminal step's output.

use super::{ConversionKind, ConversionResult};
use crate::notation::error::ConversionError;
use crate::notation::expression::Expression;
use crate::notation::symbol::{classify, precedence_of, SymbolKind};
use crate::notation::trace::{Operation, TraceBuilder};

const KIND: ConversionKind = ConversionKind::InfixToPostfix;

const OPEN_PAREN: &str = "(";
const CLOSE_PAREN: &str = ")";

pub fn convert(raw: &str) -> ConversionResult {
    let expression = Expression::normalize(raw);
    if expression.is_empty() {
        return ConversionResult::empty(KIND);
    }
    log::debug!("{}: scanning '{}'", KIND, expression);

    match scan(&expression) {
        Ok((stack, output, trace)) => {
            let result = output.concat();
            let steps = trace.finish(&result, KIND.target(), &stack, &output);
            ConversionResult::completed(KIND, result, steps)
        }
        Err(error) => ConversionResult::failed(KIND, error),
    }
}

type ScanState = (Vec<String>, Vec<String>, TraceBuilder);

fn scan(expression: &Expression) -> Result<ScanState, ConversionError> {
    let mut stack: Vec<String> = Vec::new();
    let mut output: Vec<String> = Vec::new();
    let mut trace = TraceBuilder::new();

    for symbol in expression.symbols() {
        match classify(symbol) {
            SymbolKind::Operand => {
                output.push(symbol.to_string());
                trace.emit(
                    symbol,
                    Operation::AddToOutput,
                    &stack,
                    Some(&output),
                    format!(
                        "Scanning '{}'. It's an **operand**. Adding to the output.",
                        symbol
                    ),
                );
            }
            SymbolKind::OpenParen => {
                stack.push(OPEN_PAREN.to_string());
                trace.emit(
                    symbol,
                    Operation::Push,
                    &stack,
                    Some(&output),
                    "Scanning '('. Pushing onto the operator stack.".to_string(),
                );
            }
            SymbolKind::CloseParen => {
                loop {
                    match stack.pop() {
                        Some(top) if top == OPEN_PAREN => break,
                        Some(top) => output.push(top),
                        None => return Err(ConversionError::UnmatchedParenthesis),
                    }
                }
                trace.emit(
                    symbol,
                    Operation::PopParenthesis,
                    &stack,
                    Some(&output),
                    "Scanning ')'. Popping operators to output until '(' is found and removed from stack."
                        .to_string(),
                );
            }
            SymbolKind::Operator(incoming) => {
                let popped = pop_while_binding(&mut stack, &mut output, incoming);
                stack.push(symbol.to_string());

                let (operation, narration) = if popped.is_empty() {
                    (
                        Operation::Push,
                        format!("Scanning '{}'. Pushing onto the stack.", symbol),
                    )
                } else {
                    (
                        Operation::PopPrecedenceThenPush,
                        format!(
                            "Scanning '{}'. Popping higher/equal precedence operators ({}) to output, then pushing '{}'.",
                            symbol,
                            popped.join(", "),
                            symbol
                        ),
                    )
                };
                trace.emit(symbol, operation, &stack, Some(&output), narration);
            }
        }
    }

    while let Some(top) = stack.pop() {
        if top == OPEN_PAREN || top == CLOSE_PAREN {
            return Err(ConversionError::UnmatchedParenthesis);
        }
        output.push(top);
    }

    Ok((stack, output, trace))
}

/// Move operators that bind at least as tightly as `incoming` to the output,
/// stopping at `(`. Returns them in pop order.
fn pop_while_binding(
    stack: &mut Vec<String>,
    output: &mut Vec<String>,
    incoming: u8,
) -> Vec<String> {
    let mut popped = Vec::new();
    while stack
        .last()
        .is_some_and(|top| top != OPEN_PAREN && precedence_of(top) >= incoming)
    {
        if let Some(top) = stack.pop() {
            popped.push(top.clone());
            output.push(top);
        }
    }
    popped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::error::UNMATCHED_PARENTHESIS;

    #[test]
    fn test_converts_sample_expression() {
        let result = convert("A + B * ( C - D ) / E");
        assert_eq!(result.result, "ABCD-*E/+");
        // one step per symbol plus the terminal step
        assert_eq!(result.steps.len(), 12);
    }

    #[test]
    fn test_every_step_carries_output() {
        let result = convert("A*(B+C)");
        assert!(result.steps.iter().all(|s| s.current_output.is_some()));
    }

    #[test]
    fn test_equal_precedence_pops() {
        let result = convert("A-B+C");
        assert_eq!(result.result, "AB-C+");

        let plus = &result.steps[3];
        assert_eq!(plus.operation, Operation::PopPrecedenceThenPush);
        assert_eq!(plus.current_stack, vec!["+"]);
        assert_eq!(
            plus.narration,
            "Scanning '+'. Popping higher/equal precedence operators (-) to output, then pushing '+'."
        );
    }

    #[test]
    fn test_power_is_left_associative() {
        assert_eq!(convert("A^B^C").result, "AB^C^");
    }

    #[test]
    fn test_narration_lists_popped_operators_in_pop_order() {
        let result = convert("A+B*C-D");
        let minus = &result.steps[5];
        assert_eq!(minus.input_symbol, "-");
        assert_eq!(
            minus.narration,
            "Scanning '-'. Popping higher/equal precedence operators (*, +) to output, then pushing '-'."
        );
        assert_eq!(minus.current_output.as_ref().unwrap().concat(), "ABC*+");
        assert_eq!(result.result, "ABC*+D-");
    }

    #[test]
    fn test_close_paren_summarised_in_one_step() {
        let result = convert("(A+B*C)");
        let close = result.steps.iter().find(|s| s.input_symbol == ")").unwrap();
        assert_eq!(close.operation, Operation::PopParenthesis);
        assert!(close.current_stack.is_empty());
        assert_eq!(close.current_output.as_ref().unwrap().concat(), "ABC*+");
        assert_eq!(result.steps.len(), 8);
    }

    #[test]
    fn test_open_paren_blocks_popping() {
        let result = convert("(A*B+C)");
        assert_eq!(result.result, "AB*C+");
        assert_eq!(convert("A*(B+C)").result, "ABC+*");
    }

    #[test]
    fn test_unmatched_open_paren_fails_fast() {
        let result = convert("( A + B");
        assert_eq!(result.result, UNMATCHED_PARENTHESIS);
        assert!(result.steps.is_empty());
    }

    #[test]
    fn test_unmatched_close_paren_fails_fast() {
        let result = convert("A + B )");
        assert_eq!(result.result, UNMATCHED_PARENTHESIS);
        assert!(result.steps.is_empty());
    }

    #[test]
    fn test_terminal_step_holds_drained_output() {
        let result = convert("A+B");
        let done = result.steps.last().unwrap();
        assert!(done.current_stack.is_empty());
        assert_eq!(done.current_output.as_deref(), Some(&["A", "B", "+"].map(String::from)[..]));
        // drained operators do not show up before the terminal step
        assert_eq!(result.steps[2].current_stack, vec!["+"]);
    }

    #[test]
    fn test_operators_without_operands_still_convert() {
        // infix conversion performs no arity checks
        assert_eq!(convert("+").result, "+");
    }
}
