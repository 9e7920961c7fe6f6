//! Prefix to postfix
//!
//! Mirror of postfix to prefix: scan right to left, so the first pop is
//! operand 1 and the second is operand 2, and push `op1 + op2 + operator`.

use super::{ConversionKind, ConversionResult};
use crate::notation::error::ConversionError;
use crate::notation::expression::Expression;
use crate::notation::symbol::is_operator;
use crate::notation::trace::{Operation, TraceBuilder};

const KIND: ConversionKind = ConversionKind::PrefixToPostfix;

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
        [postfix] => postfix.clone(),
        _ => ConversionError::InvalidPrefix.sentinel().to_string(),
    };
    let steps = trace.finish(&result, KIND.target(), &stack, std::slice::from_ref(&result));
    ConversionResult::completed(KIND, result, steps)
}

fn scan(expression: &Expression) -> Result<(Vec<String>, TraceBuilder), ConversionError> {
    let mut stack: Vec<String> = Vec::new();
    let mut trace = TraceBuilder::new();

    for symbol in expression.symbols().rev() {
        if !is_operator(symbol) {
            stack.push(symbol.to_string());
            trace.emit(
                symbol,
                Operation::Push,
                &stack,
                None,
                format!(
                    "Scanning '{}' (R-L). It's an **operand**. Pushing onto the stack.",
                    symbol
                ),
            );
            continue;
        }

        if stack.len() < 2 {
            return Err(ConversionError::InvalidPrefix);
        }

        let operand1 = stack.pop().ok_or(ConversionError::InvalidPrefix)?;
        trace
            .emit(
                symbol,
                Operation::PopOperand1,
                &stack,
                None,
                format!("Operator '{}'. Popping Operand 1: **{}**.", symbol, operand1),
            )
            .with_operand1(&operand1);

        let operand2 = stack.pop().ok_or(ConversionError::InvalidPrefix)?;
        trace
            .emit(
                symbol,
                Operation::PopOperand2,
                &stack,
                None,
                format!("Popping Operand 2: **{}**.", operand2),
            )
            .with_operand1(&operand1)
            .with_operand2(&operand2);

        let combined = format!("{}{}{}", operand1, operand2, symbol);
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
