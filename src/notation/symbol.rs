//! Symbol classification
//!
//! Every character of a normalized expression is a single symbol. Classification
//! is total: anything that is not one of the six operators or a parenthesis is
//! an operand.
//!
//! | Symbol        | Kind                    |
//! |---------------|-------------------------|
//! | `+` `-`       | `Operator(1)`           |
//! | `*` `/` `%`   | `Operator(2)`           |
//! | `^`           | `Operator(3)`           |
//! | `(`           | `OpenParen`             |
//! | `)`           | `CloseParen`            |
//! | anything else | `Operand`               |

use std::fmt;

/// The recognised operator characters.
pub const OPERATORS: [char; 6] = ['+', '-', '*', '/', '^', '%'];

/// Classification of a single symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Operand,
    Operator(u8),
    OpenParen,
    CloseParen,
}

impl SymbolKind {
    pub fn is_operator(&self) -> bool {
        matches!(self, SymbolKind::Operator(_))
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Operand => write!(f, "<operand>"),
            SymbolKind::Operator(p) => write!(f, "<operator:{}>", p),
            SymbolKind::OpenParen => write!(f, "<open-paren>"),
            SymbolKind::CloseParen => write!(f, "<close-paren>"),
        }
    }
}

/// Classify a character.
pub fn classify(c: char) -> SymbolKind {
    match c {
        '(' => SymbolKind::OpenParen,
        ')' => SymbolKind::CloseParen,
        _ => match precedence(c) {
            0 => SymbolKind::Operand,
            p => SymbolKind::Operator(p),
        },
    }
}

/// Binding strength of an operator, `0` for everything else.
pub fn precedence(c: char) -> u8 {
    match c {
        '+' | '-' => 1,
        '*' | '/' | '%' => 2,
        '^' => 3,
        _ => 0,
    }
}

pub fn is_operator(c: char) -> bool {
    OPERATORS.contains(&c)
}

/// Precedence of the first character of a stack entry.
///
/// The operator stack of the infix conversion holds single-character strings;
/// an empty entry has no precedence.
pub(crate) fn precedence_of(entry: &str) -> u8 {
    entry.chars().next().map(precedence).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_precedence_levels() {
        assert_eq!(precedence('+'), 1);
        assert_eq!(precedence('-'), 1);
        assert_eq!(precedence('*'), 2);
        assert_eq!(precedence('/'), 2);
        assert_eq!(precedence('%'), 2);
        assert_eq!(precedence('^'), 3);
    }

    #[test]
    fn test_non_operators_have_zero_precedence() {
        for c in ['A', 'z', '7', '(', ')', '.', '$'] {
            assert_eq!(precedence(c), 0, "precedence of {:?}", c);
        }
    }

    #[test]
    fn test_classify_covers_every_kind() {
        assert_eq!(classify('A'), SymbolKind::Operand);
        assert_eq!(classify('9'), SymbolKind::Operand);
        assert_eq!(classify('('), SymbolKind::OpenParen);
        assert_eq!(classify(')'), SymbolKind::CloseParen);
        assert_eq!(classify('^'), SymbolKind::Operator(3));
        assert_eq!(classify('%'), SymbolKind::Operator(2));
    }

    #[test]
    fn test_is_operator_matches_classification() {
        for c in ['+', '-', '*', '/', '^', '%', 'A', '(', ')', '&'] {
            assert_eq!(is_operator(c), classify(c).is_operator());
        }
    }

    #[test]
    fn test_classification_is_stable() {
        let first: Vec<_> = "A+(B*C)^D".chars().map(classify).collect();
        let second: Vec<_> = "A+(B*C)^D".chars().map(classify).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_precedence_of_stack_entry() {
        assert_eq!(precedence_of("*"), 2);
        assert_eq!(precedence_of("("), 0);
        assert_eq!(precedence_of(""), 0);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", SymbolKind::Operand), "<operand>");
        assert_eq!(format!("{}", SymbolKind::Operator(2)), "<operator:2>");
        assert_eq!(format!("{}", SymbolKind::OpenParen), "<open-paren>");
        assert_eq!(format!("{}", SymbolKind::CloseParen), "<close-paren>");
    }
}
