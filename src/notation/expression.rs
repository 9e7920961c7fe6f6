//! Expression normalization
//!
//! Input is trimmed, upper-cased and stripped of all whitespace before any
//! conversion scans it. The engine then treats every remaining character as a
//! single symbol, so `"a b +"` and `"AB+"` are the same expression.

use std::fmt;

/// A normalized expression: upper-case, no whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Expression {
    text: String,
}

impl Expression {
    pub fn normalize(raw: &str) -> Self {
        let text = raw
            .trim()
            .to_uppercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        Expression { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of symbols (characters, not bytes).
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn symbols(&self) -> std::str::Chars<'_> {
        self.text.chars()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_whitespace_and_uppercases() {
        let expr = Expression::normalize("  a b +\tc\n* ");
        assert_eq!(expr.as_str(), "AB+C*");
        assert_eq!(expr.len(), 5);
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert!(Expression::normalize("").is_empty());
        assert!(Expression::normalize(" \t\n ").is_empty());
    }

    #[test]
    fn test_right_to_left_scan() {
        let expr = Expression::normalize("* + A B");
        let reversed: String = expr.symbols().rev().collect();
        assert_eq!(reversed, "BA+*");
    }

    #[test]
    fn test_display_matches_text() {
        let expr = Expression::normalize("( x - y )");
        assert_eq!(expr.to_string(), "(X-Y)");
    }
}
