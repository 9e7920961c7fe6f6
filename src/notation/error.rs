//! Conversion error sentinels
//!
//! A failed conversion is still a value: the result slot of a
//! [`ConversionResult`](super::conversion::ConversionResult) carries one of the
//! sentinel strings below instead of an expression. [`ConversionError`] is the
//! typed view over those strings; its `Display` output is exactly the sentinel.

use thiserror::Error;

pub const INVALID_POSTFIX: &str = "ERROR: Invalid Postfix";
pub const INVALID_PREFIX: &str = "ERROR: Invalid Prefix";
pub const UNMATCHED_PARENTHESIS: &str = "ERROR: Unmatched Parenthesis";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Postfix input that does not reduce to a single expression.
    #[error("ERROR: Invalid Postfix")]
    InvalidPostfix,
    /// Prefix input that does not reduce to a single expression.
    #[error("ERROR: Invalid Prefix")]
    InvalidPrefix,
    #[error("ERROR: Unmatched Parenthesis")]
    UnmatchedParenthesis,
}

impl ConversionError {
    pub fn sentinel(&self) -> &'static str {
        match self {
            ConversionError::InvalidPostfix => INVALID_POSTFIX,
            ConversionError::InvalidPrefix => INVALID_PREFIX,
            ConversionError::UnmatchedParenthesis => UNMATCHED_PARENTHESIS,
        }
    }

    /// Recognise a result string as one of the sentinels.
    pub fn from_sentinel(result: &str) -> Option<Self> {
        match result {
            INVALID_POSTFIX => Some(ConversionError::InvalidPostfix),
            INVALID_PREFIX => Some(ConversionError::InvalidPrefix),
            UNMATCHED_PARENTHESIS => Some(ConversionError::UnmatchedParenthesis),
            _ => None,
        }
    }
}
