//! Expression conversions
//!
//! Three stack-based algorithms share the symbol classifier and the trace
//! builder:
//!
//! - [`postfix_to_prefix`]: left-to-right scan, combines `operator + op1 + op2`
//! - [`prefix_to_postfix`]: right-to-left scan, combines `op1 + op2 + operator`
//! - [`infix_to_postfix`]: shunting-yard with an operator stack and output queue
//!
//! # Result contract
//!
//! Every entry point returns a [`ConversionResult`]; nothing panics and
//! nothing is returned as `Err`. The shape of the trace tells the caller how
//! the run ended:
//!
//! | Input                                   | `result`        | `steps`            |
//! |-----------------------------------------|-----------------|--------------------|
//! | blank                                   | `""`            | empty              |
//! | well formed                             | the expression  | full, ends in DONE |
//! | operator without two operands           | error sentinel  | empty              |
//! | unmatched parenthesis (infix)           | error sentinel  | empty              |
//! | scan completes, stack not reduced to 1  | error sentinel  | full, ends in DONE |
//!
//! Stack underflow and unmatched parentheses fail fast and drop the partial
//! trace; a stack that does not reduce to one entry is only detected after the
//! scan and keeps its trace. [`ConversionResult::outcome`] distinguishes the
//! cases without string matching.

pub mod infix_to_postfix;
pub mod postfix_to_prefix;
pub mod prefix_to_postfix;

use crate::notation::error::ConversionError;
use crate::notation::processor::ProcessingError;
use crate::notation::trace::Step;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Convert postfix notation to prefix notation.
pub fn convert_postfix_to_prefix(raw: &str) -> ConversionResult {
    postfix_to_prefix::convert(raw)
}

/// Convert prefix notation to postfix notation.
pub fn convert_prefix_to_postfix(raw: &str) -> ConversionResult {
    prefix_to_postfix::convert(raw)
}

/// Convert infix notation to postfix notation.
pub fn convert_infix_to_postfix(raw: &str) -> ConversionResult {
    infix_to_postfix::convert(raw)
}

/// The available conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionKind {
    PostfixToPrefix,
    PrefixToPostfix,
    InfixToPostfix,
}

impl ConversionKind {
    pub fn all() -> [ConversionKind; 3] {
        [
            ConversionKind::PostfixToPrefix,
            ConversionKind::PrefixToPostfix,
            ConversionKind::InfixToPostfix,
        ]
    }

    /// Machine name, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            ConversionKind::PostfixToPrefix => "postfix-to-prefix",
            ConversionKind::PrefixToPostfix => "prefix-to-postfix",
            ConversionKind::InfixToPostfix => "infix-to-postfix",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConversionKind::PostfixToPrefix => "Postfix → Prefix",
            ConversionKind::PrefixToPostfix => "Prefix → Postfix",
            ConversionKind::InfixToPostfix => "Infix → Postfix",
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            ConversionKind::PostfixToPrefix => "Postfix",
            ConversionKind::PrefixToPostfix => "Prefix",
            ConversionKind::InfixToPostfix => "Infix",
        }
    }

    pub fn target(&self) -> &'static str {
        match self {
            ConversionKind::PostfixToPrefix => "Prefix",
            ConversionKind::PrefixToPostfix | ConversionKind::InfixToPostfix => "Postfix",
        }
    }

    /// Sample expression shown before the user types anything.
    pub fn default_input(&self) -> &'static str {
        match self {
            ConversionKind::PostfixToPrefix => "A B + C D - *",
            ConversionKind::PrefixToPostfix => "* + A B - C D",
            ConversionKind::InfixToPostfix => "A + B * ( C - D ) / E",
        }
    }

    /// Key of the result slot in serialized output.
    pub fn result_key(&self) -> &'static str {
        match self {
            ConversionKind::PostfixToPrefix => "finalPrefix",
            ConversionKind::PrefixToPostfix | ConversionKind::InfixToPostfix => "finalPostfix",
        }
    }

    pub fn convert(&self, raw: &str) -> ConversionResult {
        match self {
            ConversionKind::PostfixToPrefix => postfix_to_prefix::convert(raw),
            ConversionKind::PrefixToPostfix => prefix_to_postfix::convert(raw),
            ConversionKind::InfixToPostfix => infix_to_postfix::convert(raw),
        }
    }
}

impl fmt::Display for ConversionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConversionKind {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConversionKind::all()
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ProcessingError::InvalidConversion(s.to_string()))
    }
}

/// How a conversion run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Blank input: empty result, no steps.
    Empty,
    Converted,
    /// Rejected mid-scan; no steps were kept.
    FailedFast(ConversionError),
    /// The scan finished but did not reduce to one expression; the trace is kept.
    TerminalInvalid(ConversionError),
}

/// The final result of one conversion plus its trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub kind: ConversionKind,
    /// The converted expression, an error sentinel, or `""` for blank input.
    pub result: String,
    pub steps: Vec<Step>,
}

impl ConversionResult {
    pub(crate) fn empty(kind: ConversionKind) -> Self {
        ConversionResult {
            kind,
            result: String::new(),
            steps: Vec::new(),
        }
    }

    pub(crate) fn failed(kind: ConversionKind, error: ConversionError) -> Self {
        log::debug!("{} failed fast: {}", kind, error);
        ConversionResult {
            kind,
            result: error.sentinel().to_string(),
            steps: Vec::new(),
        }
    }

    pub(crate) fn completed(kind: ConversionKind, result: String, steps: Vec<Step>) -> Self {
        log::debug!("{} finished in {} steps: {}", kind, steps.len(), result);
        ConversionResult {
            kind,
            result,
            steps,
        }
    }

    /// The error carried in the result slot, if any.
    pub fn error(&self) -> Option<ConversionError> {
        ConversionError::from_sentinel(&self.result)
    }

    pub fn is_error(&self) -> bool {
        self.error().is_some()
    }

    pub fn outcome(&self) -> Outcome {
        match (self.error(), self.steps.is_empty()) {
            (None, true) => Outcome::Empty,
            (None, false) => Outcome::Converted,
            (Some(error), true) => Outcome::FailedFast(error),
            (Some(error), false) => Outcome::TerminalInvalid(error),
        }
    }

    pub fn terminal_step(&self) -> Option<&Step> {
        self.steps.last().filter(|step| step.is_terminal())
    }
}

impl Serialize for ConversionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.kind.result_key(), &self.result)?;
        map.serialize_entry("steps", &self.steps)?;
        map.end()
    }
}
