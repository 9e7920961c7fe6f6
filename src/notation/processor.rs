//! Output formats for conversion results
//!
//! A [`ConversionResult`] can be printed as:
//!
//! - `text`: one block per step, stack and output laid out for a terminal
//! - `json`: the serialized result (`finalPrefix`/`finalPostfix` + `steps`)
//! - `yaml`: same structure as `json`
//! - `result`: only the final expression or error sentinel
//!
//! ```rust,ignore
//! use notation::notation::processor::{render, OutputFormat, RenderOptions};
//!
//! let result = notation::convert_infix_to_postfix("A + B");
//! let json = render(&result, OutputFormat::Json, &RenderOptions::default())?;
//! ```

use crate::notation::conversion::ConversionResult;
use crate::notation::narration::{self, Emphasis};
use crate::notation::trace::Step;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Printed in place of a stack with no entries.
pub const EMPTY_STACK: &str = "Stack is Empty";

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
    Result,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Result => "result",
        }
    }

    /// Parse a format name like "json" or "text"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        match format_str {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            "result" => Ok(OutputFormat::Result),
            other => Err(ProcessingError::InvalidFormat(other.to_string())),
        }
    }

    pub fn available_formats() -> Vec<OutputFormat> {
        vec![
            OutputFormat::Text,
            OutputFormat::Json,
            OutputFormat::Yaml,
            OutputFormat::Result,
        ]
    }
}

impl FromStr for OutputFormat {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::from_string(s)
    }
}

/// Which end of the stack is printed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StackOrder {
    #[default]
    TopFirst,
    TopLast,
}

/// Knobs for the `text` format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub stack_order: StackOrder,
    pub emphasis: Emphasis,
    pub show_narration: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            stack_order: StackOrder::TopFirst,
            emphasis: Emphasis::Keep,
            show_narration: true,
        }
    }
}

/// Errors that can occur while selecting or rendering output
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Unknown conversion: {0}")]
    InvalidConversion(String),
    #[error("Step {index} is out of range for a trace of {total} steps")]
    StepOutOfRange { index: usize, total: usize },
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Render a whole conversion result.
pub fn render(
    result: &ConversionResult,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Text => Ok(text(result, options)),
        OutputFormat::Json => serde_json::to_string_pretty(result)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(result).map_err(|e| ProcessingError::Serialization(e.to_string()))
        }
        OutputFormat::Result => Ok(result.result.clone()),
    }
}

/// Render the step at `index` (0-based) of a conversion result.
pub fn render_step(
    result: &ConversionResult,
    index: usize,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String, ProcessingError> {
    let total = result.steps.len();
    let step = result
        .steps
        .get(index)
        .ok_or(ProcessingError::StepOutOfRange { index, total })?;

    match format {
        OutputFormat::Text => Ok(step_block(step, total, options)),
        OutputFormat::Json => serde_json::to_string_pretty(step)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(step).map_err(|e| ProcessingError::Serialization(e.to_string()))
        }
        OutputFormat::Result => Ok(result.result.clone()),
    }
}

fn text(result: &ConversionResult, options: &RenderOptions) -> String {
    let mut out = String::new();
    out.push_str(result.kind.label());
    out.push('\n');

    let total = result.steps.len();
    if total == 0 {
        out.push_str("(no steps)\n");
    }
    for step in &result.steps {
        out.push('\n');
        out.push_str(&step_block(step, total, options));
    }

    out.push('\n');
    if result.result.is_empty() {
        out.push_str("result: (empty)\n");
    } else {
        out.push_str(&format!("result: {}\n", result.result));
    }
    out
}

fn step_block(step: &Step, total: usize, options: &RenderOptions) -> String {
    let mut out = format!(
        "[{}/{}] {} '{}'\n",
        step.step, total, step.operation, step.input_symbol
    );
    out.push_str(&format!(
        "  stack:  {}\n",
        stack_line(step, options.stack_order)
    ));
    if let Some(output) = &step.current_output {
        let line = if output.is_empty() {
            "...".to_string()
        } else {
            output.join(" ")
        };
        out.push_str(&format!("  output: {}\n", line));
    }
    if options.show_narration {
        out.push_str(&format!(
            "  {}\n",
            narration::render(&step.narration, options.emphasis)
        ));
    }
    out
}

fn stack_line(step: &Step, order: StackOrder) -> String {
    if step.current_stack.is_empty() {
        return EMPTY_STACK.to_string();
    }
    let entries: Vec<&str> = match order {
        StackOrder::TopFirst => step.stack_top_first().collect(),
        StackOrder::TopLast => step.current_stack.iter().map(String::as_str).collect(),
    };
    entries.join(" | ")
}
