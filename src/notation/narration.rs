//! Narration markup
//!
//! Narrations are plain text with one inline convention: `**text**` marks an
//! emphasised span (an operand, an operator, the final result). The engine
//! never escapes or sanitises narration text; a renderer that turns the
//! markup into HTML owns the escaping of everything between the markers.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

static EMPHASIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("emphasis pattern is valid"));

const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

/// How emphasis markup is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Emphasis {
    /// Leave `**markers**` in place.
    #[default]
    Keep,
    Strip,
    /// Terminal bold.
    Ansi,
}

impl FromStr for Emphasis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keep" => Ok(Emphasis::Keep),
            "strip" => Ok(Emphasis::Strip),
            "ansi" => Ok(Emphasis::Ansi),
            other => Err(format!("unknown emphasis style '{}'", other)),
        }
    }
}

/// A run of narration text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Emphasised(&'a str),
}

/// Split a narration into plain and emphasised runs, markers removed.
pub fn segments(narration: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for captures in EMPHASIS.captures_iter(narration) {
        let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        if whole.start() > cursor {
            out.push(Segment::Plain(&narration[cursor..whole.start()]));
        }
        out.push(Segment::Emphasised(inner.as_str()));
        cursor = whole.end();
    }
    if cursor < narration.len() {
        out.push(Segment::Plain(&narration[cursor..]));
    }
    out
}

/// The emphasised spans only.
pub fn emphasised(narration: &str) -> Vec<&str> {
    segments(narration)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Emphasised(text) => Some(text),
            Segment::Plain(_) => None,
        })
        .collect()
}

pub fn render(narration: &str, emphasis: Emphasis) -> Cow<'_, str> {
    match emphasis {
        Emphasis::Keep => Cow::Borrowed(narration),
        Emphasis::Strip => EMPHASIS.replace_all(narration, "$1"),
        Emphasis::Ansi => {
            EMPHASIS.replace_all(narration, format!("{}$1{}", ANSI_BOLD, ANSI_RESET).as_str())
        }
    }
}
