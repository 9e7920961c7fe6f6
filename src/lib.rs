//! # notation
//!
//! Stack-based conversions between postfix, prefix and infix notation, with a
//! replayable trace of every intermediate stack and output state.
//!
//! Each conversion returns a [`ConversionResult`](notation::conversion::ConversionResult):
//! the final expression (or an error sentinel) plus the ordered list of
//! [`Step`](notation::trace::Step)s a renderer can animate one at a time.
//!
//! ## Testing
//!
//! For fluent assertions over traces, see the [testing module](notation::testing).

pub mod notation;

pub use notation::conversion::{
    convert_infix_to_postfix, convert_postfix_to_prefix, convert_prefix_to_postfix,
    ConversionKind, ConversionResult, Outcome,
};
pub use notation::error::ConversionError;
pub use notation::trace::{Operation, Step};
