//! Main module for notation library functionality

pub mod conversion;
pub mod error;
pub mod expression;
pub mod narration;
pub mod playback;
pub mod processor;
pub mod symbol;
pub mod testing;
pub mod trace;
