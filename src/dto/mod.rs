//!
//! Module with all dtos that are passed between the relay, its callers
//! and the chat platform
//!

pub mod input;
pub mod output;
