//!
//! Transformation of deployment notifications into chat embeds
//!

mod embed_builder;
mod message_parser;

pub use embed_builder::*;
pub use message_parser::*;
