//! CLI command implementations.

pub mod process;
pub mod quote;

pub use process::{read_input, ProcessCommand};
pub use quote::QuoteCommand;
