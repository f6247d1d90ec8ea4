//! Command handlers. Each translates parsed arguments into core calls and
//! renders the result; no business logic lives here.

pub mod completions;
pub mod config;
pub mod generate;
pub mod list;
