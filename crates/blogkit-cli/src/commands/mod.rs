//! Command handlers. Each translates parsed input into core calls and output.

pub mod help;
pub mod scaffold;
