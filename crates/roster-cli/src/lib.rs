//! Library components of the `roster` command.

pub mod commands;
pub mod logging;
pub mod types;
