//! Library surface of the visa-guide CLI.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
