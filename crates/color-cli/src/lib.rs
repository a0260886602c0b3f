//! CLI library components for the color lookup tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod tables;
