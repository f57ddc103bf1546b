//! Command implementations for the CLI

pub mod apply;
pub mod completions;
pub mod config_cmd;
pub mod doctor;
pub mod module;
