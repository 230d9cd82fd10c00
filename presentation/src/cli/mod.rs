//! CLI module
//!
//! Command-line argument and subcommand definitions for wps-assist.

pub mod commands;
