//! Command-line collaborator: argument parsing, per-command handlers and the
//! context they share.

pub mod commands;
pub mod context;
pub mod parser;
