//! Shared GitHub helpers for the pony comment plugin.
//! This crate provides comment event models, `/pony` command parsing, and
//! reply envelope rendering consumed by the plugin runtime crate.

pub mod comment_event;
pub mod issue_comment;
pub mod pony_command_parser;
