//! CLI argument models and startup wiring for the `pony-plugin` binary.
//!
//! Replays one `issue_comment` webhook payload through the pony handler with
//! HTTP-backed collaborators.

pub mod bootstrap_helpers;
pub mod cli_args;
pub mod runner;

pub use bootstrap_helpers::init_tracing;
pub use cli_args::Cli;
pub use runner::{run_cli, StdoutCommentPoster};
