use std::path::PathBuf;

use clap::{ArgAction, Parser};
use pony_plugin::{DEFAULT_GITHUB_API_BASE, DEFAULT_MAX_IMAGE_BYTES, DEFAULT_PONY_API_URL};

fn parse_positive_u64(value: &str) -> Result<u64, String> {
    let parsed = value
        .parse::<u64>()
        .map_err(|error| format!("failed to parse integer: {error}"))?;
    if parsed == 0 {
        return Err("value must be greater than 0".to_string());
    }
    Ok(parsed)
}

#[derive(Debug, Parser)]
#[command(
    name = "pony-plugin",
    about = "Answer /pony comments with pony images",
    version
)]
/// Command-line options for the `pony-plugin` binary.
pub struct Cli {
    #[arg(
        long = "event-file",
        env = "PONY_EVENT_FILE",
        required_unless_present = "print_help",
        help = "Path to a GitHub issue_comment webhook payload (JSON)"
    )]
    pub event_file: Option<PathBuf>,

    #[arg(
        long = "pony-api-url",
        env = "PONY_API_URL",
        default_value = DEFAULT_PONY_API_URL,
        help = "Pony lookup endpoint queried with ?q=<tag>"
    )]
    pub pony_api_url: String,

    #[arg(
        long = "github-api-base",
        env = "PONY_GITHUB_API_BASE",
        default_value = DEFAULT_GITHUB_API_BASE,
        help = "Base URL for the GitHub REST API"
    )]
    pub github_api_base: String,

    #[arg(
        long = "github-token",
        env = "GITHUB_TOKEN",
        hide_env_values = true,
        help = "GitHub token used to post replies (not needed with --dry-run)"
    )]
    pub github_token: Option<String>,

    #[arg(
        long = "request-timeout-ms",
        env = "PONY_REQUEST_TIMEOUT_MS",
        default_value_t = 10_000,
        value_parser = parse_positive_u64,
        help = "Per-request HTTP timeout in milliseconds"
    )]
    pub request_timeout_ms: u64,

    #[arg(
        long = "max-image-bytes",
        env = "PONY_MAX_IMAGE_BYTES",
        default_value_t = DEFAULT_MAX_IMAGE_BYTES,
        value_parser = parse_positive_u64,
        help = "Largest thumbnail size, in bytes, accepted for embedding"
    )]
    pub max_image_bytes: u64,

    #[arg(
        long = "dry-run",
        env = "PONY_DRY_RUN",
        default_value_t = false,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help = "Print the reply to stdout instead of posting it"
    )]
    pub dry_run: bool,

    #[arg(
        long = "print-help",
        default_value_t = false,
        help = "Print plugin help metadata as JSON and exit"
    )]
    pub print_help: bool,
}
