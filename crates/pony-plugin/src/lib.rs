//! Runtime crate for the `/pony` comment plugin.
//!
//! Wires comment events to the pony image lookup, the embedding size check,
//! and the GitHub reply transport.

pub mod pony_plugin;

pub use pony_plugin::{
    format_fallback_message, format_image_markdown, pony_plugin_help, service_origin,
    CommentPoster, FetchError, GithubApiClient, HeadRequestSizePolicy, ImageCandidate,
    ImageSource, PluginCommandHelp, PluginHelp, PonyApiImageSource, PonyCommandHandler,
    PonyHandlerError, PonyHandlerReport, SizeCheckError, SizePolicy, DEFAULT_GITHUB_API_BASE,
    DEFAULT_MAX_IMAGE_BYTES, DEFAULT_PONY_API_URL, NO_MATCHING_PONY_MESSAGE,
    PONY_FETCH_MAX_ATTEMPTS,
};
