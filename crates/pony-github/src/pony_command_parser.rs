use std::sync::OnceLock;

use regex::Regex;

pub const PONY_COMMAND_MAX_INVOCATIONS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One `/pony` line found in a comment body.
pub struct PonyInvocation {
    pub tag: Option<String>,
}

impl PonyInvocation {
    pub fn untagged() -> Self {
        Self { tag: None }
    }

    pub fn tagged(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
        }
    }

    pub fn has_tag(&self) -> bool {
        self.tag.is_some()
    }
}

fn pony_command_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?mi)^[ \t]*/pony(?: +([^\r\n]*?))?[ \t]*\r?$")
            .unwrap_or_else(|error| panic!("pony command pattern must compile: {error}"))
    })
}

/// Parse `/pony [tag]` lines from a comment body, keeping at most `max_invocations`.
pub fn parse_pony_invocations(body: &str, max_invocations: usize) -> Vec<PonyInvocation> {
    pony_command_pattern()
        .captures_iter(body)
        .take(max_invocations)
        .map(|captures| {
            let tag = captures
                .get(1)
                .map(|raw| raw.as_str().trim())
                .filter(|tag| !tag.is_empty())
                .map(ToOwned::to_owned);
            PonyInvocation { tag }
        })
        .collect()
}

/// Return true when any invocation names a specific pony.
pub fn any_invocation_tagged(invocations: &[PonyInvocation]) -> bool {
    invocations.iter().any(PonyInvocation::has_tag)
}
