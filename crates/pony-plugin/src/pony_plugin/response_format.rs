pub const NO_MATCHING_PONY_MESSAGE: &str = "Couldn't find a pony matching given tag(s).";

/// Markdown image showing the thumbnail, linked to the full image.
pub fn format_image_markdown(thumbnail_url: &str, full_url: &str) -> String {
    format!("[![pony image]({thumbnail_url})]({full_url})")
}

/// Fallback reply when no invocation produced an image.
///
/// Tagged requests are assumed to have named an unknown pony; untagged
/// requests can only fail when the lookup service itself is unavailable.
pub fn format_fallback_message(had_tags: bool, service: &str) -> String {
    if had_tags {
        NO_MATCHING_PONY_MESSAGE.to_string()
    } else {
        format!("{service} appears to be down")
    }
}

#[cfg(test)]
mod tests {
    use super::{format_fallback_message, format_image_markdown, NO_MATCHING_PONY_MESSAGE};

    #[test]
    fn unit_format_image_markdown_embeds_thumbnail_and_links_full_image() {
        assert_eq!(
            format_image_markdown("S1", "F1"),
            "[![pony image](S1)](F1)"
        );
    }

    #[test]
    fn functional_format_fallback_message_picks_message_by_tag_presence() {
        assert_eq!(
            format_fallback_message(true, "https://theponyapi.com"),
            NO_MATCHING_PONY_MESSAGE
        );
        assert_eq!(
            format_fallback_message(false, "https://theponyapi.com"),
            "https://theponyapi.com appears to be down"
        );
    }
}
