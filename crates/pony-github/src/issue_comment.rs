/// Footer appended to every bot reply.
pub const ABOUT_THIS_BOT: &str = "Instructions for interacting with me using issue and PR comments are listed in the plugin help (`/pony [pony]`). If you have questions or suggestions related to my behavior, please file an issue against the repository hosting this bot.";

/// Quote each line of `body` as a markdown blockquote.
pub fn quote_comment_body(body: &str) -> String {
    body.split('\n')
        .map(|line| format!(">{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a reply that mentions `login` and explains why the bot responded.
pub fn render_issue_response(login: &str, message: &str, reason: &str, about: &str) -> String {
    format!("@{login}: {message}\n\n<details>\n\n{reason}\n\n{about}\n</details>")
}

/// Render a reply that quotes the triggering comment and links back to it.
pub fn render_issue_response_raw(
    body: &str,
    body_url: &str,
    login: &str,
    reply: &str,
    about: &str,
) -> String {
    let reason = format!(
        "In response to [this]({body_url}):\n\n{}\n",
        quote_comment_body(body)
    );
    render_issue_response(login, reply, &reason, about)
}

#[cfg(test)]
mod tests {
    use super::{
        quote_comment_body, render_issue_response, render_issue_response_raw, ABOUT_THIS_BOT,
    };

    #[test]
    fn unit_quote_comment_body_prefixes_every_line() {
        assert_eq!(quote_comment_body("one\ntwo"), ">one\n>two");
        assert_eq!(quote_comment_body(""), ">");
    }

    #[test]
    fn functional_render_issue_response_mentions_login_and_wraps_details() {
        let rendered = render_issue_response("alice", "hello", "because", "about");
        assert_eq!(
            rendered,
            "@alice: hello\n\n<details>\n\nbecause\n\nabout\n</details>"
        );
    }

    #[test]
    fn integration_render_issue_response_raw_quotes_body_and_links_source() {
        let rendered = render_issue_response_raw(
            "/pony\n/pony Rarity",
            "https://github.com/octo/herd/issues/9#issuecomment-1",
            "alice",
            "[![pony image](s)](f)\n",
            ABOUT_THIS_BOT,
        );
        assert!(rendered.starts_with("@alice: [![pony image](s)](f)\n"));
        assert!(rendered.contains(
            "In response to [this](https://github.com/octo/herd/issues/9#issuecomment-1):"
        ));
        assert!(rendered.contains(">/pony\n>/pony Rarity\n"));
        assert!(rendered.ends_with(&format!("{ABOUT_THIS_BOT}\n</details>")));
    }
}
