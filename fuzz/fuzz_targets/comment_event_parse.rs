#![no_main]

use libfuzzer_sys::fuzz_target;
use pony_github::comment_event::CommentEvent;

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    if let Ok(event) = CommentEvent::from_webhook_payload(&raw) {
        assert!(!event.org.trim().is_empty());
        assert!(!event.repo.trim().is_empty());
        assert!(event.event_key().starts_with("issue-comment-"));
    }
});
