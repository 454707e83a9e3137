#![no_main]

use libfuzzer_sys::fuzz_target;
use pony_github::pony_command_parser::{parse_pony_invocations, PONY_COMMAND_MAX_INVOCATIONS};

fuzz_target!(|data: &[u8]| {
    let body = String::from_utf8_lossy(data);
    let invocations = parse_pony_invocations(&body, PONY_COMMAND_MAX_INVOCATIONS);
    assert!(invocations.len() <= PONY_COMMAND_MAX_INVOCATIONS);
    for invocation in &invocations {
        if let Some(tag) = invocation.tag.as_deref() {
            assert!(!tag.is_empty());
            assert_eq!(tag, tag.trim());
            assert!(!tag.contains('\n'));
        }
    }
});
