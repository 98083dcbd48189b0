//! Fuzz target: `Comment::new` validation.
//!
//! Verifies that arbitrary author/body inputs never cause panics and that
//! accepted comments always satisfy the trimmed-non-empty invariant.

#![no_main]

use guestbook_core::Comment;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Split the input into an author half and a body half.
    let mid = data.len() / 2;
    let author = String::from_utf8_lossy(&data[..mid]);
    let body = String::from_utf8_lossy(&data[mid..]);

    if let Ok(comment) = Comment::new(author.as_ref(), body.as_ref()) {
        assert!(!comment.author.is_empty(), "accepted author must be non-empty");
        assert!(!comment.body.is_empty(), "accepted body must be non-empty");
        assert_eq!(
            comment.author,
            comment.author.trim(),
            "accepted author must be stored trimmed"
        );

        // JSON round-trip must not panic.
        let json = serde_json::to_string(&comment).expect("Comment serialization must not fail");
        let _: Comment =
            serde_json::from_str(&json).expect("Comment deserialization must not fail");
    }
});
