//! Property-based tests for generated-text rewriting
//!
//! The rewrite pass must be a no-op on text containing none of the
//! recognized tokens, and must never invent new translate calls or resource
//! paths.

use proptest::prelude::*;
use syncman_forms::rewrite;

// Strategy: text drawn from an alphabet that cannot spell any rewrite
// trigger (no quotes, no underscores).
fn arb_plain_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 .:/()=,;-]{0,80}"
}

proptest! {
    /// Property: the full rewrite chain is an identity on token-free text
    #[test]
    fn proptest_apply_all_identity_on_plain_text(text in arb_plain_text()) {
        prop_assert_eq!(rewrite::apply_all(&text, "calibre"), text);
    }

    /// Property: rewriting never reintroduces the application-name token
    #[test]
    fn proptest_app_name_token_never_survives(prefix in arb_plain_text(), suffix in arb_plain_text()) {
        let input = format!("{prefix}__appname__{suffix}");
        let output = rewrite::apply_all(&input, "calibre");
        prop_assert!(!output.contains("__appname__"));
    }

    /// Property: single-quoted resource paths always collapse to a
    /// single-quoted icon lookup
    #[test]
    fn proptest_resource_path_rewrite(name in "[A-Za-z0-9.-]{1,20}") {
        let input = format!("(':/images/{name}')");
        let expected = format!("(I('{name}'))");
        prop_assert_eq!(rewrite::rewrite_resource_paths(&input), expected);
    }
}
