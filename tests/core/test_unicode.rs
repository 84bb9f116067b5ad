//! Character offsets on multi-byte and case-folding text

use crate::common::document;
use vault_search::core::search::{normalize_query, rank_documents};

fn first_match_position(text: &str, query: &str) -> usize {
    let docs = vec![document("1", "doc.txt", text)];
    let results = rank_documents(&normalize_query(query), &docs, 10);
    results[0].matches[0].position
}

#[test]
fn test_positions_are_char_offsets() {
    let text = "Café ☕ – résumé review";
    let position = first_match_position(text, "review");

    assert_eq!(position, 16);
    let tail: String = text.chars().skip(position).collect();
    assert!(tail.starts_with("review"));
}

#[test]
fn test_emoji_before_match() {
    let text = "🚀🚀🚀 launch plan";
    let position = first_match_position(text, "plan");

    let tail: String = text.chars().skip(position).collect();
    assert!(tail.starts_with("plan"));
}

#[test]
fn test_case_fold_expanding_char() {
    // 'İ' lower-cases to two chars; offsets still refer to the original
    let text = "İİİ istanbul office";
    let position = first_match_position(text, "office");

    let tail: String = text.chars().skip(position).collect();
    assert!(tail.starts_with("office"));
}

#[test]
fn test_cjk_context_is_valid_text() {
    let text = format!("{}预算 budget {}", "中".repeat(80), "文".repeat(80));
    let docs = vec![document("1", "doc.txt", &text)];
    let results = rank_documents(&normalize_query("budget"), &docs, 10);

    let context = &results[0].matches[0].context;
    assert!(context.contains("budget"));
    assert!(context.starts_with("..."));
    assert!(context.ends_with("..."));
}

#[test]
fn test_uppercase_query_matches_mixed_case_text() {
    let text = "Die STRASSE ist lang";
    let position = first_match_position(text, "Strasse");
    assert_eq!(position, 4);
}
