use super::*;

#[test]
fn splits_on_commas_and_trims() {
    assert_eq!(
        parse_items("milk, eggs , bread"),
        vec!["milk", "eggs", "bread"]
    );
}

#[test]
fn empty_input_yields_empty_list() {
    assert!(parse_items("").is_empty());
}

#[test]
fn all_blank_segments_yield_empty_list() {
    assert!(parse_items(",,, ,").is_empty());
    assert!(parse_items("   ").is_empty());
}

#[test]
fn leading_and_trailing_commas_are_dropped() {
    assert_eq!(parse_items(",milk,"), vec!["milk"]);
}

#[test]
fn duplicates_are_kept() {
    assert_eq!(parse_items("milk, milk"), vec!["milk", "milk"]);
}

#[test]
fn single_item_without_comma() {
    assert_eq!(parse_items("oat milk"), vec!["oat milk"]);
}

#[test]
fn interior_whitespace_is_preserved() {
    assert_eq!(
        parse_items(" peanut  butter , jelly"),
        vec!["peanut  butter", "jelly"]
    );
}

#[test]
fn no_segment_is_empty_after_trim() {
    for raw in ["a,,b", " , x ,  , y, ", "\t,\n, milk"] {
        for item in parse_items(raw) {
            assert!(!item.trim().is_empty());
            assert_eq!(item, item.trim());
        }
    }
}

#[test]
fn parsing_is_idempotent_on_rejoin() {
    let first = parse_items("milk, eggs, bread");
    let second = parse_items(&first.join(","));
    assert_eq!(first, second);
}
