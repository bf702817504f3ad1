use blocks_cs_suffixtree::tree::SuffixTree;
use blocks_cs_suffixtree::SuffixTreeError;
use proptest::prelude::*;

// S1: basic substring membership and occurrence counting over "banana".
#[test]
fn scenario_banana_membership_and_counts() {
    let st = SuffixTree::build("banana").unwrap();

    assert!(st.contains("ban").unwrap());
    assert!(st.contains("ana").unwrap());
    assert!(st.contains("nana").unwrap());
    assert!(!st.contains("bana banana").unwrap());
    assert!(!st.contains("xyz").unwrap());

    assert_eq!(st.count("a").unwrap(), 3);
    assert_eq!(st.count("na").unwrap(), 2);
    assert_eq!(st.count("ana").unwrap(), 2);
    assert_eq!(st.count("banana").unwrap(), 1);
    assert_eq!(st.count("nope").unwrap(), 0);
}

// S2: every occurrence position is reported and matches a naive scan.
#[test]
fn scenario_find_all_matches_naive_scan() {
    let text = "mississippi";
    let st = SuffixTree::build(text).unwrap();

    for pattern in ["i", "is", "iss", "ssi", "ppi", "p", "miss"] {
        let mut expected: Vec<usize> = text
            .match_indices(pattern)
            .map(|(i, _)| i)
            .collect();
        expected.sort_unstable();

        let mut got = st.find_all(pattern).unwrap();
        got.sort_unstable();

        assert_eq!(got, expected, "pattern {pattern:?}");
    }
}

// S3: empty pattern is present everywhere, at every starting position.
#[test]
fn scenario_empty_pattern_is_everywhere() {
    let st = SuffixTree::build("banana").unwrap();

    assert!(st.contains("").unwrap());
    assert_eq!(st.count("").unwrap(), 6);

    let mut positions = st.find_all("").unwrap();
    positions.sort_unstable();
    assert_eq!(positions, vec![0, 1, 2, 3, 4, 5]);
}

// S4: longest repeated substring on a well-known example.
#[test]
fn scenario_longest_repeated_substring() {
    assert_eq!(
        SuffixTree::build("banana").unwrap().longest_repeated_substring(),
        "ana"
    );
    assert_eq!(
        SuffixTree::build("abcabxabcd").unwrap().longest_repeated_substring(),
        "abc"
    );
    assert_eq!(
        SuffixTree::build("abcdefg").unwrap().longest_repeated_substring(),
        ""
    );
}

// S5: longest common substring against a second text.
#[test]
fn scenario_longest_common_substring() {
    let st = SuffixTree::build("banana").unwrap();
    let (lcs, pos_in_text, pos_in_other) = st.longest_common_substring_info("panama").unwrap();
    assert_eq!(lcs, "ana");
    assert_eq!(&st.text()[pos_in_text..pos_in_text + lcs.len()], "ana");
    assert_eq!(&"panama"[pos_in_other..pos_in_other + lcs.len()], "ana");
}

#[test]
fn scenario_longest_common_substring_no_overlap() {
    let st = SuffixTree::build("abc").unwrap();
    assert_eq!(st.longest_common_substring("xyz").unwrap(), "");
}

// S6: suffix enumeration is sorted and complete, eager and lazy agree.
#[test]
fn scenario_suffix_enumeration_sorted_and_complete() {
    let text = "banana";
    let st = SuffixTree::build(text).unwrap();

    let mut expected: Vec<String> = (0..text.len())
        .map(|i| text[i..].to_string())
        .collect();
    expected.sort();

    let eager = st.get_all_suffixes();
    assert_eq!(eager, expected);

    let lazy: Vec<String> = st.enumerate_suffixes().collect();
    assert_eq!(lazy, expected);
}

// Testable property 9: the sentinel is rejected everywhere it could be fed in.
#[test]
fn sentinel_is_rejected_in_build_and_queries() {
    let poisoned = format!("abc{}def", blocks_cs_suffixtree::tree::SENTINEL);
    assert_eq!(
        SuffixTree::build(&poisoned).unwrap_err(),
        SuffixTreeError::InvalidInput { context: "build" }
    );

    let st = SuffixTree::build("abcdef").unwrap();
    let pattern = format!("{}", blocks_cs_suffixtree::tree::SENTINEL);
    assert!(st.contains(&pattern).is_err());
    assert!(st.count(&pattern).is_err());
    assert!(st.find_all(&pattern).is_err());
    assert!(st.longest_common_substring(&pattern).is_err());
}

#[test]
fn empty_text_builds_a_degenerate_tree() {
    let st = SuffixTree::build("").unwrap();
    assert_eq!(st.text(), "");
    assert_eq!(st.count("").unwrap(), 0);
    assert!(st.get_all_suffixes().is_empty());
    assert!(!st.contains("a").unwrap());
    assert_eq!(st.longest_repeated_substring(), "");
}

#[test]
fn pattern_longer_than_text_never_matches() {
    let st = SuffixTree::build("ab").unwrap();
    assert!(!st.contains("abcdef").unwrap());
    assert_eq!(st.count("abcdef").unwrap(), 0);
    assert!(st.find_all("abcdef").unwrap().is_empty());
}

#[test]
fn unicode_text_is_indexed_by_char_not_byte() {
    let st = SuffixTree::build("héllo wörld").unwrap();
    assert!(st.contains("llo").unwrap());
    assert!(st.contains("wörld").unwrap());
    assert_eq!(st.count("ö").unwrap(), 1);
}

proptest! {
    // Property 1/2: every find_all hit is a real occurrence (soundness),
    // and every occurrence a naive scan finds shows up too (completeness).
    #[test]
    fn find_all_is_sound_and_complete(
        text in "[ab]{1,40}",
        pattern in "[ab]{1,6}",
    ) {
        let st = SuffixTree::build(&text).unwrap();
        let mut got = st.find_all(&pattern).unwrap();
        got.sort_unstable();

        let chars: Vec<char> = text.chars().collect();
        let needle: Vec<char> = pattern.chars().collect();
        let mut expected = Vec::new();
        for start in 0..chars.len() {
            if chars[start..].starts_with(needle.as_slice()) {
                expected.push(start);
            }
        }

        prop_assert_eq!(got, expected);
    }

    // Property 3: count agrees with the length of find_all.
    #[test]
    fn count_matches_find_all_length(
        text in "[abc]{1,40}",
        pattern in "[abc]{1,5}",
    ) {
        let st = SuffixTree::build(&text).unwrap();
        prop_assert_eq!(st.count(&pattern).unwrap(), st.find_all(&pattern).unwrap().len());
    }

    // Property 4: the longest repeated substring really does repeat, and
    // nothing strictly longer does.
    #[test]
    fn lrs_actually_repeats(text in "[ab]{2,30}") {
        let st = SuffixTree::build(&text).unwrap();
        let lrs = st.longest_repeated_substring();
        if !lrs.is_empty() {
            prop_assert!(st.count(&lrs).unwrap() >= 2);
        }
    }

    // Property 7: lazy and eager suffix enumeration always agree.
    #[test]
    fn lazy_and_eager_suffixes_agree(text in "[abc]{0,30}") {
        let st = SuffixTree::build(&text).unwrap();
        let eager = st.get_all_suffixes();
        let lazy: Vec<String> = st.enumerate_suffixes().collect();
        prop_assert_eq!(eager, lazy);
    }

    // Property 10: construction is deterministic.
    #[test]
    fn construction_is_deterministic(text in "[abcd]{0,40}") {
        let a = SuffixTree::build(&text).unwrap();
        let b = SuffixTree::build(&text).unwrap();
        prop_assert_eq!(a.get_all_suffixes(), b.get_all_suffixes());
        prop_assert_eq!(a.print(), b.print());
    }
}
