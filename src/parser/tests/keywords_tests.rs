//! Тесты для набора ключевых слов

use crate::common::KeywordStyle;
use crate::parser::keywords::{
    format_keyword, is_reserved, KeywordSet, RESERVED_FUNCTIONS, RESERVED_KEYWORDS,
};

#[test]
fn test_builtin_words_are_uppercase_and_unique() {
    let mut seen = std::collections::HashSet::new();
    for word in RESERVED_KEYWORDS.iter().chain(RESERVED_FUNCTIONS) {
        assert_eq!(*word, word.to_ascii_uppercase());
        assert!(!word.contains(char::is_whitespace), "{:?}", word);
        assert!(seen.insert(*word), "duplicate {}", word);
    }
}

#[test]
fn test_is_reserved_ignores_case() {
    assert!(is_reserved("select"));
    assert!(is_reserved("Count"));
    assert!(is_reserved("DECLARE"));
    assert!(is_reserved("begin"));
    assert!(is_reserved("call"));
    assert!(is_reserved("temp"));
    assert!(!is_reserved("selected"));
    assert!(!is_reserved(""));
}

#[test]
fn test_keyword_set_with_extra() {
    let set = KeywordSet::with_extra(["qualify", "Pivot"]);
    assert!(set.contains("QUALIFY"));
    assert!(set.contains("pivot"));
    assert!(set.contains("select"));
    assert!(!KeywordSet::default().contains("qualify"));

    let sorted = set.sorted();
    assert!(sorted.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(sorted.contains(&"QUALIFY".to_string()));
    assert_eq!(
        sorted.len(),
        RESERVED_KEYWORDS.len() + RESERVED_FUNCTIONS.len() + 2
    );
}

#[test]
fn test_extra_duplicate_of_builtin() {
    let set = KeywordSet::with_extra(["select"]);
    assert_eq!(
        set.sorted().len(),
        RESERVED_KEYWORDS.len() + RESERVED_FUNCTIONS.len()
    );
}

#[test]
fn test_format_keyword() {
    assert_eq!(format_keyword("sElEcT", KeywordStyle::Preserve), "sElEcT");
    assert_eq!(format_keyword("sElEcT", KeywordStyle::Lower), "select");
    assert_eq!(format_keyword("sElEcT", KeywordStyle::Upper), "SELECT");
    assert_eq!(format_keyword("sElEcT", KeywordStyle::Capitalize), "Select");
    assert_eq!(format_keyword("", KeywordStyle::Capitalize), "");
}
