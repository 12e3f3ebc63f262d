//! Тесты для таблицы правил

use crate::common::{LexerConfig, StarExpansion};
use crate::parser::{RuleKind, RuleTable};

#[test]
fn test_rule_order() {
    let table = RuleTable::default();

    let kinds: Vec<RuleKind> = table.rules().iter().map(|rule| rule.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            RuleKind::CommentBegin,
            RuleKind::CommentLine,
            RuleKind::Comma,
            RuleKind::BracketLeft,
            RuleKind::BracketRight,
            RuleKind::Keyword,
            RuleKind::Quoted,
            RuleKind::Operator,
            RuleKind::Identifier,
            RuleKind::Whitespace,
        ]
    );

    let kinds: Vec<RuleKind> = table
        .comment_rules()
        .iter()
        .map(|rule| rule.kind())
        .collect();
    assert_eq!(kinds, vec![RuleKind::CommentEnd, RuleKind::CommentRest]);
}

#[test]
fn test_patterns_are_anchored() {
    let table = RuleTable::default();
    for rule in table.rules().iter().chain(table.comment_rules()) {
        assert!(
            rule.pattern().starts_with('^') || rule.pattern().starts_with("(?s)^"),
            "{} is not anchored: {}",
            rule.kind().name(),
            rule.pattern()
        );
    }
}

#[test]
fn test_operator_pattern_covers_all_chars() {
    let table = RuleTable::default();
    let operator = table
        .rules()
        .iter()
        .find(|rule| rule.kind() == RuleKind::Operator)
        .unwrap();
    let regex = regex::Regex::new(operator.pattern()).unwrap();

    for op in ["=", "<", ">", "!", "+", "-", "*", "/", "&", "|", "<>", ">=", "||"] {
        let caps = regex.captures(op).unwrap();
        assert_eq!(&caps[2], op);
    }
    assert!(regex.captures("a").is_none());
}

#[test]
fn test_table_from_config() {
    let config = LexerConfig {
        star_expansion: StarExpansion::SelectTarget,
        extra_keywords: vec!["qualify".to_string()],
        ..LexerConfig::default()
    };
    let table = RuleTable::new(&config);

    assert_eq!(table.star_expansion(), StarExpansion::SelectTarget);
    assert!(table.keywords().contains("QUALIFY"));
    assert_eq!(RuleTable::default().star_expansion(), StarExpansion::Anywhere);
}
