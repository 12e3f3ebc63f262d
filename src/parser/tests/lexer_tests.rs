//! Тесты для лексического анализатора

use crate::common::test_utils::{lex, lex_with, pairs};
use crate::common::{LexerConfig, StarExpansion};
use crate::parser::{LexState, Lexer, TokenCategory::*};

#[test]
fn test_select_star_from() {
    let line = lex("SELECT * FROM t");

    assert!(line.is_complete());
    assert_eq!(
        pairs(&line.tokens),
        vec![
            (Keyword, "SELECT"),
            (Whitespace, " "),
            (Keyword, "*"),
            (Whitespace, " "),
            (Keyword, "FROM"),
            (Whitespace, " "),
            (Identifier, "t"),
        ]
    );
    assert_eq!(line.exit_state, LexState::new(false, false));
}

#[test]
fn test_star_inside_select_list_is_keyword() {
    // `*` между идентификаторами внутри списка выборки тоже считается ключевым словом
    let line = lex("SELECT a * b FROM t");

    assert_eq!(
        pairs(&line.tokens),
        vec![
            (Keyword, "SELECT"),
            (Whitespace, " "),
            (Identifier, "a"),
            (Whitespace, " "),
            (Keyword, "*"),
            (Whitespace, " "),
            (Identifier, "b"),
            (Whitespace, " "),
            (Keyword, "FROM"),
            (Whitespace, " "),
            (Identifier, "t"),
        ]
    );
}

#[test]
fn test_star_outside_select_list_is_operator() {
    let line = lex("a * b");
    assert_eq!(
        pairs(&line.tokens),
        vec![
            (Identifier, "a"),
            (Whitespace, " "),
            (Operator, "*"),
            (Whitespace, " "),
            (Identifier, "b"),
        ]
    );

    // После FROM список закрыт
    let line = lex("SELECT a FROM t WHERE x * 2 > 1");
    let star = line.tokens.iter().find(|t| t.text() == "*").unwrap();
    assert_eq!(star.category(), Operator);
}

#[test]
fn test_multi_char_operator_with_star_is_operator() {
    let line = lex("SELECT a ** b");
    let op = line.tokens.iter().find(|t| t.text() == "**").unwrap();
    assert_eq!(op.category(), Operator);
}

#[test]
fn test_case_insensitive_keywords() {
    let line = lex("select Select SELECT sElEcT");
    let keywords: Vec<_> = line.significant().collect();

    assert_eq!(keywords.len(), 4);
    for token in &keywords {
        assert_eq!(token.category(), Keyword);
    }
    assert_eq!(keywords[0].text(), "select");
    assert_eq!(keywords[1].text(), "Select");
    assert_eq!(keywords[2].text(), "SELECT");
    assert_eq!(keywords[3].text(), "sElEcT");
}

#[test]
fn test_keyword_followed_by_bracket() {
    let line = lex("COUNT(x)");
    assert_eq!(
        pairs(&line.tokens),
        vec![
            (Keyword, "COUNT"),
            (Bracket, "("),
            (Identifier, "x"),
            (Bracket, ")"),
        ]
    );

    let line = lex("count (x)");
    assert_eq!(
        pairs(&line.tokens),
        vec![
            (Keyword, "count"),
            (Whitespace, " "),
            (Bracket, "("),
            (Identifier, "x"),
            (Bracket, ")"),
        ]
    );
}

#[test]
fn test_keyword_requires_word_boundary() {
    // Слово, начинающееся с ключевого, остается идентификатором
    let line = lex("selected");
    assert_eq!(pairs(&line.tokens), vec![(Identifier, "selected")]);

    // Ключевое слово перед запятой: правило ключевых слов не срабатывает
    let line = lex("FROM,");
    assert_eq!(pairs(&line.tokens), vec![(Identifier, "FROM"), (Comma, ",")]);
}

#[test]
fn test_single_line_comment_precedence() {
    let line = lex("x -- note");
    assert_eq!(
        pairs(&line.tokens),
        vec![(Identifier, "x"), (Whitespace, " "), (Comment, "-- note")]
    );

    let line = lex("  # hash comment, with (brackets)");
    assert_eq!(
        pairs(&line.tokens),
        vec![
            (Whitespace, "  "),
            (Comment, "# hash comment, with (brackets)")
        ]
    );
}

#[test]
fn test_comment_begin_beats_operator() {
    let line = lex("a / b");
    assert_eq!(line.tokens[2].category(), Operator);

    let line = lex("/* one */ x");
    assert_eq!(
        pairs(&line.tokens),
        vec![
            (Comment, "/*"),
            (Comment, " one "),
            (Comment, "*/"),
            (Whitespace, " "),
            (Identifier, "x"),
        ]
    );
    assert!(!line.exit_state.in_comment);
}

#[test]
fn test_multi_line_comment() {
    let mut lexer = Lexer::default();
    let lines = lexer.tokenize_lines(["a /* start", "middle", "end */ b"]);

    let entry: Vec<bool> = lines.iter().map(|l| l.entry_state.in_comment).collect();
    assert_eq!(entry, vec![false, true, true]);

    assert_eq!(
        pairs(&lines[0].tokens),
        vec![
            (Identifier, "a"),
            (Whitespace, " "),
            (Comment, "/*"),
            (Comment, " start"),
        ]
    );
    assert_eq!(pairs(&lines[1].tokens), vec![(Comment, "middle")]);
    assert_eq!(
        pairs(&lines[2].tokens),
        vec![
            (Comment, "end "),
            (Comment, "*/"),
            (Whitespace, " "),
            (Identifier, "b"),
        ]
    );
    assert!(!lexer.state().in_comment);
}

#[test]
fn test_comment_suppresses_other_rules() {
    let state = LexState::new(true, false);
    let line = lex_with(&LexerConfig::default(), "SELECT a, (b)", state);

    assert_eq!(pairs(&line.tokens), vec![(Comment, "SELECT a, (b)")]);
    assert!(line.exit_state.in_comment);
    assert!(!line.exit_state.in_select_list);
}

#[test]
fn test_quoted_identifier_with_embedded_comma() {
    let line = lex("`a,b`");
    assert_eq!(pairs(&line.tokens), vec![(Identifier, "`a,b`")]);

    let line = lex("'it is -- not a comment'");
    assert_eq!(
        pairs(&line.tokens),
        vec![(Identifier, "'it is -- not a comment'")]
    );
}

#[test]
fn test_quoted_text_is_greedy_to_last_quote() {
    let line = lex(r#""a", "b""#);
    assert_eq!(pairs(&line.tokens), vec![(Identifier, r#""a", "b""#)]);
}

#[test]
fn test_whitespace_only_line() {
    let state = LexState::new(false, true);
    let line = lex_with(&LexerConfig::default(), " \t  ", state);

    assert!(line.is_complete());
    assert_eq!(line.significant().count(), 0);
    assert_eq!(line.exit_state, state);
    assert_eq!(line.text(), " \t  ");
}

#[test]
fn test_empty_line() {
    let line = lex("");
    assert!(line.tokens.is_empty());
    assert!(line.is_complete());
}

#[test]
fn test_reconstruction() {
    let inputs = [
        "SELECT a, b AS c FROM `project.dataset.table` WHERE x >= 10 -- tail",
        "  SUM(x)  ,  COUNT( * )  ",
        "WITH t AS (SELECT 1) SELECT * FROM t # done",
        "a /* open",
        "CASE WHEN a <> b THEN 'x' ELSE \"y\" END",
    ];
    for input in inputs {
        let line = lex(input);
        assert!(line.is_complete(), "incomplete: {}", input);
        assert_eq!(line.text(), input);
    }
}

#[test]
fn test_no_rule_match_halts_line() {
    let line = lex("a {b}");

    assert!(!line.is_complete());
    assert_eq!(pairs(&line.tokens), vec![(Identifier, "a"), (Whitespace, " ")]);
    let unlexed = line.unlexed.unwrap();
    assert_eq!(unlexed.offset, 2);
    assert_eq!(unlexed.text, "{b}");
}

#[test]
fn test_state_survives_halted_line() {
    let mut lexer = Lexer::default();
    let first = lexer.lex_line("SELECT {");
    assert!(!first.is_complete());
    assert!(first.exit_state.in_select_list);

    let second = lexer.lex_line("* FROM t");
    assert_eq!(second.tokens[0].category(), Keyword);
    assert_eq!(second.tokens[0].text(), "*");
}

#[test]
fn test_select_list_spans_lines() {
    let mut lexer = Lexer::default();
    let lines = lexer.tokenize_lines(["SELECT", "  *", "FROM t", "a * b"]);

    assert_eq!(pairs(&lines[1].tokens), vec![(Whitespace, "  "), (Keyword, "*")]);
    assert_eq!(lines[3].tokens[2].category(), Operator);
    assert_eq!(lexer.state(), LexState::default());

    lexer.reset();
    assert_eq!(lexer.state(), LexState::default());
}

#[test]
fn test_select_target_star_policy() {
    let config = LexerConfig {
        star_expansion: StarExpansion::SelectTarget,
        ..LexerConfig::default()
    };
    let start = LexState::default();
    let star = |text: &str| {
        let line = lex_with(&config, text, start);
        line.tokens
            .iter()
            .find(|t| t.text() == "*")
            .map(|t| t.category())
            .unwrap()
    };

    assert_eq!(star("SELECT * FROM t"), Keyword);
    assert_eq!(star("SELECT DISTINCT * FROM t"), Keyword);
    assert_eq!(star("SELECT a, * FROM t"), Keyword);
    assert_eq!(star("SELECT a * b FROM t"), Operator);
    assert_eq!(star("SELECT COUNT(*) FROM t"), Operator);

    // Первая позиция строки внутри открытого списка выборки
    let line = lex_with(&config, "* FROM t", LexState::new(false, true));
    assert_eq!(line.tokens[0].category(), Keyword);
}

#[test]
fn test_extra_keywords() {
    let config = LexerConfig {
        extra_keywords: vec!["qualify".to_string()],
        ..LexerConfig::default()
    };

    let line = lex_with(&config, "QUALIFY x", LexState::default());
    assert_eq!(line.tokens[0].category(), Keyword);

    let line = lex("QUALIFY x");
    assert_eq!(line.tokens[0].category(), Identifier);
}

#[test]
fn test_operators_and_identifiers() {
    let line = lex("x >= 10 AND y != 'z'");
    assert_eq!(
        pairs(&line.tokens),
        vec![
            (Identifier, "x"),
            (Whitespace, " "),
            (Operator, ">="),
            (Whitespace, " "),
            (Identifier, "10"),
            (Whitespace, " "),
            (Keyword, "AND"),
            (Whitespace, " "),
            (Identifier, "y"),
            (Whitespace, " "),
            (Operator, "!="),
            (Whitespace, " "),
            (Identifier, "'z'"),
        ]
    );

    // Операторы без пробелов поглощаются идентификатором
    let line = lex("a=b");
    assert_eq!(pairs(&line.tokens), vec![(Identifier, "a=b")]);
}

#[test]
fn test_render_keyword_style() {
    use crate::common::KeywordStyle;

    let line = lex("select count(x) from t");
    assert_eq!(line.render(KeywordStyle::Upper), "SELECT COUNT(x) FROM t");
    assert_eq!(line.render(KeywordStyle::Preserve), "select count(x) from t");

    let halted = lex("select {x}");
    assert_eq!(halted.render(KeywordStyle::Upper), "SELECT {x}");
}
