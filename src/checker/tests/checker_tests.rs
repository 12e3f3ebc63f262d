//! Тесты для проверки документа целиком

use crate::checker::{check, Checker, Violation, ViolationKind};
use crate::common::test_utils::{lex, wrap};
use crate::common::{KeywordStyle, LintConfig};
use crate::parser::Pipeline;

const FORMATTED: &str = "select
    a,
    count(*) as n
from t
left outer join u
    on t.id = u.id
where a between 1 and 2
    and b = 'x'
group by a";

#[test]
fn test_formatted_query_is_clean() {
    let report = Pipeline::default().run_text(FORMATTED);
    assert!(Checker::default().check(&report).is_empty());
}

#[test]
fn test_violations_are_ordered() {
    let report = Pipeline::default().run_text("SELECT a,b\n  from t");
    let violations = check(&report, &LintConfig::default());

    let places: Vec<(usize, usize)> = violations
        .iter()
        .map(|violation| (violation.line, violation.position))
        .collect();
    let mut sorted = places.clone();
    sorted.sort();
    assert_eq!(places, sorted);
    assert_eq!(violations.len(), 4);
}

#[test]
fn test_multi_line_comment_is_skipped() {
    let report = Pipeline::default().run_text("select a /* Start\n  SELECT  ,x\nend */ from t");
    assert!(Checker::default().check(&report).is_empty());
}

#[test]
fn test_bracket_depth_is_per_line() {
    // Незакрытая скобка не влияет на следующую строку
    let report = Pipeline::default().run_text("select f(\n    a, b)");
    let violations = Checker::default().check(&report);

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].line, 1);
    assert!(matches!(violations[0].kind, ViolationKind::CommaPosition { .. }));
}

#[test]
fn test_check_line_positions() {
    let line = lex("select  a");
    let violations = Checker::default().check_line(7, &line.tokens);

    assert_eq!(
        violations,
        vec![Violation {
            line: 7,
            position: 6,
            kind: ViolationKind::DuplicatedSpaces,
        }]
    );
}

#[test]
fn test_markup_document() {
    let fragments = vec![
        format!("{} a {}", wrap("cm-keyword", "SELECT"), wrap("cm-keyword", "FROM")),
        format!("{} t", wrap("cm-keyword", "JOIN")),
    ];
    let report = Pipeline::default().run(fragments);
    let config = LintConfig {
        keyword_style: KeywordStyle::Upper,
        ..LintConfig::default()
    };
    let violations = Checker::new(&config).check(&report);

    assert_eq!(
        violations,
        vec![Violation {
            line: 1,
            position: 0,
            kind: ViolationKind::JoinContext {
                context: "JOIN".to_string()
            },
        }]
    );
}

#[test]
fn test_degraded_line_is_still_checked() {
    let fragments = vec![format!("{} a  <b>x</b>", wrap("cm-keyword", "select"))];
    let report = Pipeline::default().run(fragments);

    assert!(!report.is_complete());
    let violations = Checker::default().check(&report);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].kind, ViolationKind::DuplicatedSpaces);
}

#[test]
fn test_violation_display() {
    let violation = Violation {
        line: 2,
        position: 4,
        kind: ViolationKind::KeywordCase {
            style: KeywordStyle::Upper,
            found: "from".to_string(),
            expected: "FROM".to_string(),
        },
    };
    assert_eq!(
        violation.to_string(),
        "line 2, position 4: reserved keywords must be upper case: from -> FROM"
    );
    assert_eq!(
        ViolationKind::WhitespaceBeforeOperator {
            text: ")=".to_string()
        }
        .to_string(),
        "whitespace must be before binary operator: )="
    );
}

#[test]
fn test_violation_json() {
    let violation = Violation {
        line: 0,
        position: 3,
        kind: ViolationKind::TooManyBlankLines { count: 2 },
    };
    let json = serde_json::to_string(&violation).unwrap();
    let parsed: Violation = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, violation);
}
