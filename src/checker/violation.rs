//! Нарушения стиля

use crate::common::{CommaPosition, KeywordStyle};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Вид нарушения
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    /// Отступ не кратен шагу
    IndentSteps { steps: usize, width: usize },
    /// Больше одного пробела подряд не в отступе
    DuplicatedSpaces,
    /// Ключевое слово в неверном регистре
    KeywordCase {
        style: KeywordStyle,
        found: String,
        expected: String,
    },
    /// Запятая вне скобок стоит не там, где требует конфигурация
    CommaPosition { expected: CommaPosition },
    WhitespaceAfterComma,
    WhitespaceBeforeComma,
    WhitespaceAfterBracket,
    WhitespaceBeforeBracket,
    /// Нет пробела после бинарного оператора
    WhitespaceAfterOperator { text: String },
    /// Нет пробела перед бинарным оператором
    WhitespaceBeforeOperator { text: String },
    /// Имя таблицы не на одной строке с JOIN
    JoinTable,
    /// Недопустимая форма JOIN
    JoinContext { context: String },
    /// AND, OR или ON не в начале строки
    BreakLine { word: String },
    /// Несколько пустых строк подряд
    TooManyBlankLines { count: usize },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::IndentSteps { steps, width } => {
                write!(f, "indent steps must be multiples of {} ({})", steps, width)
            }
            ViolationKind::DuplicatedSpaces => write!(f, "too many spaces"),
            ViolationKind::KeywordCase {
                style,
                found,
                expected,
            } => {
                let rule = match style {
                    KeywordStyle::Upper => "reserved keywords must be upper case",
                    KeywordStyle::Lower => "reserved keywords must be lower case",
                    _ => "reserved keywords must start with an upper case letter",
                };
                write!(f, "{}: {} -> {}", rule, found, expected)
            }
            ViolationKind::CommaPosition { expected } => match expected {
                CommaPosition::End => write!(f, "comma must be end of line"),
                CommaPosition::Head => write!(f, "comma must be head of line"),
            },
            ViolationKind::WhitespaceAfterComma => write!(f, "whitespace must be after comma: ,"),
            ViolationKind::WhitespaceBeforeComma => {
                write!(f, "whitespace must not be before comma: ,")
            }
            ViolationKind::WhitespaceAfterBracket => {
                write!(f, "whitespace must not be after bracket: (")
            }
            ViolationKind::WhitespaceBeforeBracket => {
                write!(f, "whitespace must not be before bracket: )")
            }
            ViolationKind::WhitespaceAfterOperator { text } => {
                write!(f, "whitespace must be after binary operator: {}", text)
            }
            ViolationKind::WhitespaceBeforeOperator { text } => {
                write!(f, "whitespace must be before binary operator: {}", text)
            }
            ViolationKind::JoinTable => {
                write!(f, "table name must be on the same line as join context")
            }
            ViolationKind::JoinContext { context } => write!(
                f,
                "join context must be [left outer join], [inner join] or [cross join]: {}",
                context
            ),
            ViolationKind::BreakLine { word } => {
                write!(f, "break line at 'and', 'or', 'on': {}", word)
            }
            ViolationKind::TooManyBlankLines { count } => {
                write!(f, "too many blank lines ({})", count)
            }
        }
    }
}

/// Нарушение в конкретном месте документа
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    /// Номер строки (с нуля)
    pub line: usize,
    /// Смещение токена в байтах от начала строки
    pub position: usize,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, position {}: {}", self.line, self.position, self.kind)
    }
}
