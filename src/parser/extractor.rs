//! Извлечение буквального текста строки из разметки редактора
//!
//! Редактор оборачивает часть подстрок в `<span class="…">…</span>`, остальное
//! оставляет как есть и экранирует `<`, `>` и `&`. Извлекатель идет по
//! фрагменту слева направо и на каждом шаге пробует, по порядку:
//!
//! 1. пробелы (в токен не попадают, но сохраняются на своем месте в тексте);
//! 2. `&nbsp;`: заполнитель пустой позиции, отбрасывается;
//! 3. `&lt;` и `&gt;`: неравенство, декодируется;
//! 4. `<span class="…">…</span>`: обертка подсветки, берется содержимое
//!    (возможно пустое; вложенные теги внутри обертки не допускаются);
//! 5. `<span>` без класса: строка дальше не разбирается;
//! 6. любая последовательность без пробелов, `<` и `&`.

use crate::common::{ENTITY_AMP, ENTITY_GT, ENTITY_LT, ENTITY_NBSP, SPAN_OPEN};
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static::lazy_static! {
    static ref SPACES: Regex = Regex::new(r"^\s+").unwrap();
    static ref WRAPPED: Regex =
        Regex::new(r#"^<span class="([^"]*)"[^>]*>([^<]*)</span>"#).unwrap();
    static ref BARE_TEXT: Regex = Regex::new(r"^[^\s<&]+").unwrap();
}

/// Подсказка о том, как подстрока была представлена в разметке
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RawKind {
    /// Заполнитель `&nbsp;`
    Newline,
    /// Экранированный `<` или `>`
    Inequality,
    /// Содержимое обертки подсветки с классом `class`
    Wrapped { class: String },
    /// Текст без обертки
    Unknown,
}

/// Промежуточный токен извлечения
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawToken {
    pub text: String,
    pub kind: RawKind,
}

impl RawToken {
    pub fn new(kind: RawKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Причина досрочной остановки извлечения
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractHalt {
    /// Обертка `<span>` без класса
    BareWrapper { offset: usize, remainder: String },
    /// Разметка, которую не распознал ни один шаг
    Unmatched { offset: usize, remainder: String },
}

impl ExtractHalt {
    pub fn offset(&self) -> usize {
        match self {
            ExtractHalt::BareWrapper { offset, .. } | ExtractHalt::Unmatched { offset, .. } => {
                *offset
            }
        }
    }

    pub fn remainder(&self) -> &str {
        match self {
            ExtractHalt::BareWrapper { remainder, .. }
            | ExtractHalt::Unmatched { remainder, .. } => remainder,
        }
    }
}

/// Результат извлечения одной строки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExtractedLine {
    /// Буквальный текст строки (вход для лексера)
    pub text: String,
    /// Промежуточные токены, только для отладки (`Newline` не включаются)
    pub raw_tokens: Vec<RawToken>,
    /// Причина остановки, если строка разобрана не до конца
    pub halt: Option<ExtractHalt>,
}

impl ExtractedLine {
    pub fn is_complete(&self) -> bool {
        self.halt.is_none()
    }

    fn push(&mut self, token: RawToken) {
        if token.kind != RawKind::Newline {
            self.text.push_str(&token.text);
            self.raw_tokens.push(token);
        }
    }
}

/// Декодирует сущности, которые экранирует редактор
pub fn decode_entities(text: &str) -> String {
    text.replace(ENTITY_LT, "<")
        .replace(ENTITY_GT, ">")
        .replace(ENTITY_AMP, "&")
}

/// Извлекает буквальный текст из фрагмента разметки одной строки
pub fn extract_line(markup: &str) -> ExtractedLine {
    let mut line = ExtractedLine::default();
    let mut rest = markup;

    while !rest.is_empty() {
        if let Some(m) = SPACES.find(rest) {
            line.text.push_str(m.as_str());
            rest = &rest[m.end()..];
            continue;
        }

        let offset = markup.len() - rest.len();
        let (token, consumed) = if rest.starts_with(ENTITY_NBSP) {
            (RawToken::new(RawKind::Newline, ENTITY_NBSP), ENTITY_NBSP.len())
        } else if rest.starts_with(ENTITY_LT) {
            (RawToken::new(RawKind::Inequality, "<"), ENTITY_LT.len())
        } else if rest.starts_with(ENTITY_GT) {
            (RawToken::new(RawKind::Inequality, ">"), ENTITY_GT.len())
        } else if let Some(caps) = WRAPPED.captures(rest) {
            let class = caps.get(1).map_or("", |m| m.as_str());
            let inner = caps.get(2).map_or("", |m| m.as_str());
            let consumed = caps.get(0).map_or(0, |m| m.len());
            (
                RawToken::new(
                    RawKind::Wrapped {
                        class: class.to_string(),
                    },
                    decode_entities(inner),
                ),
                consumed,
            )
        } else if rest.starts_with(SPAN_OPEN) {
            log::debug!("bare wrapper at offset {}: {:?}", offset, rest);
            line.halt = Some(ExtractHalt::BareWrapper {
                offset,
                remainder: rest.to_string(),
            });
            break;
        } else if rest.starts_with(ENTITY_AMP) {
            (RawToken::new(RawKind::Unknown, "&"), ENTITY_AMP.len())
        } else if let Some(m) = BARE_TEXT.find(rest) {
            (RawToken::new(RawKind::Unknown, m.as_str()), m.end())
        } else if rest.starts_with('&') {
            (RawToken::new(RawKind::Unknown, "&"), 1)
        } else {
            line.halt = Some(ExtractHalt::Unmatched {
                offset,
                remainder: rest.to_string(),
            });
            break;
        };

        line.push(token);
        rest = &rest[consumed..];
    }

    line
}
