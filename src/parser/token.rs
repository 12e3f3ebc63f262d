//! Токены для лексера BigQuery
//!
//! Токен является неизменяемым значением: фрагмент текста строки и его категория из
//! закрытого набора. Категория всегда одна из восьми; строковые имена
//! категорий встречаются только на границе (разбор из текста, вывод).

use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Категория токена
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenCategory {
    /// Запятая
    Comma,
    /// Круглая скобка
    Bracket,
    /// Зарезервированное слово, имя функции или `*` в списке выборки
    Keyword,
    /// Оператор
    Operator,
    /// Комментарий (однострочный или часть многострочного)
    Comment,
    /// Идентификатор или литерал в кавычках
    Identifier,
    /// Пробельные символы
    Whitespace,
    /// Неизвестная категория
    Unknown,
}

impl TokenCategory {
    /// Все категории в порядке объявления
    pub const ALL: [TokenCategory; 8] = [
        TokenCategory::Comma,
        TokenCategory::Bracket,
        TokenCategory::Keyword,
        TokenCategory::Operator,
        TokenCategory::Comment,
        TokenCategory::Identifier,
        TokenCategory::Whitespace,
        TokenCategory::Unknown,
    ];

    /// Имя категории
    pub fn name(&self) -> &'static str {
        match self {
            TokenCategory::Comma => "Comma",
            TokenCategory::Bracket => "Bracket",
            TokenCategory::Keyword => "Keyword",
            TokenCategory::Operator => "Operator",
            TokenCategory::Comment => "Comment",
            TokenCategory::Identifier => "Identifier",
            TokenCategory::Whitespace => "Whitespace",
            TokenCategory::Unknown => "Unknown",
        }
    }

    /// Проверяет, является ли категория значимой (не пробел и не комментарий)
    pub fn is_significant(&self) -> bool {
        !matches!(self, TokenCategory::Whitespace | TokenCategory::Comment)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for TokenCategory {
    type Err = Error;

    /// Разбор имени категории (с учетом регистра). Пустое имя дает `Unknown`.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(TokenCategory::Unknown);
        }
        TokenCategory::ALL
            .iter()
            .copied()
            .find(|category| category.name() == s)
            .ok_or_else(|| Error::validation(format!("Unknown token category: {}", s)))
    }
}

/// Токен: фрагмент текста и категория
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    category: TokenCategory,
    text: String,
}

impl Token {
    /// Создает токен; текст не может быть пустым
    pub fn new(category: TokenCategory, text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(Error::validation(format!(
                "{} token requires a non-empty text span",
                category
            )));
        }
        Ok(Self { category, text })
    }

    /// Создает токен из фрагмента, если он не пуст
    pub(crate) fn span(category: TokenCategory, text: &str) -> Option<Self> {
        if text.is_empty() {
            None
        } else {
            Some(Self {
                category,
                text: text.to_string(),
            })
        }
    }

    /// Категория токена
    pub fn category(&self) -> TokenCategory {
        self.category
    }

    /// Текст токена в точности как во входной строке
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_whitespace(&self) -> bool {
        self.category == TokenCategory::Whitespace
    }

    /// Проверяет, что токен является ключевым словом `word` (без учета регистра)
    pub fn is_keyword(&self, word: &str) -> bool {
        self.category == TokenCategory::Keyword && self.text.eq_ignore_ascii_case(word)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<\"{}\", \"{}\">", self.category, self.text)
    }
}
