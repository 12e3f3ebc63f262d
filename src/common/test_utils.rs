//! Общие утилиты для тестирования

use crate::common::LexerConfig;
use crate::parser::{lex_line, LexState, LexedLine, RuleTable, Token, TokenCategory};

/// Пары (категория, текст) для компактных сравнений
pub fn pairs(tokens: &[Token]) -> Vec<(TokenCategory, &str)> {
    tokens
        .iter()
        .map(|token| (token.category(), token.text()))
        .collect()
}

/// Разбирает одну строку с конфигурацией по умолчанию из начального состояния
pub fn lex(text: &str) -> LexedLine {
    lex_line(&RuleTable::default(), text, LexState::default())
}

/// Разбирает одну строку с заданной конфигурацией и состоянием
pub fn lex_with(config: &LexerConfig, text: &str, state: LexState) -> LexedLine {
    lex_line(&RuleTable::new(config), text, state)
}

/// Оборачивает текст в span подсветки, как это делает редактор
pub fn wrap(class: &str, text: &str) -> String {
    format!("<span class=\"{}\">{}</span>", class, text)
}
