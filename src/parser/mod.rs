//! Двухэтапный лексический анализатор BigQuery SQL
//!
//! Этап 1 ([`extractor`]) восстанавливает буквальный текст строки из разметки
//! подсветки редактора. Этап 2 ([`lexer`]) разбирает текст по упорядоченной
//! таблице правил ([`rules`]). [`pipeline`] связывает этапы по всему документу.

pub mod extractor;
pub mod keywords;
pub mod lexer;
pub mod pipeline;
pub mod rules;
pub mod token;

#[cfg(test)]
mod tests;

// Переэкспортируем основные типы
pub use extractor::{extract_line, ExtractHalt, ExtractedLine, RawKind, RawToken};
pub use keywords::{format_keyword, is_reserved, KeywordSet};
pub use lexer::{lex_line, LexState, LexedLine, Lexer, Unlexed};
pub use pipeline::{split_lines, Diagnostic, DiagnosticKind, DocumentReport, LineReport, Pipeline};
pub use rules::{Rule, RuleKind, RuleTable};
pub use token::{Token, TokenCategory};
