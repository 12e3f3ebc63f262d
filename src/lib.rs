//! bqlex - лексический анализатор BigQuery SQL
//!
//! Разбирает текст запроса построчно по упорядоченной таблице правил и
//! восстанавливает буквальный текст из разметки подсветки веб-редактора.
//! Состояние многострочного комментария и списка выборки SELECT переносится
//! между строками документа.

pub mod checker;
pub mod cli;
pub mod common;
pub mod parser;

pub use checker::{Checker, Violation, ViolationKind};
pub use common::error::{Error, Result};
pub use common::{
    CommaPosition, Config, ConfigOverlay, KeywordStyle, LexerConfig, LintConfig, StarExpansion,
};
pub use parser::{
    extract_line, lex_line, Diagnostic, DiagnosticKind, DocumentReport, LexState, LexedLine,
    Lexer, LineReport, Pipeline, Token, TokenCategory,
};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
