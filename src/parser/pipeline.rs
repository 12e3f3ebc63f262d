//! Конвейер: извлечение → лексический анализ по всем строкам документа
//!
//! Строки одного документа обрабатываются строго по порядку, так как
//! состояние комментария и списка SELECT переносится из строки в строку.
//! Независимые документы можно обрабатывать параллельно.

use crate::common::LexerConfig;
use crate::parser::extractor::{extract_line, ExtractHalt, RawToken};
use crate::parser::lexer::{lex_line, LexState, LexedLine};
use crate::parser::rules::RuleTable;
use crate::parser::token::Token;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Вид деградации строки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// Обертка без класса остановила извлечение
    BareWrapper,
    /// Нераспознанная разметка остановила извлечение
    UnmatchedMarkup,
    /// Ни одно лексическое правило не подошло
    NoRuleMatch,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::BareWrapper => write!(f, "bare wrapper"),
            DiagnosticKind::UnmatchedMarkup => write!(f, "unmatched markup"),
            DiagnosticKind::NoRuleMatch => write!(f, "no rule match"),
        }
    }
}

/// Диагностика деградировавшей строки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Номер строки (с нуля)
    pub line: usize,
    pub kind: DiagnosticKind,
    /// Смещение в байтах: в разметке для ошибок извлечения, в тексте для лексера
    pub offset: usize,
    /// Необработанный остаток
    pub text: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {} at offset {}: {:?}",
            self.line, self.kind, self.offset, self.text
        )
    }
}

/// Результат обработки одной строки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineReport {
    /// Номер строки (с нуля)
    pub index: usize,
    /// Буквальный текст, переданный лексеру
    pub literal: String,
    /// Промежуточные токены извлечения (пусто для обычного текста)
    pub raw_tokens: Vec<RawToken>,
    /// Результат лексического анализа
    pub lexed: LexedLine,
    pub diagnostics: Vec<Diagnostic>,
}

impl LineReport {
    pub fn tokens(&self) -> &[Token] {
        &self.lexed.tokens
    }

    /// Строка обработана без деградации
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Результат обработки документа
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DocumentReport {
    pub lines: Vec<LineReport>,
    /// Состояние после последней строки
    pub final_state: LexState,
}

impl DocumentReport {
    pub fn is_complete(&self) -> bool {
        self.lines.iter().all(LineReport::is_complete)
    }

    /// Все диагностики документа в порядке строк
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.lines.iter().flat_map(|line| line.diagnostics.iter())
    }

    /// Токены по строкам
    pub fn token_lines(&self) -> Vec<&[Token]> {
        self.lines.iter().map(LineReport::tokens).collect()
    }
}

/// Делит текст на строки по `\r\n`, `\n` и `\r`
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split("\r\n")
        .flat_map(|chunk| chunk.split('\n'))
        .flat_map(|chunk| chunk.split('\r'))
        .collect()
}

/// Конвейер обработки документа
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    rules: RuleTable,
}

impl Pipeline {
    pub fn new(config: &LexerConfig) -> Self {
        Self::with_rules(RuleTable::new(config))
    }

    pub fn with_rules(rules: RuleTable) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Обрабатывает фрагменты разметки (по одному на строку редактора)
    pub fn run<I, S>(&self, fragments: I) -> DocumentReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = LexState::default();
        let mut lines = Vec::new();

        for (index, fragment) in fragments.into_iter().enumerate() {
            let extracted = extract_line(fragment.as_ref());
            let mut diagnostics = Vec::new();
            if let Some(halt) = &extracted.halt {
                let kind = match halt {
                    ExtractHalt::BareWrapper { .. } => DiagnosticKind::BareWrapper,
                    ExtractHalt::Unmatched { .. } => DiagnosticKind::UnmatchedMarkup,
                };
                diagnostics.push(Diagnostic {
                    line: index,
                    kind,
                    offset: halt.offset(),
                    text: halt.remainder().to_string(),
                });
            }

            let report = self.lex(index, extracted.text, extracted.raw_tokens, diagnostics, state);
            state = report.lexed.exit_state;
            lines.push(report);
        }

        DocumentReport {
            lines,
            final_state: state,
        }
    }

    /// Обрабатывает уже буквальные строки, без извлечения
    pub fn run_lines<I, S>(&self, lines: I) -> DocumentReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = LexState::default();
        let mut reports = Vec::new();

        for (index, line) in lines.into_iter().enumerate() {
            let report = self.lex(index, line.as_ref().to_string(), Vec::new(), Vec::new(), state);
            state = report.lexed.exit_state;
            reports.push(report);
        }

        DocumentReport {
            lines: reports,
            final_state: state,
        }
    }

    /// Обрабатывает SQL текст целиком
    pub fn run_text(&self, sql: &str) -> DocumentReport {
        self.run_lines(split_lines(sql))
    }

    /// Обрабатывает независимые документы разметки параллельно
    pub fn run_documents<D>(&self, documents: &[D]) -> Vec<DocumentReport>
    where
        D: AsRef<[String]> + Sync,
    {
        documents
            .par_iter()
            .map(|document| self.run(document.as_ref()))
            .collect()
    }

    fn lex(
        &self,
        index: usize,
        literal: String,
        raw_tokens: Vec<RawToken>,
        mut diagnostics: Vec<Diagnostic>,
        state: LexState,
    ) -> LineReport {
        let lexed = lex_line(&self.rules, &literal, state);
        if let Some(unlexed) = &lexed.unlexed {
            diagnostics.push(Diagnostic {
                line: index,
                kind: DiagnosticKind::NoRuleMatch,
                offset: unlexed.offset,
                text: unlexed.text.clone(),
            });
        }

        for diagnostic in &diagnostics {
            log::warn!("{}", diagnostic);
        }
        log::debug!(
            "line {}: {} tokens, exit state {:?}",
            index,
            lexed.tokens.len(),
            lexed.exit_state
        );

        LineReport {
            index,
            literal,
            raw_tokens,
            lexed,
            diagnostics,
        }
    }
}
