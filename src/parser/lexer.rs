//! Лексический анализатор BigQuery SQL
//!
//! Разбирает буквальный текст строк по таблице правил. Между строками
//! переносится состояние [`LexState`]: открыт ли многострочный комментарий и
//! открыт ли список выборки SELECT. Строки обрабатываются строго по порядку.

use crate::common::{KeywordStyle, LexerConfig};
use crate::parser::keywords::format_keyword;
use crate::parser::rules::RuleTable;
use crate::parser::token::{Token, TokenCategory};
use serde::{Deserialize, Serialize};

/// Состояние, переносимое между строками
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LexState {
    /// Внутри незакрытого `/* … */`
    pub in_comment: bool,
    /// После `SELECT` и до следующего `FROM`
    pub in_select_list: bool,
}

impl LexState {
    pub fn new(in_comment: bool, in_select_list: bool) -> Self {
        Self {
            in_comment,
            in_select_list,
        }
    }
}

/// Неразобранный остаток строки: ни одно правило не подошло
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unlexed {
    /// Смещение остатка в байтах от начала строки
    pub offset: usize,
    /// Сам остаток
    pub text: String,
}

/// Результат разбора одной строки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexedLine {
    /// Токены в порядке следования
    pub tokens: Vec<Token>,
    /// Состояние на входе в строку
    pub entry_state: LexState,
    /// Состояние после последнего успешного правила
    pub exit_state: LexState,
    /// Остаток, если разбор остановился досрочно
    pub unlexed: Option<Unlexed>,
}

impl LexedLine {
    /// Строка разобрана полностью
    pub fn is_complete(&self) -> bool {
        self.unlexed.is_none()
    }

    /// Конкатенация текста токенов
    pub fn text(&self) -> String {
        self.tokens.iter().map(Token::text).collect()
    }

    /// Текст строки с ключевыми словами в заданном регистре.
    /// Неразобранный остаток выводится как есть.
    pub fn render(&self, style: KeywordStyle) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            if token.category() == TokenCategory::Keyword {
                out.push_str(&format_keyword(token.text(), style));
            } else {
                out.push_str(token.text());
            }
        }
        if let Some(unlexed) = &self.unlexed {
            out.push_str(&unlexed.text);
        }
        out
    }

    /// Токены без пробелов
    pub fn significant(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|token| !token.is_whitespace())
    }
}

/// Разбирает одну строку, начиная с состояния `state`
pub fn lex_line(rules: &RuleTable, line: &str, state: LexState) -> LexedLine {
    let mut scan = rules.scan(state);
    let mut rest = line;
    let mut unlexed = None;

    while !rest.is_empty() {
        match rules.step(rest, &mut scan) {
            Some(consumed) => rest = &rest[consumed..],
            None => {
                unlexed = Some(Unlexed {
                    offset: line.len() - rest.len(),
                    text: rest.to_string(),
                });
                break;
            }
        }
    }

    LexedLine {
        tokens: scan.tokens,
        entry_state: state,
        exit_state: scan.state,
        unlexed,
    }
}

/// Лексер: таблица правил и состояние текущего документа
#[derive(Debug, Clone, Default)]
pub struct Lexer {
    rules: RuleTable,
    state: LexState,
}

impl Lexer {
    /// Создает лексер по конфигурации
    pub fn new(config: &LexerConfig) -> Self {
        Self::with_rules(RuleTable::new(config))
    }

    /// Создает лексер с готовой таблицей правил
    pub fn with_rules(rules: RuleTable) -> Self {
        Self {
            rules,
            state: LexState::default(),
        }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Текущее состояние (состояние на входе в следующую строку)
    pub fn state(&self) -> LexState {
        self.state
    }

    /// Сбрасывает состояние к началу документа
    pub fn reset(&mut self) {
        self.state = LexState::default();
    }

    /// Разбирает очередную строку и переносит состояние дальше
    pub fn lex_line(&mut self, line: &str) -> LexedLine {
        let lexed = lex_line(&self.rules, line, self.state);
        self.state = lexed.exit_state;
        lexed
    }

    /// Разбирает последовательность строк по порядку
    pub fn tokenize_lines<I, S>(&mut self, lines: I) -> Vec<LexedLine>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .map(|line| self.lex_line(line.as_ref()))
            .collect()
    }
}
