//! Таблица лексических правил
//!
//! Правила упорядочены по приоритету: на каждой позиции применяется первое
//! совпавшее правило. Длина совпадения приоритет не меняет, поэтому маркеры
//! комментариев стоят раньше операторов, а текст в кавычках раньше
//! идентификаторов.
//!
//! Каждое правило, кроме правил внутри комментария, захватывает пробелы
//! перед токеном (и, где это предусмотрено, после него) отдельными токенами
//! `Whitespace`, так что символы на успешном пути не теряются.

use crate::common::{
    LexerConfig, StarExpansion, FROM_KEYWORD, OPERATOR_CHARS, SELECT_KEYWORD, STAR,
};
use crate::parser::keywords::KeywordSet;
use crate::parser::lexer::LexState;
use crate::parser::token::{Token, TokenCategory};
use regex::{Captures, Regex};

lazy_static::lazy_static! {
    static ref COMMENT_END: Regex = Regex::new(r"^(.*?)(\*/)").unwrap();
    static ref COMMENT_REST: Regex = Regex::new(r"(?s)^(.+)").unwrap();
    static ref COMMENT_BEGIN: Regex = Regex::new(r"^(\s*)(/\*)").unwrap();
    static ref COMMENT_LINE: Regex = Regex::new(r"^(\s*)(#.*|--.*)").unwrap();
    static ref COMMA: Regex = Regex::new(r"^(\s*)(,)(\s*)").unwrap();
    static ref BRACKET_LEFT: Regex = Regex::new(r"^(\s*)(\()(\s*)").unwrap();
    static ref BRACKET_RIGHT: Regex = Regex::new(r"^(\s*)(\))(\s*)").unwrap();
    static ref KEYWORD: Regex = Regex::new(r"^(\s*)([A-Za-z0-9_]+)(\(|\s+|$)").unwrap();
    static ref QUOTED: Regex = Regex::new(r#"^(\s*)(".+"|'.+'|`.+`)(\s*)"#).unwrap();
    static ref OPERATOR: Regex = Regex::new(&format!(
        r"^(\s*)([{}]+)(\s*)",
        OPERATOR_CHARS
            .iter()
            .map(|c| regex::escape(&c.to_string()))
            .collect::<String>()
    ))
    .unwrap();
    static ref IDENTIFIER: Regex = Regex::new(r"^(\s*)([^,(){}#\s]+)(\s*)").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"^(\s+)").unwrap();
}

/// Вид правила: определяет, как совпадение превращается в токены
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// `*/` внутри комментария
    CommentEnd,
    /// Остаток строки внутри незакрытого комментария
    CommentRest,
    /// `/*`
    CommentBegin,
    /// `#…` или `--…` до конца строки
    CommentLine,
    /// `,`
    Comma,
    /// `(`
    BracketLeft,
    /// `)`
    BracketRight,
    /// Зарезервированное слово или имя функции
    Keyword,
    /// Текст в двойных, одинарных или обратных кавычках
    Quoted,
    /// Последовательность символов операторов
    Operator,
    /// Любая последовательность без разделителей
    Identifier,
    /// Только пробелы
    Whitespace,
}

impl RuleKind {
    /// Имя правила для логов и диагностики
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::CommentEnd => "comment_end",
            RuleKind::CommentRest => "comment_rest",
            RuleKind::CommentBegin => "comment_begin",
            RuleKind::CommentLine => "comment_line",
            RuleKind::Comma => "comma",
            RuleKind::BracketLeft => "bracket_left",
            RuleKind::BracketRight => "bracket_right",
            RuleKind::Keyword => "keyword",
            RuleKind::Quoted => "quoted",
            RuleKind::Operator => "operator",
            RuleKind::Identifier => "identifier",
            RuleKind::Whitespace => "whitespace",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            RuleKind::CommentEnd => &*COMMENT_END,
            RuleKind::CommentRest => &*COMMENT_REST,
            RuleKind::CommentBegin => &*COMMENT_BEGIN,
            RuleKind::CommentLine => &*COMMENT_LINE,
            RuleKind::Comma => &*COMMA,
            RuleKind::BracketLeft => &*BRACKET_LEFT,
            RuleKind::BracketRight => &*BRACKET_RIGHT,
            RuleKind::Keyword => &*KEYWORD,
            RuleKind::Quoted => &*QUOTED,
            RuleKind::Operator => &*OPERATOR,
            RuleKind::Identifier => &*IDENTIFIER,
            RuleKind::Whitespace => &*WHITESPACE,
        }
    }
}

/// Правило: шаблон плюс классификация совпадения
#[derive(Debug, Clone)]
pub struct Rule {
    kind: RuleKind,
    pattern: &'static Regex,
}

impl Rule {
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            pattern: kind.pattern(),
        }
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Исходный текст регулярного выражения
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Пытается применить правило к началу `text`.
    ///
    /// При успехе добавляет токены в `scan` и возвращает число потребленных
    /// байт (всегда больше нуля).
    pub(crate) fn apply(&self, text: &str, scan: &mut Scan<'_>) -> Option<usize> {
        let caps = self.pattern.captures(text)?;
        let consumed = caps.get(0).map_or(0, |m| m.len());
        if consumed == 0 {
            return None;
        }

        match self.kind {
            RuleKind::CommentEnd => {
                scan.push(TokenCategory::Comment, group(&caps, 1));
                scan.push(TokenCategory::Comment, group(&caps, 2));
                scan.state.in_comment = false;
            }
            RuleKind::CommentRest => {
                scan.push(TokenCategory::Comment, group(&caps, 1));
            }
            RuleKind::CommentBegin => {
                scan.push(TokenCategory::Whitespace, group(&caps, 1));
                scan.push(TokenCategory::Comment, group(&caps, 2));
                scan.state.in_comment = true;
            }
            RuleKind::CommentLine => {
                scan.push(TokenCategory::Whitespace, group(&caps, 1));
                scan.push(TokenCategory::Comment, group(&caps, 2));
            }
            RuleKind::Comma => scan.push_surrounded(&caps, TokenCategory::Comma),
            RuleKind::BracketLeft | RuleKind::BracketRight => {
                scan.push_surrounded(&caps, TokenCategory::Bracket)
            }
            RuleKind::Keyword => {
                let word = group(&caps, 2);
                if !scan.keywords.contains(word) {
                    return None;
                }
                if word.eq_ignore_ascii_case(SELECT_KEYWORD) {
                    scan.state.in_select_list = true;
                } else if word.eq_ignore_ascii_case(FROM_KEYWORD) {
                    scan.state.in_select_list = false;
                }

                scan.push(TokenCategory::Whitespace, group(&caps, 1));
                scan.push(TokenCategory::Keyword, word);
                let trailing = group(&caps, 3);
                if trailing == "(" {
                    scan.push(TokenCategory::Bracket, trailing);
                } else {
                    scan.push(TokenCategory::Whitespace, trailing);
                }
            }
            RuleKind::Quoted | RuleKind::Identifier => {
                scan.push_surrounded(&caps, TokenCategory::Identifier)
            }
            RuleKind::Operator => {
                let category = if group(&caps, 2) == STAR && scan.star_is_keyword() {
                    TokenCategory::Keyword
                } else {
                    TokenCategory::Operator
                };
                scan.push_surrounded(&caps, category);
            }
            RuleKind::Whitespace => {
                scan.push(TokenCategory::Whitespace, group(&caps, 1));
            }
        }

        log::trace!("rule {} matched {:?}", self.kind.name(), &text[..consumed]);
        Some(consumed)
    }
}

fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

/// Рабочее состояние разбора одной строки
pub(crate) struct Scan<'a> {
    pub state: LexState,
    pub tokens: Vec<Token>,
    keywords: &'a KeywordSet,
    star_expansion: StarExpansion,
}

impl<'a> Scan<'a> {
    fn push(&mut self, category: TokenCategory, text: &str) {
        if let Some(token) = Token::span(category, text) {
            self.tokens.push(token);
        }
    }

    /// Пробелы до, сам токен, пробелы после
    fn push_surrounded(&mut self, caps: &Captures<'_>, category: TokenCategory) {
        self.push(TokenCategory::Whitespace, group(caps, 1));
        self.push(category, group(caps, 2));
        self.push(TokenCategory::Whitespace, group(caps, 3));
    }

    /// Должна ли одиночная `*` считаться раскрытием списка колонок
    fn star_is_keyword(&self) -> bool {
        if !self.state.in_select_list {
            return false;
        }
        match self.star_expansion {
            StarExpansion::Anywhere => true,
            StarExpansion::SelectTarget => {
                match self.tokens.iter().rev().find(|t| t.category().is_significant()) {
                    None => true,
                    Some(prev) => {
                        prev.category() == TokenCategory::Comma
                            || prev.is_keyword(SELECT_KEYWORD)
                            || prev.is_keyword("DISTINCT")
                            || prev.is_keyword("ALL")
                    }
                }
            }
        }
    }
}

/// Упорядоченная таблица правил, фиксированная при создании
#[derive(Debug, Clone)]
pub struct RuleTable {
    comment_rules: Vec<Rule>,
    rules: Vec<Rule>,
    keywords: KeywordSet,
    star_expansion: StarExpansion,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new(&LexerConfig::default())
    }
}

impl RuleTable {
    /// Строит таблицу по конфигурации лексера
    pub fn new(config: &LexerConfig) -> Self {
        Self {
            comment_rules: vec![Rule::new(RuleKind::CommentEnd), Rule::new(RuleKind::CommentRest)],
            rules: [
                RuleKind::CommentBegin,
                RuleKind::CommentLine,
                RuleKind::Comma,
                RuleKind::BracketLeft,
                RuleKind::BracketRight,
                RuleKind::Keyword,
                RuleKind::Quoted,
                RuleKind::Operator,
                RuleKind::Identifier,
                RuleKind::Whitespace,
            ]
            .into_iter()
            .map(Rule::new)
            .collect(),
            keywords: KeywordSet::with_extra(&config.extra_keywords),
            star_expansion: config.star_expansion,
        }
    }

    /// Правила, действующие вне комментария, в порядке приоритета
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Правила, действующие внутри многострочного комментария
    pub fn comment_rules(&self) -> &[Rule] {
        &self.comment_rules
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    pub fn star_expansion(&self) -> StarExpansion {
        self.star_expansion
    }

    pub(crate) fn scan(&self, state: LexState) -> Scan<'_> {
        Scan {
            state,
            tokens: Vec::new(),
            keywords: &self.keywords,
            star_expansion: self.star_expansion,
        }
    }

    /// Применяет первое совпавшее правило к началу `text`
    pub(crate) fn step(&self, text: &str, scan: &mut Scan<'_>) -> Option<usize> {
        let rules = if scan.state.in_comment {
            &self.comment_rules
        } else {
            &self.rules
        };
        rules.iter().find_map(|rule| rule.apply(text, scan))
    }
}
