//! Конфигурация для bqlex
//!
//! Предоставляет структуры конфигурации лексера, проверки стиля и логирования.
//! Источники: TOML файл, переменные окружения и аргументы командной строки.
//! Файл дает полную конфигурацию, окружение и флаги накладываются поверх
//! через [`ConfigOverlay`]: побеждает любое явно заданное значение.

use crate::common::constants::{
    DEFAULT_INDENT_STEPS, DEFAULT_LOG_LEVEL, ENV_COMMA_POSITION, ENV_INDENT_STEPS,
    ENV_KEYWORD_STYLE, ENV_LOG_LEVEL, ENV_STAR_EXPANSION, LOG_LEVELS,
};
use crate::common::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Политика классификации `*` внутри списка выборки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StarExpansion {
    /// `*` становится ключевым словом везде, пока открыт список SELECT
    #[default]
    Anywhere,
    /// `*` становится ключевым словом только в позиции цели SELECT
    SelectTarget,
}

impl std::fmt::Display for StarExpansion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StarExpansion::Anywhere => write!(f, "anywhere"),
            StarExpansion::SelectTarget => write!(f, "select_target"),
        }
    }
}

impl std::str::FromStr for StarExpansion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "anywhere" => Ok(StarExpansion::Anywhere),
            "select_target" | "select-target" => Ok(StarExpansion::SelectTarget),
            _ => Err(Error::configuration(format!("Unsupported star expansion policy: {}", s))),
        }
    }
}

/// Стиль регистра ключевых слов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum KeywordStyle {
    /// Исходный регистр
    #[default]
    Preserve,
    /// Нижний регистр
    Lower,
    /// Верхний регистр
    Upper,
    /// Первая буква заглавная, остальные строчные
    Capitalize,
}

impl std::fmt::Display for KeywordStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeywordStyle::Preserve => write!(f, "preserve"),
            KeywordStyle::Lower => write!(f, "lower"),
            KeywordStyle::Upper => write!(f, "upper"),
            KeywordStyle::Capitalize => write!(f, "capitalize"),
        }
    }
}

impl std::str::FromStr for KeywordStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "preserve" => Ok(KeywordStyle::Preserve),
            "lower" => Ok(KeywordStyle::Lower),
            "upper" | "upper-all" => Ok(KeywordStyle::Upper),
            "capitalize" | "upper-head" => Ok(KeywordStyle::Capitalize),
            _ => Err(Error::configuration(format!("Unsupported keyword style: {}", s))),
        }
    }
}

/// Где должна стоять запятая при переносе списка на несколько строк
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CommaPosition {
    /// В конце строки: `a,`
    #[default]
    End,
    /// В начале строки: `, a`
    Head,
}

impl std::fmt::Display for CommaPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommaPosition::End => write!(f, "end"),
            CommaPosition::Head => write!(f, "head"),
        }
    }
}

impl std::str::FromStr for CommaPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "end" => Ok(CommaPosition::End),
            "head" => Ok(CommaPosition::Head),
            _ => Err(Error::configuration(format!("Unsupported comma position: {}", s))),
        }
    }
}

/// Конфигурация лексера
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LexerConfig {
    /// Политика раскрытия `*`
    pub star_expansion: StarExpansion,
    /// Дополнительные слова, распознаваемые как ключевые
    pub extra_keywords: Vec<String>,
    /// Стиль регистра ключевых слов при выводе
    pub keyword_style: KeywordStyle,
}

/// Конфигурация проверки стиля
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Положение запятой вне скобок
    pub comma_position: CommaPosition,
    /// Ожидаемый регистр ключевых слов (`preserve` отключает проверку)
    pub keyword_style: KeywordStyle,
    /// Шаг отступа в пробелах
    pub indent_steps: usize,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            comma_position: CommaPosition::End,
            keyword_style: KeywordStyle::Lower,
            indent_steps: DEFAULT_INDENT_STEPS,
        }
    }
}

/// Конфигурация логирования
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Уровень логирования
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Основная конфигурация
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Настройки лексера
    pub lexer: LexerConfig,
    /// Настройки проверки стиля
    pub lint: LintConfig,
    /// Настройки логирования
    pub logging: LoggingConfig,
}

/// Частичная конфигурация из окружения или командной строки.
///
/// `None` означает "не задано"; заданное значение побеждает при слиянии,
/// даже если совпадает со значением по умолчанию.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigOverlay {
    pub star_expansion: Option<StarExpansion>,
    pub keyword_style: Option<KeywordStyle>,
    /// Добавляются к уже заданным
    pub extra_keywords: Vec<String>,
    pub comma_position: Option<CommaPosition>,
    pub lint_keyword_style: Option<KeywordStyle>,
    pub indent_steps: Option<usize>,
    pub log_level: Option<String>,
}

impl ConfigOverlay {
    /// Читает переменные окружения `BQLEX_*`
    pub fn from_env() -> Result<Self> {
        let mut overlay = ConfigOverlay::default();

        if let Ok(policy) = std::env::var(ENV_STAR_EXPANSION) {
            overlay.star_expansion = Some(policy.parse()?);
        }

        if let Ok(style) = std::env::var(ENV_KEYWORD_STYLE) {
            overlay.keyword_style = Some(style.parse()?);
        }

        if let Ok(position) = std::env::var(ENV_COMMA_POSITION) {
            overlay.comma_position = Some(position.parse()?);
        }

        if let Ok(steps) = std::env::var(ENV_INDENT_STEPS) {
            overlay.indent_steps = Some(parse_indent_steps(&steps)?);
        }

        if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
            overlay.log_level = Some(level);
        }

        Ok(overlay)
    }
}

/// Разбирает шаг отступа из текста
pub fn parse_indent_steps(value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::configuration(format!("Indent steps must be a number: {}", value)))
}

impl Config {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Разбирает конфигурацию из TOML строки
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Сериализует конфигурацию в TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Конфигурация по умолчанию с наложенными переменными окружения
    pub fn from_env() -> Result<Self> {
        let config = Config::default().merge(ConfigOverlay::from_env()?);
        config.validate()?;
        Ok(config)
    }

    /// Накладывает частичную конфигурацию: заданные значения побеждают
    pub fn merge(mut self, overlay: ConfigOverlay) -> Self {
        if let Some(policy) = overlay.star_expansion {
            self.lexer.star_expansion = policy;
        }
        if let Some(style) = overlay.keyword_style {
            self.lexer.keyword_style = style;
        }
        for word in overlay.extra_keywords {
            if !self.lexer.extra_keywords.contains(&word) {
                self.lexer.extra_keywords.push(word);
            }
        }
        if let Some(position) = overlay.comma_position {
            self.lint.comma_position = position;
        }
        if let Some(style) = overlay.lint_keyword_style {
            self.lint.keyword_style = style;
        }
        if let Some(steps) = overlay.indent_steps {
            self.lint.indent_steps = steps;
        }
        if let Some(level) = overlay.log_level {
            self.logging.level = level;
        }
        self
    }

    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<()> {
        for word in &self.lexer.extra_keywords {
            if word.is_empty() {
                return Err(Error::validation("Extra keyword cannot be empty"));
            }
            if !word.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(Error::validation(format!(
                    "Extra keyword must be a single word of [A-Za-z0-9_]: {}",
                    word
                )));
            }
        }

        if self.lint.indent_steps == 0 {
            return Err(Error::validation("Indent steps must be greater than 0"));
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::validation(format!("Unknown log level: {}", self.logging.level)));
        }

        Ok(())
    }
}
