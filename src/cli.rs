//! CLI интерфейс для bqlex
//!
//! Разбирает разметку редактора или SQL текст и печатает токены по строкам
//! либо проверяет стиль запроса.

use crate::checker::{Checker, Violation};
use crate::common::{
    CommaPosition, Config, ConfigOverlay, KeywordStyle, Result, StarExpansion, DEFAULT_CONFIG_FILE,
};
use crate::parser::{DocumentReport, KeywordSet, Pipeline};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Код выхода при наличии диагностик в режиме `--strict`
pub const STRICT_EXIT_CODE: i32 = 2;

/// Код выхода при найденных нарушениях стиля
pub const VIOLATION_EXIT_CODE: i32 = 1;

/// bqlex - лексический анализатор BigQuery SQL
#[derive(Parser, Debug)]
#[command(name = "bqlex")]
#[command(about = "Tokenizer for BigQuery Standard SQL and highlighted editor markup")]
#[command(version)]
pub struct Cli {
    /// Конфигурационный файл
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Уровень детализации логирования
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Разобрать разметку редактора (по фрагменту на строку)
    Markup(LexArgs),

    /// Разобрать SQL текст
    Sql(LexArgs),

    /// Проверить стиль SQL
    Check(CheckArgs),

    /// Показать активный набор ключевых слов
    Keywords,

    /// Показать итоговую конфигурацию в TOML
    Config,
}

/// Формат вывода
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct LexArgs {
    /// Входной файл (по умолчанию stdin)
    pub input: Option<PathBuf>,

    /// Формат вывода
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Регистр ключевых слов (preserve, lower, upper, capitalize)
    #[arg(long, value_name = "STYLE")]
    pub keyword_style: Option<KeywordStyle>,

    /// Политика раскрытия `*` (anywhere, select_target)
    #[arg(long, value_name = "POLICY")]
    pub star_expansion: Option<StarExpansion>,

    /// Завершаться с кодом 2, если есть деградировавшие строки
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Входной файл (по умолчанию stdin)
    pub input: Option<PathBuf>,

    /// Вход является разметкой редактора, а не SQL текстом
    #[arg(long)]
    pub markup: bool,

    /// Формат вывода
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Ожидаемый регистр ключевых слов (preserve отключает проверку)
    #[arg(long, value_name = "STYLE")]
    pub keyword_style: Option<KeywordStyle>,

    /// Положение запятой (end, head)
    #[arg(long, value_name = "POSITION")]
    pub comma_position: Option<CommaPosition>,

    /// Шаг отступа в пробелах
    #[arg(long, value_name = "STEPS")]
    pub indent_steps: Option<usize>,

    /// Политика раскрытия `*` (anywhere, select_target)
    #[arg(long, value_name = "POLICY")]
    pub star_expansion: Option<StarExpansion>,
}

impl Cli {
    /// Загружает конфигурацию: файл, затем окружение, затем флаги
    pub fn load_config(&self) -> Result<Config> {
        let file_config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Config::from_file(default_path)?
                } else {
                    Config::default()
                }
            }
        };

        let config = file_config
            .merge(ConfigOverlay::from_env()?)
            .merge(self.overlay());
        config.validate()?;
        Ok(config)
    }

    /// Значения, явно заданные флагами командной строки
    pub fn overlay(&self) -> ConfigOverlay {
        let mut overlay = ConfigOverlay {
            log_level: self.log_level.clone(),
            ..ConfigOverlay::default()
        };

        match &self.command {
            Commands::Markup(args) | Commands::Sql(args) => {
                overlay.keyword_style = args.keyword_style;
                overlay.star_expansion = args.star_expansion;
            }
            Commands::Check(args) => {
                overlay.star_expansion = args.star_expansion;
                overlay.lint_keyword_style = args.keyword_style;
                overlay.comma_position = args.comma_position;
                overlay.indent_steps = args.indent_steps;
            }
            Commands::Keywords | Commands::Config => {}
        }
        overlay
    }

    /// Выполняет команду и возвращает код выхода
    pub fn execute<W: Write>(&self, config: &Config, out: &mut W) -> Result<i32> {
        match &self.command {
            Commands::Markup(args) => {
                let source = read_input(args.input.as_deref())?;
                let report = lex_source(SourceKind::Markup, config, &source);
                finish(&report, args, config, out)
            }
            Commands::Sql(args) => {
                let source = read_input(args.input.as_deref())?;
                let report = lex_source(SourceKind::Sql, config, &source);
                finish(&report, args, config, out)
            }
            Commands::Check(args) => {
                let source = read_input(args.input.as_deref())?;
                let kind = if args.markup {
                    SourceKind::Markup
                } else {
                    SourceKind::Sql
                };
                let report = lex_source(kind, config, &source);
                let violations = Checker::new(&config.lint).check(&report);
                write_violations(&violations, args.format, out)?;

                if violations.is_empty() {
                    return Ok(0);
                }
                log::info!("{} style violation(s) found", violations.len());
                Ok(VIOLATION_EXIT_CODE)
            }
            Commands::Keywords => {
                let keywords = KeywordSet::with_extra(&config.lexer.extra_keywords);
                for word in keywords.sorted() {
                    writeln!(out, "{}", word)?;
                }
                Ok(0)
            }
            Commands::Config => {
                write!(out, "{}", config.to_toml_string()?)?;
                Ok(0)
            }
        }
    }
}

/// Вид входного текста
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Фрагменты разметки, по одному на строку
    Markup,
    /// Буквальный SQL текст
    Sql,
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// Прогоняет входной текст через конвейер
pub fn lex_source(kind: SourceKind, config: &Config, source: &str) -> DocumentReport {
    let pipeline = Pipeline::new(&config.lexer);
    match kind {
        SourceKind::Markup => pipeline.run(source.lines()),
        SourceKind::Sql => pipeline.run_text(source),
    }
}

fn finish<W: Write>(
    report: &DocumentReport,
    args: &LexArgs,
    config: &Config,
    out: &mut W,
) -> Result<i32> {
    write_report(report, args.format, config.lexer.keyword_style, out)?;

    let degraded = report.diagnostics().count();
    if degraded > 0 {
        log::info!("{} line(s) were not fully processed", degraded);
        if args.strict {
            return Ok(STRICT_EXIT_CODE);
        }
    }
    Ok(0)
}

/// Печатает отчет в выбранном формате.
///
/// В текстовом формате для каждой строки выводится текст с ключевыми
/// словами в заданном регистре, затем токены и диагностики.
pub fn write_report<W: Write>(
    report: &DocumentReport,
    format: OutputFormat,
    style: KeywordStyle,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for line in &report.lines {
                writeln!(out, "{:>4}: {}", line.index, line.lexed.render(style))?;
                let tokens: Vec<String> = line.tokens().iter().map(ToString::to_string).collect();
                if !tokens.is_empty() {
                    writeln!(out, "      {}", tokens.join(" "))?;
                }
                for diagnostic in &line.diagnostics {
                    writeln!(out, "      ! {}", diagnostic)?;
                }
            }
        }
    }
    Ok(())
}

/// Печатает нарушения стиля, по одному на строку или JSON массивом
pub fn write_violations<W: Write>(
    violations: &[Violation],
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, violations)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for violation in violations {
                writeln!(out, "{}", violation)?;
            }
        }
    }
    Ok(())
}
