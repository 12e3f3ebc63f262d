//! Проверка стиля SQL по результатам лексического анализа
//!
//! Проверки работают с токенами одной строки [`DocumentReport`]. Глубина
//! скобок считается заново для каждой строки; проверки положения запятой и
//! переноса AND/OR/ON применяются только вне скобок. Комментарии не
//! проверяются. Пустые строки учитываются на уровне документа.

pub mod checks;
pub mod violation;

#[cfg(test)]
mod tests;

pub use violation::{Violation, ViolationKind};

use crate::common::{LintConfig, MAX_BLANK_LINES};
use crate::parser::{DocumentReport, Token, TokenCategory};

/// Проверяющий стиль документа
#[derive(Debug, Clone, Default)]
pub struct Checker {
    config: LintConfig,
}

impl Checker {
    pub fn new(config: &LintConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Проверяет весь документ. Нарушения упорядочены по строкам и позициям.
    pub fn check(&self, report: &DocumentReport) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut blank_run: Option<(usize, usize)> = None;

        for line in &report.lines {
            let tokens = line.tokens();
            if checks::is_blank(tokens) {
                blank_run = match blank_run {
                    Some((first, count)) => Some((first, count + 1)),
                    None => Some((line.index, 1)),
                };
                continue;
            }

            violations.extend(blank_run.take().and_then(too_many_blank_lines));
            violations.extend(self.check_line(line.index, tokens));
        }
        violations.extend(blank_run.and_then(too_many_blank_lines));

        log::debug!(
            "checked {} lines, {} violations",
            report.lines.len(),
            violations.len()
        );
        violations
    }

    /// Проверяет токены одной строки
    pub fn check_line(&self, line: usize, tokens: &[Token]) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut depth: i32 = 0;
        let mut position = 0;

        for (index, token) in tokens.iter().enumerate() {
            let at = position;
            position += token.text().len();

            match token.category() {
                TokenCategory::Comment => continue,
                TokenCategory::Bracket if token.text() == "(" => depth += 1,
                TokenCategory::Bracket if token.text() == ")" => depth -= 1,
                _ => {}
            }

            let mut found = Vec::new();
            found.extend(checks::indent_steps(tokens, index, self.config.indent_steps));
            found.extend(checks::duplicated_spaces(tokens, index));
            found.extend(checks::keyword_case(token, self.config.keyword_style));
            if depth == 0 {
                found.extend(checks::comma_position(tokens, index, self.config.comma_position));
            }
            found.extend(checks::whitespace_around_comma(tokens, index));
            found.extend(checks::whitespace_inside_brackets(tokens, index));
            found.extend(checks::whitespace_around_operator(tokens, index));
            found.extend(checks::join_table(tokens, index));
            found.extend(checks::join_context(tokens, index));
            if depth == 0 {
                found.extend(checks::break_line(tokens, index));
            }

            violations.extend(found.into_iter().map(|kind| Violation {
                line,
                position: at,
                kind,
            }));
        }

        if !violations.is_empty() {
            log::trace!("line {}: {} violations", line, violations.len());
        }
        violations
    }
}

fn too_many_blank_lines((first, count): (usize, usize)) -> Option<Violation> {
    (count > MAX_BLANK_LINES).then_some(Violation {
        line: first,
        position: 0,
        kind: ViolationKind::TooManyBlankLines { count },
    })
}

/// Проверяет документ с заданной конфигурацией
pub fn check(report: &DocumentReport, config: &LintConfig) -> Vec<Violation> {
    Checker::new(config).check(report)
}
