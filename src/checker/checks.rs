//! Отдельные проверки стиля
//!
//! Каждая проверка смотрит на токен `tokens[index]` и его соседей в пределах
//! одной строки и возвращает найденные нарушения.

use crate::checker::violation::ViolationKind;
use crate::common::{CommaPosition, KeywordStyle};
use crate::parser::keywords::format_keyword;
use crate::parser::{Token, TokenCategory};

/// Слова, которые могут стоять перед JOIN
const JOIN_MODIFIERS: &[&str] = &["INNER", "OUTER", "LEFT", "RIGHT", "CROSS"];

/// Допустимые формы JOIN
const JOIN_CONTEXTS: &[&str] = &["LEFT OUTER JOIN", "INNER JOIN", "CROSS JOIN"];

fn is_word(token: &Token, word: &str) -> bool {
    token.text().eq_ignore_ascii_case(word)
}

fn is_layout(token: &Token) -> bool {
    matches!(
        token.category(),
        TokenCategory::Whitespace | TokenCategory::Comment
    )
}

fn width(token: &Token) -> usize {
    token.text().chars().count()
}

/// Строка пуста или состоит только из пробелов
pub fn is_blank(tokens: &[Token]) -> bool {
    tokens.iter().all(Token::is_whitespace)
}

/// До `index` в строке только пробелы и комментарии
pub fn is_first_token(tokens: &[Token], index: usize) -> bool {
    tokens[..index].iter().all(is_layout)
}

/// Отступ в начале строки кратен `steps`
pub fn indent_steps(tokens: &[Token], index: usize, steps: usize) -> Option<ViolationKind> {
    let token = &tokens[index];
    if index != 0 || !token.is_whitespace() {
        return None;
    }

    let width = width(token);
    (width % steps != 0).then_some(ViolationKind::IndentSteps { steps, width })
}

/// Повторные пробелы внутри строки (кроме отступа и выравнивания комментария)
pub fn duplicated_spaces(tokens: &[Token], index: usize) -> Option<ViolationKind> {
    let token = &tokens[index];
    if index == 0 || !token.is_whitespace() {
        return None;
    }
    if tokens
        .get(index + 1)
        .is_some_and(|next| next.category() == TokenCategory::Comment)
    {
        return None;
    }

    (width(token) >= 2).then_some(ViolationKind::DuplicatedSpaces)
}

/// Регистр ключевого слова. Для `Capitalize` проверяется только первая буква.
pub fn keyword_case(token: &Token, style: KeywordStyle) -> Option<ViolationKind> {
    if token.category() != TokenCategory::Keyword {
        return None;
    }

    let word = token.text();
    let wrong = match style {
        KeywordStyle::Preserve => false,
        KeywordStyle::Upper => word != word.to_uppercase(),
        KeywordStyle::Lower => word != word.to_lowercase(),
        KeywordStyle::Capitalize => word.chars().next().is_some_and(char::is_lowercase),
    };

    wrong.then(|| ViolationKind::KeywordCase {
        style,
        found: word.to_string(),
        expected: format_keyword(word, style),
    })
}

/// Положение запятой, разделяющей колонки или условия
pub fn comma_position(
    tokens: &[Token],
    index: usize,
    expected: CommaPosition,
) -> Option<ViolationKind> {
    if tokens[index].category() != TokenCategory::Comma {
        return None;
    }

    let wrong = match expected {
        CommaPosition::Head => !is_first_token(tokens, index),
        CommaPosition::End => !tokens[index + 1..].iter().all(is_layout),
    };
    wrong.then_some(ViolationKind::CommaPosition { expected })
}

/// Пробел после запятой и отсутствие пробела перед ней
pub fn whitespace_around_comma(tokens: &[Token], index: usize) -> Vec<ViolationKind> {
    let mut found = Vec::new();
    if tokens[index].category() != TokenCategory::Comma {
        return found;
    }

    if tokens.get(index + 1).is_some_and(|next| !next.is_whitespace()) {
        found.push(ViolationKind::WhitespaceAfterComma);
    }
    // Пробел в начале строки является отступом
    if index >= 2 && tokens[index - 1].is_whitespace() {
        found.push(ViolationKind::WhitespaceBeforeComma);
    }
    found
}

/// Нет пробела после `(` и перед `)`
pub fn whitespace_inside_brackets(tokens: &[Token], index: usize) -> Option<ViolationKind> {
    let token = &tokens[index];
    if token.category() != TokenCategory::Bracket {
        return None;
    }

    match token.text() {
        // Пробел в конце строки допустим
        "(" if index + 2 < tokens.len() && tokens[index + 1].is_whitespace() => {
            Some(ViolationKind::WhitespaceAfterBracket)
        }
        ")" if index >= 2 && tokens[index - 1].is_whitespace() => {
            Some(ViolationKind::WhitespaceBeforeBracket)
        }
        _ => None,
    }
}

/// Пробелы вокруг бинарного оператора
pub fn whitespace_around_operator(tokens: &[Token], index: usize) -> Vec<ViolationKind> {
    let mut found = Vec::new();
    let token = &tokens[index];
    if token.category() != TokenCategory::Operator {
        return found;
    }

    if let Some(next) = tokens.get(index + 1) {
        if !is_layout(next) && next.text() != ")" {
            found.push(ViolationKind::WhitespaceAfterOperator {
                text: format!("{}{}", token.text(), next.text()),
            });
        }
    }
    if let Some(prev) = index.checked_sub(1).map(|i| &tokens[i]) {
        if !prev.is_whitespace() && prev.text() != "(" && !prev.text().ends_with('.') {
            found.push(ViolationKind::WhitespaceBeforeOperator {
                text: format!("{}{}", prev.text(), token.text()),
            });
        }
    }
    found
}

/// Имя таблицы на той же строке, что и JOIN
pub fn join_table(tokens: &[Token], index: usize) -> Option<ViolationKind> {
    if !is_word(&tokens[index], "JOIN") {
        return None;
    }

    let has_table = tokens[index + 1..]
        .iter()
        .any(|token| token.category() == TokenCategory::Identifier);
    (!has_table).then_some(ViolationKind::JoinTable)
}

/// Форма JOIN: только `LEFT OUTER JOIN`, `INNER JOIN` или `CROSS JOIN`
pub fn join_context(tokens: &[Token], index: usize) -> Option<ViolationKind> {
    let token = &tokens[index];
    if !is_word(token, "JOIN") {
        return None;
    }

    let mut words = vec![token.text()];
    for prev in tokens[..index].iter().rev() {
        if prev.is_whitespace() {
            continue;
        }
        if !JOIN_MODIFIERS.iter().any(|word| is_word(prev, word)) {
            break;
        }
        words.insert(0, prev.text());
    }

    let context = words.join(" ");
    let upper = context.to_uppercase();
    (!JOIN_CONTEXTS.contains(&upper.as_str())).then_some(ViolationKind::JoinContext { context })
}

/// AND, OR и ON начинают строку (кроме `BETWEEN a AND b`)
pub fn break_line(tokens: &[Token], index: usize) -> Option<ViolationKind> {
    let token = &tokens[index];
    if !["AND", "OR", "ON"].iter().any(|word| is_word(token, word)) {
        return None;
    }
    if is_first_token(tokens, index) {
        return None;
    }

    if is_word(token, "AND") {
        for prev in tokens[..index].iter().rev() {
            if is_word(prev, "AND") {
                break;
            }
            if is_word(prev, "BETWEEN") {
                return None;
            }
        }
    }

    Some(ViolationKind::BreakLine {
        word: token.text().to_string(),
    })
}
