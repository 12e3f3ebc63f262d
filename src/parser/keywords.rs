//! Зарезервированные слова и функции BigQuery Standard SQL
//!
//! Списки: <https://cloud.google.com/bigquery/docs/reference/standard-sql/lexical#reserved-keywords>
//! и <https://cloud.google.com/bigquery/docs/reference/standard-sql/functions-and-operators>.

use crate::common::KeywordStyle;
use std::collections::HashSet;

/// Зарезервированные ключевые слова
pub const RESERVED_KEYWORDS: &[&str] = &[
    "ALL", "AND", "ANY", "ARRAY", "AS", "ASC", "ASSERT_ROWS_MODIFIED", "AT", "BETWEEN", "BY",
    "CASE", "CAST", "COLLATE", "CONTAINS", "CREATE", "CROSS", "CUBE", "CURRENT", "DEFAULT",
    "DEFINE", "DESC", "DISTINCT", "ELSE", "END", "ENUM", "ESCAPE", "EXCEPT", "EXCLUDE",
    "EXISTS", "EXTRACT", "FALSE", "FETCH", "FOLLOWING", "FOR", "FROM", "FULL", "GROUP",
    "GROUPING", "GROUPS", "HASH", "HAVING", "IF", "IGNORE", "IN", "INNER", "INTERSECT",
    "INTERVAL", "INTO", "IS", "JOIN", "LATERAL", "LEFT", "LIKE", "LIMIT", "LOOKUP", "MERGE",
    "NATURAL", "NEW", "NO", "NOT", "NULL", "NULLS", "OF", "ON", "OR", "ORDER", "OUTER", "OVER",
    "PARTITION", "PRECEDING", "PROTO", "RANGE", "RECURSIVE", "RESPECT", "RIGHT", "ROLLUP",
    "ROWS", "SELECT", "SET", "SOME", "STRUCT", "TABLESAMPLE", "THEN", "TO", "TREAT", "TRUE",
    "UNBOUNDED", "UNION", "UNNEST", "USING", "WHEN", "WHERE", "WINDOW", "WITH", "WITHIN",
    // скрипты
    "DECLARE", "BEGIN", "LOOP", "WHILE", "BREAK", "LEAVE", "CONTINUE", "ITERATE", "RETURN",
    "CALL",
    // пользовательские функции
    "TEMP", "TEMPORARY", "RETURNS", "LANGUAGE",
];

/// Встроенные функции
pub const RESERVED_FUNCTIONS: &[&str] = &[
    // агрегатные
    "ANY_VALUE", "ARRAY_AGG", "ARRAY_CONCAT_AGG", "AVG", "BIT_AND", "BIT_OR", "BIT_XOR",
    "COUNT", "COUNTIF", "LOGICAL_AND", "LOGICAL_OR", "MAX", "MIN", "STRING_AGG", "SUM",
    // статистические
    "CORR", "COVAR_POP", "COVAR_SAMP", "STDDEV_POP", "STDDEV_SAMP", "STDDEV", "VAR_POP",
    "VAR_SAMP", "VARIANCE",
    // приближенные
    "APPROX_COUNT_DISTINCT", "APPROX_QUANTILES", "APPROX_TOP_COUNT", "APPROX_TOP_SUM",
    // нумерация
    "RANK", "DENSE_RANK", "PERCENT_RANK", "CUME_DIST", "NTILE", "ROW_NUMBER",
    // битовые
    "BIT_COUNT",
    // математические
    "ABS", "SIGN", "IS_INF", "IS_NAN", "IEEE_DIVIDE", "RAND", "SQRT", "POW", "POWER", "EXP",
    "LN", "LOG", "LOG10", "GREATEST", "LEAST", "DIV", "SAFE_DIVIDE", "MOD", "ROUND", "TRUNC",
    "CEIL", "CEILING", "FLOOR", "COS", "COSH", "ACOS", "ACOSH", "SIN", "SINH", "ASIN", "ASINH",
    "TAN", "TANH", "ATAN", "ATANH", "ATAN2",
    // навигация
    "FIRST_VALUE", "LAST_VALUE", "NTH_VALUE", "LEAD", "LAG", "PERCENTILE_CONT",
    "PERCENTILE_DISC",
    // хеши
    "FARM_FINGERPRINT", "MD5", "SHA1", "SHA256", "SHA512",
    // строки
    "BYTE_LENGTH", "CHAR_LENGTH", "CHARACTER_LENGTH", "CODE_POINTS_TO_BYTES",
    "CODE_POINTS_TO_STRING", "CONCAT", "ENDS_WITH", "FORMAT", "FROM_BASE32", "FROM_BASE64",
    "FROM_HEX", "LENGTH", "LPAD", "LOWER", "LTRIM", "NORMALIZE", "NORMALIZE_AND_CASEFOLD",
    "REGEXP_CONTAINS", "REGEXP_EXTRACT", "REGEXP_EXTRACT_ALL", "REGEXP_REPLACE", "REPLACE",
    "REPEAT", "REVERSE", "RPAD", "RTRIM", "SAFE_CONVERT_BYTES_TO_STRING", "SPLIT",
    "STARTS_WITH", "STRPOS", "SUBSTR", "TO_BASE32", "TO_BASE64", "TO_CODE_POINTS", "TO_HEX",
    "TRIM", "UPPER",
    // JSON
    "JSON_EXTRACT", "JSON_EXTRACT_SCALAR", "TO_JSON_STRING",
    // массивы
    "ARRAY_CONCAT", "ARRAY_LENGTH", "ARRAY_TO_STRING", "GENERATE_ARRAY",
    "GENERATE_DATE_ARRAY", "GENERATE_TIMESTAMP_ARRAY", "ARRAY_REVERSE", "SAFE_OFFSET",
    "SAFE_ORDINAL",
    // даты
    "CURRENT_DATE", "DATE", "DATE_ADD", "DATE_SUB", "DATE_DIFF", "DATE_TRUNC",
    "DATE_FROM_UNIX_DATE", "FORMAT_DATE", "PARSE_DATE", "UNIX_DATE",
    // дата и время
    "CURRENT_DATETIME", "DATETIME", "DATETIME_ADD", "DATETIME_SUB", "DATETIME_DIFF",
    "DATETIME_TRUNC", "FORMAT_DATETIME", "PARSE_DATETIME",
    // время
    "CURRENT_TIME", "TIME", "TIME_ADD", "TIME_DIFF", "TIME_TRUNC", "FORMAT_TIME", "PARSE_TIME",
    // метки времени
    "CURRENT_TIMESTAMP", "STRING", "TIMESTAMP", "TIMESTAMP_ADD", "TIMESTAMP_SUB",
    "TIMESTAMP_DIFF", "TIMESTAMP_TRUNC", "FORMAT_TIMESTAMP", "PARSE_TIMESTAMP",
    "TIMESTAMP_SECONDS", "TIMESTAMP_MILLIS", "TIMESTAMP_MICROS", "UNIX_SECONDS",
    "UNIX_MILLIS", "UNIX_MICROS",
    // безопасность
    "SESSION_USER",
];

lazy_static::lazy_static! {
    /// Встроенный набор ключевых слов (верхний регистр)
    pub static ref BUILTIN_KEYWORDS: HashSet<&'static str> = RESERVED_KEYWORDS
        .iter()
        .chain(RESERVED_FUNCTIONS.iter())
        .copied()
        .collect();
}

/// Проверяет, входит ли слово во встроенный набор (без учета регистра)
pub fn is_reserved(word: &str) -> bool {
    BUILTIN_KEYWORDS.contains(word.to_ascii_uppercase().as_str())
}

/// Набор ключевых слов: встроенные плюс дополнительные из конфигурации
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    extra: HashSet<String>,
}

impl KeywordSet {
    /// Создает набор с дополнительными словами
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extra: extra
                .into_iter()
                .map(|word| word.as_ref().to_ascii_uppercase())
                .collect(),
        }
    }

    /// Проверяет слово без учета регистра
    pub fn contains(&self, word: &str) -> bool {
        let upper = word.to_ascii_uppercase();
        BUILTIN_KEYWORDS.contains(upper.as_str()) || self.extra.contains(&upper)
    }

    /// Все слова набора в алфавитном порядке
    pub fn sorted(&self) -> Vec<String> {
        let mut words: Vec<String> = BUILTIN_KEYWORDS
            .iter()
            .map(|word| word.to_string())
            .chain(self.extra.iter().cloned())
            .collect();
        words.sort();
        words.dedup();
        words
    }
}

/// Приводит ключевое слово к заданному стилю регистра
pub fn format_keyword(word: &str, style: KeywordStyle) -> String {
    match style {
        KeywordStyle::Preserve => word.to_string(),
        KeywordStyle::Lower => word.to_lowercase(),
        KeywordStyle::Upper => word.to_uppercase(),
        KeywordStyle::Capitalize => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        }
    }
}
