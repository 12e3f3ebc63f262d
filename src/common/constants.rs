//! Константы для bqlex

/// Неразрывный пробел, которым редактор заполняет пустые визуальные позиции
pub const ENTITY_NBSP: &str = "&nbsp;";

/// Экранированный символ `<`
pub const ENTITY_LT: &str = "&lt;";

/// Экранированный символ `>`
pub const ENTITY_GT: &str = "&gt;";

/// Экранированный символ `&`
pub const ENTITY_AMP: &str = "&amp;";

/// Начало обертки подсветки
pub const SPAN_OPEN: &str = "<span";

/// Символы бинарных операторов BigQuery
pub const OPERATOR_CHARS: &[char] = &['=', '<', '>', '!', '+', '-', '*', '/', '&', '|'];

/// Ключевое слово, открывающее список выборки
pub const SELECT_KEYWORD: &str = "SELECT";

/// Ключевое слово, закрывающее список выборки
pub const FROM_KEYWORD: &str = "FROM";

/// Звездочка (раскрытие всех колонок или умножение)
pub const STAR: &str = "*";

/// Уровень логирования по умолчанию
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Допустимые уровни логирования
pub const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Имя конфигурационного файла по умолчанию
pub const DEFAULT_CONFIG_FILE: &str = "bqlex.toml";

/// Переменная окружения: политика раскрытия `*`
pub const ENV_STAR_EXPANSION: &str = "BQLEX_STAR_EXPANSION";

/// Переменная окружения: уровень логирования
pub const ENV_LOG_LEVEL: &str = "BQLEX_LOG_LEVEL";

/// Переменная окружения: стиль регистра ключевых слов
pub const ENV_KEYWORD_STYLE: &str = "BQLEX_KEYWORD_STYLE";

/// Переменная окружения: положение запятой для проверки стиля
pub const ENV_COMMA_POSITION: &str = "BQLEX_COMMA_POSITION";

/// Переменная окружения: шаг отступа для проверки стиля
pub const ENV_INDENT_STEPS: &str = "BQLEX_INDENT_STEPS";

/// Шаг отступа по умолчанию
pub const DEFAULT_INDENT_STEPS: usize = 4;

/// Допустимое число пустых строк подряд
pub const MAX_BLANK_LINES: usize = 1;
