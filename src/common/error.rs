//! Обработка ошибок для bqlex
//!
//! Лексический анализ сам по себе не возвращает ошибок: деградировавшие строки
//! описываются данными (`Diagnostic`). Ошибки возникают только при проверке
//! входных значений, загрузке конфигурации и вводе-выводе.

use thiserror::Error;

/// Основной тип ошибки для bqlex
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Ошибка разбора TOML
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// Ошибка записи TOML
    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Ошибка валидации
    #[error("Validation error: {message}")]
    Validation { message: String },
}

/// Тип результата для bqlex
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Создает ошибку валидации
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
