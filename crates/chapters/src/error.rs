//! Ошибки слоя ввода-вывода.
//!
//! Ядро конвейера (разбор, конвертация, валидация) не возвращает ошибок:
//! некорректные строки пропускаются, а нарушения правил YouTube попадают
//! в [`ValidationResult`](crate::validation::ValidationResult). Ошибки
//! возникают только при чтении байтов и их декодировании в текст.

use thiserror::Error;

/// Главная ошибка крейта.
#[derive(Debug, Error)]
pub enum ChapterError {
    /// Ошибка ввода/вывода.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Нечётное количество байтов во входе UTF-16.
    #[error("UTF-16 input has an odd number of bytes ({0})")]
    OddUtf16Length(usize),

    /// Непарный суррогат в UTF-16.
    #[error("Invalid UTF-16 at character {position}")]
    InvalidUtf16 {
        /// Индекс символа, на котором декодирование сломалось.
        position: usize,
    },

    /// Некорректная UTF-8 последовательность.
    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Неизвестное имя кодировки.
    #[error("Unknown encoding '{0}': expected auto, utf16le, utf16be or utf8")]
    UnknownEncoding(String),

    /// Неизвестный порядок полей в строке главы.
    #[error("Unknown chapter order '{0}': expected timestamp-first or name-first")]
    UnknownOrder(String),
}

/// Удобный alias для Result с [`ChapterError`].
pub type Result<T> = std::result::Result<T, ChapterError>;
