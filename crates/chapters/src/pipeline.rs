//! Полный конвейер: разбор → конвертация → проверка.
//!
//! [`Conversion`] — неизменяемый результат одного прогона. Каждый этап
//! получает данные предыдущего и ничего не хранит между вызовами.

use serde::Serialize;
use tracing::info;

use crate::{
    converter::{ChapterOrder, format_as_text, to_chapters},
    marker::{Chapter, RawMarker},
    parser::parse,
    validation::{ValidationResult, ValidationRules, validate_with},
};

/// Результат конвертации одного экспорта.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// Маркеры в порядке строк файла.
    pub markers: Vec<RawMarker>,
    /// Главы, по одной на маркер.
    pub chapters: Vec<Chapter>,
    /// Итог проверки глав.
    pub validation: ValidationResult,
}

impl Conversion {
    /// Прогоняет экспорт через конвейер с правилами YouTube по умолчанию.
    #[must_use]
    pub fn run(content: &str) -> Self {
        Self::run_with(content, &ValidationRules::default())
    }

    /// Прогоняет экспорт через конвейер с заданными правилами.
    #[must_use]
    pub fn run_with(content: &str, rules: &ValidationRules) -> Self {
        let markers = parse(content);
        let chapters = to_chapters(&markers);
        let validation = validate_with(&chapters, rules);

        info!(
            markers = markers.len(),
            valid = validation.valid,
            errors = validation.errors.len(),
            warnings = validation.warnings.len(),
            "converted marker export"
        );

        Self { markers, chapters, validation }
    }

    /// Текст для описания видео.
    #[must_use]
    pub fn text(&self, order: ChapterOrder) -> String {
        format_as_text(&self.chapters, order)
    }

    /// `true`, если во входе не нашлось ни одного маркера.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
