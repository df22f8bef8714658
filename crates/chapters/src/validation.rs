//! Проверка глав по правилам YouTube.
//!
//! # Правила
//!
//! - Хотя бы одна глава (иначе проверка прекращается сразу)
//! - Не меньше [`MIN_CHAPTERS`] глав
//! - Первая глава начинается с `00:00:00`
//! - Метки времени строго возрастают
//! - Каждая глава длится не меньше [`MIN_GAP_SECS`] секунд (предупреждение)
//!
//! Ошибки и предупреждения накапливаются, чтобы вызывающая сторона могла
//! показать все проблемы сразу.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::marker::Chapter;

/// Минимальное число глав, которое принимает YouTube.
pub const MIN_CHAPTERS: usize = 3;

/// Минимальная длительность главы в секундах.
pub const MIN_GAP_SECS: i64 = 10;

/// Метка времени, с которой должна начинаться первая глава.
pub const FIRST_TIMESTAMP: &str = "00:00:00";

/// Нарушения, из-за которых YouTube не примет главы.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No chapters found in the file")]
    NoChapters,
    #[error("YouTube requires at least {min} chapters. You have {count} {}.", plural(.count))]
    TooFewChapters { count: usize, min: usize },
    #[error("First chapter must start at 00:00:00. Your first chapter starts at {actual}.")]
    WrongStart { actual: String },
    #[error(
        "Chapters must be in ascending order. \"{current}\" ({current_timestamp}) comes \
         after or at the same time as \"{next}\" ({next_timestamp})."
    )]
    NotAscending {
        current: String,
        current_timestamp: String,
        next: String,
        next_timestamp: String,
    },
}

/// Замечания, которые не блокируют публикацию.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationWarning {
    #[error(
        "Chapter \"{name}\" is only {gap} seconds long. YouTube requires chapters to be at \
         least {min} seconds."
    )]
    ChapterTooShort { name: String, gap: i64, min: i64 },
}

fn plural(count: &usize) -> &'static str {
    if *count == 1 { "chapter" } else { "chapters" }
}

/// Пороговые значения правил.
///
/// [`Default`] соответствует опубликованным требованиям YouTube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRules {
    /// Минимальное число глав.
    pub min_chapters: usize,
    /// Минимальная длительность главы в секундах.
    pub min_gap_secs: i64,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self { min_chapters: MIN_CHAPTERS, min_gap_secs: MIN_GAP_SECS }
    }
}

/// Итог проверки.
///
/// Предупреждения на `valid` не влияют.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Истинно тогда и только тогда, когда `errors` пуст.
    pub valid: bool,
    /// Нарушения, блокирующие публикацию, в порядке проверки правил.
    pub errors: Vec<String>,
    /// Рекомендации (короткие главы), в порядке следования глав.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn from_issues(errors: Vec<ValidationError>, warnings: Vec<ValidationWarning>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors: errors.iter().map(ToString::to_string).collect(),
            warnings: warnings.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Проверяет главы по правилам YouTube со значениями по умолчанию.
///
/// # Пример
///
/// ```
/// use chapters::{Chapter, validation::validate};
///
/// let result = validate(&[
///     Chapter::new("Intro", "00:00:00"),
///     Chapter::new("Quick", "00:00:05"),
///     Chapter::new("Main", "00:01:30"),
/// ]);
///
/// assert!(result.valid);
/// assert!(result.warnings[0].contains("5 seconds"));
/// ```
#[must_use]
pub fn validate(chapters: &[Chapter]) -> ValidationResult {
    validate_with(chapters, &ValidationRules::default())
}

/// Проверяет главы с заданными порогами.
#[must_use]
pub fn validate_with(chapters: &[Chapter], rules: &ValidationRules) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let Some(first) = chapters.first() else {
        errors.push(ValidationError::NoChapters);
        return ValidationResult::from_issues(errors, warnings);
    };

    if chapters.len() < rules.min_chapters {
        let (count, min) = (chapters.len(), rules.min_chapters);
        errors.push(ValidationError::TooFewChapters { count, min });
    }

    if normalize(&first.timestamp).as_deref() != Some(FIRST_TIMESTAMP) {
        errors.push(ValidationError::WrongStart { actual: first.timestamp.clone() });
    }

    for pair in chapters.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        // Обе величины в 0..=i64::MAX, поэтому разность не переполняется
        let current_secs = timestamp_to_seconds(&current.timestamp);
        let next_secs = timestamp_to_seconds(&next.timestamp);

        if next_secs <= current_secs {
            errors.push(ValidationError::NotAscending {
                current: current.name.clone(),
                current_timestamp: current.timestamp.clone(),
                next: next.name.clone(),
                next_timestamp: next.timestamp.clone(),
            });
        }

        // Отрицательный зазор (нарушен порядок) тоже попадает сюда
        let gap = next_secs - current_secs;
        if gap < rules.min_gap_secs {
            warnings.push(ValidationWarning::ChapterTooShort {
                name: current.name.clone(),
                gap,
                min: rules.min_gap_secs,
            });
        }
    }

    debug!(
        chapters = chapters.len(),
        errors = errors.len(),
        warnings = warnings.len(),
        "validated chapters"
    );
    ValidationResult::from_issues(errors, warnings)
}

/// Переводит `HH:MM:SS` (или `MM:SS`) в секунды.
///
/// Метка другой формы, с нечисловыми частями или со значением, не
/// помещающимся в `i64`, считается равной `0`. Результат никогда не
/// бывает отрицательным.
///
/// # Пример
///
/// ```
/// use chapters::validation::timestamp_to_seconds;
///
/// assert_eq!(timestamp_to_seconds("01:02:03"), 3723);
/// assert_eq!(timestamp_to_seconds("02:03"), 123);
/// assert_eq!(timestamp_to_seconds("soon"), 0);
/// ```
#[must_use]
pub fn timestamp_to_seconds(timestamp: &str) -> i64 {
    let Some(normalized) = normalize(timestamp) else {
        return 0;
    };

    normalized
        .split(':')
        .try_fold(0i64, |total, part| {
            // Через u64, чтобы знак ("-5") не считался числом
            let value = i64::try_from(part.parse::<u64>().ok()?).ok()?;
            total.checked_mul(60)?.checked_add(value)
        })
        .unwrap_or(0)
}

/// Приводит метку к трёхпольному виду `HH:MM:SS`.
///
/// `MM:SS` дополняется нулевыми часами; метки с другим числом полей
/// возвращают `None`.
fn normalize(timestamp: &str) -> Option<String> {
    match timestamp.split(':').count() {
        3 => Some(timestamp.to_string()),
        2 => Some(format!("00:{timestamp}")),
        _ => None,
    }
}
