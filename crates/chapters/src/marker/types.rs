//! Маркеры редактора и главы платформы.

use serde::{Deserialize, Serialize};

/// Маркер главы из экспорта Adobe Premiere Pro.
///
/// Создаётся парсером по одному на каждую корректную строку файла.
///
/// # Пример
///
/// ```
/// use chapters::RawMarker;
///
/// let marker = RawMarker::new("Intro", "00:00:00:00").with_description("Opening");
///
/// assert_eq!(marker.name, "Intro");
/// assert_eq!(marker.description.as_deref(), Some("Opening"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawMarker {
    /// Название маркера, без пробелов по краям. Никогда не пустое.
    pub name: String,
    /// Входной таймкод `HH:MM:SS:FF` (кадры могут отсутствовать).
    pub source_timecode: String,
    /// Описание маркера, если оно не пустое.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RawMarker {
    /// Создаёт маркер без описания.
    pub fn new(name: impl Into<String>, source_timecode: impl Into<String>) -> Self {
        Self { name: name.into(), source_timecode: source_timecode.into(), description: None }
    }

    /// Добавляет описание к маркеру.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl From<&Chapter> for RawMarker {
    /// Оборачивает уже сконвертированную главу обратно в маркер.
    fn from(chapter: &Chapter) -> Self {
        Self::new(chapter.name.clone(), chapter.timestamp.clone())
    }
}

/// Глава в формате описания YouTube.
///
/// `timestamp` имеет вид `MM:SS` или `HH:MM:SS`, без кадров.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chapter {
    /// Название главы.
    pub name: String,
    /// Метка времени главы.
    pub timestamp: String,
}

impl Chapter {
    /// Создаёт главу.
    pub fn new(name: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self { name: name.into(), timestamp: timestamp.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_without_description_skips_field_in_json() {
        let marker = RawMarker::new("Intro", "00:00:00:00");
        let json = serde_json::to_string(&marker).unwrap();

        assert_eq!(json, r#"{"name":"Intro","source_timecode":"00:00:00:00"}"#);
    }

    #[test]
    fn marker_deserializes_without_description() {
        let json = r#"{"name":"Intro","source_timecode":"00:00:10:00"}"#;
        let marker: RawMarker = serde_json::from_str(json).unwrap();

        assert_eq!(marker, RawMarker::new("Intro", "00:00:10:00"));
    }

    #[test]
    fn chapter_rewraps_as_marker() {
        let chapter = Chapter::new("Main", "01:30");
        let marker = RawMarker::from(&chapter);

        assert_eq!(marker.name, "Main");
        assert_eq!(marker.source_timecode, "01:30");
        assert_eq!(marker.description, None);
    }
}
