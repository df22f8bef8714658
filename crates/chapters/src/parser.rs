//! Разбор файла экспорта маркеров Adobe Premiere Pro.
//!
//! Экспорт — текст с колонками, разделёнными табуляцией. Первая строка
//! всегда заголовок:
//!
//! ```text
//! Name	Description	In	Out	Duration	Marker Type	Comment
//! Intro		00:00:00:00	00:00:00:00	00:00:00:00	Chapter
//! ```
//!
//! Используются только колонки `Name`, `Description` и `In`. Строки без
//! названия или без входного таймкода молча пропускаются: слишком большое
//! число пропусков всё равно обнаружит валидация ("too few chapters").

use csv::{ReaderBuilder, StringRecord, Terminator};
use tracing::{debug, trace};

use crate::marker::RawMarker;

/// Заголовок экспорта маркеров Premiere.
pub const HEADER: &str = "Name\tDescription\tIn\tOut\tDuration\tMarker Type\tComment";

/// Индексы используемых колонок.
pub struct MarkerColumn;

impl MarkerColumn {
    /// Название маркера.
    pub const NAME: usize = 0;
    /// Описание маркера.
    pub const DESCRIPTION: usize = 1;
    /// Входной таймкод.
    pub const IN: usize = 2;
}

/// Разбирает содержимое файла экспорта в упорядоченный список маркеров.
///
/// Никогда не завершается ошибкой: пустой вход или вход из одного
/// заголовка дают пустой список.
///
/// # Пример
///
/// ```
/// use chapters::parser::parse;
///
/// let content = "Name\tDescription\tIn\n\
///                Intro\tOpening\t00:00:00:00\n\
///                \t\t00:00:05:00";
/// let markers = parse(content);
///
/// assert_eq!(markers.len(), 1);
/// assert_eq!(markers[0].name, "Intro");
/// assert_eq!(markers[0].description.as_deref(), Some("Opening"));
/// ```
#[must_use]
pub fn parse(content: &str) -> Vec<RawMarker> {
    // Заголовок отбрасывается всегда, даже пустой
    let Some((_header, body)) = content.split_once('\n') else {
        return Vec::new();
    };

    // Кавычки в названиях глав — обычный текст, поэтому quoting отключён.
    // Строки делит только `\n`: одиночный `\r` остаётся частью поля.
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(body.as_bytes());

    let mut markers = Vec::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                skipped += 1;
                debug!(%e, "skipping unreadable marker row");
                continue;
            }
        };

        match marker_from_record(&record) {
            Some(marker) => markers.push(marker),
            None => {
                skipped += 1;
                debug!(line = ?line_number(&record), "skipping row without name or timecode");
            }
        }
    }

    trace!(parsed = markers.len(), skipped, "parsed marker export");
    markers
}

/// Строит маркер из одной строки, если в ней есть название и таймкод.
fn marker_from_record(record: &StringRecord) -> Option<RawMarker> {
    let column = |idx: usize| record.get(idx).unwrap_or("").trim();

    let name = column(MarkerColumn::NAME);
    let timecode = column(MarkerColumn::IN);
    if name.is_empty() || timecode.is_empty() {
        return None;
    }

    let description = column(MarkerColumn::DESCRIPTION);
    Some(RawMarker {
        name: name.to_string(),
        source_timecode: timecode.to_string(),
        description: (!description.is_empty()).then(|| description.to_string()),
    })
}

/// Номер строки в исходном файле (1-based, с учётом заголовка).
fn line_number(record: &StringRecord) -> Option<u64> {
    record.position().map(|pos| pos.line() + 1)
}
