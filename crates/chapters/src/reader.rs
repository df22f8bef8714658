//! Чтение экспорта маркеров из любого источника [`Read`].
//!
//! Файл читается целиком: кодировку нужно определить до разбора, а
//! экспорты Premiere занимают единицы килобайт.

use std::io::Read;

use tracing::debug;

use crate::{
    decode::{Encoding, decode},
    error::Result,
    marker::RawMarker,
    parser::parse,
};

/// Читает и декодирует весь источник в текст.
pub fn read_text<R: Read>(mut reader: R, encoding: Encoding) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    debug!(bytes = bytes.len(), %encoding, "read marker export");
    decode(&bytes, encoding)
}

/// Читает, декодирует и разбирает экспорт маркеров.
///
/// # Пример
///
/// ```
/// use std::io::Cursor;
///
/// use chapters::{decode::Encoding, reader::read_markers};
///
/// let input = Cursor::new("Name\tDescription\tIn\nIntro\t\t00:00:00:00");
/// let markers = read_markers(input, Encoding::Auto)?;
///
/// assert_eq!(markers.len(), 1);
/// # Ok::<(), chapters::ChapterError>(())
/// ```
pub fn read_markers<R: Read>(reader: R, encoding: Encoding) -> Result<Vec<RawMarker>> {
    let text = read_text(reader, encoding)?;
    Ok(parse(&text))
}
