//! Буферизованная запись глав в текст описания.
//!
//! Предоставляет [`ChapterWriter`] для записи глав в любой тип,
//! реализующий [`Write`].

use std::io::{BufWriter, Write};

use crate::{
    converter::{ChapterOrder, format_line},
    error::Result,
    marker::Chapter,
};

/// Буферизованный writer глав.
///
/// Строки разделяются `\n`; после последней строки перевод строки не
/// пишется, поэтому результат совпадает с
/// [`format_as_text`](crate::converter::format_as_text).
///
/// # Пример
///
/// ```
/// use chapters::{Chapter, converter::ChapterOrder, writer::ChapterWriter};
///
/// let mut output = Vec::new();
/// {
///     let mut writer = ChapterWriter::new(&mut output, ChapterOrder::TimestampFirst);
///     writer.write_all(&[Chapter::new("Intro", "00:00"), Chapter::new("Main", "01:30")])?;
///     writer.flush()?;
/// }
///
/// assert_eq!(String::from_utf8(output).unwrap(), "00:00 Intro\n01:30 Main");
/// # Ok::<(), chapters::ChapterError>(())
/// ```
pub struct ChapterWriter<W: Write> {
    inner: BufWriter<W>,
    order: ChapterOrder,
    /// Счётчик записанных глав.
    chapters_written: usize,
}

impl<W: Write> ChapterWriter<W> {
    /// Создаёт новый writer.
    pub fn new(writer: W, order: ChapterOrder) -> Self {
        Self { inner: BufWriter::new(writer), order, chapters_written: 0 }
    }

    /// Записывает одну главу.
    pub fn write(&mut self, chapter: &Chapter) -> Result<()> {
        if self.chapters_written > 0 {
            self.inner.write_all(b"\n")?;
        }
        self.inner.write_all(format_line(chapter, self.order).as_bytes())?;
        self.chapters_written += 1;
        Ok(())
    }

    /// Записывает несколько глав.
    pub fn write_all(&mut self, chapters: &[Chapter]) -> Result<()> {
        for chapter in chapters {
            self.write(chapter)?;
        }
        Ok(())
    }

    /// Принудительно сбрасывает буфер.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Возвращает количество записанных глав.
    #[must_use]
    pub fn chapters_written(&self) -> usize {
        self.chapters_written
    }

    /// Извлекает внутренний writer (с предварительным flush).
    pub fn into_inner(self) -> Result<W> {
        self.inner.into_inner().map_err(|e| e.into_error().into())
    }
}
