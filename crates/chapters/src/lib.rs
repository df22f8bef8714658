//! Конвертер маркеров глав Adobe Premiere Pro в главы YouTube.
//!
//! Крейт реализует конвейер из трёх чистых функций:
//!
//! - [`parser::parse`] — табличный текст экспорта маркеров → [`RawMarker`]
//! - [`converter::to_chapters`] — таймкод редактора → метка времени YouTube
//! - [`validation::validate`] — проверка глав по правилам YouTube
//!
//! Вокруг ядра находится тонкий слой ввода-вывода: [`decode`] (UTF-16/UTF-8),
//! [`reader`] и [`writer`], а также [`pipeline::Conversion`], который
//! выполняет все три шага за один вызов.
//!
//! # Быстрый старт
//!
//! ```
//! use chapters::prelude::*;
//!
//! let export = "Name\tDescription\tIn\tOut\tDuration\tMarker Type\tComment\n\
//!               Intro\t\t00:00:00:00\t00:00:00:00\t00:00:00:00\tChapter\t\n\
//!               Setup\t\t00:01:30:15\t00:01:30:15\t00:00:00:00\tChapter\t\n\
//!               Outro\t\t01:02:03:04\t01:02:03:04\t00:00:00:00\tChapter\t";
//!
//! let conversion = Conversion::run(export);
//!
//! assert!(conversion.validation.valid);
//! assert_eq!(
//!     conversion.text(ChapterOrder::TimestampFirst),
//!     "00:00 Intro\n01:30 Setup\n01:02:03 Outro"
//! );
//! ```

pub mod converter;
pub mod decode;
pub mod error;
pub mod marker;
pub mod parser;
pub mod pipeline;
pub mod reader;
pub mod validation;
pub mod writer;

pub use error::{ChapterError, Result};
pub use marker::{Chapter, RawMarker};

/// Часто используемые типы и функции одним импортом.
pub mod prelude {
    pub use crate::{
        converter::{ChapterOrder, convert_timecode, format_as_text, to_chapters},
        decode::{Encoding, decode},
        error::{ChapterError, Result},
        marker::{Chapter, RawMarker},
        parser::parse,
        pipeline::Conversion,
        reader::read_markers,
        validation::{ValidationResult, ValidationRules, validate, validate_with},
        writer::ChapterWriter,
    };
}
