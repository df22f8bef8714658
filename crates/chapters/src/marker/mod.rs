//! Модель данных конвейера.
//!
//! [`RawMarker`] — строка экспорта маркеров Premiere, [`Chapter`] — глава
//! в формате описания YouTube. Порядок элементов в последовательностях
//! всегда совпадает с порядком строк во входном файле.

mod types;

pub use types::{Chapter, RawMarker};
