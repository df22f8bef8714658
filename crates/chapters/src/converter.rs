//! Conversion of Premiere timecodes into YouTube chapter timestamps.
//!
//! Premiere exports `HH:MM:SS:FF` (frames included). YouTube wants
//! `MM:SS`, or `HH:MM:SS` once the hour field is non-zero. The rule is
//! applied to every marker on its own, so in a long video the chapters
//! before the one-hour mark stay in `MM:SS` form.
//!
//! # Example
//!
//! ```
//! use chapters::converter::{ChapterOrder, convert_timecode, format_as_text, to_chapters};
//! use chapters::RawMarker;
//!
//! assert_eq!(convert_timecode("00:59:59:00"), "59:59");
//! assert_eq!(convert_timecode("01:00:00:00"), "01:00:00");
//!
//! let chapters = to_chapters(&[RawMarker::new("Intro", "00:00:00:12")]);
//! assert_eq!(format_as_text(&chapters, ChapterOrder::TimestampFirst), "00:00 Intro");
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::ChapterError,
    marker::{Chapter, RawMarker},
};

/// Width of an `HH:MM:SS` window.
const HMS_LEN: usize = 8;

/// Converts a single timecode into a YouTube timestamp.
///
/// The first `DD:DD:DD` substring is taken as `HH:MM:SS`; anything after it
/// (the `:FF` frame field included) is dropped. An hour field of `"00"`
/// yields `MM:SS`. Input without such a substring is returned unchanged.
#[must_use]
pub fn convert_timecode(tc: &str) -> String {
    let Some((hours, minutes, seconds)) = split_hms(tc) else {
        return tc.to_string();
    };

    if hours == "00" {
        format!("{minutes}:{seconds}")
    } else {
        format!("{hours}:{minutes}:{seconds}")
    }
}

/// Finds the first `DD:DD:DD` window and returns its three fields.
fn split_hms(tc: &str) -> Option<(&str, &str, &str)> {
    let start = tc.as_bytes().windows(HMS_LEN).position(is_hms)?;
    // The window is pure ASCII, so these offsets are char boundaries.
    Some((&tc[start..start + 2], &tc[start + 3..start + 5], &tc[start + 6..start + 8]))
}

fn is_hms(window: &[u8]) -> bool {
    window.iter().enumerate().all(|(idx, byte)| match idx {
        2 | 5 => *byte == b':',
        _ => byte.is_ascii_digit(),
    })
}

/// Maps markers to chapters one to one, keeping their order.
#[must_use]
pub fn to_chapters(markers: &[RawMarker]) -> Vec<Chapter> {
    markers
        .iter()
        .map(|marker| Chapter {
            name: marker.name.clone(),
            timestamp: convert_timecode(&marker.source_timecode),
        })
        .collect()
}

/// Field order of a rendered chapter line.
///
/// YouTube reads `"{timestamp} {name}"`; the name-first variant exists
/// for descriptions that are post-processed elsewhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChapterOrder {
    /// `00:00 Intro`
    #[default]
    TimestampFirst,
    /// `Intro 00:00`
    NameFirst,
}

impl ChapterOrder {
    /// Returns the option name used on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TimestampFirst => "timestamp-first",
            Self::NameFirst => "name-first",
        }
    }
}

impl fmt::Display for ChapterOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChapterOrder {
    type Err = ChapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "timestamp-first" => Ok(Self::TimestampFirst),
            "name-first" => Ok(Self::NameFirst),
            other => Err(ChapterError::UnknownOrder(other.to_string())),
        }
    }
}

/// Renders one chapter line without a line terminator.
#[must_use]
pub fn format_line(chapter: &Chapter, order: ChapterOrder) -> String {
    match order {
        ChapterOrder::TimestampFirst => format!("{} {}", chapter.timestamp, chapter.name),
        ChapterOrder::NameFirst => format!("{} {}", chapter.name, chapter.timestamp),
    }
}

/// Joins chapter lines with `\n`, ready to paste into a video description.
///
/// No trailing newline; an empty slice gives an empty string.
#[must_use]
pub fn format_as_text(chapters: &[Chapter], order: ChapterOrder) -> String {
    chapters.iter().map(|chapter| format_line(chapter, order)).collect::<Vec<_>>().join("\n")
}
