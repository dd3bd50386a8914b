//! Core types for the Chapter Viewer app: resolve an FCPXML document (a
//! single `.fcpxml` file or a `.fcpxmld` package), collect its
//! `chapter-marker` elements, and render a plain-text chapter report the
//! viewer displays and copies to the clipboard.

pub mod chapters;
pub mod document;
pub mod errors;
pub mod timecode;

pub use crate::chapters::{
    ChapterMarker, ChapterReport, extract_chapters, extract_chapters_display,
    parse_chapter_markers,
};
pub use crate::document::resolve_document;
pub use crate::errors::{ExtractionError, FormatError};
pub use crate::timecode::normalize;
