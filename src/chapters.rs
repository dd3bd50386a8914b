use std::fmt::Write;
use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde::{Deserialize, Serialize};

use crate::document::resolve_document;
use crate::errors::ExtractionError;
use crate::timecode::normalize;

const MARKER_TAG: &[u8] = b"chapter-marker";
const START_ATTR: &str = "start";
const LABEL_ATTR: &str = "value";

const HEADER_TITLES: &str = "TIME     CHAPTER";
const HEADER_RULE: &str = "-------------------";

/// One chapter marker, in display form.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ChapterMarker {
    /// Start time already normalized to `MM:SS`.
    pub start: String,
    /// Marker label, verbatim from the document; empty when the attribute
    /// is absent.
    pub label: String,
}

/// The ordered chapter markers of one document.
#[derive(Clone, Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct ChapterReport {
    markers: Vec<ChapterMarker>,
}

impl ChapterReport {
    pub fn num_markers(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChapterMarker> {
        self.markers.iter()
    }

    /// Renders the report as display text: a two-line header followed by
    /// one `MM:SS - label` line per marker, in document order.
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        let _ = writeln!(&mut output, "{HEADER_TITLES}");
        let _ = writeln!(&mut output, "{HEADER_RULE}");
        for marker in self {
            let _ = writeln!(&mut output, "{} - {}", marker.start, marker.label);
        }

        output
    }
}

impl<'a> IntoIterator for &'a ChapterReport {
    type Item = &'a ChapterMarker;
    type IntoIter = std::slice::Iter<'a, ChapterMarker>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.iter()
    }
}

/// Extracts the chapter report for `path`, which may name a single `.fcpxml`
/// document or a `.fcpxmld` package directory wrapping one.
pub fn extract_chapters(path: impl AsRef<Path>) -> Result<ChapterReport, ExtractionError> {
    let document = resolve_document(path.as_ref())?;

    log::info!("Extracting chapters from \"{}\"", document.display());

    let xml_content =
        fs::read_to_string(&document).map_err(|e| ExtractionError::unreadable(&document, e))?;

    let report = parse_chapter_markers(&xml_content)?;
    log::info!("Found {} chapter markers", report.num_markers());

    Ok(report)
}

/// Walks a well-formed XML document for `chapter-marker` elements at any
/// depth, preserving document order. A document with no markers yields an
/// empty report.
pub fn parse_chapter_markers(xml: &str) -> Result<ChapterReport, ExtractionError> {
    let mut reader = Reader::from_str(xml);

    let mut markers = Vec::new();
    let mut depth: usize = 0;
    let mut seen_root = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) => {
                depth += 1;
                seen_root = true;
                if element.local_name().as_ref() == MARKER_TAG {
                    markers.push(marker_from_element(&element)?);
                }
            }
            Ok(Event::Empty(element)) => {
                seen_root = true;
                if element.local_name().as_ref() == MARKER_TAG {
                    markers.push(marker_from_element(&element)?);
                }
            }
            Ok(Event::End(_)) => depth = depth.saturating_sub(1),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(ExtractionError::NotAnXmlDocument(e.to_string())),
        }
    }

    // quick-xml tolerates top-level text and a truncated tail; neither is an
    // XML document.
    if !seen_root || depth != 0 {
        return Err(ExtractionError::NotAnXmlDocument(
            "missing or unclosed root element".to_owned(),
        ));
    }

    Ok(ChapterReport { markers })
}

fn marker_from_element(element: &BytesStart<'_>) -> Result<ChapterMarker, ExtractionError> {
    let start_raw = attribute_value(element, START_ATTR)?.unwrap_or_default();
    let label = attribute_value(element, LABEL_ATTR)?.unwrap_or_default();

    let start = normalize(&start_raw)?;

    Ok(ChapterMarker { start, label })
}

fn attribute_value(
    element: &BytesStart<'_>,
    name: &str,
) -> Result<Option<String>, ExtractionError> {
    match element
        .try_get_attribute(name)
        .map_err(|e| ExtractionError::NotAnXmlDocument(e.to_string()))?
    {
        Some(attr) => {
            let value = attr
                .unescape_value()
                .map_err(|e| ExtractionError::NotAnXmlDocument(e.to_string()))?;
            Ok(Some(value.into_owned()))
        }
        None => Ok(None),
    }
}

/// Boundary for the viewer: the full report text on success, otherwise a
/// single displayable `Error: …` line. Never panics.
pub fn extract_chapters_display(path: impl AsRef<Path>) -> String {
    match extract_chapters(path) {
        Ok(report) => report.to_text(),
        Err(e) => format!("Error: {e}"),
    }
}
