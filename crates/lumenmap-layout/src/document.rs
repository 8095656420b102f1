//! The layout document exchanged with the rendering pipeline.
//!
//! Wire shape, a two-element JSON array:
//!
//! ```text
//! [
//!   { "displays": { "<name>": { "type": "banner", ... }, ... } },
//!   [ { "point": [x, y, z] }, ... ]
//! ]
//! ```
//!
//! Every shape's points are `points[start .. start + point_count]`.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::config::OutputStyle;
use crate::error::{DocumentError, LayoutError, Result};
use crate::point::Point;
use crate::registry::ShapeRegistry;
use crate::shapes::ShapeDescription;

#[derive(Serialize)]
struct DisplaysRef<'a> {
    displays: &'a ShapeRegistry,
}

#[derive(Serialize)]
struct DocumentRef<'a>(DisplaysRef<'a>, &'a [Point]);

#[derive(Deserialize)]
struct Displays {
    displays: ShapeRegistry,
}

#[derive(Deserialize)]
struct RawDocument(Displays, Vec<Point>);

pub(crate) fn write_document<W: Write>(
    writer: W,
    displays: &ShapeRegistry,
    points: &[Point],
    style: OutputStyle,
) -> Result<()> {
    let doc = DocumentRef(DisplaysRef { displays }, points);
    let written = match style {
        OutputStyle::Compact => serde_json::to_writer(writer, &doc),
        OutputStyle::Pretty => serde_json::to_writer_pretty(writer, &doc),
    };
    written.map_err(|err| {
        if err.is_io() {
            LayoutError::Io(err.into())
        } else {
            LayoutError::Encode(err)
        }
    })
}

pub(crate) fn render_document(
    displays: &ShapeRegistry,
    points: &[Point],
    style: OutputStyle,
) -> Result<String> {
    let doc = DocumentRef(DisplaysRef { displays }, points);
    let text = match style {
        OutputStyle::Compact => serde_json::to_string(&doc)?,
        OutputStyle::Pretty => serde_json::to_string_pretty(&doc)?,
    };
    Ok(text)
}

/// A parsed layout document, as the rendering side sees it.
///
/// Parsing checks that every shape's point block lies inside the point array,
/// so [`shape_points`](Self::shape_points) never has to deal with short
/// documents.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDocument {
    displays: ShapeRegistry,
    points: Vec<Point>,
}

impl LayoutDocument {
    pub fn from_json_str(text: &str) -> std::result::Result<Self, DocumentError> {
        let raw: RawDocument = serde_json::from_str(text)?;
        Self::validated(raw)
    }

    pub fn from_reader<R: Read>(reader: R) -> std::result::Result<Self, DocumentError> {
        let raw: RawDocument = serde_json::from_reader(reader).map_err(|err| {
            if err.is_io() {
                DocumentError::Io(err.into())
            } else {
                DocumentError::Parse(err)
            }
        })?;
        Self::validated(raw)
    }

    fn validated(raw: RawDocument) -> std::result::Result<Self, DocumentError> {
        let RawDocument(Displays { displays }, points) = raw;
        for (name, shape) in displays.iter() {
            let range = shape.points();
            if range.end > points.len() {
                return Err(DocumentError::ShapeOutOfRange {
                    name: name.to_owned(),
                    start: range.start,
                    end: range.end,
                    available: points.len(),
                });
            }
        }
        Ok(Self { displays, points })
    }

    #[inline]
    pub fn displays(&self) -> &ShapeRegistry {
        &self.displays
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn shape(&self, name: &str) -> std::result::Result<&ShapeDescription, DocumentError> {
        self.displays
            .get(name)
            .ok_or_else(|| DocumentError::UnknownShape(name.to_owned()))
    }

    pub fn shape_points(&self, name: &str) -> std::result::Result<&[Point], DocumentError> {
        let shape = self.shape(name)?;
        // Range was checked in `validated`.
        Ok(&self.points[shape.points()])
    }
}
