use std::io::Write;
use std::ops::Range;

use crate::config::{LayoutConfig, OutputStyle};
use crate::document;
use crate::error::Result;
use crate::point::Point;
use crate::registry::ShapeRegistry;
use crate::shapes::{RingExtent, ShapeDescription};

/// Axis-aligned box around a set of points (x/y only).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// Accumulates named LED shapes into one shared point sequence.
///
/// Every `add_*` call appends one contiguous block of points and one
/// description, or fails on a taken name and changes nothing. Points are never
/// removed or reordered, so recorded `start` offsets stay valid.
///
/// ```
/// use lumenmap_layout::{BannerSpec, LayoutGenerator};
///
/// let mut layout = LayoutGenerator::new();
/// layout.add_banner("b1", BannerSpec::default().at(0.0, 100.0)).unwrap();
/// layout.add_strip("s1", 120, 1.0, 200.0).unwrap();
/// layout.add_concentric("c1", 0.0, 0.0).unwrap();
///
/// assert_eq!(layout.len(), 256 + 120 + 93);
/// assert_eq!(layout.shape("c1").unwrap().start(), 376);
/// ```
#[derive(Debug, Default)]
pub struct LayoutGenerator {
    config: LayoutConfig,
    descriptions: ShapeRegistry,
    points: Vec<Point>,
    ring_extents: Vec<RingExtent>,
}

impl LayoutGenerator {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator with custom scale, spacing, or ring set. The config is fixed
    /// for the generator's lifetime.
    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[inline]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.config.scale
    }

    /// Total number of points across all shapes.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points in append order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn descriptions(&self) -> &ShapeRegistry {
        &self.descriptions
    }

    #[inline]
    pub fn shape(&self, name: &str) -> Option<&ShapeDescription> {
        self.descriptions.get(name)
    }

    /// The points belonging to `name`, or `None` if no such shape exists.
    pub fn shape_points(&self, name: &str) -> Option<&[Point]> {
        let shape = self.descriptions.get(name)?;
        self.points.get(shape.points())
    }

    /// Ring extents returned by each `add_concentric` call, in call order.
    #[inline]
    pub fn ring_extents(&self) -> &[RingExtent] {
        &self.ring_extents
    }

    /// Largest ring x (scaled, untranslated) over every ring array added so
    /// far; `-1.0` before any.
    pub fn max_x(&self) -> f64 {
        self.ring_extents.iter().fold(-1.0, |acc, e| acc.max(e.max_x))
    }

    /// Largest ring y (scaled, untranslated) over every ring array added so
    /// far; `-1.0` before any.
    pub fn max_y(&self) -> f64 {
        self.ring_extents.iter().fold(-1.0, |acc, e| acc.max(e.max_y))
    }

    /// Bounds of every point currently in the layout, whatever shape added it.
    pub fn bounds(&self) -> Option<Bounds> {
        let (first, rest) = self.points.split_first()?;
        let init = Bounds {
            min_x: first.x(),
            min_y: first.y(),
            max_x: first.x(),
            max_y: first.y(),
        };
        Some(rest.iter().fold(init, |b, p| Bounds {
            min_x: b.min_x.min(p.x()),
            min_y: b.min_y.min(p.y()),
            max_x: b.max_x.max(p.x()),
            max_y: b.max_y.max(p.y()),
        }))
    }

    /// Writes the layout document to `writer`.
    pub fn write_json<W: Write>(&self, writer: W, style: OutputStyle) -> Result<()> {
        document::write_document(writer, &self.descriptions, &self.points, style)
    }

    /// Renders the layout document with [`OutputStyle::Pretty`].
    pub fn serialize(&self) -> Result<String> {
        self.to_json(OutputStyle::Pretty)
    }

    pub fn to_json(&self, style: OutputStyle) -> Result<String> {
        document::render_document(&self.descriptions, &self.points, style)
    }

    pub(crate) fn reject_duplicate(&self, name: &str) -> Result<()> {
        self.descriptions.ensure_vacant(name).inspect_err(|_| {
            log::warn!("rejected shape `{name}`: name already in use");
        })
    }

    /// Registers `description` and appends `block`. The registry insert runs
    /// first so a taken name leaves the point sequence untouched.
    pub(crate) fn append_shape(
        &mut self,
        name: &str,
        description: ShapeDescription,
        block: Vec<Point>,
    ) -> Result<Range<usize>> {
        debug_assert_eq!(description.start(), self.points.len());
        debug_assert_eq!(description.point_count(), block.len());

        let kind = description.kind();
        self.descriptions.insert_new(name, description)?;

        let start = self.points.len();
        self.points.extend(block);
        let range = start..self.points.len();

        log::debug!("added {kind} `{name}` at points {range:?}");
        Ok(range)
    }

    pub(crate) fn record_ring_extent(&mut self, extent: RingExtent) {
        self.ring_extents.push(extent);
    }
}
