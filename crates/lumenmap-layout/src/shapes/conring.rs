use std::f64::consts::TAU;
use std::ops::Range;

use serde::Deserialize;

use crate::error::Result;
use crate::generator::LayoutGenerator;
use crate::point::Point;

use super::ShapeDescription;

/// One ring of a concentric array: `count` LEDs on a circle of `diameter_mm`.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
pub struct RingSpec {
    pub count: usize,
    pub diameter_mm: f64,
}

impl RingSpec {
    #[inline]
    pub const fn new(count: usize, diameter_mm: f64) -> Self {
        Self { count, diameter_mm }
    }

    #[inline]
    pub fn radius_mm(&self) -> f64 {
        self.diameter_mm / 2.0
    }
}

/// What one [`LayoutGenerator::add_concentric`] call produced.
///
/// `max_x`/`max_y` are taken after scaling and before the `(cx, cy)`
/// translation. Both stay at negative infinity when no ring has any points.
#[derive(Debug, Clone, PartialEq)]
pub struct RingExtent {
    pub points: Range<usize>,
    pub max_x: f64,
    pub max_y: f64,
}

/// Scaled offsets of `count` points evenly spaced on a circle, starting at
/// twelve o'clock and running clockwise.
fn points_on_circle(radius: f64, count: usize, scale: f64) -> impl Iterator<Item = (f64, f64)> {
    (0..count).map(move |i| {
        let angle = TAU * i as f64 / count as f64;
        (angle.sin() * radius * scale, angle.cos() * radius * scale)
    })
}

impl LayoutGenerator {
    /// Adds the configured ring array centered on `(cx, cy)`, followed by a
    /// single center point at the origin.
    ///
    /// `cx`/`cy` are in output units and are not scaled.
    pub fn add_concentric(&mut self, name: &str, cx: f64, cy: f64) -> Result<RingExtent> {
        self.reject_duplicate(name)?;

        let scale = self.config().scale;
        let mut block = Vec::new();
        let mut ring_counts = Vec::with_capacity(self.config().rings.len() + 1);
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for ring in &self.config().rings {
            ring_counts.push(ring.count);
            for (x, y) in points_on_circle(ring.radius_mm(), ring.count, scale) {
                max_x = max_x.max(x);
                max_y = max_y.max(y);
                block.push(Point::new(x + cx, y + cy));
            }
        }

        block.push(Point::new(0.0, 0.0));
        ring_counts.push(1);

        let start = self.len();
        let description = ShapeDescription::Conring {
            start,
            length: block.len(),
            ring_counts,
        };
        let points = self.append_shape(name, description, block)?;

        let extent = RingExtent { points, max_x, max_y };
        self.record_ring_extent(extent.clone());
        Ok(extent)
    }
}
