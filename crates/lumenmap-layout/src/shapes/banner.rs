use std::ops::Range;

use crate::error::Result;
use crate::generator::LayoutGenerator;
use crate::point::Point;

use super::ShapeDescription;

/// Parameters of a rectangular LED grid.
///
/// `ulx`/`uly` are in millimeters. The grid is centered horizontally on `ulx`
/// and grows downward from `uly`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BannerSpec {
    pub width: i32,
    pub height: i32,
    pub ulx: f64,
    pub uly: f64,
}

impl Default for BannerSpec {
    fn default() -> Self {
        Self {
            width: 32,
            height: 8,
            ulx: 0.0,
            uly: 0.0,
        }
    }
}

impl BannerSpec {
    #[inline]
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, ..Self::default() }
    }

    #[inline]
    pub fn at(self, ulx: f64, uly: f64) -> Self {
        Self { ulx, uly, ..self }
    }
}

/// Row-major grid points, x fastest. The left edge sits half the width
/// (rounded down to whole LEDs) left of `ulx`.
fn grid_points(spec: &BannerSpec, spacing_mm: f64, scale: f64) -> Vec<Point> {
    let left = spec.ulx - f64::from(spec.width.div_euclid(2)) * spacing_mm;
    let mut block = Vec::new();

    for row in 0..spec.height.max(0) {
        let y = spec.uly + f64::from(row) * spacing_mm;
        for col in 0..spec.width.max(0) {
            let x = left + f64::from(col) * spacing_mm;
            block.push(Point::new(x * scale, y * scale));
        }
    }
    block
}

impl LayoutGenerator {
    /// Adds a `width × height` grid. Returns the index range of its points.
    pub fn add_banner(&mut self, name: &str, spec: BannerSpec) -> Result<Range<usize>> {
        self.reject_duplicate(name)?;
        if spec.width <= 0 || spec.height <= 0 {
            log::warn!(
                "banner `{name}` is {}x{}; no points will be generated",
                spec.width,
                spec.height
            );
        }

        let block = grid_points(&spec, self.config().led_spacing_mm, self.config().scale);
        let description = ShapeDescription::Banner {
            width: spec.width,
            height: spec.height,
            start: self.len(),
        };
        self.append_shape(name, description, block)
    }

    /// Adds a single row of `width` LEDs. Same placement rules as a banner.
    pub fn add_strip(&mut self, name: &str, width: i32, ulx: f64, uly: f64) -> Result<Range<usize>> {
        self.reject_duplicate(name)?;
        if width <= 0 {
            log::warn!("strip `{name}` has width {width}; no points will be generated");
        }

        let spec = BannerSpec::new(width, 1).at(ulx, uly);
        let block = grid_points(&spec, self.config().led_spacing_mm, self.config().scale);
        let description = ShapeDescription::Strip { width, start: self.len() };
        self.append_shape(name, description, block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    // ── banner ────────────────────────────────────────────────────────────

    #[test]
    fn default_banner_is_32_by_8() {
        let mut layout = LayoutGenerator::new();
        let range = layout.add_banner("b", BannerSpec::default()).unwrap();

        assert_eq!(range, 0..256);
        assert_eq!(
            layout.shape("b"),
            Some(&ShapeDescription::Banner { width: 32, height: 8, start: 0 })
        );
    }

    #[test]
    fn banner_is_row_major_and_centered_on_ulx() {
        let mut layout = LayoutGenerator::new();
        layout.add_banner("b", BannerSpec::new(4, 3)).unwrap();
        let pts = layout.points();

        assert_eq!(pts.len(), 12);
        // -(4/2) * 10mm * 0.01
        assert!((pts[0].x() + 0.2).abs() < EPS);
        assert!((pts[1].x() + 0.1).abs() < EPS);
        assert!((pts[3].x() - 0.1).abs() < EPS);
        assert!(pts[..4].iter().all(|p| p.y().abs() < EPS));
        assert!((pts[4].x() + 0.2).abs() < EPS);
        assert!((pts[4].y() - 0.1).abs() < EPS);
        assert!((pts[11].y() - 0.2).abs() < EPS);
    }

    #[test]
    fn banner_offset_is_scaled_with_grid() {
        let mut layout = LayoutGenerator::new();
        layout.add_banner("b", BannerSpec::default().at(50.0, 100.0)).unwrap();

        let first = layout.points()[0];
        assert!((first.x() - (50.0 - 160.0) * 0.01).abs() < EPS);
        assert!((first.y() - 1.0).abs() < EPS);
    }

    #[test]
    fn odd_width_rounds_half_width_down() {
        let mut layout = LayoutGenerator::new();
        layout.add_banner("b", BannerSpec::new(5, 1)).unwrap();
        // 5 / 2 == 2 LEDs left of ulx.
        assert!((layout.points()[0].x() + 0.2).abs() < EPS);
    }

    #[test]
    fn degenerate_banner_records_shape_without_points() {
        let mut layout = LayoutGenerator::new();
        let range = layout.add_banner("b", BannerSpec::new(0, 8)).unwrap();
        let range_neg = layout.add_banner("n", BannerSpec::new(4, -2)).unwrap();

        assert!(range.is_empty());
        assert!(range_neg.is_empty());
        assert!(layout.is_empty());
        assert_eq!(layout.descriptions().len(), 2);
    }

    // ── strip ─────────────────────────────────────────────────────────────

    #[test]
    fn strip_is_one_row_banner() {
        let mut strip = LayoutGenerator::new();
        let mut banner = LayoutGenerator::new();
        strip.add_strip("s", 120, 1.0, 200.0).unwrap();
        banner.add_banner("s", BannerSpec::new(120, 1).at(1.0, 200.0)).unwrap();

        assert_eq!(strip.points(), banner.points());
        assert_eq!(strip.shape("s"), Some(&ShapeDescription::Strip { width: 120, start: 0 }));
    }

    #[test]
    fn strip_points_share_one_row() {
        let mut layout = LayoutGenerator::new();
        let range = layout.add_strip("s", 7, 0.0, 220.0).unwrap();

        assert_eq!(range.len(), 7);
        assert!(layout.points().iter().all(|p| (p.y() - 2.2).abs() < EPS));
    }
}
