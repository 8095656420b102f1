use std::fmt;

use serde::ser::{Error as _, SerializeMap};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::value::RawValue;

/// Digits printed after the decimal point for every coordinate.
pub const COORD_PRECISION: usize = 4;

/// A single LED position in output units.
///
/// Points are immutable once built. The JSON form is `{"point": [x, y, z]}`
/// with each coordinate printed to [`COORD_PRECISION`] decimals, so two
/// generators fed the same shapes produce byte-identical documents.
#[derive(Debug, Copy, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "PointRecord")]
pub struct Point {
    x: f64,
    y: f64,
    z: f64,
}

impl Point {
    /// Point on the z = 0 plane.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    #[inline]
    pub const fn with_z(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    #[inline]
    pub const fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// True when both points print identically at [`COORD_PRECISION`] decimals,
    /// allowing for one unit of rounding in the last place.
    pub fn matches_printed(&self, other: &Point) -> bool {
        let tolerance = 10f64.powi(-(COORD_PRECISION as i32));
        self.coords()
            .iter()
            .zip(other.coords())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

/// Wire shape of a point: `{"point": [x, y, z]}`.
#[derive(Deserialize)]
struct PointRecord {
    point: [f64; 3],
}

impl From<PointRecord> for Point {
    fn from(record: PointRecord) -> Self {
        let [x, y, z] = record.point;
        Point::with_z(x, y, z)
    }
}

impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Raw fragments keep the fixed precision; serde_json would otherwise
        // print the shortest round-trip form (0.0, 1.6, ...).
        if !self.is_finite() {
            return Err(S::Error::custom(format!("non-finite coordinate in {self}")));
        }

        let mut coords = Vec::with_capacity(3);
        for c in self.coords() {
            let text = format!("{c:.prec$}", prec = COORD_PRECISION);
            coords.push(RawValue::from_string(text).map_err(S::Error::custom)?);
        }

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("point", &coords)?;
        map.end()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"point\": [{:.prec$}, {:.prec$}, {:.prec$}]}}",
            self.x,
            self.y,
            self.z,
            prec = COORD_PRECISION
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── text form ─────────────────────────────────────────────────────────

    #[test]
    fn display_pads_to_four_decimals() {
        assert_eq!(Point::new(1.0, -2.5).to_string(), r#"{"point": [1.0000, -2.5000, 0.0000]}"#);
    }

    #[test]
    fn display_rounds_extra_digits() {
        let p = Point::with_z(0.123_456, 1.999_99, 3.0);
        assert_eq!(p.to_string(), r#"{"point": [0.1235, 2.0000, 3.0000]}"#);
    }

    // ── json ──────────────────────────────────────────────────────────────

    #[test]
    fn json_keeps_fixed_precision() {
        let json = serde_json::to_string(&Point::new(-1.6, 1.0)).unwrap();
        assert_eq!(json, r#"{"point":[-1.6000,1.0000,0.0000]}"#);
    }

    #[test]
    fn json_parses_wire_form() {
        let p: Point = serde_json::from_str(r#"{"point": [0.5, -1.25, 2.0]}"#).unwrap();
        assert_eq!(p, Point::with_z(0.5, -1.25, 2.0));
    }

    #[test]
    fn json_rejects_non_finite() {
        let err = serde_json::to_string(&Point::new(f64::NAN, 0.0)).unwrap_err();
        assert!(err.to_string().contains("non-finite"));
        assert!(!Point::new(f64::INFINITY, 0.0).is_finite());
    }

    #[test]
    fn printed_match_tolerates_rounding() {
        let exact = Point::new(0.557_312_7, -0.1);
        let parsed: Point = serde_json::from_str(&serde_json::to_string(&exact).unwrap()).unwrap();
        assert!(exact.matches_printed(&parsed));
        assert!(!exact.matches_printed(&Point::new(0.56, -0.1)));
    }
}
