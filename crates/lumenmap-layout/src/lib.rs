//! Physical pixel layouts for LED banners, strips, and concentric ring arrays.
//!
//! A [`LayoutGenerator`] turns shape parameters into one ordered point
//! sequence plus a name-keyed table saying where each shape's points start
//! and how many there are. The result is emitted as a single JSON document
//! for the LED rendering pipeline, and [`LayoutDocument`] reads it back.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`config`] | `LayoutConfig`, `OutputStyle`, default ring set |
//! | [`document`] | `LayoutDocument` reader and the document writer |
//! | [`error`] | `LayoutError`, `DocumentError`, `ConfigError` |
//! | [`generator`] | `LayoutGenerator`, `Bounds` |
//! | [`logging`] | `init_logging`, `LoggingConfig` |
//! | [`point`] | `Point` |
//! | [`registry`] | `ShapeRegistry` |
//! | [`shapes`] | `ShapeDescription`, `BannerSpec`, `RingSpec`, `RingExtent` |

pub mod config;
pub mod document;
pub mod error;
pub mod generator;
pub mod logging;
pub mod point;
pub mod registry;
pub mod shapes;

pub use config::{LayoutConfig, OutputStyle};
pub use document::LayoutDocument;
pub use error::{ConfigError, DocumentError, LayoutError, Result};
pub use generator::{Bounds, LayoutGenerator};
pub use point::Point;
pub use registry::ShapeRegistry;
pub use shapes::{BannerSpec, RingExtent, RingSpec, ShapeDescription};

/// Builds the standard rig: a 32×8 banner, two 120-LED strips under it, and
/// the ring array.
pub fn standard_rig(config: LayoutConfig) -> Result<LayoutGenerator> {
    let mut layout = LayoutGenerator::with_config(config);
    layout.add_banner("b1", BannerSpec::default().at(0.0, 100.0))?;
    layout.add_strip("s1", 120, 1.0, 200.0)?;
    layout.add_strip("s2", 120, 1.0, 220.0)?;
    layout.add_concentric("c1", 0.0, 0.0)?;
    Ok(layout)
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    fn rig() -> LayoutGenerator {
        standard_rig(LayoutConfig::default()).unwrap()
    }

    #[test]
    fn standard_rig_offsets() {
        let layout = rig();

        assert_eq!(layout.descriptions().names().collect::<Vec<_>>(), ["b1", "s1", "s2", "c1"]);
        assert_eq!(layout.len(), 32 * 8 + 120 + 120 + 93);
        assert_eq!(layout.shape("s1").unwrap().start(), 256);
        assert_eq!(layout.shape("s2").unwrap().start(), 376);
        assert_eq!(layout.shape("c1").unwrap().start(), 496);
    }

    #[test]
    fn document_round_trips_every_shape() {
        let layout = rig();
        for style in [OutputStyle::Pretty, OutputStyle::Compact] {
            let text = layout.to_json(style).unwrap();
            let doc = LayoutDocument::from_json_str(&text).unwrap();

            assert_eq!(doc.displays(), layout.descriptions());
            assert_eq!(doc.points().len(), layout.len());
            for name in layout.descriptions().names() {
                let ours = layout.shape_points(name).unwrap();
                let theirs = doc.shape_points(name).unwrap();
                assert_eq!(ours.len(), theirs.len(), "shape {name}");
                assert!(ours.iter().zip(theirs).all(|(a, b)| a.matches_printed(b)), "shape {name}");
            }
        }
    }

    #[test]
    fn serialize_is_two_element_array_with_fixed_precision() {
        let text = rig().serialize().unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let top = value.as_array().unwrap();

        assert_eq!(top.len(), 2);
        assert_eq!(top[0]["displays"]["c1"]["length"], 93);
        assert_eq!(top[0]["displays"]["b1"].get("length"), None);
        assert_eq!(top[1].as_array().unwrap().len(), 589);
        // First banner LED: x = -160mm, y = 100mm.
        assert!(text.contains("-1.6000"));
        assert!(text.contains("1.0000"));
    }

    #[test]
    fn write_json_matches_to_json() {
        let layout = rig();
        let mut buf = Vec::new();
        layout.write_json(&mut buf, OutputStyle::Compact).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), layout.to_json(OutputStyle::Compact).unwrap());
    }

    #[test]
    fn emitted_document_is_deterministic() {
        assert_eq!(rig().serialize().unwrap(), rig().serialize().unwrap());
    }
}
