pub(crate) mod banner;
pub(crate) mod conring;

use std::ops::Range;

use serde::{Deserialize, Serialize};

pub use banner::BannerSpec;
pub use conring::{RingExtent, RingSpec};

/// Metadata recorded for one named shape.
///
/// The `type` tag and field order match what the rendering pipeline expects.
/// Banners and strips carry no `length` on the wire; use [`point_count`]
/// instead of deriving it by hand.
///
/// [`point_count`]: ShapeDescription::point_count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeDescription {
    #[serde(rename = "conring")]
    Conring {
        start: usize,
        length: usize,
        /// Points per ring, outermost first, ending with `1` for the center.
        ring_counts: Vec<usize>,
    },
    #[serde(rename = "banner")]
    Banner { width: i32, height: i32, start: usize },
    #[serde(rename = "strip")]
    Strip { width: i32, start: usize },
}

impl ShapeDescription {
    /// Offset of the shape's first point in the shared point sequence.
    #[inline]
    pub fn start(&self) -> usize {
        match *self {
            Self::Conring { start, .. } | Self::Banner { start, .. } | Self::Strip { start, .. } => {
                start
            }
        }
    }

    /// Number of points belonging to this shape. Negative dimensions count as zero.
    pub fn point_count(&self) -> usize {
        match *self {
            Self::Conring { length, .. } => length,
            Self::Banner { width, height, .. } => dim_len(width).saturating_mul(dim_len(height)),
            Self::Strip { width, .. } => dim_len(width),
        }
    }

    /// Index range of the shape's points in the shared point sequence.
    #[inline]
    pub fn points(&self) -> Range<usize> {
        let start = self.start();
        start..start.saturating_add(self.point_count())
    }

    /// Wire name of the shape type.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Conring { .. } => "conring",
            Self::Banner { .. } => "banner",
            Self::Strip { .. } => "strip",
        }
    }
}

#[inline]
fn dim_len(dim: i32) -> usize {
    usize::try_from(dim).unwrap_or(0)
}
