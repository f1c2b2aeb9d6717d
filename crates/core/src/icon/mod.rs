//! Marker icons built from the transport modes a stop serves.

use std::str::FromStr;
use std::sync::Arc;

use stopmap_transit::TransportMode;

pub mod cache;

pub use cache::IconCache;

/// Shared, immutable icon. Equal cache keys hand out the same allocation.
pub type IconHandle = Arc<MarkerIcon>;

const GLYPH_SIZE: f32 = 20.0;
const GLYPH_GAP: f32 = 2.0;
const PADDING: f32 = 4.0;
const POINTER_HEIGHT: f32 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumString, strum::AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ModeGlyph {
    Bus,
    Coach,
    Tram,
    Rail,
    Metro,
    Water,
    Air,
    Lift,
    Funicular,
    Unknown,
}

impl ModeGlyph {
    pub fn for_mode(mode: &TransportMode) -> Self {
        ModeGlyph::from_str(mode.as_str()).unwrap_or(ModeGlyph::Unknown)
    }
}

/// Pixel geometry of a rendered icon. The anchor is the pointer tip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconGeometry {
    pub width: f32,
    pub height: f32,
    pub anchor_x: f32,
    pub anchor_y: f32,
}

impl IconGeometry {
    /// A row of glyphs inside a padded badge with a pointer underneath.
    pub fn measure(glyphs: &[ModeGlyph]) -> Self {
        let count = glyphs.len() as f32;
        let gaps = (count - 1.0).max(0.0);
        let width = PADDING * 2.0 + count * GLYPH_SIZE + gaps * GLYPH_GAP;
        let height = PADDING * 2.0 + GLYPH_SIZE + POINTER_HEIGHT;

        Self {
            width,
            height,
            anchor_x: width / 2.0,
            anchor_y: height,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct MarkerIcon {
    pub key: Arc<str>,
    pub glyphs: Vec<ModeGlyph>,
    pub geometry: IconGeometry,
}

impl MarkerIcon {
    pub fn build(key: Arc<str>, modes: &[TransportMode]) -> Self {
        let glyphs: Vec<ModeGlyph> = modes.iter().map(ModeGlyph::for_mode).collect();
        let geometry = IconGeometry::measure(&glyphs);

        Self {
            key,
            glyphs,
            geometry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_glyph_parsing() {
        assert_eq!(ModeGlyph::for_mode(&"metro".into()), ModeGlyph::Metro);
        assert_eq!(ModeGlyph::for_mode(&"BUS".into()), ModeGlyph::Bus);
        assert_eq!(ModeGlyph::for_mode(&"trolleybus".into()), ModeGlyph::Unknown);
        assert_eq!(ModeGlyph::Funicular.as_ref(), "funicular");
    }

    #[test]
    fn test_geometry_grows_with_glyphs() {
        let one = IconGeometry::measure(&[ModeGlyph::Bus]);
        let two = IconGeometry::measure(&[ModeGlyph::Bus, ModeGlyph::Rail]);

        assert_relative_eq!(one.width, 28.0);
        assert_relative_eq!(two.width, 50.0);
        assert_relative_eq!(one.height, two.height);
        assert_relative_eq!(two.anchor_x, 25.0);
        assert_relative_eq!(two.anchor_y, two.height);
    }

    #[test]
    fn test_empty_modes_still_measure() {
        let geometry = IconGeometry::measure(&[]);
        assert_relative_eq!(geometry.width, PADDING * 2.0);
    }
}
