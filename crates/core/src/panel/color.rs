//! Line colors for the detail panel.
//!
//! Rule precedence: authority, then the exact-match exception lists, then
//! the `N`/`B` suffix rule, then numeric ranges.

use std::sync::LazyLock;

use palette::Srgb;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum LineColor {
    Orange,
    Blue,
    Red,
    Green,
    Gray,
}

impl LineColor {
    pub fn srgb(self) -> Srgb<u8> {
        match self {
            LineColor::Orange => Srgb::new(0xEC, 0x70, 0x0C),
            LineColor::Blue => Srgb::new(0x0B, 0x91, 0xEF),
            LineColor::Red => Srgb::new(0xE6, 0x00, 0x00),
            LineColor::Green => Srgb::new(0x75, 0xA3, 0x00),
            LineColor::Gray => Srgb::new(0x6B, 0x6B, 0x6B),
        }
    }

    /// `#RRGGBB`
    pub fn hex(self) -> String {
        let c = self.srgb();
        format!("#{:02X}{:02X}{:02X}", c.red, c.green, c.blue)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColorPolicy {
    /// The only authority that gets colored lines
    pub authority: String,
    pub red_exceptions: Vec<String>,
    pub green_exceptions: Vec<String>,
}

impl Default for ColorPolicy {
    fn default() -> Self {
        Self {
            authority: "Ruter".to_owned(),
            red_exceptions: ["100", "110", "130", "140", "145", "300", "300E"]
                .map(String::from)
                .to_vec(),
            green_exceptions: vec!["210B".to_owned()],
        }
    }
}

impl ColorPolicy {
    pub fn line_color(&self, public_code: &str, authority_name: &str) -> LineColor {
        if authority_name != self.authority {
            return LineColor::Gray;
        }

        if self.red_exceptions.iter().any(|code| code == public_code) {
            return LineColor::Red;
        }
        if self.green_exceptions.iter().any(|code| code == public_code) {
            return LineColor::Green;
        }

        if public_code.ends_with('N') || public_code.ends_with('B') {
            return LineColor::Red;
        }

        match public_code.parse::<u32>() {
            Ok(1..=9) => LineColor::Orange,
            Ok(10..=19) => LineColor::Blue,
            Ok(20..=99) => LineColor::Red,
            Ok(100..=4000) => LineColor::Green,
            _ => LineColor::Gray,
        }
    }
}

static DEFAULT_POLICY: LazyLock<ColorPolicy> = LazyLock::new(ColorPolicy::default);

/// [`ColorPolicy::line_color`] with the default policy
pub fn get_line_color(public_code: &str, authority_name: &str) -> LineColor {
    DEFAULT_POLICY.line_color(public_code, authority_name)
}
