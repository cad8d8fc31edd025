use std::fmt;

use serde::{Deserialize, Serialize};

use super::{clamp_unit, Hsv};
use crate::renderer::Color;

/// Below this spread between the largest and smallest channel a color is
/// treated as gray.
const ACHROMATIC_EPSILON: f32 = 0.00001;

/// Floating point RGB, every channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRgb")]
pub struct Rgb {
    r: f32,
    g: f32,
    b: f32,
}

/// Unvalidated wire form, routed through [`Rgb::new`] on deserialize.
#[derive(Deserialize)]
struct RawRgb {
    r: f32,
    g: f32,
    b: f32,
}

impl From<RawRgb> for Rgb {
    fn from(raw: RawRgb) -> Self {
        Rgb::new(raw.r, raw.g, raw.b)
    }
}

impl Rgb {
    pub const BLACK: Rgb = Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const WHITE: Rgb = Rgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };
    pub const RED: Rgb = Rgb {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };

    /// Create a color, silently clamping out-of-range channels.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
        }
    }

    pub fn gray(x: f32) -> Self {
        Self::new(x, x, x)
    }

    pub fn r(&self) -> f32 {
        self.r
    }

    pub fn g(&self) -> f32 {
        self.g
    }

    pub fn b(&self) -> f32 {
        self.b
    }

    /// Convert to HSV.
    ///
    /// Pure black reports [`Hsv::UNDEFINED_HUE`] since no hue can be recovered
    /// from a zero value. Other grays (channel spread at or below 1e-5) report
    /// hue 0 and saturation 0.
    pub fn hsv(&self) -> Hsv {
        let (r, g, b) = (self.r, self.g, self.b);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        if max <= 0.0 {
            return Hsv::undefined_hue(max);
        }
        if delta <= ACHROMATIC_EPSILON {
            return Hsv::new(0.0, 0.0, max);
        }

        let s = delta / max;

        // Ties at the maximum resolve in r, g, b order.
        let sector = if r == max {
            (g - b) / delta
        } else if g == max {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };

        let mut h = sector * 60.0;
        if h < 0.0 {
            h += 360.0;
        }

        Hsv::new(h, s, max)
    }

    /// Build from a display color, ignoring its alpha.
    pub fn from_display_color(color: Color) -> Self {
        Self::new(color.r, color.g, color.b)
    }

    /// Opaque display color for rendering.
    pub fn to_display_color(&self) -> Color {
        Color::rgb(self.r, self.g, self.b)
    }

    /// Quantize to 8 bits per channel.
    pub fn to_u8(&self) -> [u8; 3] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        ]
    }

    pub fn from_u8(rgb: [u8; 3]) -> Self {
        Self::new(
            rgb[0] as f32 / 255.0,
            rgb[1] as f32 / 255.0,
            rgb[2] as f32 / 255.0,
        )
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::RED
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        hsv.rgb()
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        Self::from_display_color(color)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        rgb.to_display_color()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R: {:.2} G: {:.2} B: {:.2}", self.r, self.g, self.b)
    }
}
