use std::fmt;

use serde::{Deserialize, Serialize};

use super::{clamp_unit, Rgb};
use crate::renderer::Color;

/// Floating point HSV.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawHsv")]
pub struct Hsv {
    /// Degrees in [0, 360), or [`Hsv::UNDEFINED_HUE`]
    h: f32,
    /// [0, 1]
    s: f32,
    /// [0, 1]
    v: f32,
}

#[derive(Deserialize)]
struct RawHsv {
    h: f32,
    s: f32,
    v: f32,
}

impl From<RawHsv> for Hsv {
    fn from(raw: RawHsv) -> Self {
        if raw.h == Hsv::UNDEFINED_HUE {
            Hsv::undefined_hue(raw.v)
        } else {
            Hsv::new(raw.h, raw.s, raw.v)
        }
    }
}

impl Hsv {
    /// Hue reported for pure black, where no hue can be recovered.
    pub const UNDEFINED_HUE: f32 = -1.0;

    /// Create a color. The hue is wrapped into [0, 360), negative angles
    /// included; saturation and value are clamped into [0, 1].
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_unit(s),
            v: clamp_unit(v),
        }
    }

    /// Black with the undefined-hue sentinel.
    pub(crate) fn undefined_hue(v: f32) -> Self {
        Self {
            h: Self::UNDEFINED_HUE,
            s: 0.0,
            v: clamp_unit(v),
        }
    }

    /// Hue in degrees, or [`Hsv::UNDEFINED_HUE`] for black.
    pub fn h(&self) -> f32 {
        self.h
    }

    pub fn s(&self) -> f32 {
        self.s
    }

    pub fn v(&self) -> f32 {
        self.v
    }

    pub fn has_undefined_hue(&self) -> bool {
        self.h == Self::UNDEFINED_HUE
    }

    /// Convert to RGB using the six-sector hexagonal decomposition.
    pub fn rgb(&self) -> Rgb {
        let (s, v) = (self.s, self.v);
        if s == 0.0 {
            return Rgb::gray(v);
        }

        let sector = normalize_hue(self.h) / 60.0;
        let i = sector.floor();
        let f = sector - i;

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match i as u32 {
            0 => Rgb::new(v, t, p),
            1 => Rgb::new(q, v, p),
            2 => Rgb::new(p, v, t),
            3 => Rgb::new(p, q, v),
            4 => Rgb::new(t, p, v),
            _ => Rgb::new(v, p, q),
        }
    }

    /// Build from a display color, ignoring its alpha.
    pub fn from_display_color(color: Color) -> Self {
        Rgb::from_display_color(color).hsv()
    }

    /// Opaque display color for rendering.
    pub fn to_display_color(&self) -> Color {
        self.rgb().to_display_color()
    }
}

/// Wrap an angle in degrees into [0, 360).
fn normalize_hue(h: f32) -> f32 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round tiny negative inputs up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        rgb.hsv()
    }
}

impl From<Color> for Hsv {
    fn from(color: Color) -> Self {
        Self::from_display_color(color)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H: {:.1}° S: {:.2} V: {:.2}", self.h, self.s, self.v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn assert_rgb(rgb: Rgb, r: f32, g: f32, b: f32) {
        assert!(
            approx_eq(rgb.r(), r) && approx_eq(rgb.g(), g) && approx_eq(rgb.b(), b),
            "expected ({}, {}, {}), got {:?}",
            r,
            g,
            b,
            rgb
        );
    }

    #[test]
    fn test_sector_boundaries() {
        assert_rgb(Hsv::new(0.0, 1.0, 1.0).rgb(), 1.0, 0.0, 0.0);
        assert_rgb(Hsv::new(60.0, 1.0, 1.0).rgb(), 1.0, 1.0, 0.0);
        assert_rgb(Hsv::new(120.0, 1.0, 1.0).rgb(), 0.0, 1.0, 0.0);
        assert_rgb(Hsv::new(180.0, 1.0, 1.0).rgb(), 0.0, 1.0, 1.0);
        assert_rgb(Hsv::new(240.0, 1.0, 1.0).rgb(), 0.0, 0.0, 1.0);
        assert_rgb(Hsv::new(300.0, 1.0, 1.0).rgb(), 1.0, 0.0, 1.0);
    }

    #[test]
    fn test_each_sector_midpoint() {
        assert_rgb(Hsv::new(30.0, 1.0, 1.0).rgb(), 1.0, 0.5, 0.0);
        assert_rgb(Hsv::new(90.0, 1.0, 1.0).rgb(), 0.5, 1.0, 0.0);
        assert_rgb(Hsv::new(150.0, 1.0, 1.0).rgb(), 0.0, 1.0, 0.5);
        assert_rgb(Hsv::new(210.0, 1.0, 1.0).rgb(), 0.0, 0.5, 1.0);
        assert_rgb(Hsv::new(270.0, 1.0, 1.0).rgb(), 0.5, 0.0, 1.0);
        assert_rgb(Hsv::new(330.0, 1.0, 1.0).rgb(), 1.0, 0.0, 0.5);
    }

    #[test]
    fn test_hue_wraparound() {
        let wrapped = Hsv::new(370.0, 0.7, 0.8);
        let plain = Hsv::new(10.0, 0.7, 0.8);
        assert!(approx_eq(wrapped.h(), plain.h()));
        assert_eq!(wrapped.rgb(), plain.rgb());
    }

    #[test]
    fn test_negative_hue_wraps_forward() {
        let hsv = Hsv::new(-30.0, 1.0, 1.0);
        assert!(approx_eq(hsv.h(), 330.0));
        assert_rgb(hsv.rgb(), 1.0, 0.0, 0.5);
    }

    #[test]
    fn test_full_turn_is_zero() {
        assert_eq!(Hsv::new(360.0, 1.0, 1.0).h(), 0.0);
        assert_eq!(Hsv::new(-1e-9, 1.0, 1.0).h(), 0.0);
    }

    #[test]
    fn test_clamps_saturation_and_value() {
        let hsv = Hsv::new(100.0, 1.4, -0.3);
        assert_eq!(hsv.s(), 1.0);
        assert_eq!(hsv.v(), 0.0);
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        assert_eq!(Hsv::new(200.0, 0.0, 0.4).rgb(), Rgb::gray(0.4));
    }

    #[test]
    fn test_undefined_hue_converts_to_black() {
        let black = Rgb::BLACK.hsv();
        assert!(black.has_undefined_hue());
        assert_eq!(black.rgb(), Rgb::BLACK);
    }

    #[test]
    fn test_value_scales_output() {
        assert_rgb(Hsv::new(0.0, 1.0, 0.5).rgb(), 0.5, 0.0, 0.0);
        assert_rgb(Hsv::new(120.0, 0.5, 0.5).rgb(), 0.25, 0.5, 0.25);
    }

    #[test]
    fn test_display_color_round_trip() {
        let hsv = Hsv::new(240.0, 1.0, 1.0);
        let color = hsv.to_display_color();
        assert_eq!(color.a, 1.0);
        let back = Hsv::from_display_color(Color::new(color.r, color.g, color.b, 0.3));
        assert!(approx_eq(back.h(), 240.0));
    }

    #[test]
    fn test_display_readout() {
        assert_eq!(
            Hsv::new(120.0, 1.0, 0.5).to_string(),
            "H: 120.0° S: 1.00 V: 0.50"
        );
    }

    #[test]
    fn test_deserialize_keeps_sentinel() {
        let hsv: Hsv = serde_json::from_str(r#"{"h": -1.0, "s": 0.0, "v": 0.0}"#).unwrap();
        assert!(hsv.has_undefined_hue());
        let hsv: Hsv = serde_json::from_str(r#"{"h": -90.0, "s": 0.5, "v": 0.5}"#).unwrap();
        assert!(approx_eq(hsv.h(), 270.0));
    }
}
