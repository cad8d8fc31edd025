//! Color model shared by the wheel widget and the renderer.
//!
//! Two value types are provided:
//! - [`Rgb`]: additive red/green/blue, each channel in [0, 1]
//! - [`Hsv`]: hue in degrees [0, 360), saturation and value in [0, 1]
//!
//! Both are plain `Copy` values. Every constructor clamps or wraps its inputs,
//! so none of the conversions can fail.

mod hsv;
mod rgb;

pub use hsv::Hsv;
pub use rgb::Rgb;

/// Clamp a channel into [0, 1]. NaN collapses to 0.
#[inline]
pub(crate) fn clamp_unit(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn rgb_approx_eq(a: Rgb, b: Rgb) -> bool {
        approx_eq(a.r(), b.r()) && approx_eq(a.g(), b.g()) && approx_eq(a.b(), b.b())
    }

    #[test]
    fn test_round_trip_over_grid() {
        let steps: [f32; 9] = [0.0, 0.1, 0.25, 0.33, 0.5, 0.66, 0.75, 0.9, 1.0];
        for &r in &steps {
            for &g in &steps {
                for &b in &steps {
                    let max = r.max(g).max(b);
                    let min = r.min(g).min(b);
                    if max - min <= 1e-5 || max <= 0.0 {
                        continue;
                    }
                    let rgb = Rgb::new(r, g, b);
                    let back = rgb.hsv().rgb();
                    assert!(
                        rgb_approx_eq(rgb, back),
                        "round trip failed for {:?} -> {:?}",
                        rgb,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_second_round_trip_is_fixed_point() {
        let samples = [
            Rgb::new(0.8, 0.2, 0.4),
            Rgb::new(0.1, 0.9, 0.3),
            Rgb::new(0.05, 0.05, 0.6),
            Rgb::new(0.5, 0.5, 0.5),
        ];
        for rgb in samples {
            let once = rgb.hsv().rgb().hsv();
            let twice = once.rgb().hsv().rgb().hsv();
            assert!(approx_eq(once.h(), twice.h()));
            assert!(approx_eq(once.s(), twice.s()));
            assert!(approx_eq(once.v(), twice.v()));
        }
    }

    #[test]
    fn test_from_impls_match_methods() {
        let rgb = Rgb::new(0.2, 0.4, 0.9);
        let hsv: Hsv = rgb.into();
        assert_eq!(hsv, rgb.hsv());
        let back: Rgb = hsv.into();
        assert_eq!(back, hsv.rgb());
    }

    #[test]
    fn test_clamp_unit_nan() {
        assert_eq!(clamp_unit(f32::NAN), 0.0);
        assert_eq!(clamp_unit(-3.0), 0.0);
        assert_eq!(clamp_unit(7.0), 1.0);
    }
}
