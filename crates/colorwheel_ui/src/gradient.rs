//! Hue/saturation gradient disk.
//!
//! Produces the backdrop the wheel is drawn on: a square image whose pixels
//! encode `(hue, saturation)` by polar position at a fixed value.

use image::{imageops, Rgba, RgbaImage};

use crate::color::Hsv;
use crate::constants::{DEFAULT_BLUR_RADIUS, DEFAULT_GRADIENT_RATIO};
use crate::geometry::map_pointer_to_hue_saturation;
use crate::layout::Point;

/// Parameters for [`render_gradient`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientOptions {
    /// Disk radius as a fraction of the image side
    pub gradient_ratio: f32,
    /// Gaussian blur sigma in pixels (0 disables)
    pub blur_radius: f32,
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self {
            gradient_ratio: DEFAULT_GRADIENT_RATIO,
            blur_radius: DEFAULT_BLUR_RADIUS,
        }
    }
}

/// Render a `size` x `size` gradient disk at the given brightness.
///
/// Saturation reaches 1 at `size * gradient_ratio` from the center; pixels
/// further out keep full saturation so the blur has color to soften into.
/// The result is clipped to the inscribed circle.
pub fn render_gradient(size: u32, brightness: f32, options: &GradientOptions) -> RgbaImage {
    if size == 0 {
        return RgbaImage::new(0, 0);
    }

    let side = size as f32;
    let center = Point::new(side / 2.0, side / 2.0);
    // The geometry mapper saturates at radius / 2
    let mapping_radius = side * options.gradient_ratio * 2.0;

    let mut image = RgbaImage::from_fn(size, size, |x, y| {
        let p = Point::new(x as f32 + 0.5, y as f32 + 0.5);
        let (hue, saturation) = map_pointer_to_hue_saturation(p, center, mapping_radius);
        let rgb = Hsv::new(hue, saturation, brightness).rgb();
        Rgba::from(rgb.to_display_color())
    });

    if options.blur_radius > 0.0 {
        image = imageops::blur(&image, options.blur_radius);
    }

    clip_to_circle(&mut image);
    log::debug!(
        "render_gradient: size={} brightness={:.2} ratio={:.2} blur={:.1}",
        size,
        brightness,
        options.gradient_ratio,
        options.blur_radius
    );
    image
}

/// Zero the alpha of every pixel outside the inscribed circle.
fn clip_to_circle(image: &mut RgbaImage) {
    let (w, h) = image.dimensions();
    let center = Point::new(w as f32 / 2.0, h as f32 / 2.0);
    let radius = w.min(h) as f32 / 2.0;
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - center.x;
        let dy = y as f32 + 0.5 - center.y;
        if dx * dx + dy * dy > radius * radius {
            pixel.0[3] = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn sharp() -> GradientOptions {
        GradientOptions {
            gradient_ratio: 0.4,
            blur_radius: 0.0,
        }
    }

    #[test]
    fn test_center_is_white_at_full_brightness() {
        let img = render_gradient(101, 1.0, &sharp());
        let px = img.get_pixel(50, 50);
        assert_eq!(px.0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_right_edge_is_red() {
        let img = render_gradient(100, 1.0, &sharp());
        // 0.45 * side from the center, past the 0.4 disk
        let px = img.get_pixel(94, 49);
        assert_eq!(px.0[0], 255);
        assert!(px.0[1] < 30);
        assert!(px.0[2] < 30);
        assert_eq!(px.0[3], 255);
    }

    #[test]
    fn test_top_is_ninety_degrees() {
        let img = render_gradient(100, 1.0, &sharp());
        let px = img.get_pixel(49, 6);
        let rgb = Rgb::from_u8([px.0[0], px.0[1], px.0[2]]);
        let hue = rgb.hsv().h();
        assert!((hue - 90.0).abs() < 3.0, "hue was {}", hue);
    }

    #[test]
    fn test_corners_are_clipped() {
        let img = render_gradient(64, 1.0, &GradientOptions::default());
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        assert_eq!(img.get_pixel(63, 63).0[3], 0);
    }

    #[test]
    fn test_brightness_darkens() {
        let img = render_gradient(50, 0.0, &sharp());
        assert_eq!(img.get_pixel(25, 25).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_zero_size() {
        let img = render_gradient(0, 1.0, &sharp());
        assert_eq!(img.dimensions(), (0, 0));
    }
}
