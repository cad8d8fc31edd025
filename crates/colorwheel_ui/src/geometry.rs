//! Wheel geometry: pointer position <-> (hue, saturation).
//!
//! `radius` is the wheel's extent as reported by layout (the shorter side of
//! the square it occupies). Saturation grows linearly from the center and
//! reaches 1 at `radius / 2`; everything further out stays fully saturated.
//!
//! Hue follows math orientation: 0° points right and angles grow
//! counter-clockwise on screen, so the screen y axis is flipped before
//! taking the angle.

use crate::color::Hsv;
use crate::layout::Point;

/// Convert an angle in radians to a hue in degrees within [0, 360).
pub fn angle_to_hue(angle: f32) -> f32 {
    let degrees = angle.to_degrees().rem_euclid(360.0);
    // Tiny negative angles round up to exactly 360
    if degrees >= 360.0 {
        0.0
    } else {
        degrees
    }
}

/// Euclidean distance between two points.
pub fn distance(from: Point, to: Point) -> f32 {
    let dx = from.x - to.x;
    let dy = from.y - to.y;
    (dx * dx + dy * dy).sqrt()
}

/// Map a pointer location to `(hue, saturation)`.
///
/// A pointer exactly on the center yields `(0.0, 0.0)`.
pub fn map_pointer_to_hue_saturation(location: Point, center: Point, radius: f32) -> (f32, f32) {
    let x = location.x - center.x;
    let y = center.y - location.y;

    let hue = angle_to_hue(y.atan2(x));

    let half = radius / 2.0;
    let saturation = if half > 0.0 {
        (distance(center, location) / half).min(1.0)
    } else {
        // Degenerate wheel: any offset from the center is fully saturated
        if x == 0.0 && y == 0.0 {
            0.0
        } else {
            1.0
        }
    };

    (hue, saturation)
}

/// Inverse of [`map_pointer_to_hue_saturation`] for saturation in [0, 1].
pub fn hue_saturation_to_point(hue: f32, saturation: f32, center: Point, radius: f32) -> Point {
    let reach = radius / 2.0 * saturation.clamp(0.0, 1.0);
    let angle = hue.to_radians();
    Point::new(
        center.x + reach * angle.cos(),
        center.y - reach * angle.sin(),
    )
}

/// Center of the selection indicator for a color.
///
/// The indicator travels `radius / 2 - indicator_size / 2` at full saturation
/// so it stays inside the disk. An undefined hue is drawn at angle 0.
pub fn indicator_position(hsv: Hsv, center: Point, radius: f32, indicator_size: f32) -> Point {
    let reach = (radius / 2.0 - indicator_size / 2.0).max(0.0) * hsv.s();
    let hue = if hsv.has_undefined_hue() { 0.0 } else { hsv.h() };
    let angle = hue.to_radians();
    Point::new(
        center.x + reach * angle.cos(),
        center.y - reach * angle.sin(),
    )
}
