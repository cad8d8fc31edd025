//! Software renderer.
//!
//! Widgets record draw commands during `draw`; [`Renderer::render`] replays
//! them onto an RGBA image using source-over blending.

use std::path::Path;
use std::sync::Arc;

use image::{Rgba, RgbaImage};

use crate::layout::{Bounds, Point};

/// A draw command to be executed during rendering
#[derive(Debug, Clone)]
pub enum DrawCommand {
    FillRect {
        bounds: Bounds,
        color: Color,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Color,
    },
    StrokeCircle {
        center: Point,
        radius: f32,
        color: Color,
        width: f32,
    },
    DrawImage {
        image: Arc<RgbaImage>,
        origin: Point,
    },
}

/// Records draw commands and rasterizes them in software.
#[derive(Debug, Default)]
pub struct Renderer {
    draw_commands: Vec<DrawCommand>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill a rectangle.
    pub fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        self.draw_commands
            .push(DrawCommand::FillRect { bounds, color });
    }

    /// Fill a circle.
    pub fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.draw_commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    /// Draw a circle outline.
    pub fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        self.draw_commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            width,
        });
    }

    /// Composite a prepared image with its top-left corner at `origin`.
    pub fn draw_image(&mut self, image: Arc<RgbaImage>, origin: Point) {
        self.draw_commands
            .push(DrawCommand::DrawImage { image, origin });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.draw_commands
    }

    pub fn clear(&mut self) {
        self.draw_commands.clear();
    }

    /// Rasterize all recorded commands onto a `width` x `height` target
    /// filled with `background`.
    pub fn render(&self, width: u32, height: u32, background: Color) -> RgbaImage {
        let mut target = RgbaImage::from_pixel(width, height, background.into());
        log::debug!(
            "Renderer: rasterizing {} commands at {}x{}",
            self.draw_commands.len(),
            width,
            height
        );

        for command in &self.draw_commands {
            match command {
                DrawCommand::FillRect { bounds, color } => {
                    fill_where(&mut target, *color, |x, y| bounds.contains(Point::new(x, y)));
                }
                DrawCommand::FillCircle {
                    center,
                    radius,
                    color,
                } => {
                    fill_where(&mut target, *color, |x, y| {
                        let dx = x - center.x;
                        let dy = y - center.y;
                        dx * dx + dy * dy <= radius * radius
                    });
                }
                DrawCommand::StrokeCircle {
                    center,
                    radius,
                    color,
                    width,
                } => {
                    let inner = (radius - width).max(0.0);
                    fill_where(&mut target, *color, |x, y| {
                        let d2 = (x - center.x).powi(2) + (y - center.y).powi(2);
                        d2 <= radius * radius && d2 >= inner * inner
                    });
                }
                DrawCommand::DrawImage { image, origin } => {
                    let ox = origin.x.round() as i64;
                    let oy = origin.y.round() as i64;
                    for (sx, sy, src) in image.enumerate_pixels() {
                        let tx = ox + sx as i64;
                        let ty = oy + sy as i64;
                        if tx < 0 || ty < 0 || tx >= width as i64 || ty >= height as i64 {
                            continue;
                        }
                        let dst = target.get_pixel_mut(tx as u32, ty as u32);
                        *dst = blend_over(Color::from(*src), Color::from(*dst)).into();
                    }
                }
            }
        }

        target
    }

    /// Rasterize and write a PNG.
    pub fn save_png(
        &self,
        path: impl AsRef<Path>,
        width: u32,
        height: u32,
        background: Color,
    ) -> image::ImageResult<()> {
        let path = path.as_ref();
        self.render(width, height, background).save(path)?;
        log::info!("Renderer: wrote {}x{} image to {:?}", width, height, path);
        Ok(())
    }
}

/// Blend `color` into every pixel whose center satisfies `inside`.
fn fill_where<F>(target: &mut RgbaImage, color: Color, inside: F)
where
    F: Fn(f32, f32) -> bool,
{
    for (x, y, dst) in target.enumerate_pixels_mut() {
        if inside(x as f32 + 0.5, y as f32 + 0.5) {
            *dst = blend_over(color, Color::from(*dst)).into();
        }
    }
}

/// Non-premultiplied source-over blend.
fn blend_over(src: Color, dst: Color) -> Color {
    let a = src.a + dst.a * (1.0 - src.a);
    if a <= 0.0 {
        return Color::TRANSPARENT;
    }
    let mix = |s: f32, d: f32| (s * src.a + d * dst.a * (1.0 - src.a)) / a;
    Color::new(mix(src.r, dst.r), mix(src.g, dst.g), mix(src.b, dst.b), a)
}

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba([q(color.r), q(color.g), q(color.b), q(color.a)])
    }
}

impl From<Rgba<u8>> for Color {
    fn from(pixel: Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Color::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }
}
