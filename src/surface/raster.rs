use glam::Vec2;

use super::{CircleStyle, Rect, StrokeCap, Stroke, Surface};
use crate::math::Color;

/// Software rasterizer - RGBA pixel buffer that draws each primitive as it arrives
///
/// Coverage is tested at pixel centers and blended source-over, so a
/// partially transparent primitive tints whatever is already underneath.
#[derive(Clone)]
pub struct PixelCanvas {
    /// RGBA pixel buffer
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelCanvas {
    /// Create transparent canvas with dimensions
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize) * 4;

        Self {
            pixels: vec![0; size],
            width,
            height,
        }
    }

    /// Get pixel buffer
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel buffer
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Get canvas dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// RGBA at (x, y), None when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y);
        Some([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + x as usize) * 4
    }

    /// Blend color onto a single pixel
    fn blend_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.index(x, y);
        let dst = [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ];
        self.pixels[idx..idx + 4].copy_from_slice(&color.blend_over(dst));
    }

    /// Visit every pixel whose center lies in `[min, max]` and blend `color`
    /// where `covers` says so
    fn fill_where(&mut self, min: Vec2, max: Vec2, color: Color, covers: impl Fn(Vec2) -> bool) {
        if !(min.is_finite() && max.is_finite()) || color.a == 0 {
            return;
        }

        let x0 = min.x.floor().max(0.0) as u32;
        let y0 = min.y.floor().max(0.0) as u32;
        let x1 = (max.x.ceil().max(0.0) as u32).min(self.width);
        let y1 = (max.y.ceil().max(0.0) as u32).min(self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if covers(p) {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    fn fill_disk(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let r_sq = radius * radius;
        self.fill_where(
            center - Vec2::splat(radius),
            center + Vec2::splat(radius),
            color,
            |p| p.distance_squared(center) <= r_sq,
        );
    }
}

impl Surface for PixelCanvas {
    fn clear(&mut self, color: Color) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        let half = stroke.width * 0.5;
        if half <= 0.0 || !(from.is_finite() && to.is_finite()) {
            return;
        }

        let d = to - from;
        let len_sq = d.length_squared();
        if len_sq <= f32::EPSILON {
            // Degenerate segment: only a round cap leaves a mark
            if stroke.cap == StrokeCap::Round {
                self.fill_disk(from, half, stroke.color);
            }
            return;
        }

        let half_sq = half * half;
        let min = from.min(to) - Vec2::splat(half);
        let max = from.max(to) + Vec2::splat(half);

        self.fill_where(min, max, stroke.color, |p| {
            let t = (p - from).dot(d) / len_sq;
            match stroke.cap {
                StrokeCap::Butt => {
                    (0.0..=1.0).contains(&t) && p.distance_squared(from + d * t) <= half_sq
                }
                StrokeCap::Round => {
                    let t = t.clamp(0.0, 1.0);
                    p.distance_squared(from + d * t) <= half_sq
                }
            }
        });
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Color, style: CircleStyle) {
        match style {
            CircleStyle::Fill => self.fill_disk(center, radius, color),
            CircleStyle::Stroke { width } => {
                let half = width * 0.5;
                if radius <= 0.0 || half <= 0.0 {
                    return;
                }
                let reach = radius + half;
                self.fill_where(
                    center - Vec2::splat(reach),
                    center + Vec2::splat(reach),
                    color,
                    |p| (p.distance(center) - radius).abs() <= half,
                );
            }
        }
    }

    fn arc(&mut self, oval: Rect, start_degrees: f32, sweep_degrees: f32, stroke: Stroke) {
        let half = stroke.width * 0.5;
        let center = oval.center();
        let radius = oval.size().x.min(oval.size().y) * 0.5;
        if radius <= 0.0 || half <= 0.0 || !start_degrees.is_finite() || !sweep_degrees.is_finite() {
            return;
        }

        // Normalize to a non-negative sweep starting at `start`
        let (start, sweep) = if sweep_degrees < 0.0 {
            (start_degrees + sweep_degrees, -sweep_degrees)
        } else {
            (start_degrees, sweep_degrees)
        };
        if sweep == 0.0 {
            return;
        }
        let full = sweep >= 360.0;
        let start = start.rem_euclid(360.0);

        let reach = radius + half;
        self.fill_where(
            center - Vec2::splat(reach),
            center + Vec2::splat(reach),
            stroke.color,
            |p| {
                let v = p - center;
                if (v.length() - radius).abs() > half {
                    return false;
                }
                if full {
                    return true;
                }
                let angle = v.y.atan2(v.x).to_degrees();
                (angle - start).rem_euclid(360.0) <= sweep
            },
        );

        if stroke.cap == StrokeCap::Round && !full {
            for deg in [start, start + sweep] {
                let rad = deg.to_radians();
                let end = center + Vec2::new(rad.cos(), rad.sin()) * radius;
                // Pixels inside the sweep are already covered
                self.fill_where(end - Vec2::splat(half), end + Vec2::splat(half), stroke.color, |p| {
                    let v = p - center;
                    p.distance_squared(end) <= half * half
                        && (v.y.atan2(v.x).to_degrees() - start).rem_euclid(360.0) > sweep
                });
            }
        }
    }
}
