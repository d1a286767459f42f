use glam::Vec2;
use serde::Serialize;

/// Display bounds handed over by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Shorter side, never negative or NaN
    pub fn min_dimension(&self) -> f32 {
        let (width, height) = self.sanitized();
        width.min(height)
    }

    /// Width and height with negative or non-finite sides collapsed to 0
    fn sanitized(&self) -> (f32, f32) {
        let side = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        (side(self.width), side(self.height))
    }
}

/// Center and radius of the dial for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DialGeometry {
    pub center: Vec2,
    pub radius: f32,
}

impl DialGeometry {
    /// Center at the bounds midpoint, radius half the shorter side
    pub fn resolve(bounds: Bounds) -> Self {
        let (width, height) = bounds.sanitized();

        Self {
            center: Vec2::new(width * 0.5, height * 0.5),
            radius: bounds.min_dimension() * 0.5,
        }
    }

    /// Shorter side of the bounds this geometry came from
    pub fn min_dimension(&self) -> f32 {
        self.radius * 2.0
    }

    /// Zero-area bounds: every radius-dependent draw is skipped
    pub fn is_degenerate(&self) -> bool {
        !(self.radius > 0.0 && self.radius.is_finite())
    }
}
