//! Drawing surface contract.
//!
//! Every primitive carries its complete style. A surface never remembers the
//! style of an earlier call.

mod raster;

use glam::Vec2;
use serde::Serialize;

use crate::math::Color;

pub use raster::PixelCanvas;

/// Line end treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrokeCap {
    /// Ends exactly at the endpoint
    Butt,
    /// Semicircle of half the width past the endpoint
    Round,
}

/// Complete stroke style for lines and arcs
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    pub cap: StrokeCap,
}

impl Stroke {
    pub fn new(color: Color, width: f32, cap: StrokeCap) -> Self {
        Self { color, width, cap }
    }
}

/// How a circle is painted
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum CircleStyle {
    Stroke { width: f32 },
    Fill,
}

/// Axis-aligned rectangle, used as the oval that bounds an arc
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Square bounding a circle of `radius` around `center`
    pub fn around(center: Vec2, radius: f32) -> Self {
        Self {
            min: center - Vec2::splat(radius),
            max: center + Vec2::splat(radius),
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Primitive drawing operations
pub trait Surface {
    /// Fill the whole surface with `color`
    fn clear(&mut self, color: Color);

    /// Straight segment from `from` to `to`
    fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke);

    /// Circle outline or disk
    fn circle(&mut self, center: Vec2, radius: f32, color: Color, style: CircleStyle);

    /// Arc of the circle inscribed in `oval`. Angles in degrees, 0° at
    /// 3 o'clock, positive sweep runs clockwise on screen.
    fn arc(&mut self, oval: Rect, start_degrees: f32, sweep_degrees: f32, stroke: Stroke);
}

/// One recorded primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear {
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
        style: CircleStyle,
    },
    Arc {
        oval: Rect,
        start_degrees: f32,
        sweep_degrees: f32,
        stroke: Stroke,
    },
}

impl DrawCommand {
    /// Replay this command onto another surface
    pub fn replay(&self, surface: &mut impl Surface) {
        match *self {
            DrawCommand::Clear { color } => surface.clear(color),
            DrawCommand::Line { from, to, stroke } => surface.line(from, to, stroke),
            DrawCommand::Circle { center, radius, color, style } => {
                surface.circle(center, radius, color, style)
            }
            DrawCommand::Arc { oval, start_degrees, sweep_degrees, stroke } => {
                surface.arc(oval, start_degrees, sweep_degrees, stroke)
            }
        }
    }
}

/// Surface that records every call in order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replay all recorded commands onto another surface
    pub fn replay(&self, surface: &mut impl Surface) {
        for command in &self.commands {
            command.replay(surface);
        }
    }
}

impl Surface for DrawList {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear { color });
    }

    fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Color, style: CircleStyle) {
        self.commands.push(DrawCommand::Circle { center, radius, color, style });
    }

    fn arc(&mut self, oval: Rect, start_degrees: f32, sweep_degrees: f32, stroke: Stroke) {
        self.commands.push(DrawCommand::Arc { oval, start_degrees, sweep_degrees, stroke });
    }
}
