use serde::Serialize;

/// 8-bit RGBA color, alpha 255 = opaque
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_rgb(0x000000);
    pub const TRANSPARENT: Color = Color { r: 0, g: 0, b: 0, a: 0 };

    /// Opaque color from a packed `0xRRGGBB` value
    pub const fn from_rgb(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
            a: 255,
        }
    }

    /// Same color with a replaced alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Alpha as a [0, 1] opacity
    pub fn opacity(&self) -> f32 {
        self.a as f32 / 255.0
    }

    /// Source-over blend of `self` onto an opaque-or-not destination pixel
    pub fn blend_over(&self, dst: [u8; 4]) -> [u8; 4] {
        let sa = self.opacity();
        if sa >= 1.0 {
            return [self.r, self.g, self.b, 255];
        }

        let da = dst[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return [0, 0, 0, 0];
        }

        let channel = |s: u8, d: u8| {
            let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
            v.round().clamp(0.0, 255.0) as u8
        };

        [
            channel(self.r, dst[0]),
            channel(self.g, dst[1]),
            channel(self.b, dst[2]),
            (out_a * 255.0).round() as u8,
        ]
    }
}
