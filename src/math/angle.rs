use glam::Vec2;

/// Wrap any finite angle into [0, 360)
pub fn normalize_degrees(degrees: f32) -> f32 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Unit direction for a dial angle (degrees clockwise from 12 o'clock, y down)
pub fn dial_direction(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.sin(), -rad.cos())
}

/// Point at `distance` from `center` along a dial angle
pub fn dial_point(center: Vec2, degrees: f32, distance: f32) -> Vec2 {
    center + dial_direction(degrees) * distance
}
