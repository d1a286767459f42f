use chrono::Timelike;
use glam::Vec2;

use super::geometry::DialGeometry;
use crate::config::DialConfig;
use crate::math::{dial_point, normalize_degrees, Color};
use crate::surface::{Stroke, StrokeCap, Surface};

const HOUR_LENGTH_RATIO: f32 = 0.28;
const MINUTE_LENGTH_RATIO: f32 = 0.38;
const SECOND_LENGTH_RATIO: f32 = 0.45;
/// Tail behind the second hand, relative to its length
pub const SECOND_TAIL_RATIO: f32 = 0.20;

/// Hand angles in degrees clockwise from 12 o'clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandAngles {
    /// Sweeping second and minute hands, hour hand stepping by minute
    pub fn at<T: Timelike>(time: &T) -> Self {
        let seconds = time.second() as f32 + time.nanosecond() as f32 / 1_000_000_000.0;
        let minutes = time.minute() as f32;
        let hours = (time.hour() % 12) as f32;

        Self {
            hour: normalize_degrees(hours * 30.0 + minutes * 0.5),
            minute: normalize_degrees(minutes * 6.0 + seconds * 0.1),
            second: normalize_degrees(seconds * 6.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandSpec {
    pub angle_degrees: f32,
    pub length: f32,
    pub stroke_width: f32,
    pub color: Color,
}

impl HandSpec {
    pub fn tip(&self, center: Vec2) -> Vec2 {
        dial_point(center, self.angle_degrees, self.length)
    }

    fn stroke(&self) -> Stroke {
        Stroke::new(self.color, self.stroke_width, StrokeCap::Round)
    }
}

/// The three hands for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandSet {
    pub hour: HandSpec,
    pub minute: HandSpec,
    pub second: HandSpec,
}

impl HandSet {
    pub fn new(config: &DialConfig, geometry: &DialGeometry, angles: HandAngles) -> Self {
        let dim = geometry.min_dimension();
        let scale = config.hand_length_scale;
        let palette = &config.palette;

        Self {
            hour: HandSpec {
                angle_degrees: angles.hour,
                length: dim * HOUR_LENGTH_RATIO * scale,
                stroke_width: (dim * 0.02).max(6.0),
                color: palette.hour_hand,
            },
            minute: HandSpec {
                angle_degrees: angles.minute,
                length: dim * MINUTE_LENGTH_RATIO * scale,
                stroke_width: (dim * 0.012).max(4.0),
                color: palette.minute_hand,
            },
            second: HandSpec {
                angle_degrees: angles.second,
                length: dim * SECOND_LENGTH_RATIO * scale,
                stroke_width: (dim * 0.006).max(2.0),
                color: palette.second_hand,
            },
        }
    }

    /// Far end of the second hand's tail, opposite the tip
    pub fn second_tail(&self, center: Vec2) -> Vec2 {
        let tail = self.second.length * SECOND_TAIL_RATIO;
        dial_point(center, self.second.angle_degrees, -tail)
    }
}

/// Hour, minute, then second hand with its tail
pub fn draw_hands<T: Timelike>(
    surface: &mut impl Surface,
    config: &DialConfig,
    geometry: &DialGeometry,
    time: &T,
) {
    if geometry.is_degenerate() {
        return;
    }

    let hands = HandSet::new(config, geometry, HandAngles::at(time));
    let center = geometry.center;

    for hand in [hands.hour, hands.minute, hands.second] {
        surface.line(center, hand.tip(center), hand.stroke());
    }
    surface.line(center, hands.second_tail(center), hands.second.stroke());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dial::geometry::Bounds;
    use crate::surface::{DrawCommand, DrawList};
    use chrono::NaiveTime;

    fn hms(h: u32, m: u32, s: u32, milli: u32) -> NaiveTime {
        NaiveTime::from_hms_milli_opt(h, m, s, milli).unwrap()
    }

    #[test]
    fn test_angles_at_quarter_past_three() {
        let a = HandAngles::at(&hms(3, 15, 30, 0));
        assert!((a.hour - 97.5).abs() < 1e-4);
        assert!((a.minute - 93.0).abs() < 1e-4);
        assert!((a.second - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_angles_at_midnight() {
        let a = HandAngles::at(&hms(0, 0, 0, 0));
        assert_eq!((a.hour, a.minute, a.second), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_pm_hours_fold_onto_dial() {
        let am = HandAngles::at(&hms(3, 15, 30, 0));
        let pm = HandAngles::at(&hms(15, 15, 30, 0));
        assert_eq!(am, pm);
    }

    #[test]
    fn test_second_hand_sweeps_with_millis() {
        let a = HandAngles::at(&hms(10, 0, 12, 500));
        assert!((a.second - 75.0).abs() < 1e-4);
        assert!((a.minute - 1.25).abs() < 1e-4);
    }

    #[test]
    fn test_angles_stay_below_full_turn() {
        let a = HandAngles::at(&hms(23, 59, 59, 999));
        for angle in [a.hour, a.minute, a.second] {
            assert!((0.0..360.0).contains(&angle), "{angle}");
        }
    }

    #[test]
    fn test_leap_second_is_normalized() {
        // chrono represents a leap second as nanosecond >= 1e9
        let t = NaiveTime::from_hms_nano_opt(23, 59, 59, 1_500_000_000).unwrap();
        let a = HandAngles::at(&t);
        assert!((0.0..360.0).contains(&a.second));
        assert!((0.0..360.0).contains(&a.minute));
    }

    #[test]
    fn test_hand_lengths() {
        let g = DialGeometry::resolve(Bounds::new(400.0, 400.0));
        let hands = HandSet::new(&DialConfig::default(), &g, HandAngles::at(&hms(0, 0, 0, 0)));

        assert!((hands.hour.length - 400.0 * 0.28 * 0.9).abs() < 1e-3);
        assert!((hands.minute.length - 400.0 * 0.38 * 0.9).abs() < 1e-3);
        assert!((hands.second.length - 400.0 * 0.45 * 0.9).abs() < 1e-3);
    }

    #[test]
    fn test_hand_widths_have_floors() {
        let g = DialGeometry::resolve(Bounds::new(100.0, 100.0));
        let hands = HandSet::new(&DialConfig::default(), &g, HandAngles::at(&hms(0, 0, 0, 0)));

        assert_eq!(hands.hour.stroke_width, 6.0);
        assert_eq!(hands.minute.stroke_width, 4.0);
        assert_eq!(hands.second.stroke_width, 2.0);
    }

    #[test]
    fn test_tail_opposes_tip() {
        let g = DialGeometry::resolve(Bounds::new(400.0, 400.0));
        let hands = HandSet::new(&DialConfig::default(), &g, HandAngles::at(&hms(0, 0, 0, 0)));

        let tip = hands.second.tip(g.center);
        let tail = hands.second_tail(g.center);
        assert!(tip.y < g.center.y);
        assert!(tail.y > g.center.y);
        assert!(((tail.y - g.center.y) - hands.second.length * 0.2).abs() < 1e-3);
    }

    #[test]
    fn test_rotated_frame_matches_absolute_endpoint() {
        // Rotating a vertical segment about the center by the angle
        let g = DialGeometry::resolve(Bounds::new(400.0, 400.0));
        let hands = HandSet::new(&DialConfig::default(), &g, HandAngles::at(&hms(3, 15, 30, 0)));
        let hand = hands.minute;

        let rad = hand.angle_degrees.to_radians();
        let up = Vec2::new(0.0, -hand.length);
        let rotated = Vec2::new(
            up.x * rad.cos() - up.y * rad.sin(),
            up.x * rad.sin() + up.y * rad.cos(),
        );
        let expected = g.center + rotated;

        assert!(hand.tip(g.center).distance(expected) < 1e-3);
    }

    #[test]
    fn test_draw_order_and_count() {
        let g = DialGeometry::resolve(Bounds::new(400.0, 400.0));
        let config = DialConfig::default();
        let mut list = DrawList::new();
        draw_hands(&mut list, &config, &g, &hms(3, 15, 30, 0));

        let colors: Vec<_> = list
            .commands()
            .iter()
            .map(|c| match c {
                DrawCommand::Line { stroke, .. } => stroke.color,
                other => panic!("unexpected {other:?}"),
            })
            .collect();

        assert_eq!(
            colors,
            vec![
                config.palette.hour_hand,
                config.palette.minute_hand,
                config.palette.second_hand,
                config.palette.second_hand,
            ]
        );
    }
}
