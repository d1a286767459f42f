use chrono::{FixedOffset, TimeZone, Utc};
use firefly_dial::battery::{BatteryProbe, LevelReading};
use firefly_dial::dial::flame::intensity;
use firefly_dial::dial::hands::HandAngles;
use firefly_dial::dial::ticks::{layout_ticks, TICK_COUNT};
use firefly_dial::dial::DialGeometry;
use firefly_dial::surface::{DrawCommand, DrawList};
use firefly_dial::{record_frame, Bounds, DialConfig, DialRenderer, FixedBattery, ProbedBattery};

/// Probe that reports a fixed capacity and level/scale pair
struct StubProbe {
    capacity: i32,
    level: LevelReading,
}

impl BatteryProbe for StubProbe {
    fn capacity_percent(&self) -> anyhow::Result<Option<i32>> {
        Ok(Some(self.capacity))
    }

    fn broadcast_level(&self) -> anyhow::Result<Option<LevelReading>> {
        Ok(Some(self.level))
    }
}

fn arc_sweep(list: &DrawList) -> Option<f32> {
    list.commands().iter().find_map(|c| match c {
        DrawCommand::Arc { sweep_degrees, .. } => Some(*sweep_degrees),
        _ => None,
    })
}

// ============================================================================
// Ticks
// ============================================================================

#[test]
fn test_tick_angle_and_tier_are_pure_functions_of_index() {
    let config = DialConfig::default();
    let small = layout_ticks(&config, &DialGeometry::resolve(Bounds::new(200.0, 200.0)));
    let large = layout_ticks(&config, &DialGeometry::resolve(Bounds::new(800.0, 600.0)));

    assert_eq!(small.len(), TICK_COUNT);
    for i in 0..TICK_COUNT {
        assert_eq!(small[i].angle_degrees(), (i as f32 * 6.0) % 360.0);
        assert_eq!(small[i].color, large[i].color);
        assert_eq!(small[i].is_hour_tick, i % 5 == 0);
        assert_eq!(small[i].is_cardinal, [0, 15, 30, 45].contains(&i));
    }
}

// ============================================================================
// Hands
// ============================================================================

#[test]
fn test_hand_angles_at_three_fifteen_thirty() {
    let time = Utc.with_ymd_and_hms(2024, 3, 9, 3, 15, 30).unwrap();
    let angles = HandAngles::at(&time.naive_utc());

    assert!((angles.hour - 97.5).abs() < 1e-4);
    assert!((angles.minute - 93.0).abs() < 1e-4);
    assert!((angles.second - 180.0).abs() < 1e-4);
}

// ============================================================================
// Battery ring and flame
// ============================================================================

#[test]
fn test_provider_out_of_range_is_clamped_at_ring() {
    let time = Utc.with_ymd_and_hms(2024, 3, 9, 3, 15, 30).unwrap();
    let bounds = Bounds::new(400.0, 400.0);

    for (raw, expected) in [(2.5, 360.0), (1.0, 360.0), (0.25, 90.0)] {
        let renderer = DialRenderer::new(DialConfig::default(), FixedBattery(raw));
        let mut list = DrawList::new();
        renderer.render(&mut list, bounds, &time);
        assert_eq!(arc_sweep(&list), Some(expected), "raw {raw}");
    }

    let renderer = DialRenderer::new(DialConfig::default(), FixedBattery(-4.0));
    let mut list = DrawList::new();
    renderer.render(&mut list, bounds, &time);
    assert_eq!(arc_sweep(&list), None);
}

#[test]
fn test_intensity_bounds_and_monotonicity() {
    assert_eq!(intensity(0.0), 1.0);
    assert_eq!(intensity(1.0), 0.5);

    let samples: Vec<f32> = (0..=1000).map(|i| intensity(i as f32 / 1000.0)).collect();
    assert!(samples.windows(2).all(|w| w[1] <= w[0]));
}

#[test]
fn test_capacity_150_falls_through_to_level_scale() {
    let probe = StubProbe {
        capacity: 150,
        level: LevelReading { level: 40, scale: 100 },
    };
    let renderer = DialRenderer::new(DialConfig::default(), ProbedBattery::new(probe));
    let time = Utc.with_ymd_and_hms(2024, 3, 9, 3, 15, 30).unwrap();

    let mut list = DrawList::new();
    renderer.render(&mut list, Bounds::new(400.0, 400.0), &time);

    let sweep = arc_sweep(&list).unwrap();
    assert!((sweep - 144.0).abs() < 1e-3);
}

// ============================================================================
// Frame composition
// ============================================================================

#[test]
fn test_identical_inputs_give_byte_identical_frames() {
    let config = DialConfig::default();
    let time = FixedOffset::east_opt(8 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 11, 2, 21, 47, 13)
        .unwrap()
        + chrono::TimeDelta::milliseconds(321);
    let bounds = Bounds::new(454.0, 454.0);

    let a = record_frame(&config, bounds, &time, 0.37);
    let b = record_frame(&config, bounds, &time, 0.37);

    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_vec(&a).unwrap(),
        serde_json::to_vec(&b).unwrap()
    );
}

#[test]
fn test_flame_moves_between_frames_but_repeats_each_cycle() {
    let config = DialConfig::default();
    let bounds = Bounds::new(454.0, 454.0);
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let later = t0 + chrono::TimeDelta::milliseconds(500);

    let flame = |list: &DrawList| list.commands()[2..8].to_vec();

    let first = record_frame(&config, bounds, &t0, 0.6);
    let moved = record_frame(&config, bounds, &later, 0.6);
    assert_ne!(flame(&first), flame(&moved));

    // A full 4 s cycle later the second hand has moved but the flame matches
    let next_cycle = record_frame(&config, bounds, &(t0 + chrono::TimeDelta::milliseconds(4000)), 0.6);
    assert_eq!(flame(&first), flame(&next_cycle));
}

#[test]
fn test_degenerate_bounds_do_not_crash() {
    let config = DialConfig::default();
    let time = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    for bounds in [Bounds::new(0.0, 0.0), Bounds::new(0.0, 300.0), Bounds::new(300.0, 0.0)] {
        let list = record_frame(&config, bounds, &time, 0.5);
        assert_eq!(list.len(), 1);
        assert!(matches!(list.commands()[0], DrawCommand::Clear { .. }));
    }
}

#[test]
fn test_draw_list_json_shape() {
    let config = DialConfig::default();
    let time = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let list = record_frame(&config, Bounds::new(300.0, 300.0), &time, 0.5);

    let value = serde_json::to_value(&list).unwrap();
    let commands = value["commands"].as_array().unwrap();
    assert_eq!(commands.len(), list.len());
    assert_eq!(commands[0]["op"], "clear");
    assert_eq!(commands[1]["op"], "arc");
    assert_eq!(commands[1]["stroke"]["cap"], "Butt");
}
