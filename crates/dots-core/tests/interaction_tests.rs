// Host-side tests for the per-point kick/hold/return state machine.

use dots_core::*;
use glam::{Quat, Vec3};

fn make_field(count: usize) -> ParticleField {
    ParticleField::new(SphereConfig {
        dot_count: count,
        radius: 2.0,
    })
    .unwrap()
}

fn swipe(previous: Vec3, current: Vec3, speed: f32) -> Option<CursorPath> {
    Some(CursorPath {
        previous,
        current,
        speed,
    })
}

#[test]
fn cursor_radius_scales_with_sphere() {
    let field = make_field(100);
    let interaction = Interaction::new(&field);
    assert!((interaction.cursor_radius() - 0.38 * 2.0).abs() < 1e-6);
}

#[test]
fn kick_magnitude_follows_power_law_with_cap() {
    // below the knee: nothing
    assert_eq!(kick_magnitude(0.6, 2.0), 0.0);
    assert_eq!(kick_magnitude(1.0, 2.0), 0.0);
    // one unit over the knee: gain * 1^1.15
    assert!((kick_magnitude(2.0, 2.0) - 0.7).abs() < 1e-6);
    // grows with force
    assert!(kick_magnitude(1.8, 2.0) > kick_magnitude(1.4, 2.0));
    // capped at 0.7 * radius
    assert!((kick_magnitude(50.0, 2.0) - 1.4).abs() < 1e-6);
    assert!((kick_magnitude(50.0, 1.0) - 0.7).abs() < 1e-6);
}

#[test]
fn coincident_cursor_snaps_point_to_boundary() {
    let mut field = make_field(400);
    let mut interaction = Interaction::new(&field);
    let i = 137;
    let cursor = field.original_position(i);

    let report = interaction.update(&mut field, Quat::IDENTITY, Some(CursorPath::stationary(cursor)));

    // distance 0 is inside the exclusion zone at every sample: snapped, never eased
    assert_eq!(field.regime(i), Regime::AtRest);
    let d = field.displaced_position(i).distance(cursor);
    assert!((d - interaction.cursor_radius()).abs() < 1e-4, "d = {d}");
    // pushed radially outward
    let radial = field.original_position(i).normalize();
    assert!(field.spread_offset(i).normalize().dot(radial) > 0.999);
    assert!(report.snaps >= PATH_SAMPLES);
    assert_eq!(report.total_kicks(), 0);
}

#[test]
fn coincident_cursor_snaps_under_rotation() {
    let mut field = make_field(400);
    let mut interaction = Interaction::new(&field);
    let rotation = Quat::from_rotation_y(0.7) * Quat::from_rotation_x(-0.3);
    let i = 42;
    let cursor = rotation * field.original_position(i);

    interaction.update(&mut field, rotation, Some(CursorPath::stationary(cursor)));

    assert_eq!(field.regime(i), Regime::AtRest);
    let world = rotation * field.displaced_position(i);
    assert!((world.distance(cursor) - interaction.cursor_radius()).abs() < 1e-4);
}

#[test]
fn stationary_cursor_keeps_points_outside_exclusion_zone() {
    let mut field = make_field(1600);
    let mut interaction = Interaction::new(&field);
    let cursor = Vec3::new(0.0, 0.0, 2.0);
    let r = interaction.cursor_radius();
    for _ in 0..10 {
        interaction.update(&mut field, Quat::IDENTITY, Some(CursorPath::stationary(cursor)));
        for i in 0..field.count() {
            let d = field.displaced_position(i).distance(cursor);
            assert!(d >= r - 1e-4, "point {i} inside zone: {d}");
        }
    }
}

#[test]
fn soft_band_eases_and_holds() {
    let mut field = make_field(400);
    let mut interaction = Interaction::new(&field);
    let i = 200;
    let original = field.original_position(i);
    let tangent = original.cross(Vec3::Y).normalize();
    let gap = interaction.cursor_radius() + SOFT_BAND_WIDTH * 0.5;
    let cursor = original + tangent * gap;

    let report = interaction.update(&mut field, Quat::IDENTITY, Some(CursorPath::stationary(cursor)));

    assert_eq!(field.regime(i), Regime::Held { timer: HOLD_TIME });
    assert_eq!(field.return_timer(i), 0.4);
    assert!(report.eases > 0);
    let d = field.displaced_position(i).distance(cursor);
    // eased toward the boundary, not snapped onto it
    assert!(d < gap);
    assert!(d > interaction.cursor_radius());

    // pointer gone: no grace period, the hold is dropped at once
    interaction.update(&mut field, Quat::IDENTITY, None);
    assert_eq!(field.regime(i), Regime::AtRest);
    assert_eq!(field.return_timer(i), 0.0);
}

#[test]
fn held_point_keeps_offset_while_timer_runs() {
    let mut field = make_field(400);
    let mut interaction = Interaction::new(&field);
    let i = 200;
    let original = field.original_position(i);
    let tangent = original.cross(Vec3::Y).normalize();
    let cursor = original + tangent * (interaction.cursor_radius() + 0.05);
    let path = Some(CursorPath::stationary(cursor));

    interaction.update(&mut field, Quat::IDENTITY, path);
    let before = field.spread_offset(i);
    interaction.update(&mut field, Quat::IDENTITY, path);
    // held points are not pulled home; the band only pushes further toward the boundary
    let after = field.spread_offset(i);
    assert!(after.length() >= before.length() - 1e-6);
    assert!(matches!(field.regime(i), Regime::Held { .. }));
}

#[test]
fn offsets_decay_home_without_pointer() {
    let mut field = make_field(400);
    let mut interaction = Interaction::new(&field);
    let cursor = field.original_position(10);
    interaction.update(&mut field, Quat::IDENTITY, swipe(cursor, cursor, 40.0));
    interaction.update(&mut field, Quat::IDENTITY, Some(CursorPath::stationary(cursor)));
    assert!(field.spread_offsets().iter().any(|o| o.length() > 0.1));

    let mut prev_max = f32::MAX;
    for frame in 0..800 {
        interaction.update(&mut field, Quat::IDENTITY, None);
        if frame > 40 {
            // no kicks left in flight: pure exponential decay
            let max = field
                .spread_offsets()
                .iter()
                .map(|o| o.length())
                .fold(0.0f32, f32::max);
            assert!(max <= prev_max + 1e-7);
            prev_max = max;
        }
    }
    for i in 0..field.count() {
        assert!(field.spread_offset(i).length() < 1e-4);
        assert_eq!(field.regime(i), Regime::AtRest);
    }
}

#[test]
fn kick_progress_is_monotonic_until_complete() {
    let mut field = make_field(400);
    let mut interaction = Interaction::new(&field);
    let i = 77;
    let cursor = field.original_position(i);

    // force = 40 / 5 = 8: above threshold, well past the knee
    let report = interaction.update(&mut field, Quat::IDENTITY, swipe(cursor, cursor, 40.0));
    assert!(report.total_kicks() >= 1);
    // the zone holds fewer points than the frame has kick slots, so every one kicks
    assert!(field.regime(i).is_kicking());
    assert_eq!(field.kick_progress(i), 0.0);

    let start = field.kick_start(i).unwrap();
    let delta = field.kick_direction(i).unwrap();
    // starts on the boundary, heads radially outward
    assert!((field.displaced_position(i).distance(cursor) - interaction.cursor_radius()).abs() < 1e-4);
    assert!(delta.normalize().dot(field.original_position(i).normalize()) > 0.999);
    assert!((delta.length() - kick_magnitude(8.0, 2.0)).abs() < 1e-5);

    let mut prev = 0.0;
    let mut frames = 0;
    while field.regime(i).is_kicking() {
        interaction.update(&mut field, Quat::IDENTITY, None);
        let p = field.kick_progress(i);
        assert!(p >= prev);
        prev = p;
        frames += 1;
        assert!(frames < 100, "kick never finished");
    }
    // 0.035 per frame reaches 1 on the 29th frame
    assert_eq!(frames, 29);
    assert!((field.spread_offset(i) - (start + delta)).length() < 1e-5);
    assert_eq!(field.regime(i), Regime::AtRest);
}

#[test]
fn slow_pointer_never_kicks() {
    let mut field = make_field(1600);
    let mut interaction = Interaction::new(&field);
    // force = 2.5 / 5 = 0.5: not above the threshold
    let report = interaction.update(
        &mut field,
        Quat::IDENTITY,
        swipe(Vec3::new(-1.0, 0.0, 1.7), Vec3::new(1.0, 0.0, 1.7), 2.5),
    );
    assert_eq!(report.total_kicks(), 0);
    assert!(report.snaps > 0);
    assert!(field.regimes().iter().all(|r| !r.is_kicking()));
}

#[test]
fn sub_knee_force_kicks_without_displacement() {
    let mut field = make_field(400);
    let mut interaction = Interaction::new(&field);
    let i = 5;
    let cursor = field.original_position(i);
    // force 0.8: above the kick threshold, below the knee
    interaction.update(&mut field, Quat::IDENTITY, swipe(cursor, cursor, 4.0));
    assert!(field.regime(i).is_kicking());
    assert_eq!(field.kick_direction(i), Some(Vec3::ZERO));
}

#[test]
fn kicks_are_capped_per_path_step() {
    let mut field = make_field(1600);
    let mut interaction = Interaction::new(&field);
    // a fast swipe across the front of the sphere
    let report = interaction.update(
        &mut field,
        Quat::IDENTITY,
        swipe(Vec3::new(-1.6, 0.3, 1.1), Vec3::new(1.6, -0.3, 1.1), 120.0),
    );
    for (step, k) in report.kicks_per_step.iter().enumerate() {
        assert!(*k <= MAX_KICKS_PER_STEP, "step {step} issued {k} kicks");
    }
    // the first sample alone has far more than two candidates
    assert_eq!(report.kicks_per_step[0], 2);
    let kicking = field.regimes().iter().filter(|r| r.is_kicking()).count();
    assert_eq!(kicking, report.total_kicks());
    assert!(kicking <= PATH_SAMPLES * MAX_KICKS_PER_STEP as usize);
}

#[test]
fn kicking_points_ignore_the_cursor() {
    let mut field = make_field(400);
    let mut interaction = Interaction::new(&field);
    let i = 77;
    let cursor = field.original_position(i);
    interaction.update(&mut field, Quat::IDENTITY, swipe(cursor, cursor, 40.0));
    assert!(field.regime(i).is_kicking());
    let start = field.kick_start(i).unwrap();
    let delta = field.kick_direction(i).unwrap();

    interaction.update(&mut field, Quat::IDENTITY, Some(CursorPath::stationary(cursor)));
    // follows its own animation rather than snapping back to the boundary
    let expected = start + delta * math::ease_in_out_sine(KICK_STEP);
    assert!((field.spread_offset(i) - expected).length() < 1e-5);
}

#[test]
fn regimes_are_exclusive() {
    let mut field = make_field(800);
    let mut interaction = Interaction::new(&field);
    let a = Vec3::new(-1.5, 0.5, 1.2);
    let b = Vec3::new(1.5, -0.5, 1.2);
    for frame in 0..120 {
        let t = frame as f32 / 120.0;
        let cursor = a.lerp(b, t);
        let prev = a.lerp(b, (frame.max(1) - 1) as f32 / 120.0);
        interaction.update(&mut field, Quat::IDENTITY, swipe(prev, cursor, 30.0));
        for r in field.regimes() {
            let kicking = r.kick_progress() < 1.0;
            let holding = r.return_timer() > 0.0;
            let returning = r.return_timer() == 0.0 && r.kick_progress() == 1.0;
            let count = [kicking, holding, returning].iter().filter(|b| **b).count();
            assert_eq!(count, 1, "ambiguous regime {r:?}");
        }
    }
}
