// Host-side tests for the lattice and the particle field.

use dots_core::*;
use glam::Vec3;

#[test]
fn lattice_points_lie_on_the_sphere() {
    for &count in &[2usize, 3, 17, 800, 1600] {
        for &radius in &[0.5f32, 1.0, 2.0, 7.5] {
            for i in 0..count {
                let p = fibonacci_point(i, count, radius);
                assert!(
                    (p.length() - radius).abs() < 1e-4 * radius.max(1.0),
                    "count={count} radius={radius} i={i} len={}",
                    p.length()
                );
            }
        }
    }
}

#[test]
fn lattice_spans_pole_to_pole() {
    let count = 101;
    let first = fibonacci_point(0, count, 2.0);
    let last = fibonacci_point(count - 1, count, 2.0);
    assert!((first - Vec3::new(0.0, 2.0, 0.0)).length() < 1e-5);
    assert!((last - Vec3::new(0.0, -2.0, 0.0)).length() < 1e-5);
    // y decreases monotonically with index
    let mut prev_y = f32::MAX;
    for i in 0..count {
        let y = fibonacci_point(i, count, 2.0).y;
        assert!(y < prev_y);
        prev_y = y;
    }
}

#[test]
fn lattice_has_no_duplicate_points() {
    let count = 400;
    let pts: Vec<Vec3> = (0..count).map(|i| fibonacci_point(i, count, 1.0)).collect();
    for i in 0..count {
        for j in (i + 1)..count {
            assert!(pts[i].distance(pts[j]) > 1e-3, "points {i} and {j} coincide");
        }
    }
}

#[test]
fn single_point_field_sits_at_north_pole() {
    let field = ParticleField::new(SphereConfig {
        dot_count: 1,
        radius: 1.0,
    })
    .unwrap();
    assert_eq!(field.count(), 1);
    let p = field.original_position(0);
    // i = 0: y = 1, theta = 0, so (cos(0) * 0, 1, sin(0) * 0)
    assert!((p - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-6);
}

#[test]
fn field_starts_at_rest() {
    let field = ParticleField::new(SphereConfig::compact()).unwrap();
    assert_eq!(field.count(), COMPACT_DOT_COUNT);
    assert_eq!(field.spread_offsets().len(), field.count());
    assert_eq!(field.regimes().len(), field.count());
    for i in 0..field.count() {
        assert_eq!(field.spread_offset(i), Vec3::ZERO);
        assert_eq!(field.regime(i), Regime::AtRest);
        assert_eq!(field.kick_progress(i), 1.0);
        assert_eq!(field.return_timer(i), 0.0);
        assert!(field.kick_start(i).is_none());
        assert!(field.kick_direction(i).is_none());
        assert_eq!(field.displaced_position(i), field.original_position(i));
    }
}

#[test]
fn default_config_matches_documented_defaults() {
    let cfg = SphereConfig::default();
    assert_eq!(cfg.dot_count, 1600);
    assert_eq!(cfg.radius, 2.0);
    assert_eq!(SphereConfig::compact().dot_count, 800);
    assert_eq!(SphereConfig::compact().radius, 2.0);
}

#[test]
fn invalid_configs_are_rejected() {
    let zero = SphereConfig {
        dot_count: 0,
        radius: 2.0,
    };
    assert_eq!(zero.validate(), Err(ConfigError::InvalidDotCount(0)));
    assert!(ParticleField::new(zero).is_err());

    for radius in [0.0f32, -1.0, f32::NAN, f32::INFINITY] {
        let cfg = SphereConfig {
            dot_count: 10,
            radius,
        };
        assert!(
            matches!(cfg.validate(), Err(ConfigError::InvalidRadius(_))),
            "radius {radius} accepted"
        );
    }
}

#[test]
fn geometry_matches_field_layout() {
    let field = ParticleField::new(SphereConfig {
        dot_count: 64,
        radius: 2.0,
    })
    .unwrap();
    let mut buffers = field.geometry();
    assert_eq!(buffers.len(), 64);
    assert_eq!(buffers.positions().len(), 64 * 3);
    assert_eq!(buffers.colors().len(), 64 * 3);
    for i in 0..64 {
        assert_eq!(buffers.position(i), field.original_position(i));
        assert_eq!(buffers.color(i), DOT_BLUE);
    }
    assert!(buffers.take_dirty());
    assert!(!buffers.is_dirty());
}
