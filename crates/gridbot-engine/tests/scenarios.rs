//! Integration tests: scripted imperfect-motion scenarios.
//!
//! Every scenario pins the random source so the outcome of each
//! `move_forward()` is fully determined by the draw and the map.

use gridbot_core::{Cell, Direction, ErrorKind, RobotSim};
use gridbot_engine::{ConfigError, MoveOutcome, Sim, SimConfig};
use gridbot_test_utils::{border_ring, row, ConstantSource, ScriptedSource};

/// 5×5 map, robot at the centre facing north, default probabilities.
fn centre_config() -> SimConfig {
    SimConfig::new()
        .map_size(5, 5)
        .unwrap()
        .robot_position(2, 2)
        .unwrap()
        .robot_direction(Direction::North)
}

// ── Single move then hazard ──────────────────────────────────────────

#[test]
fn single_move_then_blocked_by_hazard() {
    let mut sim = centre_config()
        .hazards([(2, 0)])
        .random_source(ConstantSource::new(0.5))
        .build()
        .unwrap();

    assert!(sim.move_forward());
    assert_eq!((sim.x(), sim.y()), (2, 1));

    assert!(!sim.move_forward());
    assert_eq!((sim.x(), sim.y()), (2, 1));
    assert_eq!(sim.direction(), Direction::North);
}

// ── Stall ────────────────────────────────────────────────────────────

#[test]
fn low_draw_stalls_but_reports_success() {
    let mut sim = centre_config()
        .no_move_probability(0.1)
        .unwrap()
        .random_source(ConstantSource::new(0.05))
        .build()
        .unwrap();

    assert!(sim.move_forward());
    assert_eq!(sim.position(), (2, 2));
}

// ── Overshoot ────────────────────────────────────────────────────────

#[test]
fn high_draw_advances_two_cells() {
    let mut sim = centre_config()
        .double_move_probability(0.1)
        .unwrap()
        .random_source(ConstantSource::new(0.95))
        .build()
        .unwrap();

    assert!((sim.double_move_boundary() - 0.9).abs() < 1e-12);
    assert!(sim.move_forward());
    assert_eq!(sim.position(), (2, 0));
}

#[test]
fn high_draw_with_hazard_two_ahead_advances_one_cell() {
    let mut sim = centre_config()
        .double_move_probability(0.1)
        .unwrap()
        .hazards([(2, 0)])
        .random_source(ConstantSource::new(0.95))
        .build()
        .unwrap();

    assert_eq!(sim.step_forward(), MoveOutcome::DoubleFallback);
    assert_eq!(sim.position(), (2, 1));
}

// ── Mixed script ─────────────────────────────────────────────────────

#[test]
fn scripted_walk_across_open_row() {
    // stall, single, double along a 5×1 corridor.
    let src = ScriptedSource::new([0.01, 0.5, 0.99]);
    let draws = src.counter();
    let mut sim = SimConfig::new()
        .map_size(5, 1)
        .unwrap()
        .robot_position(0, 0)
        .unwrap()
        .robot_direction(Direction::East)
        .random_source(src)
        .build()
        .unwrap();

    let outcomes: Vec<MoveOutcome> = (0..3).map(|_| sim.step_forward()).collect();
    assert_eq!(
        outcomes,
        vec![MoveOutcome::Stalled, MoveOutcome::Single, MoveOutcome::Double]
    );
    assert_eq!(sim.position(), (3, 0));

    // Script wraps: stall, single, then the wall blocks before any draw.
    assert_eq!(sim.step_forward(), MoveOutcome::Stalled);
    assert_eq!(sim.step_forward(), MoveOutcome::Single);
    assert_eq!(sim.step_forward(), MoveOutcome::Blocked);
    assert_eq!(sim.position(), (4, 0));
    // The blocked attempt above did not draw, so the overshoot is still next.
    assert_eq!(draws.get(), 5);
    sim.turn_clockwise();
    sim.turn_clockwise();
    assert_eq!(sim.step_forward(), MoveOutcome::Double);
    assert_eq!(sim.position(), (2, 0));
}

#[test]
fn walled_room_robot_never_leaves_interior() {
    let mut sim = SimConfig::new()
        .map_size(7, 7)
        .unwrap()
        .robot_position(3, 3)
        .unwrap()
        .robot_direction(Direction::West)
        .hazards(border_ring(7, 7))
        .no_move_probability(0.2)
        .unwrap()
        .double_move_probability(0.4)
        .unwrap()
        .seed(2024)
        .build()
        .unwrap();

    for i in 0..500 {
        if i % 4 == 0 {
            sim.turn_clockwise();
        }
        let ahead_blocked = sim.detect_hazard();
        let moved = sim.move_forward();
        assert_eq!(moved, !ahead_blocked);
        let (x, y) = sim.position();
        assert!((1..6).contains(&x) && (1..6).contains(&y), "escaped to ({x}, {y})");
        assert_ne!(sim.grid().get(x, y).unwrap(), Cell::Hazard);
    }
}

// ── Sensors ──────────────────────────────────────────────────────────

#[test]
fn blob_scan_reports_each_listed_blob() {
    let sim = centre_config()
        .blobs([(2, 1), (3, 2), (2, 3), (1, 2)])
        .seed(0)
        .build()
        .unwrap();
    assert_eq!(sim.detect_blobs(), [true; 4]);
}

#[test]
fn blob_scan_ignores_facing() {
    let mut sim = centre_config()
        .blobs(row(2, [3]))
        .seed(0)
        .build()
        .unwrap();
    for _ in 0..4 {
        assert_eq!(sim.detect_blobs(), [false, true, false, false]);
        sim.turn_clockwise();
    }
}

#[test]
fn blobs_are_passable_and_not_consumed() {
    let mut sim = centre_config()
        .blobs([(2, 1)])
        .random_source(ConstantSource::new(0.5))
        .build()
        .unwrap();
    assert!(!sim.detect_hazard());
    assert!(sim.move_forward());
    assert_eq!(sim.position(), (2, 1));
    assert_eq!(sim.grid().get(2, 1).unwrap(), Cell::ColorBlob);
}

// ── Construction failures ────────────────────────────────────────────

#[test]
fn hazard_on_start_fails_before_sim_exists() {
    let result: Result<Sim, ConfigError> = centre_config().hazards([(2, 2)]).build();
    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn missing_direction_fails_with_illegal_state() {
    let err = SimConfig::new()
        .map_size(5, 5)
        .unwrap()
        .robot_position(2, 2)
        .unwrap()
        .build()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalState);
}
