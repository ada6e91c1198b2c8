//! Random walk: drive a robot around a walled room.
//!
//! Demonstrates:
//!   1. Building a Sim through SimConfig
//!   2. Seeding imperfect motion for a reproducible run
//!   3. Steering with detect_hazard() and reading detect_blobs()
//!
//! Run with:
//!   RUST_LOG=gridbot_engine=trace cargo run --example random_walk

use gridbot_core::{Cell, Direction, RobotSim};
use gridbot_engine::{ConfigError, MoveOutcome, SimConfig};
use gridbot_test_utils::border_ring;
use tracing::info;

const WIDTH: i32 = 12;
const HEIGHT: i32 = 8;
const STEPS: usize = 60;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn walls() -> Vec<(i32, i32)> {
    let mut out = border_ring(WIDTH, HEIGHT);
    // An internal partition with a gap.
    out.extend((1..HEIGHT - 3).map(|y| (6, y)));
    out
}

fn render(sim: &gridbot_engine::Sim) -> String {
    let mut s = String::new();
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let ch = if sim.position() == (x, y) {
                match sim.direction() {
                    Direction::North => '^',
                    Direction::East => '>',
                    Direction::South => 'v',
                    Direction::West => '<',
                }
            } else {
                match sim.grid().get(x, y) {
                    Ok(Cell::Hazard) => '#',
                    Ok(Cell::ColorBlob) => '*',
                    _ => '.',
                }
            };
            s.push(ch);
        }
        s.push('\n');
    }
    s
}

fn main() -> Result<(), ConfigError> {
    init_tracing();

    let mut sim = SimConfig::new()
        .map_size(WIDTH, HEIGHT)?
        .robot_position(2, 2)?
        .robot_direction(Direction::East)
        .hazards(walls())
        .blobs([(4, 4), (9, 2), (8, 5)])
        .no_move_probability(0.15)?
        .double_move_probability(0.2)?
        .seed(0x5EED)
        .build()?;

    let mut travelled = 0;
    for step in 0..STEPS {
        if sim.detect_hazard() {
            sim.turn_clockwise();
            continue;
        }
        let outcome = sim.step_forward();
        travelled += outcome.distance();
        if outcome == MoveOutcome::Stalled && step % 2 == 0 {
            sim.turn_clockwise();
        }
        let blobs = sim.detect_blobs();
        if blobs.iter().any(|&b| b) {
            info!(step, x = sim.x(), y = sim.y(), ?blobs, "blob nearby");
        }
    }

    println!("{}", render(&sim));
    println!(
        "after {STEPS} steps: at ({}, {}) facing {}, travelled {travelled} cells",
        sim.x(),
        sim.y(),
        sim.direction()
    );
    Ok(())
}
