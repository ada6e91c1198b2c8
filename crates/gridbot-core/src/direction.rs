//! Cardinal facing and its rotation algebra.

use std::fmt;

/// Cardinal direction the robot faces.
///
/// Screen convention: `x` grows east, `y` grows south, so north is
/// `(0, -1)`. The same displacement is used for moving and for
/// neighbour scans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Facing `y - 1`.
    North = 0,
    /// Facing `x + 1`.
    East = 1,
    /// Facing `y + 1`.
    South = 2,
    /// Facing `x - 1`.
    West = 3,
}

impl Direction {
    /// All four directions in clockwise order starting at north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Returns the `(dx, dy)` unit step for this direction.
    pub fn displacement(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Next direction in the cycle N → E → S → W → N.
    pub fn clockwise(self) -> Direction {
        Self::ALL[(self as usize + 1) % 4]
    }

    /// Inverse of [`clockwise`](Direction::clockwise).
    pub fn counter_clockwise(self) -> Direction {
        Self::ALL[(self as usize + 3) % 4]
    }

    /// Apply the unit step to `(x, y)`.
    pub fn step_from(self, x: i32, y: i32) -> (i32, i32) {
        let (dx, dy) = self.displacement();
        (x + dx, y + dy)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "N",
            Direction::East => "E",
            Direction::South => "S",
            Direction::West => "W",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn clockwise_cycle_order() {
        assert_eq!(Direction::North.clockwise(), Direction::East);
        assert_eq!(Direction::East.clockwise(), Direction::South);
        assert_eq!(Direction::South.clockwise(), Direction::West);
        assert_eq!(Direction::West.clockwise(), Direction::North);
    }

    #[test]
    fn displacements_are_unit_and_distinct() {
        let mut seen = Vec::new();
        for d in Direction::ALL {
            let (dx, dy) = d.displacement();
            assert_eq!(dx.abs() + dy.abs(), 1, "{d} is not a unit step");
            assert!(!seen.contains(&(dx, dy)));
            seen.push((dx, dy));
        }
    }

    #[test]
    fn opposite_directions_cancel() {
        for d in Direction::ALL {
            let (ax, ay) = d.displacement();
            let (bx, by) = d.clockwise().clockwise().displacement();
            assert_eq!((ax + bx, ay + by), (0, 0));
        }
    }

    #[test]
    fn step_from_applies_displacement() {
        assert_eq!(Direction::North.step_from(2, 2), (2, 1));
        assert_eq!(Direction::West.step_from(0, 0), (-1, 0));
    }

    #[test]
    fn display_single_letter() {
        let s: Vec<String> = Direction::ALL.iter().map(|d| d.to_string()).collect();
        assert_eq!(s, ["N", "E", "S", "W"]);
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::North),
            Just(Direction::East),
            Just(Direction::South),
            Just(Direction::West),
        ]
    }

    proptest! {
        #[test]
        fn four_turns_is_identity(d in arb_direction()) {
            let back = d.clockwise().clockwise().clockwise().clockwise();
            prop_assert_eq!(back, d);
        }

        #[test]
        fn counter_clockwise_inverts(d in arb_direction(), turns in 0usize..16) {
            let mut cur = d;
            for _ in 0..turns {
                cur = cur.clockwise();
            }
            for _ in 0..turns {
                cur = cur.counter_clockwise();
            }
            prop_assert_eq!(cur, d);
        }
    }
}
