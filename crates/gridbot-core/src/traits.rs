//! The behavioral contract a robot simulation exposes to its driver.

/// Operations a controller may invoke on a single-robot simulation.
///
/// Two transitions ([`move_forward`](RobotSim::move_forward),
/// [`turn_clockwise`](RobotSim::turn_clockwise)) and four pure queries.
/// None of them fail: boundary conditions are folded into the boolean
/// results.
pub trait RobotSim {
    /// Current column.
    fn x(&self) -> i32;

    /// Current row.
    fn y(&self) -> i32;

    /// Attempt one forward move, subject to imperfect motion.
    ///
    /// Returns `false` without changing state when the cell ahead is a
    /// hazard or off the map. Otherwise returns `true`, even if the robot
    /// ended up not moving.
    fn move_forward(&mut self) -> bool;

    /// Rotate 90 degrees clockwise.
    fn turn_clockwise(&mut self);

    /// Whether the cell directly ahead is a hazard or off the map.
    fn detect_hazard(&self) -> bool;

    /// Blob presence on the four neighbours, in N, E, S, W order
    /// regardless of facing. Off-map neighbours read `false`.
    fn detect_blobs(&self) -> [bool; 4];
}
