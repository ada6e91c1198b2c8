//! The injectable randomness capability.

/// A source of uniform draws on the unit interval.
///
/// The engine owns exactly one of these and consults it only when a
/// forward move is legal. Tests substitute scripted sequences; production
/// code wraps a seeded PRNG.
pub trait RandomSource: Send {
    /// Draw the next value, uniform in `[0.0, 1.0)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}
