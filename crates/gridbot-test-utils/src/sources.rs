//! Scripted random sources.
//!
//! - [`ScriptedSource`] replays a fixed list of draws, cycling at the end.
//! - [`ConstantSource`] returns the same draw forever.
//!
//! Both can hand out a [`DrawCounter`] that keeps observing how many draws
//! were taken after the source has been moved into a simulation.

use gridbot_core::RandomSource;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared view of how many values a source has produced.
#[derive(Clone, Debug, Default)]
pub struct DrawCounter(Arc<AtomicUsize>);

impl DrawCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Replays `values` in order, wrapping around after the last one.
#[derive(Debug)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
    counter: DrawCounter,
}

impl ScriptedSource {
    /// # Panics
    ///
    /// Panics if `values` is empty or any value lies outside `[0, 1)`.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let values: Vec<f64> = values.into_iter().collect();
        assert!(!values.is_empty(), "scripted source needs at least one value");
        assert!(
            values.iter().all(|v| (0.0..1.0).contains(v)),
            "scripted values must lie in [0, 1): {values:?}"
        );
        Self {
            values,
            cursor: 0,
            counter: DrawCounter::default(),
        }
    }

    /// Handle that keeps counting draws after `self` is moved away.
    pub fn counter(&self) -> DrawCounter {
        self.counter.clone()
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let v = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        self.counter.bump();
        v
    }
}

/// Always yields the same draw.
#[derive(Debug)]
pub struct ConstantSource {
    value: f64,
    counter: DrawCounter,
}

impl ConstantSource {
    /// # Panics
    ///
    /// Panics if `value` lies outside `[0, 1)`.
    pub fn new(value: f64) -> Self {
        assert!((0.0..1.0).contains(&value), "constant draw {value} not in [0, 1)");
        Self {
            value,
            counter: DrawCounter::default(),
        }
    }

    /// Handle that keeps counting draws after `self` is moved away.
    pub fn counter(&self) -> DrawCounter {
        self.counter.clone()
    }
}

impl RandomSource for ConstantSource {
    fn next_unit(&mut self) -> f64 {
        self.counter.bump();
        self.value
    }
}
