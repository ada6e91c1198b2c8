//! Test utilities for Gridbot development.
//!
//! Provides deterministic [`RandomSource`](gridbot_core::RandomSource)
//! implementations so imperfect-motion scenarios can be replayed exactly,
//! plus coordinate fixtures for common map layouts.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod sources;

pub use fixtures::{border_ring, row};
pub use sources::{ConstantSource, DrawCounter, ScriptedSource};
