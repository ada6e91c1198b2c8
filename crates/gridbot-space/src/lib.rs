//! Spatial storage for Gridbot simulations.
//!
//! Defines [`Grid`], a dense rectangular store of [`Cell`](gridbot_core::Cell)
//! values with explicit bounds checking. Out-of-range access is reported
//! as [`GridError::OutOfBounds`], never clamped or wrapped.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

pub use error::GridError;
pub use grid::Grid;
