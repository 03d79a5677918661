//! Vector Core Library
//!
//! A 3D vector type with axis rotations, magnitude and argument accessors,
//! point-to-segment distance, and 2D segment intersection testing.

// =============================================================================
// Core modules
// =============================================================================

pub mod math_utils;
pub mod segment;
pub mod status;
pub mod vector;

// =============================================================================
// Core re-exports
// =============================================================================

pub use segment::{intersect, orientation, Orientation};
pub use status::{Status, VectorError, VectorResult};
pub use vector::Vector;
