//! Shared identity and geometry types for the cubespace puzzle engine.
//!
//! # Invariants
//! - Lattice coordinates are exact integers in {-1, 0, 1}; no tolerance
//!   comparisons exist anywhere in the workspace.
//! - Every six-way face enumeration is a fixed-size array indexed by enum
//!   discriminant, so matches stay exhaustive.

pub mod camera;
pub mod moves;
pub mod types;

pub use camera::Camera;
pub use moves::{Move, MoveParseError, parse_sequence};
pub use types::{Axis, Face, FaceColor, FaceDir, FaceParseError, TwistDirection, rotate90};
