//! Cube kernel: authoritative cube state, exact layer-turn engine, and the
//! turn-animation state machine.
//!
//! # Invariants
//! - The 27 cubelet lattice positions form a permutation of {-1,0,1}^3 before
//!   and after every committed turn.
//! - All lattice mutations flow through the turn engine; the camera is the
//!   only other mutable field and is a pure view transform.
//! - Committed turns are atomic: on an internal violation nothing is written.

pub mod animator;
pub mod cube;
pub mod cubelet;
pub mod scramble;
pub mod turn;

pub use animator::{AnimatorError, TurnAnimator, TurnOverlay};
pub use cube::{Cube, CubeError, CubeEvent};
pub use cubelet::Cubelet;
pub use scramble::{DEFAULT_SCRAMBLE_MOVES, Scrambler};
pub use turn::Layer;
