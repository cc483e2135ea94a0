//! Play layer: the game controller between frontend actions and the kernel.
//!
//! # Invariants
//! - Face turns go through the animator; scramble and reset drive the turn
//!   engine directly. Both paths commit through the same engine.
//! - The move counter ticks once per committed interactive turn, never during
//!   scrambles.
//! - Every committed mutation yields a signal carrying the solved flag.

pub mod controller;

pub use controller::{GameController, PlayError, Signal};
