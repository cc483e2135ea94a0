//! Input mapping: discrete input events mapped to the shared action graph.
//!
//! # Invariants
//! - The play layer consumes `Action`s, never raw device events, so any
//!   frontend (keyboard, buttons, tests) drives the same logic.
//! - One discrete input event maps to at most one action; nothing is queued
//!   here.

pub mod action;

pub use action::{Action, map_key};
