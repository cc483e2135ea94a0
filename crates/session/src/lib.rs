//! Session persistence: the external collaborator that keeps score.
//!
//! The kernel never touches this crate. The embedding layer feeds it
//! committed-move counts and elapsed seconds; it owns the JSON save file
//! (level, coins, best moves, best time) and the solve-reward arithmetic.
//!
//! # Invariants
//! - The kernel has no dependency edge here; data flows in via plain values.
//! - Elapsed time arrives from the embedder, so reward logic never reads the
//!   wall clock and stays deterministic under test.

pub mod score;
pub mod store;

pub use score::{Reward, format_time, solve_reward};
pub use store::{SaveData, SessionError, SessionStore};
