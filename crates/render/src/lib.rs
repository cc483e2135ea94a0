//! Rendering adapter: renderer-agnostic interface over cube state.
//!
//! # Invariants
//! - Renderers cannot mutate cube truth; they read cubelets + camera and
//!   produce output.
//! - The lattice stays in small exact integers; all float math lives on this
//!   side of the boundary.
//!
//! Ships two implementations: a quad projector producing depth-sorted
//! drawable primitives for any raster/vector backend, and a text net renderer
//! for CLI output and tests.

mod net;
mod renderer;

pub use net::{TextNetRenderer, face_grid};
pub use renderer::{FaceQuad, QuadRenderer, RenderView, Renderer};
