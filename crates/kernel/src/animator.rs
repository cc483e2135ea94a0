use crate::cube::{Cube, CubeError, CubeEvent};
use crate::turn::Layer;
use cubespace_common::{Axis, Move};

/// A full face turn in angle units.
pub const TURN_DEGREES: f32 = 90.0;

/// Default progress per tick; the frame loop, not wall time, drives animation.
pub const DEFAULT_TICK_DEGREES: f32 = 5.0;

/// Render-only description of the layer currently mid-turn.
///
/// Renderers apply this as a cosmetic rotation overlay on the affected
/// cubelets; the lattice itself moves only at commit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnOverlay {
    pub axis: Axis,
    pub layer: i32,
    /// Signed current angle in degrees, in world-rotation sense.
    pub angle_degrees: f32,
}

/// Rejections from the animator's request guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnimatorError {
    /// A turn is already animating; overlapping requests are not queued.
    #[error("a turn is already animating")]
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Idle,
    Animating {
        mv: Move,
        /// Resolved at request time so nothing re-resolves at commit.
        layer: Layer,
        progress: f32,
    },
}

/// Sequences a requested turn into a visual transition, then commits it.
///
/// `Idle -> Animating(progress=0)` on request; `tick` advances progress by a
/// fixed increment; reaching 90 commits the stored layer through the turn
/// engine exactly once and returns to `Idle`. Interrupting (`cancel`) never
/// touches the cube.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnAnimator {
    state: State,
    tick_degrees: f32,
}

impl TurnAnimator {
    pub fn new() -> Self {
        Self::with_speed(DEFAULT_TICK_DEGREES)
    }

    /// Animator advancing `tick_degrees` of the 90-degree turn per tick.
    pub fn with_speed(tick_degrees: f32) -> Self {
        Self {
            state: State::Idle,
            tick_degrees,
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, State::Animating { .. })
    }

    /// Stage a turn for animation. The layer is resolved here, at request
    /// time. Rejected while another turn is in flight.
    pub fn request(&mut self, mv: Move) -> Result<(), AnimatorError> {
        if self.is_animating() {
            return Err(AnimatorError::Busy);
        }
        self.state = State::Animating {
            mv,
            layer: Layer::for_face(mv.face),
            progress: 0.0,
        };
        tracing::debug!(%mv, "turn animation started");
        Ok(())
    }

    /// Advance one frame. Returns the committed move when the turn finishes.
    pub fn tick(&mut self, cube: &mut Cube) -> Result<Option<Move>, CubeError> {
        let State::Animating { mv, layer, progress } = self.state else {
            return Ok(None);
        };
        let progress = progress + self.tick_degrees;
        if progress < TURN_DEGREES {
            self.state = State::Animating { mv, layer, progress };
            return Ok(None);
        }
        // Commit exactly once with the request-time layer, then go idle.
        cube.rotate_layer(layer, mv.direction)?;
        cube.log_event(CubeEvent::Turned { mv });
        self.state = State::Idle;
        tracing::debug!(%mv, "turn animation committed");
        Ok(Some(mv))
    }

    /// Drop any in-flight turn without committing it.
    pub fn cancel(&mut self) {
        if self.is_animating() {
            tracing::debug!("turn animation cancelled");
        }
        self.state = State::Idle;
    }

    /// Cosmetic rotation for the renderer, while animating.
    pub fn overlay(&self) -> Option<TurnOverlay> {
        let State::Animating { mv, layer, progress } = self.state else {
            return None;
        };
        Some(TurnOverlay {
            axis: layer.axis,
            layer: layer.coord,
            angle_degrees: progress * layer.sense(mv.direction) as f32,
        })
    }
}

impl Default for TurnAnimator {
    fn default() -> Self {
        Self::new()
    }
}
