use cubespace_common::Move;
use cubespace_input::Action;
use cubespace_kernel::{
    AnimatorError, Cube, CubeError, Scrambler, TurnAnimator, TurnOverlay,
};

/// What the core reports back to the UI/session layer after a commit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    /// An interactive turn was committed.
    MoveCommitted { mv: Move, count: u32, solved: bool },
    /// The cube was scrambled; the move counter restarted.
    Scrambled { moves: u32, solved: bool },
    /// The cube was reset to solved.
    Reset,
}

/// Errors surfaced to the frontend as rejected commands.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlayError {
    #[error(transparent)]
    Animator(#[from] AnimatorError),
    #[error(transparent)]
    Cube(#[from] CubeError),
}

/// Routes frontend actions into the kernel and raises signals on commits.
///
/// Owns the animator and the scramble source; the cube itself is passed in by
/// the embedding frame loop, which also calls `tick` once per frame.
#[derive(Debug)]
pub struct GameController {
    animator: TurnAnimator,
    scrambler: Scrambler,
    move_count: u32,
}

impl GameController {
    pub fn new(scramble_seed: u64) -> Self {
        Self {
            animator: TurnAnimator::new(),
            scrambler: Scrambler::new(scramble_seed),
            move_count: 0,
        }
    }

    /// Committed interactive turns since the last scramble or reset.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// The animator's cosmetic mid-turn rotation, for the renderer.
    pub fn overlay(&self) -> Option<TurnOverlay> {
        self.animator.overlay()
    }

    /// Handle one discrete action. Invalid commands are rejected synchronously
    /// with no partial mutation; commit signals for turns arrive later from
    /// `tick`.
    pub fn handle(&mut self, cube: &mut Cube, action: Action) -> Result<Option<Signal>, PlayError> {
        match action {
            Action::Turn(mv) => {
                self.animator.request(mv)?;
                Ok(None)
            }
            Action::Scramble { moves } => {
                self.animator.cancel();
                self.scrambler.scramble(cube, moves)?;
                self.move_count = 0;
                Ok(Some(Signal::Scrambled {
                    moves,
                    solved: cube.is_solved(),
                }))
            }
            // The solve button resets instead of solving; there is no solver.
            Action::Reset | Action::Solve => {
                self.animator.cancel();
                cube.reset();
                self.move_count = 0;
                Ok(Some(Signal::Reset))
            }
            Action::DragCamera { dx, dy } => {
                cube.drag_camera(dx, dy);
                Ok(None)
            }
            Action::Noop => Ok(None),
        }
    }

    /// Advance the frame loop by one tick; raises the commit signal when an
    /// animated turn lands.
    pub fn tick(&mut self, cube: &mut Cube) -> Result<Option<Signal>, PlayError> {
        let Some(mv) = self.animator.tick(cube)? else {
            return Ok(None);
        };
        self.move_count += 1;
        let solved = cube.is_solved();
        tracing::info!(%mv, count = self.move_count, solved, "move committed");
        Ok(Some(Signal::MoveCommitted {
            mv,
            count: self.move_count,
            solved,
        }))
    }
}
