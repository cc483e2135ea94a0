use crate::cubelet::Cubelet;
use cubespace_common::{Axis, Camera, FaceDir, Move};
use glam::IVec3;
use serde::{Deserialize, Serialize};

/// Number of cubelets in a 3x3x3 cube.
pub const CUBELET_COUNT: usize = 27;

/// An event record produced by every committed mutation to the cube.
///
/// Scrambles log a single event, not one per step, so consumers counting
/// interactive moves see exactly one `Turned` per committed discrete turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CubeEvent {
    /// A single face turn was committed.
    Turned { mv: Move },
    /// The cube was scrambled with this many instant turns.
    Scrambled { moves: u32 },
    /// The cube was restored to the canonical solved state.
    Reset,
}

/// Internal-consistency errors. These indicate a kernel bug, never expected
/// input; callers should treat them as fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CubeError {
    #[error("lattice bijection violated rotating {axis:?} layer {layer}")]
    LatticeViolation { axis: Axis, layer: i32 },
}

/// The authoritative cube state.
///
/// Owns the 27 cubelets and the view camera. All lattice mutations go through
/// the turn engine (`turn` / `rotate_layer` in `turn.rs`); the camera moves
/// only via `drag_camera`. Renderers and UI derive from this, never write it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    cubelets: [Cubelet; CUBELET_COUNT],
    camera: Camera,
    /// Append-only log of committed mutations.
    #[serde(skip)]
    event_log: Vec<CubeEvent>,
}

impl Cube {
    /// A solved cube with canonical coloring and the default camera.
    pub fn new() -> Self {
        Self {
            cubelets: canonical_cubelets(),
            camera: Camera::default(),
            event_log: Vec::new(),
        }
    }

    /// Read-only access to all cubelets, in fixed slot order.
    pub fn cubelets(&self) -> &[Cubelet] {
        &self.cubelets
    }

    pub(crate) fn cubelets_mut(&mut self) -> &mut [Cubelet; CUBELET_COUNT] {
        &mut self.cubelets
    }

    /// Current view orientation.
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Apply a camera drag. Touches only the view transform, never the lattice.
    pub fn drag_camera(&mut self, dx: f32, dy: f32) {
        self.camera.drag(dx, dy);
    }

    /// Restore the canonical solved lattice and coloring. The camera keeps its
    /// orientation; any in-flight animation is the animator's to cancel.
    pub fn reset(&mut self) {
        self.cubelets = canonical_cubelets();
        self.event_log.push(CubeEvent::Reset);
        tracing::info!("cube reset to solved state");
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[CubeEvent] {
        &self.event_log
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<CubeEvent> {
        std::mem::take(&mut self.event_log)
    }

    pub(crate) fn log_event(&mut self, event: CubeEvent) {
        self.event_log.push(event);
    }

    /// Whether the cube is solved: for each of the six world directions, all
    /// nine cubelets of that face show the direction's canonical color on
    /// their outward side.
    pub fn is_solved(&self) -> bool {
        FaceDir::ALL.into_iter().all(|dir| {
            self.cubelets
                .iter()
                .filter(|c| c.pos().dot(dir.unit()) == 1)
                .all(|c| c.visible(dir) == Some(dir.canonical_color()))
        })
    }

    /// Verify the lattice-bijection invariant: every position is in
    /// {-1,0,1}^3 and all 27 are distinct.
    pub fn check_lattice(&self) -> bool {
        let mut seen = [false; CUBELET_COUNT];
        for c in &self.cubelets {
            let Some(slot) = slot_index(c.pos()) else {
                return false;
            };
            if seen[slot] {
                return false;
            }
            seen[slot] = true;
        }
        true
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

/// The 27 cubelets in canonical slot order (x-major over {-1,0,1}^3).
fn canonical_cubelets() -> [Cubelet; CUBELET_COUNT] {
    std::array::from_fn(|i| {
        let i = i as i32;
        Cubelet::new(IVec3::new(i / 9 - 1, (i / 3) % 3 - 1, i % 3 - 1))
    })
}

/// Dense slot index for a lattice position, or `None` if out of range.
pub(crate) fn slot_index(pos: IVec3) -> Option<usize> {
    let in_range = |v: i32| (-1..=1).contains(&v);
    if in_range(pos.x) && in_range(pos.y) && in_range(pos.z) {
        Some(((pos.x + 1) * 9 + (pos.y + 1) * 3 + (pos.z + 1)) as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubespace_common::FaceColor;

    #[test]
    fn new_cube_is_canonical() {
        let cube = Cube::new();
        assert_eq!(cube.cubelets().len(), CUBELET_COUNT);
        assert!(cube.check_lattice());
        assert!(cube.is_solved());
        for c in cube.cubelets() {
            assert_eq!(c.pos(), c.home());
        }
    }

    #[test]
    fn sticker_census_matches_a_real_cube() {
        let cube = Cube::new();
        let total: usize = cube.cubelets().iter().map(|c| c.sticker_count()).sum();
        assert_eq!(total, 54);
        let corners = cube
            .cubelets()
            .iter()
            .filter(|c| c.sticker_count() == 3)
            .count();
        assert_eq!(corners, 8);
    }

    #[test]
    fn each_face_starts_uniform() {
        let cube = Cube::new();
        for dir in FaceDir::ALL {
            let colors: Vec<Option<FaceColor>> = cube
                .cubelets()
                .iter()
                .filter(|c| c.pos().dot(dir.unit()) == 1)
                .map(|c| c.visible(dir))
                .collect();
            assert_eq!(colors.len(), 9);
            assert!(colors.iter().all(|c| *c == Some(dir.canonical_color())));
        }
    }

    #[test]
    fn reset_logs_an_event() {
        let mut cube = Cube::new();
        cube.reset();
        assert_eq!(cube.events(), &[CubeEvent::Reset]);
        assert!(cube.is_solved());
    }

    #[test]
    fn drain_events_clears_log() {
        let mut cube = Cube::new();
        cube.reset();
        assert_eq!(cube.drain_events().len(), 1);
        assert!(cube.events().is_empty());
    }

    #[test]
    fn camera_drag_leaves_lattice_untouched() {
        let mut cube = Cube::new();
        let before = cube.clone();
        cube.drag_camera(500.0, -300.0);
        assert_ne!(cube.camera(), before.camera());
        assert_eq!(cube.cubelets(), before.cubelets());
        assert!(cube.events().is_empty());
    }

    #[test]
    fn slot_index_covers_the_lattice_exactly() {
        let mut seen = [false; CUBELET_COUNT];
        for x in -1..=1 {
            for y in -1..=1 {
                for z in -1..=1 {
                    let idx = slot_index(IVec3::new(x, y, z)).unwrap();
                    assert!(!seen[idx]);
                    seen[idx] = true;
                }
            }
        }
        assert!(seen.iter().all(|s| *s));
        assert_eq!(slot_index(IVec3::new(2, 0, 0)), None);
    }
}
