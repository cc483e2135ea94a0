use cubespace_common::{Axis, FaceColor, FaceDir, rotate90};
use glam::IVec3;
use serde::{Deserialize, Serialize};

/// One of the 27 unit sub-cubes of the puzzle.
///
/// Identity is the fixed home slot; only the lattice position and orientation
/// change when a layer turns. Sticker colors live in the cubelet-local frame
/// and are never reassigned after initial coloring — the color seen from a
/// world direction is whichever local side currently points that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cubelet {
    /// Canonical slot coordinate in {-1,0,1}^3. Never changes.
    home: IVec3,
    /// Current lattice position. Mutated only by the turn engine.
    pos: IVec3,
    /// Sticker colors indexed by local face direction; `None` on interior sides.
    stickers: [Option<FaceColor>; 6],
    /// For each world direction, the local face currently pointing there.
    orientation: [FaceDir; 6],
}

impl Cubelet {
    /// A cubelet in its home slot, colored canonically: every side that looks
    /// out of the cube gets that world direction's color.
    pub fn new(home: IVec3) -> Self {
        let mut stickers = [None; 6];
        for dir in FaceDir::ALL {
            if home.dot(dir.unit()) == 1 {
                stickers[dir.index()] = Some(dir.canonical_color());
            }
        }
        Self {
            home,
            pos: home,
            stickers,
            orientation: FaceDir::ALL,
        }
    }

    /// Fixed home slot coordinate.
    pub fn home(&self) -> IVec3 {
        self.home
    }

    /// Current lattice position.
    pub fn pos(&self) -> IVec3 {
        self.pos
    }

    /// Sticker color currently visible from the given world direction, if any.
    pub fn visible(&self, world: FaceDir) -> Option<FaceColor> {
        self.stickers[self.orientation[world.index()].index()]
    }

    /// Number of stickers this cubelet carries (0 for the core, 1..=3 otherwise).
    pub fn sticker_count(&self) -> usize {
        self.stickers.iter().flatten().count()
    }

    /// Rotate position and orientation 90 degrees about `axis`.
    ///
    /// Integer-exact. A local side that pointed toward world direction `d`
    /// points toward the rotated `d` afterwards.
    pub(crate) fn rotate(&mut self, axis: Axis, sense: i32) {
        self.pos = rotate90(self.pos, axis, sense);
        let mut rotated = self.orientation;
        for world in FaceDir::ALL {
            rotated[world.rotated(axis, sense).index()] = self.orientation[world.index()];
        }
        self.orientation = rotated;
    }
}
