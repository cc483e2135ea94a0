use crate::cube::{Cube, CubeError, CubeEvent, slot_index};
use cubespace_common::{Axis, Face, Move, TwistDirection, rotate90};
use glam::IVec3;
use serde::{Deserialize, Serialize};

/// The slice of the cube a face turn rotates: an axis, the lattice coordinate
/// of the layer on that axis, and the orientation sign of the face.
///
/// L, D and B look inward along their axis, so their orientation sign is
/// negative: a clockwise turn of those faces is a negative rotation in world
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub axis: Axis,
    pub coord: i32,
    orientation_sign: i32,
}

impl Layer {
    /// Resolve the layer for a canonical face.
    pub fn for_face(face: Face) -> Layer {
        let (axis, coord, orientation_sign) = match face {
            Face::R => (Axis::X, 1, 1),
            Face::L => (Axis::X, -1, -1),
            Face::U => (Axis::Y, 1, 1),
            Face::D => (Axis::Y, -1, -1),
            Face::F => (Axis::Z, 1, 1),
            Face::B => (Axis::Z, -1, -1),
        };
        Layer {
            axis,
            coord,
            orientation_sign,
        }
    }

    /// Whether a lattice position lies in this layer. Exact integer compare.
    pub fn contains(&self, pos: IVec3) -> bool {
        match self.axis {
            Axis::X => pos.x == self.coord,
            Axis::Y => pos.y == self.coord,
            Axis::Z => pos.z == self.coord,
        }
    }

    /// World-coordinate rotation sense for turning this layer in `direction`.
    pub fn sense(&self, direction: TwistDirection) -> i32 {
        self.orientation_sign * direction.sign()
    }
}

impl Cube {
    /// Commit a face turn: resolve the layer, rotate it, log the move.
    ///
    /// This is the interactive-commit path; scrambles call `rotate_layer`
    /// directly so they do not emit per-step move events.
    pub fn turn(&mut self, mv: Move) -> Result<(), CubeError> {
        let layer = Layer::for_face(mv.face);
        self.rotate_layer(layer, mv.direction)?;
        self.log_event(CubeEvent::Turned { mv });
        tracing::debug!(%mv, "turn committed");
        Ok(())
    }

    /// The turn engine: rotate the nine cubelets of `layer` 90 degrees.
    ///
    /// Pure permutation of the selected cubelets' positions/orientations;
    /// cubelets outside the layer are untouched. Atomic: the rotated
    /// positions are staged and the full 27-position bijection verified
    /// before anything is written.
    pub fn rotate_layer(
        &mut self,
        layer: Layer,
        direction: TwistDirection,
    ) -> Result<(), CubeError> {
        let sense = layer.sense(direction);

        let mut selected = [false; crate::cube::CUBELET_COUNT];
        let mut occupied = [false; crate::cube::CUBELET_COUNT];
        let mut count = 0usize;
        for (i, c) in self.cubelets().iter().enumerate() {
            let staged = if layer.contains(c.pos()) {
                selected[i] = true;
                count += 1;
                rotate90(c.pos(), layer.axis, sense)
            } else {
                c.pos()
            };
            let violation = CubeError::LatticeViolation {
                axis: layer.axis,
                layer: layer.coord,
            };
            let slot = slot_index(staged).ok_or(violation.clone())?;
            if occupied[slot] {
                return Err(violation);
            }
            occupied[slot] = true;
        }
        debug_assert_eq!(count, 9, "a layer must select exactly nine cubelets");

        for (i, c) in self.cubelets_mut().iter_mut().enumerate() {
            if selected[i] {
                c.rotate(layer.axis, sense);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubespace_common::{FaceColor, FaceDir};

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    #[test]
    fn layer_mapping_matches_the_face_table() {
        assert_eq!(Layer::for_face(Face::R).axis, Axis::X);
        assert_eq!(Layer::for_face(Face::R).coord, 1);
        assert_eq!(Layer::for_face(Face::L).coord, -1);
        assert_eq!(Layer::for_face(Face::U).axis, Axis::Y);
        assert_eq!(Layer::for_face(Face::D).coord, -1);
        assert_eq!(Layer::for_face(Face::F).axis, Axis::Z);
        assert_eq!(Layer::for_face(Face::B).coord, -1);
    }

    #[test]
    fn inward_faces_invert_the_rotation_sense() {
        assert_eq!(Layer::for_face(Face::R).sense(TwistDirection::Clockwise), 1);
        assert_eq!(Layer::for_face(Face::L).sense(TwistDirection::Clockwise), -1);
        assert_eq!(
            Layer::for_face(Face::B).sense(TwistDirection::CounterClockwise),
            1
        );
    }

    #[test]
    fn every_turn_selects_nine_and_preserves_bijection() {
        let mut cube = Cube::new();
        for face in Face::ALL {
            let layer = Layer::for_face(face);
            let selected = cube
                .cubelets()
                .iter()
                .filter(|c| layer.contains(c.pos()))
                .count();
            assert_eq!(selected, 9);
            cube.turn(Move::new(face, TwistDirection::Clockwise)).unwrap();
            assert!(cube.check_lattice());
        }
    }

    #[test]
    fn four_turns_of_the_same_face_are_identity() {
        for face in Face::ALL {
            for direction in [TwistDirection::Clockwise, TwistDirection::CounterClockwise] {
                let mut cube = Cube::new();
                let before = cube.cubelets().to_vec();
                for _ in 0..4 {
                    cube.turn(Move::new(face, direction)).unwrap();
                }
                assert_eq!(cube.cubelets(), &before[..], "order-4 closure for {face}");
            }
        }
    }

    #[test]
    fn turn_then_inverse_is_identity() {
        for face in Face::ALL {
            let mut cube = Cube::new();
            let before = cube.cubelets().to_vec();
            cube.turn(Move::new(face, TwistDirection::Clockwise)).unwrap();
            cube.turn(Move::new(face, TwistDirection::CounterClockwise))
                .unwrap();
            assert_eq!(cube.cubelets(), &before[..]);
        }
    }

    #[test]
    fn turn_leaves_other_layers_untouched() {
        let mut cube = Cube::new();
        let layer = Layer::for_face(Face::F);
        let outside_before: Vec<_> = cube
            .cubelets()
            .iter()
            .filter(|c| !layer.contains(c.pos()))
            .copied()
            .collect();
        cube.turn(mv("F")).unwrap();
        let outside_after: Vec<_> = cube
            .cubelets()
            .iter()
            .filter(|c| !layer.contains(c.home()))
            .copied()
            .collect();
        // Slot order is fixed, so the 18 outside cubelets compare positionally.
        assert_eq!(outside_before, outside_after);
    }

    #[test]
    fn opposite_faces_commute_but_adjacent_do_not() {
        let mut ud = Cube::new();
        ud.turn(mv("U")).unwrap();
        ud.turn(mv("D")).unwrap();
        let mut du = Cube::new();
        du.turn(mv("D")).unwrap();
        du.turn(mv("U")).unwrap();
        assert_eq!(ud.cubelets(), du.cubelets());

        let mut ur = Cube::new();
        ur.turn(mv("U")).unwrap();
        ur.turn(mv("R")).unwrap();
        let mut ru = Cube::new();
        ru.turn(mv("R")).unwrap();
        ru.turn(mv("U")).unwrap();
        assert_ne!(ur.cubelets(), ru.cubelets());
    }

    #[test]
    fn clockwise_r_rotates_the_x_layer_exactly() {
        let mut cube = Cube::new();
        cube.turn(mv("R")).unwrap();
        assert!(!cube.is_solved());

        // Every cubelet that started in the x=+1 layer moved to the position a
        // single +90 rotation about x predicts, stickers included.
        for c in cube.cubelets() {
            if c.home().x == 1 {
                assert_eq!(c.pos(), rotate90(c.home(), Axis::X, 1));
                // Red stays outward on the turning face.
                assert_eq!(c.visible(FaceDir::PosX), Some(FaceColor::Red));
            } else {
                assert_eq!(c.pos(), c.home());
            }
        }
    }

    #[test]
    fn turn_appends_one_event() {
        let mut cube = Cube::new();
        cube.turn(mv("U'")).unwrap();
        assert_eq!(cube.events(), &[CubeEvent::Turned { mv: mv("U'") }]);
    }
}
