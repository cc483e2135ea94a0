use crate::cube::{Cube, CubeError, CubeEvent};
use crate::turn::Layer;
use cubespace_common::{Face, Move, TwistDirection};

/// Default interactive scramble length.
pub const DEFAULT_SCRAMBLE_MOVES: u32 = 25;

/// Deterministic scramble source.
///
/// Each pick is an independent uniform (face, direction) pair from a seeded
/// splitmix64 stream; the same seed always yields the same sequence. Moves
/// are applied instantly through the turn engine, bypassing the animator, so
/// scrambling needs no real-time animation.
#[derive(Debug, Clone)]
pub struct Scrambler {
    state: u64,
}

impl Scrambler {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Draw the next uniform (face, direction) pick.
    pub fn next_move(&mut self) -> Move {
        let r = self.next_u64();
        let face = Face::ALL[(r % 6) as usize];
        let direction = if (r >> 32) & 1 == 0 {
            TwistDirection::Clockwise
        } else {
            TwistDirection::CounterClockwise
        };
        Move::new(face, direction)
    }

    /// Apply `count` instant random turns and return the applied sequence.
    ///
    /// Logs a single `Scrambled` event rather than one per step, so move
    /// counters never tick during a scramble. The returned sequence is exact:
    /// replaying its inverse in reverse order restores the prior state.
    pub fn scramble(&mut self, cube: &mut Cube, count: u32) -> Result<Vec<Move>, CubeError> {
        let mut applied = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let mv = self.next_move();
            cube.rotate_layer(Layer::for_face(mv.face), mv.direction)?;
            applied.push(mv);
        }
        cube.log_event(CubeEvent::Scrambled { moves: count });
        tracing::info!(moves = count, "cube scrambled");
        Ok(applied)
    }

    fn next_u64(&mut self) -> u64 {
        // splitmix64: deterministic across platforms.
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}
