use cubespace_common::{Face, Move, TwistDirection};

/// A high-level command any frontend can emit into the play layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Request an animated face turn.
    Turn(Move),
    /// Scramble with this many instant random turns.
    Scramble { moves: u32 },
    /// Restore the solved state.
    Reset,
    /// The "solve" button: reset semantics, no solver is implemented.
    Solve,
    /// Rotate the view camera by a drag delta.
    DragCamera { dx: f32, dy: f32 },
    /// Unbound input.
    Noop,
}

/// Map a key press to an action.
///
/// Face letters turn clockwise, shifted letters counter-clockwise (the `'`
/// prime of standard notation); space scrambles, enter resets.
pub fn map_key(key: char, shift: bool) -> Action {
    let direction = if shift {
        TwistDirection::CounterClockwise
    } else {
        TwistDirection::Clockwise
    };
    match key.to_ascii_uppercase() {
        'R' => Action::Turn(Move::new(Face::R, direction)),
        'L' => Action::Turn(Move::new(Face::L, direction)),
        'U' => Action::Turn(Move::new(Face::U, direction)),
        'D' => Action::Turn(Move::new(Face::D, direction)),
        'F' => Action::Turn(Move::new(Face::F, direction)),
        'B' => Action::Turn(Move::new(Face::B, direction)),
        ' ' => Action::Scramble { moves: 25 },
        '\n' | '\r' => Action::Reset,
        'S' => Action::Solve,
        _ => Action::Noop,
    }
}
