use crate::types::{Face, FaceParseError, TwistDirection};
use serde::{Deserialize, Serialize};

/// A single face turn in standard notation: `R` clockwise, `R'` counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub face: Face,
    pub direction: TwistDirection,
}

impl Move {
    pub fn new(face: Face, direction: TwistDirection) -> Self {
        Self { face, direction }
    }

    /// The move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            face: self.face,
            direction: self.direction.rev(),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.direction {
            TwistDirection::Clockwise => write!(f, "{}", self.face),
            TwistDirection::CounterClockwise => write!(f, "{}'", self.face),
        }
    }
}

/// Error from parsing move notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    #[error(transparent)]
    Face(#[from] FaceParseError),
    #[error("empty move token")]
    Empty,
    #[error("trailing characters in move token: {0:?}")]
    Trailing(String),
}

impl std::str::FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face_char = chars.next().ok_or(MoveParseError::Empty)?;
        let face: Face = face_char.to_string().parse()?;
        match chars.as_str() {
            "" => Ok(Move::new(face, TwistDirection::Clockwise)),
            "'" => Ok(Move::new(face, TwistDirection::CounterClockwise)),
            rest => Err(MoveParseError::Trailing(rest.to_string())),
        }
    }
}

/// Parse a whitespace-separated move sequence, e.g. `"R U R' U'"`.
pub fn parse_sequence(s: &str) -> Result<Vec<Move>, MoveParseError> {
    s.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notation_round_trips_for_all_twelve_moves() {
        for face in Face::ALL {
            for direction in [TwistDirection::Clockwise, TwistDirection::CounterClockwise] {
                let m = Move::new(face, direction);
                assert_eq!(m.to_string().parse::<Move>().unwrap(), m);
            }
        }
    }

    #[test]
    fn prime_marks_counter_clockwise() {
        let m: Move = "F'".parse().unwrap();
        assert_eq!(m.face, Face::F);
        assert_eq!(m.direction, TwistDirection::CounterClockwise);
    }

    #[test]
    fn inverse_flips_direction_only() {
        let m: Move = "U".parse().unwrap();
        let inv = m.inverse();
        assert_eq!(inv.face, Face::U);
        assert_eq!(inv.direction, TwistDirection::CounterClockwise);
        assert_eq!(inv.inverse(), m);
    }

    #[test]
    fn sequence_parses_in_order() {
        let seq = parse_sequence("R U R' U'").unwrap();
        assert_eq!(seq.len(), 4);
        assert_eq!(seq[0].to_string(), "R");
        assert_eq!(seq[2].to_string(), "R'");
    }

    #[test]
    fn bad_tokens_are_rejected() {
        assert!(parse_sequence("R X").is_err());
        assert!("R2".parse::<Move>().is_err());
        assert!("".parse::<Move>().is_err());
    }
}
