use glam::IVec3;
use serde::{Deserialize, Serialize};

/// One of the three rotation axes of the cube lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Rotation sense of a face turn, viewed from outside the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TwistDirection {
    Clockwise,
    CounterClockwise,
}

impl TwistDirection {
    /// The opposite sense. Applying a turn and then its reverse is the identity.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }

    /// Sign of this sense: clockwise is positive by convention.
    pub fn sign(self) -> i32 {
        match self {
            Self::Clockwise => 1,
            Self::CounterClockwise => -1,
        }
    }
}

/// Error from parsing a face letter that is not one of R/L/U/D/F/B.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown face identifier: {0:?}")]
pub struct FaceParseError(pub char);

/// One of the six canonical faces of the puzzle, in standard letter notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Right (+x).
    R,
    /// Left (-x).
    L,
    /// Up (+y).
    U,
    /// Down (-y).
    D,
    /// Front (+z).
    F,
    /// Back (-z).
    B,
}

impl Face {
    /// All six faces in a fixed order.
    pub const ALL: [Face; 6] = [Face::R, Face::L, Face::U, Face::D, Face::F, Face::B];

    /// The face letter used in move notation.
    pub fn letter(self) -> char {
        match self {
            Face::R => 'R',
            Face::L => 'L',
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
        }
    }

    /// The world direction this face looks out toward.
    pub fn outward(self) -> FaceDir {
        match self {
            Face::R => FaceDir::PosX,
            Face::L => FaceDir::NegX,
            Face::U => FaceDir::PosY,
            Face::D => FaceDir::NegY,
            Face::F => FaceDir::PosZ,
            Face::B => FaceDir::NegZ,
        }
    }
}

impl std::str::FromStr for Face {
    type Err = FaceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(FaceParseError(s.chars().next().unwrap_or('?')));
        };
        match c.to_ascii_uppercase() {
            'R' => Ok(Face::R),
            'L' => Ok(Face::L),
            'U' => Ok(Face::U),
            'D' => Ok(Face::D),
            'F' => Ok(Face::F),
            'B' => Ok(Face::B),
            other => Err(FaceParseError(other)),
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One of the six axis-aligned world directions.
///
/// Used both for the outward side of a cube face and for tracking which local
/// side of a cubelet currently points where. Discriminants are stable array
/// indices for `[T; 6]` sticker/color tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceDir {
    PosX = 0,
    NegX = 1,
    PosY = 2,
    NegY = 3,
    PosZ = 4,
    NegZ = 5,
}

impl FaceDir {
    /// All six directions in index order.
    pub const ALL: [FaceDir; 6] = [
        FaceDir::PosX,
        FaceDir::NegX,
        FaceDir::PosY,
        FaceDir::NegY,
        FaceDir::PosZ,
        FaceDir::NegZ,
    ];

    /// Array index of this direction.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Exact unit lattice vector for this direction.
    pub fn unit(self) -> IVec3 {
        match self {
            FaceDir::PosX => IVec3::new(1, 0, 0),
            FaceDir::NegX => IVec3::new(-1, 0, 0),
            FaceDir::PosY => IVec3::new(0, 1, 0),
            FaceDir::NegY => IVec3::new(0, -1, 0),
            FaceDir::PosZ => IVec3::new(0, 0, 1),
            FaceDir::NegZ => IVec3::new(0, 0, -1),
        }
    }

    /// Recover a direction from a unit lattice vector.
    pub fn from_unit(v: IVec3) -> Option<FaceDir> {
        FaceDir::ALL.into_iter().find(|d| d.unit() == v)
    }

    /// The opposite direction.
    #[must_use]
    pub fn opposite(self) -> FaceDir {
        match self {
            FaceDir::PosX => FaceDir::NegX,
            FaceDir::NegX => FaceDir::PosX,
            FaceDir::PosY => FaceDir::NegY,
            FaceDir::NegY => FaceDir::PosY,
            FaceDir::PosZ => FaceDir::NegZ,
            FaceDir::NegZ => FaceDir::PosZ,
        }
    }

    /// This direction after a 90-degree lattice rotation.
    ///
    /// Unit vectors rotate exactly, so the result is always another direction.
    #[must_use]
    pub fn rotated(self, axis: Axis, sense: i32) -> FaceDir {
        FaceDir::from_unit(rotate90(self.unit(), axis, sense))
            .unwrap_or(self) // unreachable: rotation maps units to units
    }

    /// The sticker color this direction carries on a solved cube.
    pub fn canonical_color(self) -> FaceColor {
        match self {
            FaceDir::PosX => FaceColor::Red,
            FaceDir::NegX => FaceColor::Orange,
            FaceDir::PosY => FaceColor::White,
            FaceDir::NegY => FaceColor::Yellow,
            FaceDir::PosZ => FaceColor::Green,
            FaceDir::NegZ => FaceColor::Blue,
        }
    }
}

/// Sticker colors of the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceColor {
    White,
    Yellow,
    Red,
    Orange,
    Green,
    Blue,
}

impl FaceColor {
    /// RGB triple for rendering.
    pub fn rgb8(self) -> [u8; 3] {
        match self {
            FaceColor::White => [255, 255, 255],
            FaceColor::Yellow => [255, 255, 0],
            FaceColor::Red => [255, 0, 0],
            FaceColor::Orange => [255, 165, 0],
            FaceColor::Green => [0, 255, 0],
            FaceColor::Blue => [0, 0, 255],
        }
    }
}

/// Rotate a lattice vector 90 degrees about `axis`.
///
/// `sense > 0` is the positive rotation, `sense < 0` the negative one:
/// - about x: (y, z) -> (z, -y) for +90
/// - about y: (x, z) -> (-z, x) for +90
/// - about z: (x, y) -> (y, -x) for +90
///
/// Integer-exact; composing four applications of the same sense is the
/// identity.
pub fn rotate90(v: IVec3, axis: Axis, sense: i32) -> IVec3 {
    let positive = sense > 0;
    match axis {
        Axis::X => {
            if positive {
                IVec3::new(v.x, v.z, -v.y)
            } else {
                IVec3::new(v.x, -v.z, v.y)
            }
        }
        Axis::Y => {
            if positive {
                IVec3::new(-v.z, v.y, v.x)
            } else {
                IVec3::new(v.z, v.y, -v.x)
            }
        }
        Axis::Z => {
            if positive {
                IVec3::new(v.y, -v.x, v.z)
            } else {
                IVec3::new(-v.y, v.x, v.z)
            }
        }
    }
}
