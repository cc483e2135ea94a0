use crate::renderer::{RenderView, Renderer};
use cubespace_common::{FaceColor, FaceDir};
use cubespace_kernel::Cube;
use glam::IVec3;

/// The 3x3 sticker grid of one face, row-major as seen looking at the face
/// in the standard unfolded-net orientation.
pub fn face_grid(cube: &Cube, dir: FaceDir) -> [[FaceColor; 3]; 3] {
    std::array::from_fn(|row| std::array::from_fn(|col| sticker_at(cube, dir, row, col)))
}

fn sticker_at(cube: &Cube, dir: FaceDir, row: usize, col: usize) -> FaceColor {
    let pos = grid_pos(dir, row as i32, col as i32);
    let cubelet = cube
        .cubelets()
        .iter()
        .find(|c| c.pos() == pos)
        .unwrap_or_else(|| unreachable!("lattice bijection guarantees every slot is occupied"));
    cubelet
        .visible(dir)
        .unwrap_or_else(|| unreachable!("face-layer cubelets always carry an outward sticker"))
}

/// Lattice position of the sticker at (row, col) of a face, standard net
/// orientation: U is viewed from above with B at the top, side faces are
/// viewed head-on with U at the top.
fn grid_pos(dir: FaceDir, row: i32, col: i32) -> IVec3 {
    match dir {
        FaceDir::PosY => IVec3::new(col - 1, 1, row - 1),
        FaceDir::NegY => IVec3::new(col - 1, -1, 1 - row),
        FaceDir::PosZ => IVec3::new(col - 1, 1 - row, 1),
        FaceDir::NegZ => IVec3::new(1 - col, 1 - row, -1),
        FaceDir::PosX => IVec3::new(1, 1 - row, 1 - col),
        FaceDir::NegX => IVec3::new(-1, 1 - row, col - 1),
    }
}

fn color_letter(color: FaceColor) -> char {
    match color {
        FaceColor::White => 'W',
        FaceColor::Yellow => 'Y',
        FaceColor::Red => 'R',
        FaceColor::Orange => 'O',
        FaceColor::Green => 'G',
        FaceColor::Blue => 'B',
    }
}

/// Renders the cube as an unfolded text net:
///
/// ```text
///       WWW
///       WWW
///       WWW
///   OOO GGG RRR BBB
///   OOO GGG RRR BBB
///   OOO GGG RRR BBB
///       YYY
///       YYY
///       YYY
/// ```
#[derive(Debug, Default)]
pub struct TextNetRenderer;

impl TextNetRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for TextNetRenderer {
    type Output = String;

    fn render(&self, cube: &Cube, _view: &RenderView) -> String {
        let up = face_grid(cube, FaceDir::PosY);
        let down = face_grid(cube, FaceDir::NegY);
        let middle = [
            face_grid(cube, FaceDir::NegX),
            face_grid(cube, FaceDir::PosZ),
            face_grid(cube, FaceDir::PosX),
            face_grid(cube, FaceDir::NegZ),
        ];

        let mut out = String::new();
        let row_str =
            |grid: &[[FaceColor; 3]; 3], r: usize| -> String {
                grid[r].iter().map(|c| color_letter(*c)).collect()
            };

        for r in 0..3 {
            out.push_str(&format!("    {}\n", row_str(&up, r)));
        }
        for r in 0..3 {
            let line: Vec<String> = middle.iter().map(|g| row_str(g, r)).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        for r in 0..3 {
            out.push_str(&format!("    {}\n", row_str(&down, r)));
        }
        out
    }
}
