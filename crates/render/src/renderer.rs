use cubespace_common::{Axis, FaceDir};
use cubespace_kernel::{Cube, TurnOverlay};
use glam::{Vec2, Vec3};

/// Viewport and projection configuration for one frame.
///
/// The camera angles come from cube state; the overlay, when present, is the
/// animator's cosmetic mid-turn rotation for the affected layer.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    pub width: f32,
    pub height: f32,
    /// Pixels per lattice unit.
    pub scale: f32,
    pub overlay: Option<TurnOverlay>,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            scale: 160.0,
            overlay: None,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads cube state and a view, then produces output. It never
/// mutates the cube — cube truth is kernel-owned.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given cube state and view.
    fn render(&self, cube: &Cube, view: &RenderView) -> Self::Output;
}

/// One drawable sticker face: projected corners, painter depth, fill color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceQuad {
    /// Screen-space corners in draw order.
    pub corners: [Vec2; 4],
    /// Camera-space depth; quads are emitted back to front.
    pub depth: f32,
    pub color: [u8; 3],
}

/// CPU projector producing depth-sorted face quads.
///
/// Oblique projection: camera pitch/yaw/roll
/// rotate the scene, x maps straight to screen x, and z leaks into screen y
/// at half strength for the depth illusion. Backfaces are culled on the
/// rotated outward normal.
#[derive(Debug, Default)]
pub struct QuadRenderer;

impl QuadRenderer {
    pub fn new() -> Self {
        Self
    }
}

/// Fraction of a sticker's half-extent, leaving a visible gap between quads.
const STICKER_HALF: f32 = 0.42;

impl Renderer for QuadRenderer {
    type Output = Vec<FaceQuad>;

    fn render(&self, cube: &Cube, view: &RenderView) -> Vec<FaceQuad> {
        let cam = cube.camera();
        let mut quads = Vec::with_capacity(54);

        for cubelet in cube.cubelets() {
            let center = cubelet.pos().as_vec3();
            let in_overlay = view
                .overlay
                .is_some_and(|o| axis_coord(cubelet.pos().as_vec3(), o.axis) == o.layer as f32);

            for dir in FaceDir::ALL {
                let Some(color) = cubelet.visible(dir) else {
                    continue;
                };
                let normal = dir.unit().as_vec3();
                let (u, v) = tangent_basis(dir);
                let face_center = center + normal * 0.5;
                let mut corners3 = [
                    face_center + (u + v) * STICKER_HALF,
                    face_center + (u - v) * STICKER_HALF,
                    face_center - (u + v) * STICKER_HALF,
                    face_center - (u - v) * STICKER_HALF,
                ];
                let mut world_normal = normal;

                if let (true, Some(overlay)) = (in_overlay, view.overlay) {
                    // Cosmetic mid-turn rotation. The float rotation formulas
                    // are the transpose of the lattice sense, hence the
                    // negated angle.
                    let radians = -overlay.angle_degrees.to_radians();
                    for c in &mut corners3 {
                        *c = rotate_about(overlay.axis, *c, radians);
                    }
                    world_normal = rotate_about(overlay.axis, world_normal, radians);
                }

                let rotated: Vec<Vec3> = corners3
                    .iter()
                    .map(|c| apply_camera(*c, cam.pitch, cam.yaw, cam.roll))
                    .collect();
                let cam_normal = apply_camera(world_normal, cam.pitch, cam.yaw, cam.roll);
                if cam_normal.z <= 0.0 {
                    continue; // facing away
                }

                let depth = rotated.iter().map(|c| c.z).sum::<f32>() / 4.0;
                let corners = [
                    project(rotated[0], view),
                    project(rotated[1], view),
                    project(rotated[2], view),
                    project(rotated[3], view),
                ];
                quads.push(FaceQuad {
                    corners,
                    depth,
                    color: color.rgb8(),
                });
            }
        }

        // Painter's order: farthest (smallest camera z) first.
        quads.sort_by(|a, b| a.depth.total_cmp(&b.depth));
        quads
    }
}

fn axis_coord(v: Vec3, axis: Axis) -> f32 {
    match axis {
        Axis::X => v.x,
        Axis::Y => v.y,
        Axis::Z => v.z,
    }
}

/// Two unit tangents spanning the plane of a face direction.
fn tangent_basis(dir: FaceDir) -> (Vec3, Vec3) {
    match dir {
        FaceDir::PosX | FaceDir::NegX => (Vec3::Y, Vec3::Z),
        FaceDir::PosY | FaceDir::NegY => (Vec3::X, Vec3::Z),
        FaceDir::PosZ | FaceDir::NegZ => (Vec3::X, Vec3::Y),
    }
}

fn rotate_x(v: Vec3, a: f32) -> Vec3 {
    let (s, c) = a.sin_cos();
    Vec3::new(v.x, v.y * c - v.z * s, v.y * s + v.z * c)
}

fn rotate_y(v: Vec3, a: f32) -> Vec3 {
    let (s, c) = a.sin_cos();
    Vec3::new(v.x * c + v.z * s, v.y, -v.x * s + v.z * c)
}

fn rotate_z(v: Vec3, a: f32) -> Vec3 {
    let (s, c) = a.sin_cos();
    Vec3::new(v.x * c - v.y * s, v.x * s + v.y * c, v.z)
}

fn rotate_about(axis: Axis, v: Vec3, radians: f32) -> Vec3 {
    match axis {
        Axis::X => rotate_x(v, radians),
        Axis::Y => rotate_y(v, radians),
        Axis::Z => rotate_z(v, radians),
    }
}

fn apply_camera(v: Vec3, pitch: f32, yaw: f32, roll: f32) -> Vec3 {
    rotate_z(rotate_y(rotate_x(v, pitch), yaw), roll)
}

fn project(v: Vec3, view: &RenderView) -> Vec2 {
    Vec2::new(
        view.width / 2.0 + v.x * view.scale,
        view.height / 2.0 - v.y * view.scale - v.z * view.scale * 0.5,
    )
}
