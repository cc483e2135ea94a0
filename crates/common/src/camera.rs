use serde::{Deserialize, Serialize};

/// Scale applied to raw drag deltas (pixels to radians).
pub const DRAG_SCALE: f32 = 0.01;

/// Vertical rotation limit in radians, to keep the view away from gimbal flip.
pub const PITCH_LIMIT: f32 = 1.5;

/// View orientation of the whole cube.
///
/// Purely a view transform: camera motion never touches the lattice. Angles
/// are radians; pitch is clamped to [-PITCH_LIMIT, PITCH_LIMIT].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Rotation about the world y axis.
    pub yaw: f32,
    /// Rotation about the world x axis, clamped.
    pub pitch: f32,
    /// Rotation about the world z axis.
    pub roll: f32,
}

impl Default for Camera {
    fn default() -> Self {
        // Starting orientation gives a three-quarter view of the cube.
        Self {
            yaw: 0.3,
            pitch: 0.3,
            roll: 0.0,
        }
    }
}

impl Camera {
    /// Apply a mouse-drag delta: horizontal motion yaws, vertical motion
    /// pitches within the clamp.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * DRAG_SCALE;
        self.pitch = (self.pitch + dy * DRAG_SCALE).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_scales_deltas() {
        let mut cam = Camera::default();
        cam.drag(100.0, 0.0);
        assert!((cam.yaw - (0.3 + 1.0)).abs() < 1e-6);
        assert!((cam.pitch - 0.3).abs() < 1e-6);
    }

    #[test]
    fn pitch_is_clamped_both_ways() {
        let mut cam = Camera::default();
        cam.drag(0.0, 100_000.0);
        assert_eq!(cam.pitch, PITCH_LIMIT);
        cam.drag(0.0, -1_000_000.0);
        assert_eq!(cam.pitch, -PITCH_LIMIT);
    }

    #[test]
    fn yaw_is_unbounded() {
        let mut cam = Camera::default();
        cam.drag(10_000.0, 0.0);
        assert!(cam.yaw > 99.0);
    }
}
