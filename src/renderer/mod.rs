//! Rendering seam
//!
//! The host owns meshes, shaders and line rasterization. The mode hands it the
//! scene, the frame lighting and at most one line of status text.

pub mod overlay;

pub use overlay::{TextLine, overlay_projection, status_line};

use glam::Vec3;

use crate::scene::{Camera, Scene};

/// Fixed lighting and clear colour for the factory scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameLighting {
    /// Directional light pointing into the floor
    pub direction: Vec3,
    pub energy: Vec3,
    pub clear_color: [f32; 4],
}

impl Default for FrameLighting {
    fn default() -> Self {
        Self {
            direction: Vec3::NEG_Z,
            energy: Vec3::new(1.0, 1.0, 0.95),
            clear_color: colors::BACKGROUND,
        }
    }
}

/// Host renderer
pub trait Renderer {
    /// Clear, then draw every drawable in `scene` from `camera`
    fn draw_scene(&mut self, scene: &Scene, camera: &Camera, lighting: &FrameLighting);

    /// Overlay text with depth testing disabled
    fn draw_text(&mut self, projection: glam::Mat4, line: &TextLine);
}

/// Renderer that draws nothing; used for headless runs
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames: u64,
    pub last_text: Option<String>,
}

impl Renderer for NullRenderer {
    fn draw_scene(&mut self, _scene: &Scene, _camera: &Camera, _lighting: &FrameLighting) {
        self.frames += 1;
        self.last_text = None;
    }

    fn draw_text(&mut self, _projection: glam::Mat4, line: &TextLine) {
        self.last_text = Some(line.text.to_string());
    }
}

/// Colors for overlay and frame
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
    pub const STATUS_TEXT: [u8; 4] = [0x00, 0x00, 0x00, 0x00];
}
