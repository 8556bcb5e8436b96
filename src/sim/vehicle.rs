//! Vehicle movement
//!
//! The body climbs along +Y; the camera follows up to a ceiling. Wheels are
//! children of the body in the host scene and ride along untouched.

use glam::Vec3;

use crate::scene::{Scene, SceneNodes, TransformId};

#[derive(Debug, Clone, Copy)]
pub struct Vehicle {
    pub body: TransformId,
    pub camera: TransformId,
}

impl Vehicle {
    pub fn capture(nodes: &SceneNodes) -> Self {
        Self {
            body: nodes.body,
            camera: nodes.camera_transform,
        }
    }

    pub fn height(&self, scene: &Scene) -> f32 {
        scene.transform(self.body).position.y
    }

    pub fn position(&self, scene: &Scene) -> Vec3 {
        scene.transform(self.body).position
    }

    /// Drive the body and camera up by `distance`, camera clamped to `max_camera_y`
    pub fn climb(&self, scene: &mut Scene, distance: f32, max_camera_y: f32) {
        self.drift(scene, distance);

        let camera = scene.transform_mut(self.camera);
        camera.position.y = (camera.position.y + distance).min(max_camera_y);
    }

    /// Move only the body, leaving the camera behind
    pub fn drift(&self, scene: &mut Scene, distance: f32) {
        scene.transform_mut(self.body).position.y += distance;
    }
}
