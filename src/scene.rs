//! Scene graph the play mode animates
//!
//! The host loads the scene; the mode keeps its own copy so gameplay can move
//! things around. Named nodes are resolved once into typed handles.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::tuning::NodeLabels;

/// Index of a transform inside `Scene::transforms`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransformId(pub usize);

/// A named, positioned node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub name: String,
    pub position: Vec3,
    pub rotation: Quat,
}

impl Transform {
    pub fn new(name: impl Into<String>, position: Vec3, rotation: Quat) -> Self {
        Self {
            name: name.into(),
            position,
            rotation,
        }
    }

    /// Local +X axis in parent space
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub transform: TransformId,
    /// Vertical field of view (radians)
    pub fovy: f32,
    /// Width / height, refreshed every draw
    pub aspect: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub transforms: Vec<Transform>,
    pub cameras: Vec<Camera>,
}

impl Scene {
    /// Small factory scene with the vehicle, both searchlights and one camera
    pub fn demo() -> Self {
        let mut scene = Scene::default();
        scene.add_transform(Transform::new("Floor", Vec3::ZERO, Quat::IDENTITY));
        scene.add_transform(Transform::new("Body", Vec3::ZERO, Quat::IDENTITY));
        for (name, x, y) in [
            ("Wheel_FR", 0.5, 0.5),
            ("Wheel_FL", -0.5, 0.5),
            ("Wheel_BR", 0.5, -0.5),
            ("Wheel_BL", -0.5, -0.5),
        ] {
            // Relative to the body
            scene.add_transform(Transform::new(name, Vec3::new(x, y, 0.3), Quat::IDENTITY));
        }
        scene.add_transform(Transform::new(
            "Searchlight_L",
            Vec3::new(-6.0, 8.0, 6.0),
            Quat::from_rotation_x(-0.6),
        ));
        scene.add_transform(Transform::new(
            "Searchlight_R",
            Vec3::new(6.0, 8.0, 6.0),
            Quat::from_rotation_x(-0.6),
        ));
        let camera = scene.add_transform(Transform::new(
            "Camera",
            Vec3::new(0.0, -4.0, 12.0),
            Quat::from_rotation_x(0.5),
        ));
        scene.cameras.push(Camera {
            transform: camera,
            fovy: 60f32.to_radians(),
            aspect: 1.0,
        });
        scene
    }

    /// Append a transform and return its handle
    pub fn add_transform(&mut self, transform: Transform) -> TransformId {
        self.transforms.push(transform);
        TransformId(self.transforms.len() - 1)
    }

    /// Exact-match lookup by label
    pub fn find(&self, name: &str) -> Option<TransformId> {
        self.transforms
            .iter()
            .position(|t| t.name == name)
            .map(TransformId)
    }

    pub fn transform(&self, id: TransformId) -> &Transform {
        &self.transforms[id.0]
    }

    pub fn transform_mut(&mut self, id: TransformId) -> &mut Transform {
        &mut self.transforms[id.0]
    }
}

/// Handles to every node the play mode drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneNodes {
    pub body: TransformId,
    /// Front-right, front-left, back-right, back-left
    pub wheels: [TransformId; 4],
    pub light_left: TransformId,
    pub light_right: TransformId,
    /// Index into `Scene::cameras`
    pub camera: usize,
    pub camera_transform: TransformId,
}

impl SceneNodes {
    /// Resolve all labels at once, reporting every missing one
    pub fn resolve(scene: &Scene, labels: &NodeLabels) -> Result<Self, SceneError> {
        let mut missing = Vec::new();
        let mut lookup = |label: &str| {
            let found = scene.find(label);
            if found.is_none() {
                missing.push(label.to_string());
            }
            found
        };

        let body = lookup(&labels.body);
        let wheels = [
            lookup(&labels.wheels[0]),
            lookup(&labels.wheels[1]),
            lookup(&labels.wheels[2]),
            lookup(&labels.wheels[3]),
        ];
        let light_left = lookup(&labels.light_left);
        let light_right = lookup(&labels.light_right);

        let (
            Some(body),
            [Some(fr), Some(fl), Some(br), Some(bl)],
            Some(light_left),
            Some(light_right),
        ) = (body, wheels, light_left, light_right)
        else {
            return Err(SceneError::MissingNodes { labels: missing });
        };

        if scene.cameras.len() != 1 {
            return Err(SceneError::CameraCount(scene.cameras.len()));
        }
        let camera_transform = scene.cameras[0].transform;
        if camera_transform.0 >= scene.transforms.len() {
            return Err(SceneError::DanglingCamera(camera_transform.0));
        }

        Ok(Self {
            body,
            wheels: [fr, fl, br, bl],
            light_left,
            light_right,
            camera: 0,
            camera_transform,
        })
    }
}
