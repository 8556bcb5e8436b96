//! Searchlight orientation blending
//!
//! Each light idles with its own wobble and swings onto the player as the
//! tracking fraction rises. Lights ride rigidly with the camera.

use glam::{Mat3, Quat, Vec3};

use super::wobble::{Wobble, swing_angle};
use crate::scene::{Scene, TransformId};
use crate::tuning::{LightTuning, WobbleTuning};

/// Rotation whose local -Z looks along `direction`, local +Y toward `up`.
///
/// Returns `None` when `direction` is zero or parallel to `up`.
pub fn look_rotation(direction: Vec3, up: Vec3) -> Option<Quat> {
    let back = -direction.try_normalize()?;
    let right = up.cross(back).try_normalize()?;
    let up = back.cross(right);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, back)).normalize())
}

/// Rotation pointing a light at `pos` toward `target`
#[inline]
pub fn point_at(pos: Vec3, target: Vec3, up: Vec3) -> Option<Quat> {
    look_rotation(target - pos, up)
}

/// Fixed per-light inputs to the blend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightFrame {
    pub base_rotation: Quat,
    /// Wobble axis in the light's local frame (unit length)
    pub wobble_axis: Vec3,
    pub amplitude_deg: f32,
    pub up: Vec3,
}

/// Orientation of one light for this tick.
///
/// `tracking` of 0 is pure idle wobble, 1 is pure look-at-target.
pub fn light_orientation(
    frame: &LightFrame,
    wobble_phase: f32,
    tracking: f32,
    light_pos: Vec3,
    target: Vec3,
) -> Quat {
    let swing = swing_angle(wobble_phase, frame.amplitude_deg);
    let idle = (frame.base_rotation * Quat::from_axis_angle(frame.wobble_axis, swing)).normalize();

    match point_at(light_pos, target, frame.up) {
        Some(look) => idle.slerp(look, tracking.clamp(0.0, 1.0)).normalize(),
        None => idle,
    }
}

/// One searchlight bound to a scene node
#[derive(Debug, Clone)]
pub struct Searchlight {
    pub node: TransformId,
    pub frame: LightFrame,
    /// Position relative to the camera, captured at load
    pub offset: Vec3,
    pub wobble: Wobble,
    degenerate_logged: bool,
}

impl Searchlight {
    fn capture(
        scene: &Scene,
        node: TransformId,
        camera: TransformId,
        wobble: &WobbleTuning,
        axis: Vec3,
        up: Vec3,
    ) -> Self {
        let light = scene.transform(node);
        Self {
            node,
            frame: LightFrame {
                base_rotation: light.rotation,
                wobble_axis: axis,
                amplitude_deg: wobble.amplitude_deg,
                up,
            },
            offset: light.position - scene.transform(camera).position,
            wobble: Wobble::new(wobble),
            degenerate_logged: false,
        }
    }

    /// Re-aim at `target` and move along with the camera
    fn apply(&mut self, scene: &mut Scene, camera_pos: Vec3, target: Vec3, tracking: f32) {
        let light = scene.transform_mut(self.node);

        if !self.degenerate_logged && point_at(light.position, target, self.frame.up).is_none() {
            log::warn!("Searchlight has no usable look direction, holding idle wobble");
            self.degenerate_logged = true;
        }

        light.rotation = light_orientation(
            &self.frame,
            self.wobble.phase,
            tracking,
            light.position,
            target,
        );
        light.position = camera_pos + self.offset;
    }
}

/// The left and right searchlights
#[derive(Debug, Clone)]
pub struct LightRig {
    pub left: Searchlight,
    pub right: Searchlight,
}

impl LightRig {
    /// Capture base rotations and camera offsets from the scene as loaded
    pub fn capture(
        scene: &Scene,
        left: TransformId,
        right: TransformId,
        camera: TransformId,
        tuning: &LightTuning,
    ) -> Self {
        let axis = tuning.wobble_axis.normalize();
        let up = tuning.look_up.normalize();
        Self {
            left: Searchlight::capture(scene, left, camera, &tuning.left, axis, up),
            right: Searchlight::capture(scene, right, camera, &tuning.right, axis, up),
        }
    }

    pub fn advance_wobble(&mut self, dt: f32) {
        self.left.wobble.advance(dt);
        self.right.wobble.advance(dt);
    }

    /// Orient both lights toward `target` by `tracking` and follow the camera
    pub fn apply(&mut self, scene: &mut Scene, camera: TransformId, target: Vec3, tracking: f32) {
        let camera_pos = scene.transform(camera).position;
        self.left.apply(scene, camera_pos, target, tracking);
        self.right.apply(scene, camera_pos, target, tracking);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::tests::factory_scene;

    const EPS: f32 = 1e-4;

    fn frame(base: Quat) -> LightFrame {
        LightFrame {
            base_rotation: base,
            wobble_axis: Vec3::new(1.0, 1.0, 0.0).normalize(),
            amplitude_deg: 5.0,
            up: Vec3::Z,
        }
    }

    fn same_rotation(a: Quat, b: Quat) -> bool {
        a.dot(b).abs() > 1.0 - EPS
    }

    #[test]
    fn test_look_rotation_points_minus_z_at_target() {
        let pos = Vec3::new(-6.0, 8.0, 6.0);
        let target = Vec3::new(0.0, 0.0, 0.0);
        let q = point_at(pos, target, Vec3::Z).unwrap();
        let forward = q * Vec3::NEG_Z;
        assert!(forward.abs_diff_eq((target - pos).normalize(), EPS));
        // Local up stays in the plane containing world up
        let up = q * Vec3::Y;
        assert!(up.z > 0.0);
    }

    #[test]
    fn test_look_rotation_degenerate() {
        assert!(look_rotation(Vec3::ZERO, Vec3::Z).is_none());
        assert!(look_rotation(Vec3::new(0.0, 0.0, -3.0), Vec3::Z).is_none());
    }

    #[test]
    fn test_zero_tracking_is_idle_wobble() {
        let base = Quat::from_rotation_x(-0.6);
        let f = frame(base);
        // Phase 0 means no swing at all
        let q = light_orientation(&f, 0.0, 0.0, Vec3::new(-6.0, 8.0, 6.0), Vec3::ZERO);
        assert!(same_rotation(q, base));

        // Quarter phase swings by the full amplitude
        let q = light_orientation(&f, 0.25, 0.0, Vec3::new(-6.0, 8.0, 6.0), Vec3::ZERO);
        assert!((q.angle_between(base) - 5f32.to_radians()).abs() < EPS);
    }

    #[test]
    fn test_full_tracking_is_look_at() {
        let f = frame(Quat::from_rotation_x(-0.6));
        let pos = Vec3::new(6.0, 8.0, 6.0);
        let target = Vec3::new(0.0, 2.0, 0.0);
        let q = light_orientation(&f, 0.3, 1.0, pos, target);
        assert!(same_rotation(q, point_at(pos, target, Vec3::Z).unwrap()));
    }

    #[test]
    fn test_half_tracking_lies_between() {
        let base = Quat::from_rotation_x(-0.6);
        let f = frame(base);
        let pos = Vec3::new(6.0, 8.0, 6.0);
        let look = point_at(pos, Vec3::ZERO, Vec3::Z).unwrap();
        let q = light_orientation(&f, 0.0, 0.5, pos, Vec3::ZERO);
        let total = base.angle_between(look);
        assert!((q.angle_between(base) - total / 2.0).abs() < 1e-3);
        assert!((q.angle_between(look) - total / 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_degenerate_target_falls_back_to_idle() {
        let base = Quat::from_rotation_x(-0.6);
        let f = frame(base);
        let pos = Vec3::new(1.0, 1.0, 1.0);
        let q = light_orientation(&f, 0.0, 1.0, pos, pos);
        assert!(same_rotation(q, base));
    }

    #[test]
    fn test_rig_follows_camera() {
        let mut scene = factory_scene();
        let left = scene.find("Searchlight_L").unwrap();
        let right = scene.find("Searchlight_R").unwrap();
        let camera = scene.find("Camera").unwrap();
        let mut rig = LightRig::capture(&scene, left, right, camera, &LightTuning::default());

        assert_eq!(rig.left.offset, Vec3::new(-6.0, 12.0, -6.0));
        assert_eq!(rig.right.wobble.phase, 0.5);

        scene.transform_mut(camera).position.y += 2.5;
        rig.apply(&mut scene, camera, Vec3::ZERO, 0.0);

        assert!(scene.transform(left).position.abs_diff_eq(Vec3::new(-6.0, 10.5, 6.0), EPS));
        assert!(scene.transform(right).position.abs_diff_eq(Vec3::new(6.0, 10.5, 6.0), EPS));
    }

    #[test]
    fn test_rig_lights_wobble_independently() {
        let mut scene = factory_scene();
        let left = scene.find("Searchlight_L").unwrap();
        let right = scene.find("Searchlight_R").unwrap();
        let camera = scene.find("Camera").unwrap();
        let mut rig = LightRig::capture(&scene, left, right, camera, &LightTuning::default());
        let base = scene.transform(left).rotation;

        rig.advance_wobble(2.5);
        rig.apply(&mut scene, camera, Vec3::ZERO, 0.0);

        // Left at phase 0.25 (peak), right at 0.8125
        let left_swing = scene.transform(left).rotation.angle_between(base);
        let right_swing = scene.transform(right).rotation.angle_between(base);
        assert!((left_swing - 5f32.to_radians()).abs() < 1e-3);
        assert!((left_swing - right_swing).abs() > 1e-3);
    }
}
