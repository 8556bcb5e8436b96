//! The searchlight escape play mode
//!
//! Host contract: feed events through `handle_event`, then call `update` and
//! `draw` exactly once per frame.

use glam::UVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::audio::{Crossfade, MusicMix, SoundSystem};
use crate::error::PlayModeError;
use crate::input::{InputEvent, InputLatch};
use crate::renderer::{FrameLighting, Renderer, overlay_projection, status_line};
use crate::scene::{Scene, SceneNodes};
use crate::sim::{LightRig, Outcome, PhaseTimer, Vehicle};
use crate::tuning::Tuning;

pub struct PlayMode<S: SoundSystem, R = Pcg32> {
    /// Local copy of the scene so gameplay can move things
    scene: Scene,
    nodes: SceneNodes,
    tuning: Tuning,
    input: InputLatch,
    phase: PhaseTimer<R>,
    lights: LightRig,
    vehicle: Vehicle,
    outcome: Outcome,
    music: Crossfade<S::Loop>,
    sound: S,
    lighting: FrameLighting,
}

impl<S: SoundSystem> PlayMode<S> {
    /// Build the mode with a generator seeded from `tuning.seed`
    pub fn new(scene: Scene, tuning: Tuning, sound: S) -> Result<Self, PlayModeError> {
        let rng = Pcg32::seed_from_u64(tuning.seed);
        Self::with_rng(scene, tuning, sound, rng)
    }
}

impl<S: SoundSystem, R: Rng> PlayMode<S, R> {
    /// Build the mode with an explicit random source
    pub fn with_rng(
        scene: Scene,
        tuning: Tuning,
        mut sound: S,
        rng: R,
    ) -> Result<Self, PlayModeError> {
        tuning.validate()?;
        let nodes = SceneNodes::resolve(&scene, &tuning.labels)?;
        let phase = PhaseTimer::new(tuning.phase.clone(), rng)?;

        let lights = LightRig::capture(
            &scene,
            nodes.light_left,
            nodes.light_right,
            nodes.camera_transform,
            &tuning.lights,
        );
        let vehicle = Vehicle::capture(&nodes);
        let music = Crossfade::start(&mut sound, tuning.audio.max_distance);

        log::info!(
            "Play mode ready: {} transforms, first safe window {}s",
            scene.transforms.len(),
            tuning.phase.initial_safe_seconds
        );

        Ok(Self {
            scene,
            nodes,
            tuning,
            input: InputLatch::new(),
            phase,
            lights,
            vehicle,
            outcome: Outcome::Playing,
            music,
            sound,
            lighting: FrameLighting::default(),
        })
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn phase(&self) -> &PhaseTimer<R> {
        &self.phase
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn nodes(&self) -> &SceneNodes {
        &self.nodes
    }

    pub fn input(&self) -> &InputLatch {
        &self.input
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    pub fn music_mix(&self) -> MusicMix {
        self.music.mix()
    }

    /// Whether the host should hold the pointer in relative mode
    pub fn pointer_captured(&self) -> bool {
        self.input.pointer_captured()
    }

    /// Returns true if the event was consumed
    pub fn handle_event(&mut self, event: &InputEvent, _window_size: UVec2) -> bool {
        self.input.handle_event(event)
    }

    /// Advance the mode by `elapsed` seconds
    pub fn update(&mut self, elapsed: f32) {
        let elapsed = elapsed.max(0.0);
        match self.outcome {
            Outcome::Lost => self.music.apply(MusicMix::LOST),
            Outcome::Won => {
                self.music.apply(MusicMix::WON);
                // Drive off screen in victory
                let distance = self.tuning.escape.player_speed * elapsed;
                self.vehicle.drift(&mut self.scene, distance);
            }
            Outcome::Playing => self.update_playing(elapsed),
        }
    }

    fn update_playing(&mut self, elapsed: f32) {
        self.phase.advance(elapsed);
        self.music
            .apply(MusicMix::crossfade(self.phase.music_fraction()));

        self.lights.advance_wobble(elapsed);
        let target = self.vehicle.position(&self.scene);
        self.lights.apply(
            &mut self.scene,
            self.nodes.camera_transform,
            target,
            self.phase.tracking_fraction(),
        );

        if self.input.action.pressed {
            self.climb(elapsed);
        }

        self.update_listener();
        self.input.reset_downs();
    }

    fn climb(&mut self, elapsed: f32) {
        let escape = &self.tuning.escape;
        self.vehicle
            .climb(&mut self.scene, escape.player_speed * elapsed, escape.max_camera_y);

        let height = self.vehicle.height(&self.scene);
        let next = self.outcome.after_move(self.phase.is_safe(), height, escape.win_y);
        if next != self.outcome {
            match next {
                Outcome::Lost => log::info!("Caught moving at height {:.2}", height),
                Outcome::Won => log::info!("Escaped at height {:.2}", height),
                Outcome::Playing => {}
            }
            self.outcome = next;
        }
    }

    fn update_listener(&mut self) {
        let camera = self.scene.transform(self.nodes.camera_transform);
        self.sound.set_listener(
            camera.position,
            camera.right(),
            self.tuning.audio.listener_smoothing,
        );
    }

    /// Render the scene and, once the run is decided, the status line
    pub fn draw(&mut self, drawable_size: UVec2, renderer: &mut impl Renderer) {
        let aspect = drawable_size.x.max(1) as f32 / drawable_size.y.max(1) as f32;
        let camera = &mut self.scene.cameras[self.nodes.camera];
        camera.aspect = aspect;

        let camera = &self.scene.cameras[self.nodes.camera];
        renderer.draw_scene(&self.scene, camera, &self.lighting);

        if let Some(line) = status_line(self.outcome, aspect) {
            renderer.draw_text(overlay_projection(aspect), &line);
        }
    }
}
