//! Music crossfade between the safe and unsafe loops
//!
//! Mixing and 3D positioning belong to the host; the mode only picks the two
//! loop volumes each tick and moves the listener.

use glam::Vec3;

/// The two music loops the mode plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MusicTrack {
    /// Plays while the lights are cool
    Safe,
    /// Fades in as the lights heat up
    Unsafe,
}

impl MusicTrack {
    /// Asset the host should loop for this track
    pub fn file_name(&self) -> &'static str {
        match self {
            MusicTrack::Safe => "GoodSong.wav",
            MusicTrack::Unsafe => "BadSong.wav",
        }
    }
}

/// A playing loop owned by the host mixer
pub trait LoopHandle {
    fn set_volume(&mut self, volume: f32);
}

/// Host audio subsystem
pub trait SoundSystem {
    type Loop: LoopHandle;

    /// Start looping `track` at `volume`, audible up to `max_distance`
    fn play_loop(&mut self, track: MusicTrack, volume: f32, max_distance: f32) -> Self::Loop;

    /// Move the process-wide listener
    fn set_listener(&mut self, position: Vec3, right: Vec3, smoothing: f32);
}

/// Volumes for (safe loop, unsafe loop)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MusicMix {
    pub safe: f32,
    pub unsafe_: f32,
}

impl MusicMix {
    /// Only the safe loop
    pub const WON: MusicMix = MusicMix {
        safe: 1.0,
        unsafe_: 0.0,
    };
    /// Only the unsafe loop
    pub const LOST: MusicMix = MusicMix {
        safe: 0.0,
        unsafe_: 1.0,
    };

    /// Complementary mix for a music fraction
    pub fn crossfade(music_fraction: f32) -> Self {
        let m = music_fraction.clamp(0.0, 1.0);
        Self {
            safe: 1.0 - m,
            unsafe_: m,
        }
    }
}

/// The two loops, started at mode entry and faded every tick
#[derive(Debug)]
pub struct Crossfade<L> {
    safe: L,
    unsafe_: L,
    mix: MusicMix,
}

impl<L: LoopHandle> Crossfade<L> {
    /// Start both loops: safe audible, unsafe silent
    pub fn start<S>(sound: &mut S, max_distance: f32) -> Self
    where
        S: SoundSystem<Loop = L>,
    {
        let mix = MusicMix::WON;
        Self {
            safe: sound.play_loop(MusicTrack::Safe, mix.safe, max_distance),
            unsafe_: sound.play_loop(MusicTrack::Unsafe, mix.unsafe_, max_distance),
            mix,
        }
    }

    pub fn apply(&mut self, mix: MusicMix) {
        self.safe.set_volume(mix.safe);
        self.unsafe_.set_volume(mix.unsafe_);
        self.mix = mix;
    }

    /// Last mix applied
    pub fn mix(&self) -> MusicMix {
        self.mix
    }
}

/// Sound system that plays nothing; used for headless runs
#[derive(Debug, Default)]
pub struct SilentSound {
    pub listener: Option<(Vec3, Vec3, f32)>,
}

#[derive(Debug, Clone, Copy)]
pub struct SilentLoop {
    pub track: MusicTrack,
    pub volume: f32,
}

impl LoopHandle for SilentLoop {
    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }
}

impl SoundSystem for SilentSound {
    type Loop = SilentLoop;

    fn play_loop(&mut self, track: MusicTrack, volume: f32, _max_distance: f32) -> SilentLoop {
        log::debug!("Looping {} at volume {}", track.file_name(), volume);
        SilentLoop { track, volume }
    }

    fn set_listener(&mut self, position: Vec3, right: Vec3, smoothing: f32) {
        self.listener = Some((position, right, smoothing));
    }
}
