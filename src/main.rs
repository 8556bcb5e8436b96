//! Searchlight Escape headless driver
//!
//! Runs the play mode against a silent sound system and a null renderer with a
//! scripted player: climb while the music is calm, stop as soon as it turns.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::UVec2;
    use searchlight_escape::audio::SilentSound;
    use searchlight_escape::consts::FRAME_DT;
    use searchlight_escape::input::{InputEvent, Key};
    use searchlight_escape::renderer::NullRenderer;
    use searchlight_escape::scene::Scene;
    use searchlight_escape::{PlayMode, Tuning};

    env_logger::init();
    log::info!("Searchlight Escape (headless) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => {
            let loaded = std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()));
            match loaded {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path);
                    tuning
                }
                Err(e) => {
                    log::error!("Failed to load tuning from {}: {}", path, e);
                    std::process::exit(1);
                }
            }
        }
        None => Tuning::default(),
    };

    let mut mode = match PlayMode::new(Scene::demo(), tuning, SilentSound::default()) {
        Ok(mode) => mode,
        Err(e) => {
            log::error!("Play mode failed to start: {}", e);
            std::process::exit(1);
        }
    };

    let window = UVec2::new(1280, 720);
    let mut renderer = NullRenderer::default();
    let mut holding = false;
    let max_frames = (180.0 / FRAME_DT) as u32;

    for frame in 0..max_frames {
        // Listen for the music tell before the lights turn
        let calm = mode.phase().is_safe() && mode.music_mix().unsafe_ == 0.0;
        if calm != holding {
            let event = if calm {
                InputEvent::KeyDown(Key::Space)
            } else {
                InputEvent::KeyUp(Key::Space)
            };
            mode.handle_event(&event, window);
            holding = calm;
        }

        mode.update(FRAME_DT);
        mode.draw(window, &mut renderer);

        if mode.outcome().is_decided() {
            log::info!(
                "{} (after {:.1}s)",
                renderer.last_text.as_deref().unwrap_or_default(),
                frame as f32 * FRAME_DT
            );
            break;
        }
    }

    if !mode.outcome().is_decided() {
        log::info!("Still hiding after {} frames", renderer.frames);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The host engine drives the mode directly on the web
}
