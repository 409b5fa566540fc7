pub mod synth;

use std::collections::HashMap;

use macroquad::audio::{PlaySoundParams, Sound, load_sound_from_bytes, play_sound};
use tracing::{debug, warn};

use crate::application::{Cue, Feedback};
use crate::config::AudioConfig;

/// Plays synthesized cue sounds through macroquad's audio backend.
/// Cues with no loaded sound, or any cue while muted, are dropped.
pub struct AudioFeedback {
    sounds: HashMap<Cue, Sound>,
    muted: bool,
    volume: f32,
}

impl AudioFeedback {
    /// Render and load every audible cue. Sounds that fail to load are
    /// logged and left out.
    pub async fn load(config: &AudioConfig) -> Self {
        let mut sounds = HashMap::new();
        for cue in Cue::ALL {
            let Some(wav) = synth::cue_wav(cue) else {
                continue;
            };
            match load_sound_from_bytes(&wav).await {
                Ok(sound) => {
                    sounds.insert(cue, sound);
                }
                Err(err) => warn!(?cue, error = ?err, "failed to load cue sound"),
            }
        }
        debug!(loaded = sounds.len(), "cue sounds ready");

        Self {
            sounds,
            muted: config.muted,
            volume: config.volume,
        }
    }
}

impl Feedback for AudioFeedback {
    fn cue(&mut self, cue: Cue) {
        if self.muted {
            return;
        }
        if let Some(sound) = self.sounds.get(&cue) {
            play_sound(
                sound,
                PlaySoundParams {
                    looped: false,
                    volume: self.volume,
                },
            );
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}
