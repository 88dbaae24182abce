//! Roll sound through macroquad's audio backend.

use std::path::Path;

use macroquad::audio::{Sound, load_sound, play_sound_once};

use dt_engine::{SoundError, SoundPlayer};

/// A sound player holding the preloaded roll sound, if it could be loaded.
pub struct MacroquadSound {
    sound: Option<Sound>,
}

impl MacroquadSound {
    /// Load the sound at `path`. Failures leave the player without a sound.
    pub async fn load(path: &Path) -> Self {
        let Some(name) = path.to_str() else {
            log::warn!("sound path is not valid UTF-8: {}", path.display());
            return Self { sound: None };
        };
        if !path.exists() {
            return Self { sound: None };
        }
        match load_sound(name).await {
            Ok(sound) => Self { sound: Some(sound) },
            Err(err) => {
                log::warn!("cannot load sound {name}: {err}");
                Self { sound: None }
            }
        }
    }
}

impl SoundPlayer for MacroquadSound {
    fn play(&self, _path: &Path) -> Result<(), SoundError> {
        match &self.sound {
            Some(sound) => {
                play_sound_once(sound);
                Ok(())
            }
            None => Err(SoundError::Unavailable),
        }
    }
}
