//! Best-effort roll sound.

use std::path::Path;

use crate::alert::{Alert, WarningRegistry};
use crate::error::SoundError;

/// An audio backend able to start a sound without blocking the caller.
pub trait SoundPlayer {
    /// Start playing the file at `path`.
    fn play(&self, path: &Path) -> Result<(), SoundError>;
}

/// Backend used where no audio output exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSoundPlayer;

impl SoundPlayer for NullSoundPlayer {
    fn play(&self, _path: &Path) -> Result<(), SoundError> {
        Err(SoundError::Unavailable)
    }
}

/// Play the roll sound, turning failures into at most one warning per category.
pub fn play_roll_sound(
    player: &dyn SoundPlayer,
    path: &Path,
    warnings: &mut WarningRegistry,
) -> Option<Alert> {
    let result = if path.exists() {
        player.play(path)
    } else {
        Err(SoundError::FileNotFound(path.to_path_buf()))
    };
    match result {
        Ok(()) => None,
        Err(err) => warnings.sound_failure(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingPlayer {
        plays: Cell<u32>,
    }

    impl SoundPlayer for CountingPlayer {
        fn play(&self, _path: &Path) -> Result<(), SoundError> {
            self.plays.set(self.plays.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn missing_file_warns_once() {
        let mut warnings = WarningRegistry::new();
        let path = Path::new("/no/such/dice_sound.wav");
        let first = play_roll_sound(&NullSoundPlayer, path, &mut warnings);
        let second = play_roll_sound(&NullSoundPlayer, path, &mut warnings);
        assert!(first.unwrap().message.starts_with("Sound file not found:"));
        assert!(second.is_none());
        assert!(warnings.has_warned("no_file"));
    }

    #[test]
    fn missing_backend_warns_once() {
        let mut warnings = WarningRegistry::new();
        let path = std::env::current_exe().unwrap();
        let first = play_roll_sound(&NullSoundPlayer, &path, &mut warnings);
        assert_eq!(first.unwrap().message, "Sound not supported.");
        assert!(play_roll_sound(&NullSoundPlayer, &path, &mut warnings).is_none());
    }

    #[test]
    fn working_backend_is_silent() {
        let mut warnings = WarningRegistry::new();
        let player = CountingPlayer {
            plays: Cell::new(0),
        };
        let path = std::env::current_exe().unwrap();
        assert!(play_roll_sound(&player, &path, &mut warnings).is_none());
        assert!(play_roll_sound(&player, &path, &mut warnings).is_none());
        assert_eq!(player.plays.get(), 2);
    }
}
