//! User-facing alerts and once-per-process warnings.

use std::collections::HashSet;

use crate::error::{SoundError, ValidationError};

/// Severity of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    /// The user must fix their input.
    Error,
    /// Something degraded but the roll went through.
    Warning,
}

/// A message box to show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Error or warning.
    pub level: AlertLevel,
    /// Dialog title.
    pub title: String,
    /// Dialog body.
    pub message: String,
}

impl Alert {
    /// Alert for a rejected roll.
    pub fn from_validation(err: &ValidationError) -> Self {
        let title = match err {
            ValidationError::NoForcedValues => "No Values",
            _ => "Error",
        };
        Self {
            level: AlertLevel::Error,
            title: title.to_string(),
            message: err.to_string(),
        }
    }

    /// A warning alert.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Warning,
            title: "Warning".to_string(),
            message: message.into(),
        }
    }
}

/// Remembers which warning categories were already shown.
///
/// Lives as long as the application; each key produces at most one alert.
#[derive(Debug, Clone, Default)]
pub struct WarningRegistry {
    warned: HashSet<String>,
}

impl WarningRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a warning the first time `key` is seen, `None` afterwards.
    pub fn warn_once(&mut self, key: &str, message: impl Into<String>) -> Option<Alert> {
        if !self.warned.insert(key.to_string()) {
            return None;
        }
        let alert = Alert::warning(message);
        log::warn!("{key}: {}", alert.message);
        Some(alert)
    }

    /// Warn once about a sound failure, keyed by its category.
    pub fn sound_failure(&mut self, err: &SoundError) -> Option<Alert> {
        self.warn_once(err.warning_key(), err.to_string())
    }

    /// Whether `key` has already been reported.
    pub fn has_warned(&self, key: &str) -> bool {
        self.warned.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn warns_once_per_key() {
        let mut registry = WarningRegistry::new();
        assert!(registry.warn_once("no_sound", "Sound not supported.").is_some());
        assert!(registry.warn_once("no_sound", "Sound not supported.").is_none());
        assert!(registry.warn_once("no_file", "missing").is_some());
        assert!(registry.has_warned("no_sound"));
    }

    #[test]
    fn sound_failures_share_a_category() {
        let mut registry = WarningRegistry::new();
        let first = registry.sound_failure(&SoundError::FileNotFound(PathBuf::from("a.wav")));
        let second = registry.sound_failure(&SoundError::FileNotFound(PathBuf::from("b.wav")));
        assert_eq!(first.unwrap().message, "Sound file not found:\na.wav");
        assert!(second.is_none());
        assert!(registry.sound_failure(&SoundError::Unavailable).is_some());
    }

    #[test]
    fn validation_alert_titles() {
        let alert = Alert::from_validation(&ValidationError::NoForcedValues);
        assert_eq!(alert.title, "No Values");
        assert_eq!(alert.level, AlertLevel::Error);
        let alert = Alert::from_validation(&ValidationError::InvalidModifier);
        assert_eq!(alert.title, "Error");
        assert_eq!(alert.message, "Modifier must be an integer.");
    }
}
