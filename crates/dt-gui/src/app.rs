//! Application state shared by both panes.

use std::time::Duration;

use dt_engine::{
    Alert, AreaSize, DisplayComposer, EngineConfig, RollHistory, RollRequest, RollResolver,
    SoundPlayer, ValidationError, WarningRegistry, play_roll_sound,
};

/// Shared application state accessible by the control and display panes.
pub struct AppState {
    /// Engine configuration in effect.
    pub config: EngineConfig,
    /// What the spectator pane shows.
    pub composer: DisplayComposer,
    /// One line per completed roll.
    pub history: RollHistory,
    /// Warning categories already reported.
    pub warnings: WarningRegistry,
    /// The modal message currently shown, if any.
    pub alert: Option<Alert>,
    resolver: RollResolver,
    sound: Box<dyn SoundPlayer>,
}

impl AppState {
    /// Create the state with an OS-seeded resolver.
    pub fn new(config: EngineConfig, sound: Box<dyn SoundPlayer>) -> Self {
        Self {
            composer: DisplayComposer::new(config.clone()),
            history: RollHistory::new(),
            warnings: WarningRegistry::new(),
            alert: None,
            resolver: RollResolver::new().with_quantity_limit(config.quantity_limit),
            sound,
            config,
        }
    }

    /// Replace the resolver (e.g. with a seeded one), keeping the configured quantity limit.
    pub fn with_resolver(mut self, resolver: RollResolver) -> Self {
        self.resolver = resolver.with_quantity_limit(self.config.quantity_limit);
        self
    }

    /// Show a rejected roll to the user.
    pub fn reject(&mut self, err: &ValidationError) {
        log::debug!("roll rejected: {err}");
        self.alert = Some(Alert::from_validation(err));
    }

    /// Resolve and display a roll in a tile area of the given size.
    ///
    /// Returns false when the request was rejected.
    pub fn roll(&mut self, request: &RollRequest, area: AreaSize, now: Duration) -> bool {
        if request.quantity() > self.config.quantity_cap {
            log::warn!(
                "rolling {} dice, above the recommended cap of {}",
                request.quantity(),
                self.config.quantity_cap
            );
        }

        let outcome = match self.resolver.resolve(request) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.reject(&err);
                return false;
            }
        };

        if let Some(warning) =
            play_roll_sound(self.sound.as_ref(), &self.config.sound_path, &mut self.warnings)
        {
            self.alert = Some(warning);
        }

        self.history.record(&outcome);
        self.composer.show(outcome, area, now);
        true
    }
}
