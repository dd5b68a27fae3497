//! App Core for TabJump.
//!
//! Composes settings, the recency tracker and the host mirror, and routes
//! host events and navigation commands between them.

use std::time::Duration;

use tracing::info;

use crate::managers::recency_tracker::{RecencyTracker, RecencyTrackerTrait};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::tab_host::RecordingHost;
use crate::services::time_source::{SystemTimeSource, TimeSource};
use crate::types::errors::SettingsError;
use crate::types::tab::{HostCommand, TabEvent, TabId};

/// Central application struct owning every component.
pub struct App<T: TimeSource = SystemTimeSource> {
    pub settings_engine: SettingsEngine,
    pub tracker: RecencyTracker<T>,
    pub host: RecordingHost,
}

impl App<SystemTimeSource> {
    /// Creates an App on real time, loading settings from `config_path`
    /// (or the platform default).
    pub fn new(config_path: Option<String>) -> Result<Self, SettingsError> {
        Self::with_time_source(config_path, SystemTimeSource)
    }
}

impl<T: TimeSource> App<T> {
    pub fn with_time_source(config_path: Option<String>, time: T) -> Result<Self, SettingsError> {
        let mut settings_engine = SettingsEngine::new(config_path);
        let settings = settings_engine.load()?;
        info!(
            path = %settings_engine.get_config_path(),
            debounce_ms = settings.debounce_ms,
            "loaded settings"
        );

        Ok(Self {
            tracker: RecencyTracker::with_settings(&settings, time),
            settings_engine,
            host: RecordingHost::new(),
        })
    }

    /// Mirrors the event into the host state, then feeds it to the tracker.
    pub fn handle_event(&mut self, event: &TabEvent) {
        self.host.observe(event);
        self.tracker.handle_event(event, &self.host);
    }

    pub fn jump_back(&mut self) -> Option<TabId> {
        self.tracker.jump_back(&mut self.host)
    }

    pub fn jump_forward(&mut self) -> Option<TabId> {
        self.tracker.jump_forward(&mut self.host)
    }

    pub fn select_ranked(&mut self, index: usize) -> Option<TabId> {
        self.tracker.select_ranked(index, &mut self.host)
    }

    pub fn ranking(&self) -> Vec<TabId> {
        self.tracker.get_ranking()
    }

    /// Activation requests issued since the last call.
    pub fn take_commands(&mut self) -> Vec<HostCommand> {
        self.host.drain_commands()
    }

    /// Updates a setting, persists it, and applies it to the running tracker.
    pub fn update_setting(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        self.settings_engine.set_value(key, value)?;
        let debounce_ms = self.settings_engine.get_settings().debounce_ms;
        self.tracker.set_debounce(Duration::from_millis(debounce_ms));
        Ok(())
    }
}
