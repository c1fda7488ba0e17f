use crate::data::{get_default_regions, support_info};
use crate::error::{AppError, ConfigInputError};
use crate::models::{
    ConnectionStatus, EntryContext, EntryFeedback, EntryOutcome, Region, Screen, StatusPanel,
    SupportInfo,
};
use crate::storage::ConfigStore;
use crate::validation::validate_config_input;
use tracing::{debug, info};

/// Headless model of the single-screen client. The connect button only
/// flips `status`; nothing here talks to the network.
pub struct AppState {
    store: ConfigStore,
    screen: Screen,
    status: ConnectionStatus,
    current_region: String,
    regions: Vec<Region>,
}

impl AppState {
    pub fn new(store: ConfigStore, default_region: &str) -> Self {
        let screen = if store.has_config() {
            Screen::Main
        } else {
            Screen::ConfigEntry
        };
        let regions = get_default_regions();
        let current_region = regions
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(default_region))
            .or_else(|| regions.first())
            .map(|r| r.name.clone())
            .unwrap_or_default();

        Self {
            store,
            screen,
            status: ConnectionStatus::Disconnected,
            current_region,
            regions,
        }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn current_region(&self) -> &str {
        &self.current_region
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn submit_config(&mut self, raw: &str, context: EntryContext) -> EntryFeedback {
        let config = match validate_config_input(raw) {
            Ok(config) => config,
            Err(e) => {
                debug!("Rejected configuration input: {}", e);
                return EntryFeedback::new(EntryOutcome::Invalid, rejection_message(e, context));
            }
        };

        if !self.store.save(&config) {
            return EntryFeedback::new(EntryOutcome::SaveFailed, match context {
                EntryContext::Onboarding => "Failed to save configuration",
                EntryContext::Update => "Failed to save",
            });
        }

        if self.screen == Screen::ConfigEntry {
            info!("Configuration stored, showing main screen");
            self.screen = Screen::Main;
        }

        EntryFeedback::new(EntryOutcome::Saved, match context {
            EntryContext::Onboarding => "Configuration saved!",
            EntryContext::Update => "Configuration updated!",
        })
    }

    pub fn toggle_connection(&mut self) -> ConnectionStatus {
        self.status = self.status.toggled();
        debug!("Connection indicator is now {:?}", self.status);
        self.status
    }

    pub fn select_region(&mut self, name: &str) -> Result<(), AppError> {
        let region = self
            .regions
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| AppError::UnknownRegion(name.trim().to_string()))?;
        self.current_region = region.name.clone();
        Ok(())
    }

    pub fn status_panel(&self) -> StatusPanel {
        StatusPanel::new(self.status, &self.current_region)
    }

    pub fn support_info(&self) -> SupportInfo {
        support_info()
    }
}

fn rejection_message(err: ConfigInputError, context: EntryContext) -> &'static str {
    match (err, context) {
        (ConfigInputError::Empty, EntryContext::Onboarding) => "Please enter a configuration",
        (ConfigInputError::Empty, EntryContext::Update) => "Enter a VPN configuration to connect",
        (ConfigInputError::TooShort { .. }, _) => "Configuration is too short",
    }
}
