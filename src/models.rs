use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, Default)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connected,
}

impl ConnectionStatus {
    pub fn toggled(self) -> Self {
        match self {
            ConnectionStatus::Disconnected => ConnectionStatus::Connected,
            ConnectionStatus::Connected => ConnectionStatus::Disconnected,
        }
    }

    pub fn is_connected(self) -> bool {
        self == ConnectionStatus::Connected
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub flag: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tone {
    Bright,
    Dim,
}

/// The three text lines shown under the connect button.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StatusPanel {
    pub status: String,
    pub ip: String,
    pub location: String,
    pub tone: Tone,
}

impl StatusPanel {
    pub fn new(status: ConnectionStatus, region: &str) -> Self {
        match status {
            ConnectionStatus::Connected => Self {
                status: "CONNECTED".to_string(),
                ip: "IP: 192.168.1.1".to_string(),
                location: format!("LOCATION: {}", region),
                tone: Tone::Bright,
            },
            ConnectionStatus::Disconnected => Self {
                status: "DISCONNECTED".to_string(),
                ip: "IP: HIDDEN".to_string(),
                location: format!("LOCATION: {}", region),
                tone: Tone::Dim,
            },
        }
    }

    pub fn lines(&self) -> [&str; 3] {
        [self.status.as_str(), self.ip.as_str(), self.location.as_str()]
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Screen {
    ConfigEntry,
    Main,
}

/// Where a configuration was entered from. The first-run screen and the
/// menu popup word their messages differently.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EntryContext {
    Onboarding,
    Update,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FeedbackTone {
    Success,
    Error,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EntryOutcome {
    Saved,
    Invalid,
    SaveFailed,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EntryFeedback {
    pub message: String,
    pub outcome: EntryOutcome,
}

impl EntryFeedback {
    pub fn new(outcome: EntryOutcome, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            outcome,
        }
    }

    pub fn tone(&self) -> FeedbackTone {
        match self.outcome {
            EntryOutcome::Saved => FeedbackTone::Success,
            EntryOutcome::Invalid | EntryOutcome::SaveFailed => FeedbackTone::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == EntryOutcome::Saved
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SupportInfo {
    pub email: &'static str,
    pub telegram: &'static str,
    pub hours: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let status = ConnectionStatus::default();
        assert_eq!(status, ConnectionStatus::Disconnected);
        assert!(status.toggled().is_connected());
        assert_eq!(status.toggled().toggled(), status);
    }

    #[test]
    fn test_status_panel_text() {
        let on = StatusPanel::new(ConnectionStatus::Connected, "JAPAN");
        assert_eq!(on.lines(), ["CONNECTED", "IP: 192.168.1.1", "LOCATION: JAPAN"]);
        assert_eq!(on.tone, Tone::Bright);

        let off = StatusPanel::new(ConnectionStatus::Disconnected, "USA");
        assert_eq!(off.lines(), ["DISCONNECTED", "IP: HIDDEN", "LOCATION: USA"]);
        assert_eq!(off.tone, Tone::Dim);
    }
}
