use serde::Serialize;
use std::fmt;

use super::entities::DeviceEntities;

/// Action identifier used when nothing actionable was recognized.
pub const UNKNOWN_ACTION: &str = "unknown";
/// Device name used when no device entity was recognized.
pub const NO_DEVICE: &str = "none";

/// Recognized user command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    SwitchOn,
    SwitchOff,
    /// Any label outside the control vocabulary, kept verbatim.
    Other(String),
}

impl Intent {
    pub fn parse(label: &str) -> Self {
        match label {
            "switch_on" => Self::SwitchOn,
            "switch_off" => Self::SwitchOff,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::SwitchOn => "switch_on",
            Self::SwitchOff => "switch_off",
            Self::Other(label) => label,
        }
    }

    /// True for intents that drive a device.
    pub fn is_control(&self) -> bool {
        matches!(self, Self::SwitchOn | Self::SwitchOff)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Intent {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

/// Resolved action and the device it applies to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Action {
    pub action: String,
    pub device: String,
}

impl Action {
    pub fn unknown() -> Self {
        Self {
            action: UNKNOWN_ACTION.to_string(),
            device: NO_DEVICE.to_string(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.action == UNKNOWN_ACTION
    }

    /// Key of the illustrative asset for this action.
    pub fn asset_key(&self) -> String {
        format!("{}.jpg", self.action)
    }
}

/// Resolve an intent and its entities into an [`Action`].
pub fn resolve_action<E>(intent: &Intent, entities: &E) -> Action
where
    E: DeviceEntities + ?Sized,
{
    if !intent.is_control() || entities.is_empty() {
        return Action::unknown();
    }
    match entities.first_device() {
        Some(device) => Action {
            action: format!("{}_{}", intent.as_str(), device),
            device: device.to_string(),
        },
        None => Action::unknown(),
    }
}

/// Spoken confirmation for a resolved command, e.g. `OK, I'll switch on the lamp!`.
pub fn confirmation_text(intent: &Intent, device: &str) -> String {
    format!("OK, I'll {} the {}!", intent, device).replace('_', " ")
}
