//! Shared state types for the egui UI.

use crate::egui_app::ui::style;
use crate::passenger::PassengerDetails;
use egui::Color32;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    /// Current form values, bounded by the widgets that edit them.
    pub details: PassengerDetails,
    /// Banner for the latest prediction, cleared when any input changes.
    pub outcome: Option<OutcomeView>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            details: PassengerDetails::default(),
            outcome: None,
        }
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self {
            text: "Classifier not loaded".into(),
            badge_label: "Idle".into(),
            badge_color: style::status_badge_color(style::StatusTone::Idle),
        }
    }
}

/// Display data for one verdict banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeView {
    /// Whether the predicted class is survival.
    pub survived: bool,
    /// Full sentence shown to the user.
    pub message: String,
}
