//! Bridges the survival classifier to the egui form.

use crate::app_dirs;
use crate::egui_app::state::UiState;
use crate::egui_app::ui::style::{self, StatusTone};
use crate::egui_app::view_model;
use crate::model::{self, LogisticArtifact, SurvivalModel};
use crate::passenger::{EmbarkPort, PassengerClass, Sex};
use crate::settings;
use egui::Color32;
use std::path::{Path, PathBuf};

/// Maintains form state and bridges the classifier to the egui UI.
///
/// The classifier is loaded once at launch and never swapped afterwards;
/// every prediction goes through the same immutable artifact.
#[derive(Debug)]
pub struct EguiController {
    pub ui: UiState,
    artifact: LogisticArtifact,
    artifact_path: PathBuf,
}

impl EguiController {
    /// Build a controller around an already loaded classifier.
    pub fn new(artifact: LogisticArtifact, artifact_path: PathBuf) -> Self {
        let mut controller = Self {
            ui: UiState::default(),
            artifact,
            artifact_path,
        };
        let ready = format!("Classifier {} ready", controller.artifact.tag());
        controller.set_status(ready, StatusTone::Idle);
        controller
    }

    /// Load settings, place the bundled artifact if needed, and read the classifier.
    ///
    /// Failures are flattened to display strings for the launch error screen.
    pub fn launch() -> Result<Self, String> {
        let settings = settings::load_or_default().map_err(|err| err.to_string())?;
        let app_root = app_dirs::app_root_dir().map_err(|err| err.to_string())?;
        let artifact_path = model::resolve_artifact_path(settings.model_path.as_deref(), &app_root)
            .map_err(|err| err.to_string())?;
        let artifact =
            LogisticArtifact::load_json(&artifact_path).map_err(|err| err.to_string())?;
        tracing::info!(
            "Classifier {} loaded from {}",
            artifact.tag(),
            artifact_path.display()
        );
        Ok(Self::new(artifact, artifact_path))
    }

    /// Identifier and version of the loaded classifier.
    pub fn model_tag(&self) -> String {
        self.artifact.tag()
    }

    /// Location the classifier was read from.
    pub fn artifact_path(&self) -> &Path {
        &self.artifact_path
    }

    pub fn set_class(&mut self, class: PassengerClass) {
        if self.ui.details.class != class {
            self.ui.details.class = class;
            self.clear_outcome();
        }
    }

    pub fn set_age(&mut self, age: u32) {
        if self.ui.details.age != age {
            self.ui.details.age = age;
            self.clear_outcome();
        }
    }

    pub fn set_siblings_spouses(&mut self, count: u32) {
        if self.ui.details.siblings_spouses != count {
            self.ui.details.siblings_spouses = count;
            self.clear_outcome();
        }
    }

    pub fn set_parents_children(&mut self, count: u32) {
        if self.ui.details.parents_children != count {
            self.ui.details.parents_children = count;
            self.clear_outcome();
        }
    }

    pub fn set_fare(&mut self, fare: f32) {
        if self.ui.details.fare != fare {
            self.ui.details.fare = fare;
            self.clear_outcome();
        }
    }

    pub fn set_sex(&mut self, sex: Sex) {
        if self.ui.details.sex != sex {
            self.ui.details.sex = sex;
            self.clear_outcome();
        }
    }

    pub fn set_embarked(&mut self, port: EmbarkPort) {
        if self.ui.details.embarked != port {
            self.ui.details.embarked = port;
            self.clear_outcome();
        }
    }

    /// Run the classifier against the current form values.
    pub fn predict(&mut self) {
        let features = self.ui.details.feature_vector();
        let prediction = self.artifact.predict(&features);
        tracing::debug!(
            "Predicted {:?} with survival probability {:.4} for {:?}",
            prediction.verdict,
            prediction.survival,
            features.values()
        );
        self.ui.outcome = Some(view_model::outcome_view(&prediction));
        self.set_status("Prediction complete", StatusTone::Info);
    }

    pub fn open_config_folder(&mut self) {
        match app_dirs::app_root_dir() {
            Ok(path) => {
                if let Err(err) = open::that(&path) {
                    self.set_status(
                        format!("Could not open config folder {}: {err}", path.display()),
                        StatusTone::Error,
                    );
                }
            }
            Err(err) => {
                self.set_status(
                    format!("Could not resolve config folder: {err}"),
                    StatusTone::Error,
                );
            }
        }
    }

    pub fn open_models_folder(&mut self) {
        let Some(folder) = self.artifact_path.parent() else {
            self.set_status("Classifier artifact has no parent folder", StatusTone::Error);
            return;
        };
        if let Err(err) = open::that(folder) {
            self.set_status(
                format!("Could not open models folder {}: {err}", folder.display()),
                StatusTone::Error,
            );
        }
    }

    // A stale verdict would misreport edited inputs, so any change drops it.
    fn clear_outcome(&mut self) {
        self.ui.outcome = None;
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        let (label, color) = status_badge(tone);
        self.ui.status.text = text.into();
        self.ui.status.badge_label = label;
        self.ui.status.badge_color = color;
    }
}

fn status_badge(tone: StatusTone) -> (String, Color32) {
    let label = match tone {
        StatusTone::Idle => "Idle",
        StatusTone::Info => "Info",
        StatusTone::Error => "Error",
    };
    (label.into(), style::status_badge_color(tone))
}
