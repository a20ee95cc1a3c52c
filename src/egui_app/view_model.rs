//! Helpers to convert classifier output into egui-facing view structs.

use crate::egui_app::state::OutcomeView;
use crate::model::{Prediction, Verdict};

/// Format a probability in `[0, 1]` as a percentage with two decimals.
pub fn format_percent(probability: f32) -> String {
    format!("{:.2}%", probability * 100.0)
}

/// Convert a prediction into the verdict banner shown under the form.
///
/// The banner always reports the probability of the predicted class, so a
/// loss shows one minus the survival probability.
pub fn outcome_view(prediction: &Prediction) -> OutcomeView {
    let survived = prediction.verdict == Verdict::Survived;
    let shown = if survived {
        prediction.survival
    } else {
        1.0 - prediction.survival
    };
    let percent = format_percent(shown);
    let message = if survived {
        format!("The passenger survived with a probability of {percent}.")
    } else {
        format!("The passenger did not survive with a probability of {percent}.")
    };
    OutcomeView { survived, message }
}
