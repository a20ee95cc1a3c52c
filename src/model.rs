//! Survival classifier trait and the logistic regression artifact behind it.

mod artifact;
mod locate;

pub use artifact::{ArtifactError, LogisticArtifact};
pub use locate::{
    BUNDLED_ARTIFACT_JSON, BUNDLED_ARTIFACT_NAME, InstallError, resolve_artifact_path,
};

use crate::passenger::FeatureVector;

/// Binary outcome assigned to a passenger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The passenger is predicted to have died.
    DidNotSurvive,
    /// The passenger is predicted to have survived.
    Survived,
}

/// One classifier invocation: the verdict plus the survival probability.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prediction {
    /// Predicted class.
    pub verdict: Verdict,
    /// Probability of the survival class, in `[0, 1]`, whatever the verdict.
    pub survival: f32,
}

/// Binary survival classifier over encoded passenger features.
///
/// Implementations are immutable after load; every call is a pure read, so a
/// shared reference is all a caller ever needs.
pub trait SurvivalModel {
    /// Probability in `[0, 1]` that the passenger survived.
    fn survival_probability(&self, features: &FeatureVector) -> f32;

    /// Class assigned to the passenger.
    fn classify(&self, features: &FeatureVector) -> Verdict;

    /// Run both steps; the reported probability is always the survival class's.
    fn predict(&self, features: &FeatureVector) -> Prediction {
        let survival = self.survival_probability(features).clamp(0.0, 1.0);
        let verdict = self.classify(features);
        Prediction { verdict, survival }
    }
}

/// Numerically stable logistic function.
///
/// Both branches keep the exponent non-positive so large magnitudes saturate
/// to 0 or 1 instead of overflowing.
pub fn sigmoid(x: f32) -> f32 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}
