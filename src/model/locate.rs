//! Artifact resolution: explicit override or the installed bundled copy.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// File name of the installed classifier artifact.
pub const BUNDLED_ARTIFACT_NAME: &str = "titanic_logreg_v1.json";

/// Classifier artifact compiled into the binary.
pub const BUNDLED_ARTIFACT_JSON: &str = include_str!("../../assets/titanic_logreg_v1.json");

/// Errors raised while seeding the models directory.
#[derive(Debug, Error)]
pub enum InstallError {
    /// Failed to create the models directory.
    #[error("Unable to create models directory {path}: {source}")]
    CreateDir {
        /// Directory path that failed to create.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to stage the bundled artifact.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Staging file path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to move the staged artifact into place.
    #[error("Failed to move {path}: {source}")]
    Rename {
        /// Final artifact path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Resolve the artifact path for this run.
///
/// An explicit override wins unchanged. Otherwise the artifact lives in
/// `models/` under the app root and is seeded from the compiled-in copy on
/// first run; an existing file is never overwritten.
pub fn resolve_artifact_path(
    override_path: Option<&Path>,
    app_root: &Path,
) -> Result<PathBuf, InstallError> {
    if let Some(path) = override_path {
        return Ok(path.to_path_buf());
    }
    let models_dir = ensure_models_dir(app_root)?;
    let target = models_dir.join(BUNDLED_ARTIFACT_NAME);
    if !target.exists() {
        install_bundled_artifact(&target)?;
    }
    Ok(target)
}

fn ensure_models_dir(app_root: &Path) -> Result<PathBuf, InstallError> {
    let models_dir = app_root.join("models");
    fs::create_dir_all(&models_dir).map_err(|source| InstallError::CreateDir {
        path: models_dir.clone(),
        source,
    })?;
    Ok(models_dir)
}

fn install_bundled_artifact(target: &Path) -> Result<(), InstallError> {
    let tmp = target.with_extension("tmp");
    fs::write(&tmp, BUNDLED_ARTIFACT_JSON).map_err(|source| InstallError::Write {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, target).map_err(|source| InstallError::Rename {
        path: target.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LogisticArtifact, SurvivalModel, Verdict};
    use crate::passenger::{EmbarkPort, PassengerClass, PassengerDetails, Sex};

    #[test]
    fn bundled_artifact_parses_and_validates() {
        let artifact: LogisticArtifact = serde_json::from_str(BUNDLED_ARTIFACT_JSON).unwrap();
        artifact.validate().unwrap();
        assert_eq!(artifact.tag(), "titanic_logreg_v1 v1");
    }

    #[test]
    fn bundled_artifact_favors_the_first_class_woman() {
        let artifact: LogisticArtifact = serde_json::from_str(BUNDLED_ARTIFACT_JSON).unwrap();
        let details = PassengerDetails {
            class: PassengerClass::First,
            age: 25,
            siblings_spouses: 0,
            parents_children: 0,
            fare: 30.0,
            sex: Sex::Female,
            embarked: EmbarkPort::Southampton,
        };
        let prediction = artifact.predict(&details.feature_vector());
        assert_eq!(prediction.verdict, Verdict::Survived);
        assert!(prediction.survival > 0.90 && prediction.survival < 0.97);
    }

    #[test]
    fn bundled_artifact_condemns_the_third_class_man() {
        let artifact: LogisticArtifact = serde_json::from_str(BUNDLED_ARTIFACT_JSON).unwrap();
        let details = PassengerDetails {
            class: PassengerClass::Third,
            age: 40,
            siblings_spouses: 2,
            parents_children: 1,
            fare: 7.5,
            sex: Sex::Male,
            embarked: EmbarkPort::Queenstown,
        };
        let prediction = artifact.predict(&details.feature_vector());
        assert_eq!(prediction.verdict, Verdict::DidNotSurvive);
        assert!(prediction.survival < 0.10);
    }

    #[test]
    fn resolve_prefers_an_explicit_override() {
        let dir = tempfile::tempdir().unwrap();
        let override_path = dir.path().join("custom.json");
        let resolved =
            resolve_artifact_path(Some(&override_path), &dir.path().join("unused-root")).unwrap();
        assert_eq!(resolved, override_path);
        assert!(!dir.path().join("unused-root").exists());
    }

    #[test]
    fn resolve_seeds_the_models_dir_once() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = resolve_artifact_path(None, dir.path()).unwrap();
        assert_eq!(resolved, dir.path().join("models").join(BUNDLED_ARTIFACT_NAME));
        assert_eq!(fs::read_to_string(&resolved).unwrap(), BUNDLED_ARTIFACT_JSON);
        assert!(!resolved.with_extension("tmp").exists());

        fs::write(&resolved, "customized").unwrap();
        let again = resolve_artifact_path(None, dir.path()).unwrap();
        assert_eq!(again, resolved);
        assert_eq!(fs::read_to_string(&again).unwrap(), "customized");
    }
}
