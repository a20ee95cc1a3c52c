mod support;

use support::env::ConfigHomeGuard;

use lifeboat::app_dirs::CONFIG_HOME_ENV;
use lifeboat::egui_app::controller::EguiController;
use lifeboat::model::{BUNDLED_ARTIFACT_JSON, BUNDLED_ARTIFACT_NAME};
use lifeboat::passenger::{EmbarkPort, PassengerClass, Sex};
use regex::Regex;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct LaunchHarness {
    _config: ConfigHomeGuard,
    temp: TempDir,
}

impl LaunchHarness {
    fn new() -> Self {
        let temp = tempfile::tempdir().expect("create tempdir");
        let config_home = temp.path().join("config");
        std::fs::create_dir_all(&config_home).expect("create config dir");
        let env = ConfigHomeGuard::set_config_home(config_home);
        Self { _config: env, temp }
    }

    fn scratch(&self) -> &Path {
        self.temp.path()
    }

    fn app_root(&self) -> PathBuf {
        self.temp.path().join("config").join(".lifeboat")
    }

    fn installed_artifact(&self) -> PathBuf {
        self.app_root().join("models").join(BUNDLED_ARTIFACT_NAME)
    }

    fn write_settings(&self, body: &str) {
        let root = self.app_root();
        std::fs::create_dir_all(&root).expect("create app root");
        std::fs::write(root.join("settings.toml"), body).expect("write settings");
    }
}

#[test]
fn harness_relocates_the_config_home_variable() {
    let harness = LaunchHarness::new();
    let expected = harness.scratch().join("config");
    assert_eq!(
        std::env::var_os(CONFIG_HOME_ENV),
        Some(expected.into_os_string())
    );
}

#[test]
fn first_launch_installs_the_bundled_artifact() {
    let harness = LaunchHarness::new();
    let controller = EguiController::launch().expect("launch succeeds");
    assert_eq!(controller.model_tag(), "titanic_logreg_v1 v1");
    assert_eq!(controller.artifact_path(), harness.installed_artifact());
    let installed =
        std::fs::read_to_string(harness.installed_artifact()).expect("installed artifact");
    assert_eq!(installed, BUNDLED_ARTIFACT_JSON);
}

#[test]
fn survival_example_reports_a_two_decimal_probability() {
    let _harness = LaunchHarness::new();
    let mut controller = EguiController::launch().expect("launch succeeds");
    controller.set_sex(Sex::Female);
    controller.set_embarked(EmbarkPort::Southampton);
    controller.predict();
    let outcome = controller.ui.outcome.clone().expect("banner present");
    assert!(outcome.survived);
    let pattern = Regex::new(r"^The passenger survived with a probability of 9\d\.\d{2}%\.$")
        .expect("valid pattern");
    assert!(
        pattern.is_match(&outcome.message),
        "unexpected banner: {}",
        outcome.message
    );
}

#[test]
fn loss_example_reports_the_complement_probability() {
    let _harness = LaunchHarness::new();
    let mut controller = EguiController::launch().expect("launch succeeds");
    controller.set_class(PassengerClass::Third);
    controller.set_age(40);
    controller.set_siblings_spouses(2);
    controller.set_parents_children(1);
    controller.set_fare(7.5);
    controller.predict();
    let outcome = controller.ui.outcome.clone().expect("banner present");
    assert!(!outcome.survived);
    assert_eq!(
        outcome.message,
        "The passenger did not survive with a probability of 96.58%."
    );
}

#[test]
fn second_launch_keeps_the_installed_artifact() {
    let harness = LaunchHarness::new();
    EguiController::launch().expect("first launch");
    let path = harness.installed_artifact();
    let mut artifact: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("read installed"))
            .expect("parse installed");
    artifact["model_version"] = 2.into();
    std::fs::write(&path, serde_json::to_string(&artifact).expect("serialize"))
        .expect("write customized");
    let controller = EguiController::launch().expect("second launch");
    assert_eq!(controller.model_tag(), "titanic_logreg_v1 v2");
}

#[test]
fn settings_override_bypasses_the_models_folder() {
    let harness = LaunchHarness::new();
    let custom = harness.scratch().join("custom_model.json");
    let mut artifact: serde_json::Value =
        serde_json::from_str(BUNDLED_ARTIFACT_JSON).expect("parse bundled");
    artifact["model_id"] = "custom_logreg".into();
    std::fs::write(&custom, serde_json::to_string(&artifact).expect("serialize"))
        .expect("write custom artifact");
    harness.write_settings(&format!("model_path = {:?}\n", custom));
    let controller = EguiController::launch().expect("launch with override");
    assert_eq!(controller.model_tag(), "custom_logreg v1");
    assert_eq!(controller.artifact_path(), custom);
    assert!(!harness.installed_artifact().exists());
}

#[test]
fn corrupt_settings_fail_the_launch() {
    let harness = LaunchHarness::new();
    harness.write_settings("model_path = [not, closed");
    let err = EguiController::launch().expect_err("launch must fail");
    assert!(err.contains("Invalid settings"), "unexpected error: {err}");
}

#[test]
fn missing_override_artifact_fails_with_its_path() {
    let harness = LaunchHarness::new();
    let ghost = harness.scratch().join("missing_model.json");
    harness.write_settings(&format!("model_path = {:?}\n", ghost));
    let err = EguiController::launch().expect_err("launch must fail");
    assert!(err.contains("Failed to read"), "unexpected error: {err}");
    assert!(err.contains("missing_model.json"), "unexpected error: {err}");
}

#[test]
fn corrupted_installed_artifact_is_reported_not_replaced() {
    let harness = LaunchHarness::new();
    EguiController::launch().expect("first launch");
    std::fs::write(harness.installed_artifact(), "{ truncated").expect("corrupt artifact");
    let err = EguiController::launch().expect_err("corrupt artifact fails");
    assert!(err.contains("Invalid artifact"), "unexpected error: {err}");
    let left_behind =
        std::fs::read_to_string(harness.installed_artifact()).expect("file still present");
    assert_eq!(left_behind, "{ truncated");
}
