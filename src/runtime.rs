//! Compatibility-layer runtime setup
//!
//! Brings a Debian-family host and a fresh prefix to the point where catalog
//! entries can be installed: enable the i386 architecture, install wine with
//! winetricks, VKD3D, the Windows font packages and the shader tooling used
//! by the D3D wrappers, initialise the prefix and write the default settings.
//!
//! `wineserver` ships inside the Debian `wine` packages and is not installed
//! on its own.
//!
//! Like the installer, every step is best effort and reported.

use serde::Serialize;
use strum::{Display, EnumIter};
use tracing::{info, warn};

use crate::command::{CommandRunner, CommandSpec};
use crate::error::WinpatableError;
use crate::installer::StepStatus;
use crate::package_manager::{with_privilege, PackageManager};
use crate::prefix::{Prefix, PrefixSettings};

pub const RUNTIME_PACKAGES: &[&str] = &["wine", "wine32", "wine64", "winetricks", "fonts-wine"];
pub const VKD3D_PACKAGES: &[&str] = &["libvkd3d-1", "libvkd3d-dev"];
pub const FONT_PACKAGES: &[&str] = &["fonts-liberation", "fonts-noto", "ttf-mscorefonts-installer"];
/// Shader compilation support for the D3D wrappers
pub const D3D_WRAPPER_PACKAGES: &[&str] = &["mesa-utils", "glslang-tools", "libglslang-dev"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RuntimeStep {
    PrefixLayout,
    AddArchitecture,
    UpdateIndex,
    RuntimePackages,
    Vkd3d,
    Fonts,
    D3dWrappers,
    Wineboot,
    Settings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuntimeReport {
    pub steps: Vec<(RuntimeStep, StepStatus)>,
}

impl RuntimeReport {
    pub fn has_warnings(&self) -> bool {
        self.steps.iter().any(|(_, s)| s.is_failed())
    }

    pub fn status(&self, step: RuntimeStep) -> Option<&StepStatus> {
        self.steps.iter().find(|(s, _)| *s == step).map(|(_, status)| status)
    }

    fn record(&mut self, step: RuntimeStep, status: StepStatus) {
        match &status {
            StepStatus::Failed(reason) => warn!("Runtime setup: {} failed: {}", step, reason),
            status => info!("Runtime setup: {} {}", step, status),
        }
        self.steps.push((step, status));
    }
}

fn run<R: CommandRunner>(runner: &R, spec: CommandSpec) -> StepStatus {
    match runner.run(&spec) {
        Ok(output) if output.success => StepStatus::Succeeded,
        Ok(output) => StepStatus::Failed(output.failure_message(&spec.program)),
        Err(e) => StepStatus::Failed(e.to_string()),
    }
}

/// Install the runtime and initialise `prefix`.
pub fn setup_runtime<R: CommandRunner>(
    prefix: &Prefix,
    runner: &R,
    package_manager: PackageManager,
    as_root: bool,
) -> RuntimeReport {
    info!("Setting up compatibility layer in {}", prefix.root().display());
    let mut report = RuntimeReport::default();

    let layout = match prefix.ensure_layout().and_then(|()| {
        std::fs::create_dir_all(prefix.cache_dir()).map_err(WinpatableError::from)
    }) {
        Ok(()) => StepStatus::Succeeded,
        Err(e) => StepStatus::Failed(e.to_string()),
    };
    report.record(RuntimeStep::PrefixLayout, layout);

    let add_arch = with_privilege(
        CommandSpec::new("dpkg").args(["--add-architecture", "i386"]),
        as_root,
    );
    report.record(RuntimeStep::AddArchitecture, run(runner, add_arch));
    report.record(
        RuntimeStep::UpdateIndex,
        run(runner, package_manager.update_command(as_root)),
    );
    report.record(
        RuntimeStep::RuntimePackages,
        run(runner, package_manager.install_command(RUNTIME_PACKAGES, as_root)),
    );
    report.record(
        RuntimeStep::Vkd3d,
        run(runner, package_manager.install_command(VKD3D_PACKAGES, as_root)),
    );
    report.record(
        RuntimeStep::Fonts,
        run(runner, package_manager.install_command(FONT_PACKAGES, as_root)),
    );
    report.record(
        RuntimeStep::D3dWrappers,
        run(runner, package_manager.install_command(D3D_WRAPPER_PACKAGES, as_root)),
    );

    let wineboot = CommandSpec::new("wineboot")
        .arg("--init")
        .env("WINEPREFIX", prefix.root().display().to_string())
        .env("WINEARCH", "win64");
    report.record(RuntimeStep::Wineboot, run(runner, wineboot));

    let settings = prefix.load_settings().and_then(|mut settings| {
        settings.merge(&PrefixSettings::runtime_defaults());
        prefix.save_settings(&settings)
    });
    let settings = match settings {
        Ok(()) => StepStatus::Succeeded,
        Err(e) => StepStatus::Failed(format!("{:#}", e)),
    };
    report.record(RuntimeStep::Settings, settings);

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::RecordingRunner;
    use strum::IntoEnumIterator;
    use tempfile::tempdir;

    #[test]
    fn test_setup_runs_every_step_in_order() {
        let dir = tempdir().unwrap();
        let prefix = Prefix::new(dir.path().join("wp"));
        let runner = RecordingRunner::new();

        let report = setup_runtime(&prefix, &runner, PackageManager::Apt, false);

        assert!(!report.has_warnings());
        let steps: Vec<RuntimeStep> = report.steps.iter().map(|(s, _)| *s).collect();
        assert_eq!(steps, RuntimeStep::iter().collect::<Vec<_>>());
        assert_eq!(
            runner.command_lines(),
            vec![
                "sudo dpkg --add-architecture i386",
                "sudo apt update",
                "sudo apt install -y wine wine32 wine64 winetricks fonts-wine",
                "sudo apt install -y libvkd3d-1 libvkd3d-dev",
                "sudo apt install -y fonts-liberation fonts-noto ttf-mscorefonts-installer",
                "sudo apt install -y mesa-utils glslang-tools libglslang-dev",
                "wineboot --init",
            ]
        );
        assert!(prefix.applications_dir().is_dir());
        assert!(prefix.cache_dir().is_dir());
    }

    #[test]
    fn test_failures_do_not_stop_setup() {
        let dir = tempdir().unwrap();
        let prefix = Prefix::new(dir.path());
        let runner = RecordingRunner::new()
            .exit_with("apt install -y libvkd3d", 100)
            .missing("wineboot");

        let report = setup_runtime(&prefix, &runner, PackageManager::Apt, true);

        assert!(report.has_warnings());
        assert!(report.status(RuntimeStep::Vkd3d).unwrap().is_failed());
        assert!(report.status(RuntimeStep::Wineboot).unwrap().is_failed());
        assert_eq!(report.status(RuntimeStep::Fonts), Some(&StepStatus::Succeeded));
        assert_eq!(report.status(RuntimeStep::D3dWrappers), Some(&StepStatus::Succeeded));
        assert_eq!(report.status(RuntimeStep::Settings), Some(&StepStatus::Succeeded));
    }

    #[test]
    fn test_settings_are_merged_into_existing_config() {
        let dir = tempdir().unwrap();
        let prefix = Prefix::new(dir.path());
        prefix.record_installed("office").unwrap();

        setup_runtime(&prefix, &RecordingRunner::new(), PackageManager::AptGet, true);

        let settings = prefix.load_settings().unwrap();
        assert_eq!(settings.get("Wine", "Staging"), Some(&serde_json::Value::from("enabled")));
        assert_eq!(prefix.installed_applications().unwrap(), vec!["office"]);
    }
}
