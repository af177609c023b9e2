//! Installer module
//!
//! Applies catalog entries to a prefix. One generic installer handles every
//! application; the entry's data decides what happens.
//!
//! Each entry goes through four steps in a fixed order:
//!
//! 1. System dependencies: one package-manager call
//! 2. Components: one `winetricks -q <dll>` call per component
//! 3. Registry: write `tweaks.reg`, import it with `regedit`
//! 4. Vendor installer: `wine <installer>` when a path is given
//!
//! A failing step is recorded and logged, and the next step still runs. A
//! failing entry never stops the rest of the plan; only an interrupt does.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::Serialize;
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::{debug, info, warn};

use crate::catalog::ApplicationEntry;
use crate::command::{CommandRunner, CommandSpec};
use crate::error::{Result, WinpatableError};
use crate::logic::environment;
use crate::package_manager::{self, PackageManager};
use crate::prefix::Prefix;
use crate::process_guard;
use crate::registry;

// ============================================================================
// Reports
// ============================================================================

const INTERRUPTED_REASON: &str = "interrupted";

/// The four installation steps, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum InstallStep {
    SystemDependencies,
    Components,
    Registry,
    VendorInstaller,
}

/// Outcome of one step (or one component within the component step).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum StepStatus {
    Succeeded,
    Skipped(String),
    Failed(String),
}

impl StepStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    fn from_error(err: &WinpatableError) -> Self {
        Self::Failed(err.to_string())
    }

    fn interrupted() -> Self {
        Self::Skipped(INTERRUPTED_REASON.into())
    }

    /// Skipped because an interrupt arrived before it started.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Skipped(reason) if reason == INTERRUPTED_REASON)
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded => write!(f, "ok"),
            Self::Skipped(reason) => write!(f, "skipped ({})", reason),
            Self::Failed(reason) => write!(f, "FAILED ({})", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: InstallStep,
    pub status: StepStatus,
    /// Per-component statuses; only filled for [`InstallStep::Components`]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<(String, StepStatus)>,
}

impl StepReport {
    fn new(step: InstallStep, status: StepStatus) -> Self {
        Self {
            step,
            status,
            components: Vec::new(),
        }
    }
}

/// Result of installing one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallReport {
    pub key: String,
    pub steps: Vec<StepReport>,
}

impl InstallReport {
    fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            steps: Vec::with_capacity(4),
        }
    }

    /// True once every step was attempted. Says nothing about success.
    pub fn all_attempted(&self) -> bool {
        InstallStep::iter().all(|step| self.step(step).is_some()) && !self.was_interrupted()
    }

    /// True if an interrupt cut this entry short.
    pub fn was_interrupted(&self) -> bool {
        self.steps.iter().any(|s| {
            s.status.is_interrupted() || s.components.iter().any(|(_, c)| c.is_interrupted())
        })
    }

    /// True if any step failed.
    pub fn has_warnings(&self) -> bool {
        self.steps.iter().any(|s| s.status.is_failed())
    }

    pub fn step(&self, step: InstallStep) -> Option<&StepReport> {
        self.steps.iter().find(|s| s.step == step)
    }

    /// Human-readable failure lines, one per failed step or component.
    pub fn failures(&self) -> Vec<String> {
        let mut out = Vec::new();
        for report in &self.steps {
            if report.components.is_empty() {
                if let StepStatus::Failed(reason) = &report.status {
                    out.push(format!("{}: {}", report.step, reason));
                }
            } else {
                for (dll, status) in &report.components {
                    if let StepStatus::Failed(reason) = status {
                        out.push(format!("{} {}: {}", report.step, dll, reason));
                    }
                }
            }
        }
        out
    }
}

/// Result of installing a whole plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlanReport {
    pub reports: Vec<InstallReport>,
    /// Set when an interrupt stopped the plan before its end
    pub interrupted: bool,
    /// Keys never attempted because of the interrupt
    pub not_attempted: Vec<String>,
}

impl PlanReport {
    pub fn has_warnings(&self) -> bool {
        self.reports.iter().any(InstallReport::has_warnings)
    }

    pub fn attempted_keys(&self) -> Vec<&str> {
        self.reports.iter().map(|r| r.key.as_str()).collect()
    }
}

// ============================================================================
// Installer
// ============================================================================

/// Installs catalog entries into one prefix.
pub struct Installer<R: CommandRunner> {
    runner: R,
    prefix: Prefix,
    package_manager: PackageManager,
    as_root: bool,
    step_timeout: Option<Duration>,
    interrupted: fn() -> bool,
    record_installs: bool,
}

impl<R: CommandRunner> Installer<R> {
    /// Installer using the host's package manager, privileges and interrupt flag.
    pub fn new(runner: R, prefix: Prefix) -> Self {
        Self {
            runner,
            prefix,
            package_manager: PackageManager::detect(),
            as_root: package_manager::is_running_as_root(),
            step_timeout: None,
            interrupted: process_guard::is_interrupted,
            record_installs: true,
        }
    }

    pub fn with_package_manager(mut self, package_manager: PackageManager, as_root: bool) -> Self {
        self.package_manager = package_manager;
        self.as_root = as_root;
        self
    }

    /// Timeout for package-manager, winetricks and regedit calls.
    /// The vendor installer is interactive and never times out.
    pub fn with_step_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.step_timeout = timeout;
        self
    }

    /// Replace the interrupt check consulted before every subprocess.
    pub fn with_interrupt_check(mut self, interrupted: fn() -> bool) -> Self {
        self.interrupted = interrupted;
        self
    }

    /// Whether finished entries are written to the `applications`
    /// subsystem of `config.json`. Off for dry runs.
    pub fn record_installs(mut self, record: bool) -> Self {
        self.record_installs = record;
        self
    }

    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Install every entry of `plan` in order.
    ///
    /// `installer_path` is only honoured for a single-entry plan. The
    /// interrupt flag is checked before each entry and again once the last
    /// entry returns.
    pub fn install_plan(
        &self,
        plan: &[&ApplicationEntry],
        installer_path: Option<&Path>,
    ) -> PlanReport {
        let installer_path = match (installer_path, plan.len()) {
            (Some(path), n) if n > 1 => {
                warn!(
                    "Ignoring installer {} for a plan of {} applications",
                    path.display(),
                    n
                );
                None
            }
            (path, _) => path,
        };

        let mut report = PlanReport::default();
        for (idx, entry) in plan.iter().enumerate() {
            if (self.interrupted)() {
                warn!("Interrupted, not installing remaining applications");
                report.interrupted = true;
                report.not_attempted = plan[idx..].iter().map(|e| e.key.clone()).collect();
                break;
            }
            info!("[{}/{}] {}", idx + 1, plan.len(), entry.display_name);
            report.reports.push(self.install_entry(entry, installer_path));
        }

        if !report.interrupted && (self.interrupted)() {
            warn!("Interrupted during the last application");
            report.interrupted = true;
        }
        report
    }

    /// Apply one entry to the prefix. Never fails; see the report.
    ///
    /// After an interrupt no further subprocess is started: the remaining
    /// steps and components are reported as skipped and the key is not
    /// recorded.
    pub fn install_entry(
        &self,
        entry: &ApplicationEntry,
        installer_path: Option<&Path>,
    ) -> InstallReport {
        info!("Installing {} ({})", entry.display_name, entry.key);
        let mut report = InstallReport::new(&entry.key);

        if let Err(e) = self.prefix.ensure_layout() {
            warn!("Could not prepare prefix {}: {}", self.prefix.root().display(), e);
        }

        report.steps.push(self.system_dependencies(entry));
        report.steps.push(self.components(entry));
        report.steps.push(self.registry(entry));
        report.steps.push(self.vendor_installer(entry, installer_path));

        for step in &report.steps {
            match &step.status {
                StepStatus::Failed(reason) => warn!("{}: {} step failed: {}", entry.key, step.step, reason),
                status => debug!("{}: {} {}", entry.key, step.step, status),
            }
        }

        if report.was_interrupted() {
            warn!("{} interrupted", entry.display_name);
            return report;
        }

        if self.record_installs {
            if let Err(e) = self.prefix.record_installed(&entry.key) {
                warn!("Could not record {} in prefix settings: {:#}", entry.key, e);
            }
        }

        if report.has_warnings() {
            warn!("{} installed with warnings", entry.display_name);
        } else {
            info!("{} installed", entry.display_name);
        }
        report
    }

    /// Run `spec` and turn a non-zero exit into a step error.
    fn run_checked(&self, step: InstallStep, spec: CommandSpec) -> Result<()> {
        let spec = match self.step_timeout {
            Some(timeout) => spec.with_timeout(timeout),
            None => spec,
        };
        let output = self.runner.run(&spec)?;
        if output.success {
            Ok(())
        } else {
            Err(WinpatableError::step(step, output.failure_message(&spec.program)))
        }
    }

    fn system_dependencies(&self, entry: &ApplicationEntry) -> StepReport {
        let step = InstallStep::SystemDependencies;
        if (self.interrupted)() {
            return StepReport::new(step, StepStatus::interrupted());
        }
        if entry.system_dependencies.is_empty() {
            return StepReport::new(step, StepStatus::Skipped("no system packages".into()));
        }

        let spec = self
            .package_manager
            .install_command(&entry.system_dependencies, self.as_root);
        let status = match self.run_checked(step, spec) {
            Ok(()) => StepStatus::Succeeded,
            Err(e) => StepStatus::from_error(&e),
        };
        StepReport::new(step, status)
    }

    fn components(&self, entry: &ApplicationEntry) -> StepReport {
        let step = InstallStep::Components;
        if entry.required_dlls.is_empty() {
            return StepReport::new(step, StepStatus::Skipped("no components".into()));
        }

        let prefix_root = self.prefix.root().display().to_string();
        let components: Vec<(String, StepStatus)> = entry
            .required_dlls
            .iter()
            .map(|dll| {
                if (self.interrupted)() {
                    return (dll.clone(), StepStatus::interrupted());
                }
                let spec = CommandSpec::new("winetricks")
                    .args(["-q", dll.as_str()])
                    .env("WINEPREFIX", prefix_root.as_str());
                let status = match self.run_checked(step, spec) {
                    Ok(()) => StepStatus::Succeeded,
                    Err(e) => {
                        warn!("{}: component {} failed: {}", entry.key, dll, e);
                        StepStatus::from_error(&e)
                    }
                };
                (dll.clone(), status)
            })
            .collect();

        let failed: Vec<&str> = components
            .iter()
            .filter(|(_, s)| s.is_failed())
            .map(|(dll, _)| dll.as_str())
            .collect();
        let status = if !failed.is_empty() {
            StepStatus::Failed(format!(
                "{} of {} components failed: {}",
                failed.len(),
                components.len(),
                failed.join(", ")
            ))
        } else if components.iter().any(|(_, s)| s.is_interrupted()) {
            StepStatus::interrupted()
        } else {
            StepStatus::Succeeded
        };

        StepReport {
            step,
            status,
            components,
        }
    }

    fn registry(&self, entry: &ApplicationEntry) -> StepReport {
        let step = InstallStep::Registry;
        if entry.registry_tweaks.is_empty() {
            return StepReport::new(step, StepStatus::Skipped("no registry tweaks".into()));
        }
        if (self.interrupted)() {
            return StepReport::new(step, StepStatus::interrupted());
        }

        let reg_file = self.prefix.registry_file();
        let result = registry::write_reg_file(&reg_file, &entry.registry_tweaks).and_then(|()| {
            let spec = CommandSpec::new("regedit")
                .arg(reg_file.display().to_string())
                .env("WINEPREFIX", self.prefix.root().display().to_string());
            self.run_checked(step, spec)
        });

        let status = match result {
            Ok(()) => StepStatus::Succeeded,
            Err(e) => StepStatus::from_error(&e),
        };
        StepReport::new(step, status)
    }

    /// The exit code of `wine` is logged but not interpreted; wine often
    /// exits 0 when a GUI installer failed, and non-zero when it succeeded.
    /// A path that was given but does not exist fails the step.
    fn vendor_installer(&self, entry: &ApplicationEntry, installer_path: Option<&Path>) -> StepReport {
        let step = InstallStep::VendorInstaller;
        let path = match installer_path {
            None => return StepReport::new(step, StepStatus::Skipped("no installer provided".into())),
            Some(path) if !path.exists() => {
                return StepReport::new(
                    step,
                    StepStatus::Failed(format!("installer not found: {}", path.display())),
                );
            }
            Some(path) => path,
        };
        if (self.interrupted)() {
            return StepReport::new(step, StepStatus::interrupted());
        }

        let spec = CommandSpec::new("wine")
            .arg(path.display().to_string())
            .envs(&environment::launch_overlay(self.prefix.root(), entry));

        let status = match self.runner.run(&spec) {
            Ok(output) => {
                if !output.success {
                    info!(
                        "wine exited with {:?} for {}; not treated as a failure",
                        output.exit_code,
                        path.display()
                    );
                }
                StepStatus::Succeeded
            }
            Err(e) => StepStatus::from_error(&e),
        };
        StepReport::new(step, status)
    }
}
