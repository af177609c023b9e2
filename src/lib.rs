//! winpatable library
//!
//! Catalog, dependency resolution and installation of Windows applications
//! into Wine/Proton prefixes.

pub mod catalog;
pub mod cli;
pub mod command;
pub mod error;
pub mod installer;
pub mod logic;
pub mod package_manager;
pub mod prefix;
pub mod process_guard;
pub mod profiles;
pub mod registry;
pub mod runtime;
pub mod sanity;

// Re-export main types for convenience
pub use catalog::{ApplicationEntry, Catalog, DependencyGraph};
pub use command::{CommandOutput, CommandRunner, CommandSpec, RecordingRunner, SystemRunner};
pub use error::{Result, WinpatableError};
pub use installer::{InstallReport, InstallStep, Installer, PlanReport, StepReport, StepStatus};
pub use logic::environment::{baseline_environment, compose_environment, overlay, EnvMap};
pub use logic::resolver::{resolve_keys, resolve_order};
pub use package_manager::PackageManager;
pub use prefix::{Prefix, PrefixSettings};
pub use process_guard::{ChildRegistry, CommandProcessGroup, ProcessGuard};
pub use profiles::Profile;
pub use registry::{to_reg_file, RegistryKey, RegistryValue};
pub use runtime::{setup_runtime, RuntimeReport, RuntimeStep};
