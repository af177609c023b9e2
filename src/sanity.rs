//! Pre-flight checks for external tools
//!
//! Missing tools do not abort anything: the affected installation steps fail
//! on their own and are reported. This check only tells the user up front
//! and points at `setup-wine`.

use crate::process_guard::CommandProcessGroup;
use std::process::Command;
use tracing::{debug, warn};

/// Tools the installer invokes for every application
pub const REQUIRED_TOOLS: &[&str] = &["wine", "winetricks", "regedit"];

/// Result of environment verification
#[derive(Debug)]
pub struct SanityCheckResult {
    pub missing_tools: Vec<String>,
    pub is_root: bool,
}

impl SanityCheckResult {
    pub fn is_ok(&self) -> bool {
        self.missing_tools.is_empty()
    }
}

/// Check if a binary is available in PATH
fn binary_exists(name: &str) -> bool {
    Command::new("which")
        .arg(name)
        .in_new_process_group()
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Check each of `tools` and report which are missing.
pub fn verify_tools(tools: &[&str]) -> SanityCheckResult {
    let missing_tools = tools
        .iter()
        .filter(|tool| !binary_exists(tool))
        .map(|tool| tool.to_string())
        .collect();

    SanityCheckResult {
        missing_tools,
        is_root: crate::package_manager::is_running_as_root(),
    }
}

/// Warn about missing tools before installing. Returns the check result.
pub fn run_preflight_checks() -> SanityCheckResult {
    debug!("Running pre-flight checks...");
    let result = verify_tools(REQUIRED_TOOLS);

    if result.is_ok() {
        debug!("Pre-flight checks passed: root={}", result.is_root);
    } else {
        warn!(
            "Missing tools: {}. Affected steps will fail; run `winpatable setup-wine` first.",
            result.missing_tools.join(", ")
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_tools_reports_missing() {
        let result = verify_tools(&["winpatable-definitely-missing"]);
        assert_eq!(result.missing_tools, vec!["winpatable-definitely-missing"]);
        assert!(!result.is_ok());
    }

    #[test]
    fn test_empty_tool_list_is_ok() {
        assert!(verify_tools(&[]).is_ok());
    }
}
