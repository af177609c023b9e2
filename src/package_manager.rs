//! Host package manager detection and command construction
//!
//! Only Debian-family managers are supported. `apt` is preferred over
//! `apt-get` when both exist. Commands are prefixed with `sudo` unless the
//! process already runs as root.

use std::path::Path;

use strum::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::command::CommandSpec;

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum PackageManager {
    Apt,
    AptGet,
}

impl PackageManager {
    /// Absolute path probed by [`PackageManager::detect`].
    pub fn binary_path(&self) -> &'static str {
        match self {
            Self::Apt => "/usr/bin/apt",
            Self::AptGet => "/usr/bin/apt-get",
        }
    }

    /// Probe the host, falling back to `apt` when neither binary is found.
    pub fn detect() -> Self {
        Self::detect_with(|path| Path::new(path).exists())
    }

    /// Detection with an injectable existence check.
    pub fn detect_with<F: Fn(&str) -> bool>(exists: F) -> Self {
        let found = [Self::Apt, Self::AptGet]
            .into_iter()
            .find(|pm| exists(pm.binary_path()));
        debug!("Detected package manager: {:?}", found);
        found.unwrap_or(Self::Apt)
    }

    /// `[sudo] <manager> install -y <packages...>`
    pub fn install_command<S: AsRef<str>>(&self, packages: &[S], as_root: bool) -> CommandSpec {
        let args = std::iter::once("install".to_string())
            .chain(std::iter::once("-y".to_string()))
            .chain(packages.iter().map(|p| p.as_ref().to_string()));
        self.privileged(args, as_root)
    }

    /// `[sudo] <manager> update`
    pub fn update_command(&self, as_root: bool) -> CommandSpec {
        self.privileged(std::iter::once("update".to_string()), as_root)
    }

    fn privileged<I: IntoIterator<Item = String>>(&self, args: I, as_root: bool) -> CommandSpec {
        with_privilege(CommandSpec::new(self.to_string()).args(args), as_root)
    }
}

/// Wrap `spec` in `sudo` unless already root. The env overlay is kept.
pub fn with_privilege(spec: CommandSpec, as_root: bool) -> CommandSpec {
    if as_root {
        return spec;
    }
    let CommandSpec {
        program,
        args,
        env,
        timeout,
    } = spec;
    CommandSpec {
        program: "sudo".to_string(),
        args: std::iter::once(program).chain(args).collect(),
        env,
        timeout,
    }
}

/// Check if running as root (EUID 0)
pub fn is_running_as_root() -> bool {
    nix::unistd::geteuid().is_root()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_display_names() {
        assert_eq!(PackageManager::Apt.to_string(), "apt");
        assert_eq!(PackageManager::AptGet.to_string(), "apt-get");
        assert_eq!(PackageManager::from_str("apt-get").unwrap(), PackageManager::AptGet);
    }

    #[test]
    fn test_detect_prefers_apt() {
        assert_eq!(PackageManager::detect_with(|_| true), PackageManager::Apt);
        assert_eq!(
            PackageManager::detect_with(|p| p == "/usr/bin/apt-get"),
            PackageManager::AptGet
        );
        assert_eq!(PackageManager::detect_with(|_| false), PackageManager::Apt);
    }

    #[test]
    fn test_install_command_as_root() {
        let spec = PackageManager::Apt.install_command(&["libssl-dev", "libfreetype6"], true);
        assert_eq!(spec.to_string(), "apt install -y libssl-dev libfreetype6");
    }

    #[test]
    fn test_install_command_uses_sudo_when_not_root() {
        let spec = PackageManager::AptGet.install_command(&["wine"], false);
        assert_eq!(spec.program, "sudo");
        assert_eq!(spec.to_string(), "sudo apt-get install -y wine");
    }

    #[test]
    fn test_update_command() {
        assert_eq!(PackageManager::Apt.update_command(true).to_string(), "apt update");
        assert_eq!(PackageManager::Apt.update_command(false).to_string(), "sudo apt update");
    }
}
