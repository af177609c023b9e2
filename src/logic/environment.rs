//! Environment composition for launch and install steps
//!
//! Layers, later layers win on key collision:
//!
//! 1. The current process environment
//! 2. A fixed baseline (prefix, architecture, shader cache, compiler
//!    threads, vsync disabled)
//! 3. The application's own variables

use std::collections::BTreeMap;
use std::path::Path;

use crate::catalog::ApplicationEntry;

/// Environment variable map, sorted for stable output.
pub type EnvMap = BTreeMap<String, String>;

/// Number of DXVK shader compiler threads set by the baseline.
pub const COMPILER_THREADS: u32 = 4;

/// Subdirectory of the prefix used for the DXVK shader cache.
pub const SHADER_CACHE_DIR: &str = "cache";

/// The fixed baseline overlaid on the process environment.
pub fn baseline_environment(prefix_root: &Path) -> EnvMap {
    let mut env = EnvMap::new();
    env.insert("WINEPREFIX".into(), prefix_root.display().to_string());
    env.insert("WINEARCH".into(), "win64".into());
    env.insert(
        "DXVK_STATE_CACHE_PATH".into(),
        prefix_root.join(SHADER_CACHE_DIR).display().to_string(),
    );
    env.insert(
        "DXVK_NUM_COMPILER_THREADS".into(),
        COMPILER_THREADS.to_string(),
    );
    env.insert("DXVK_HUD".into(), "off".into());
    env.insert("STAGING_SHARED_MEMORY".into(), "1".into());
    // Mesa: disable vsync
    env.insert("vblank_mode".into(), "0".into());
    env
}

/// Overlay `top` onto `base`; keys in `top` replace keys in `base`.
pub fn overlay(base: &mut EnvMap, top: &EnvMap) {
    for (key, value) in top {
        base.insert(key.clone(), value.clone());
    }
}

/// Compose `process_env`, then `baseline`, then `app` into one map.
pub fn compose_layers<I>(process_env: I, baseline: &EnvMap, app: &EnvMap) -> EnvMap
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut env: EnvMap = process_env.into_iter().collect();
    overlay(&mut env, baseline);
    overlay(&mut env, app);
    env
}

/// Process environment, then the baseline for `prefix_root`, then `app`.
pub fn compose_environment<I>(process_env: I, prefix_root: &Path, app: &EnvMap) -> EnvMap
where
    I: IntoIterator<Item = (String, String)>,
{
    compose_layers(process_env, &baseline_environment(prefix_root), app)
}

/// Full environment for running `entry` inside `prefix_root`, starting from
/// this process's environment.
pub fn compose_for_entry(prefix_root: &Path, entry: &ApplicationEntry) -> EnvMap {
    compose_environment(std::env::vars(), prefix_root, &entry.environment_variables)
}

/// Only the variables winpatable sets on top of the process environment.
pub fn launch_overlay(prefix_root: &Path, entry: &ApplicationEntry) -> EnvMap {
    compose_environment(std::iter::empty(), prefix_root, &entry.environment_variables)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> EnvMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_app_overlay_wins_over_baseline() {
        let process = vec![("HOME".to_string(), "/home/user".to_string())];
        let env = compose_layers(process, &map(&[("A", "1")]), &map(&[("A", "2"), ("B", "3")]));

        assert_eq!(env.get("A").map(String::as_str), Some("2"));
        assert_eq!(env.get("B").map(String::as_str), Some("3"));
        assert_eq!(env.get("HOME").map(String::as_str), Some("/home/user"));
        assert_eq!(env.len(), 3);
    }

    #[test]
    fn test_baseline_wins_over_process() {
        let process = vec![("WINEARCH".to_string(), "win32".to_string())];
        let env = compose_environment(process, Path::new("/p"), &EnvMap::new());
        assert_eq!(env["WINEARCH"], "win64");
    }

    #[test]
    fn test_baseline_contents() {
        let env = baseline_environment(Path::new("/home/user/.winpatable"));
        assert_eq!(env["WINEPREFIX"], "/home/user/.winpatable");
        assert_eq!(env["WINEARCH"], "win64");
        assert_eq!(env["DXVK_STATE_CACHE_PATH"], "/home/user/.winpatable/cache");
        assert_eq!(env["DXVK_NUM_COMPILER_THREADS"], "4");
        assert_eq!(env["vblank_mode"], "0");
    }

    #[test]
    fn test_entry_variables_applied() {
        let catalog = crate::catalog::Catalog::builtin();
        let jetbrains = catalog.get("jetbrains").unwrap();
        let env = launch_overlay(Path::new("/p"), jetbrains);
        assert_eq!(env["_JAVA_OPTIONS"], "-Xmx4096m");
        assert_eq!(env["WINEPREFIX"], "/p");
    }

    #[test]
    fn test_compose_for_entry_keeps_process_env() {
        let entry = ApplicationEntry::new("x", "X", "x.exe").with_env("DXVK_HUD", "fps");
        let env = compose_for_entry(Path::new("/p"), &entry);
        assert_eq!(env["DXVK_HUD"], "fps");
        if let Ok(path) = std::env::var("PATH") {
            assert_eq!(env["PATH"], path);
        }
    }
}
