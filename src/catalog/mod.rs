//! Application compatibility catalog
//!
//! Static description of every supported Windows application: which
//! compatibility-layer components it needs, which registry tweaks and
//! environment variables it wants, which native packages it depends on, and
//! which other catalog entries must be installed before it.
//!
//! The catalog is constructed once (`Catalog::builtin()` or, in tests, from
//! fixture entries) and then only borrowed. There is no global catalog state.
//!
//! # Invariants
//!
//! - Keys are unique and lowercase
//! - `required_dlls` and `system_dependencies` contain no duplicates
//! - `depends_on` only names keys present in the same catalog

mod builtin;

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::Serialize;

use crate::error::{Result, WinpatableError};
use crate::registry::RegistryKey;

/// Declared prerequisite edges: key -> keys that must be installed first.
pub type DependencyGraph = BTreeMap<String, BTreeSet<String>>;

/// Static description of one supported application's installation requirements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationEntry {
    pub key: String,
    pub display_name: String,
    pub windows_executable: String,
    /// Compatibility-layer components (winetricks verbs), in install order
    pub required_dlls: Vec<String>,
    pub registry_tweaks: Vec<RegistryKey>,
    pub environment_variables: BTreeMap<String, String>,
    /// Native host packages
    pub system_dependencies: Vec<String>,
    /// Catalog keys that must be installed before this one
    pub depends_on: Vec<String>,
    /// Advisory only
    pub minimum_ram_gb: u32,
    /// Advisory only
    pub gpu_required: bool,
    pub notes: String,
}

impl ApplicationEntry {
    /// Create an entry with no requirements beyond its identity.
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        windows_executable: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            windows_executable: windows_executable.into(),
            required_dlls: Vec::new(),
            registry_tweaks: Vec::new(),
            environment_variables: BTreeMap::new(),
            system_dependencies: Vec::new(),
            depends_on: Vec::new(),
            minimum_ram_gb: 4,
            gpu_required: false,
            notes: String::new(),
        }
    }

    pub fn with_dlls(mut self, dlls: &[&str]) -> Self {
        self.required_dlls = dlls.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_packages(mut self, packages: &[&str]) -> Self {
        self.system_dependencies = packages.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_registry(mut self, key: RegistryKey) -> Self {
        self.registry_tweaks.push(key);
        self
    }

    pub fn with_env(mut self, name: &str, value: &str) -> Self {
        self.environment_variables
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn depending_on(mut self, keys: &[&str]) -> Self {
        self.depends_on = keys.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_requirements(mut self, minimum_ram_gb: u32, gpu_required: bool) -> Self {
        self.minimum_ram_gb = minimum_ram_gb;
        self.gpu_required = gpu_required;
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = notes.to_string();
        self
    }
}

/// Read-only collection of application entries in declaration order.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<ApplicationEntry>,
}

impl Catalog {
    /// Build a catalog from explicit entries, validating the catalog invariants.
    pub fn new(entries: Vec<ApplicationEntry>) -> Result<Self> {
        let mut seen = HashSet::new();

        for entry in &entries {
            if entry.key.is_empty() || entry.key != entry.key.to_lowercase() {
                return Err(WinpatableError::config(format!(
                    "catalog key '{}' must be non-empty and lowercase",
                    entry.key
                )));
            }
            if !seen.insert(entry.key.as_str()) {
                return Err(WinpatableError::config(format!(
                    "duplicate catalog key '{}'",
                    entry.key
                )));
            }
            if let Some(dup) = first_duplicate(&entry.required_dlls) {
                return Err(WinpatableError::config(format!(
                    "'{}' lists component '{}' twice",
                    entry.key, dup
                )));
            }
            if let Some(dup) = first_duplicate(&entry.system_dependencies) {
                return Err(WinpatableError::config(format!(
                    "'{}' lists package '{}' twice",
                    entry.key, dup
                )));
            }
        }

        for entry in &entries {
            for dep in &entry.depends_on {
                if !seen.contains(dep.as_str()) {
                    return Err(WinpatableError::config(format!(
                        "'{}' depends on unknown key '{}'",
                        entry.key, dep
                    )));
                }
            }
        }

        Ok(Self { entries })
    }

    /// The built-in catalog of supported applications.
    pub fn builtin() -> Self {
        Self {
            entries: builtin::entries(),
        }
    }

    /// Case-insensitive lookup. Never fails; absent keys give `None`.
    pub fn get(&self, key: &str) -> Option<&ApplicationEntry> {
        let key = key.trim().to_lowercase();
        self.entries.iter().find(|e| e.key == key)
    }

    /// Lookup that reports an absent key as `UnknownApplication`.
    pub fn require(&self, key: &str) -> Result<&ApplicationEntry> {
        self.get(key)
            .ok_or_else(|| WinpatableError::unknown_application(key))
    }

    /// All entries in declaration order.
    pub fn list_all(&self) -> &[ApplicationEntry] {
        &self.entries
    }

    /// Declaration index of `key`, used for deterministic tie-breaking.
    pub fn position(&self, key: &str) -> Option<usize> {
        let key = key.to_lowercase();
        self.entries.iter().position(|e| e.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dependency graph built from every entry's `depends_on`.
    pub fn dependency_graph(&self) -> DependencyGraph {
        self.entries
            .iter()
            .filter(|e| !e.depends_on.is_empty())
            .map(|e| (e.key.clone(), e.depends_on.iter().cloned().collect()))
            .collect()
    }
}

fn first_duplicate(items: &[String]) -> Option<&str> {
    let mut seen = HashSet::new();
    items
        .iter()
        .find(|item| !seen.insert(item.as_str()))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup_is_case_insensitive() {
        let catalog = Catalog::builtin();
        for entry in catalog.list_all() {
            let found = catalog.get(&entry.key.to_uppercase()).unwrap();
            assert_eq!(found.key, entry.key.to_lowercase());
        }
    }

    #[test]
    fn test_builtin_passes_validation() {
        let catalog = Catalog::builtin();
        let rebuilt = Catalog::new(catalog.list_all().to_vec());
        assert!(rebuilt.is_ok(), "{:?}", rebuilt.err());
    }

    #[test]
    fn test_builtin_has_no_duplicate_components() {
        for entry in Catalog::builtin().list_all() {
            assert!(first_duplicate(&entry.required_dlls).is_none(), "{}", entry.key);
            assert!(first_duplicate(&entry.system_dependencies).is_none(), "{}", entry.key);
        }
    }

    #[test]
    fn test_builtin_contract_keys_present() {
        let catalog = Catalog::builtin();
        for key in [
            "premiere", "vegas", "3dsmax", "office", "photoshop", "teams", "visio",
            "lightroom", "illustrator", "aftereffects", "revit", "sketchbook",
            "coreldraw", "corelpainter", "copilot", "access", "notepad++",
        ] {
            assert!(catalog.get(key).is_some(), "missing catalog key {}", key);
        }
    }

    #[test]
    fn test_get_unknown_returns_none() {
        let catalog = Catalog::builtin();
        assert!(catalog.get("photoshop2").is_none());
        assert!(catalog.get("").is_none());
    }

    #[test]
    fn test_require_unknown_names_key() {
        let catalog = Catalog::builtin();
        match catalog.require("photoshop2") {
            Err(WinpatableError::UnknownApplication(key)) => assert_eq!(key, "photoshop2"),
            other => panic!("expected UnknownApplication, got {:?}", other),
        }
    }

    #[test]
    fn test_list_all_is_declaration_order() {
        let catalog = Catalog::builtin();
        let keys: Vec<&str> = catalog.list_all().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(&keys[..4], &["premiere", "vegas", "3dsmax", "office"]);
        assert_eq!(catalog.position("premiere"), Some(0));
        assert_eq!(catalog.position("OFFICE"), Some(3));
    }

    #[test]
    fn test_visio_depends_on_office() {
        let graph = Catalog::builtin().dependency_graph();
        assert!(graph["visio"].contains("office"));
    }

    #[test]
    fn test_office_entry_data() {
        let catalog = Catalog::builtin();
        let office = catalog.get("office").unwrap();
        assert_eq!(office.display_name, "Microsoft Office");
        assert_eq!(office.windows_executable, "WINWORD.EXE");
        assert_eq!(office.required_dlls, ["dotnet48", "corefonts", "vcrun2019", "vb6run"]);
        assert_eq!(office.system_dependencies, ["libssl-dev"]);
        assert_eq!(office.minimum_ram_gb, 4);
        assert!(!office.gpu_required);
    }

    #[test]
    fn test_new_rejects_duplicate_keys() {
        let entries = vec![
            ApplicationEntry::new("a", "A", "a.exe"),
            ApplicationEntry::new("a", "A again", "a.exe"),
        ];
        assert!(matches!(Catalog::new(entries), Err(WinpatableError::Config(_))));
    }

    #[test]
    fn test_new_rejects_uppercase_key() {
        let entries = vec![ApplicationEntry::new("Office", "Office", "WINWORD.EXE")];
        assert!(Catalog::new(entries).is_err());
    }

    #[test]
    fn test_new_rejects_duplicate_dlls() {
        let entries =
            vec![ApplicationEntry::new("a", "A", "a.exe").with_dlls(&["dotnet48", "dotnet48"])];
        assert!(Catalog::new(entries).is_err());
    }

    #[test]
    fn test_new_rejects_dangling_dependency() {
        let entries = vec![ApplicationEntry::new("a", "A", "a.exe").depending_on(&["b"])];
        assert!(Catalog::new(entries).is_err());
    }
}
