//! Registry tweaks and the REGEDIT4 import format
//!
//! Catalog entries carry registry tweaks as typed values. Before they can be
//! applied to a prefix they are rendered into the line-oriented text format
//! that `regedit` imports:
//!
//! ```text
//! REGEDIT4
//!
//! [HKEY_CURRENT_USER\Software\Wine\Direct3D]
//! "Renderer"="opengl"
//! "VideoMemorySize"=dword:00001000
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Header line expected by `regedit` for the legacy text format.
pub const REGEDIT_HEADER: &str = "REGEDIT4";

/// A single registry value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegistryValue {
    /// REG_SZ, written as `"name"="value"`
    String(String),
    /// REG_DWORD, written as `"name"=dword:xxxxxxxx`
    Dword(u32),
}

impl From<&str> for RegistryValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<u32> for RegistryValue {
    fn from(value: u32) -> Self {
        Self::Dword(value)
    }
}

impl fmt::Display for RegistryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "\"{}\"", escape(s)),
            Self::Dword(n) => write!(f, "dword:{:08x}", n),
        }
    }
}

/// One registry key with its values, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryKey {
    pub path: String,
    pub values: Vec<(String, RegistryValue)>,
}

impl RegistryKey {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            values: Vec::new(),
        }
    }

    /// Builder-style value insertion. A repeated name replaces the earlier value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<RegistryValue>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.values.push((name, value)),
        }
        self
    }
}

/// Escape backslashes and quotes the way regedit expects inside strings.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render tweaks into REGEDIT4 import text.
pub fn to_reg_file(tweaks: &[RegistryKey]) -> String {
    let mut out = String::new();
    out.push_str(REGEDIT_HEADER);
    out.push_str("\n\n");

    for key in tweaks {
        out.push_str(&format!("[{}]\n", key.path));
        for (name, value) in &key.values {
            out.push_str(&format!("\"{}\"={}\n", escape(name), value));
        }
        out.push('\n');
    }

    out
}

/// Write the rendered tweaks to `path`, creating parent directories.
pub fn write_reg_file(path: &Path, tweaks: &[RegistryKey]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_reg_file(tweaks))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dword_and_string_lines() {
        let tweaks = vec![RegistryKey::new("HKEY_CURRENT_USER\\X")
            .with("Flag", 1u32)
            .with("Mode", "opengl")];
        let text = to_reg_file(&tweaks);

        assert!(text.starts_with("REGEDIT4\n\n"));
        assert!(text.contains("[HKEY_CURRENT_USER\\X]\n"));
        assert!(text.lines().any(|l| l == "\"Flag\"=dword:00000001"));
        assert!(text.lines().any(|l| l == "\"Mode\"=\"opengl\""));
    }

    #[test]
    fn test_dword_is_lowercase_fixed_width() {
        assert_eq!(RegistryValue::Dword(4096).to_string(), "dword:00001000");
        assert_eq!(RegistryValue::Dword(0xABCDEF).to_string(), "dword:00abcdef");
        assert_eq!(RegistryValue::Dword(u32::MAX).to_string(), "dword:ffffffff");
    }

    #[test]
    fn test_string_escaping() {
        let value = RegistryValue::from("C:\\Program Files\\\"App\"");
        assert_eq!(value.to_string(), "\"C:\\\\Program Files\\\\\\\"App\\\"\"");
    }

    #[test]
    fn test_empty_tweaks_is_header_only() {
        assert_eq!(to_reg_file(&[]), "REGEDIT4\n\n");
    }

    #[test]
    fn test_with_replaces_duplicate_name() {
        let key = RegistryKey::new("HKEY_CURRENT_USER\\Y")
            .with("A", 1u32)
            .with("A", "two");
        assert_eq!(key.values.len(), 1);
        assert_eq!(key.values[0].1, RegistryValue::String("two".into()));
    }

    #[test]
    fn test_key_order_is_preserved() {
        let tweaks = vec![
            RegistryKey::new("HKEY_CURRENT_USER\\B").with("x", 0u32),
            RegistryKey::new("HKEY_CURRENT_USER\\A").with("y", 0u32),
        ];
        let text = to_reg_file(&tweaks);
        let b = text.find("[HKEY_CURRENT_USER\\B]").unwrap();
        let a = text.find("[HKEY_CURRENT_USER\\A]").unwrap();
        assert!(b < a);
    }

    #[test]
    fn test_write_reg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tweaks.reg");
        let tweaks = vec![RegistryKey::new("HKEY_CURRENT_USER\\Z").with("On", 1u32)];

        write_reg_file(&path, &tweaks).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, to_reg_file(&tweaks));
    }
}
