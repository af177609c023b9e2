//! Use-case configuration profiles.
//!
//! A profile bundles a set of prefix settings, a list of recommended catalog
//! applications and human-readable tuning advice. `install --profile <name>`
//! writes the settings and installs the recommended applications.
//!
//! # Supported Profiles
//!
//! | Profile     | Focus | Applications |
//! |-------------|-------|--------------|
//! | Gaming      | DXVK, esync/fsync, low audio latency | 5 |
//! | Creative    | GPU acceleration, colour management | 9 |
//! | Business    | Stability, no DXVK | 9 |
//! | Development | IDE responsiveness, .NET | 5 |
//! | Audio       | Low latency, RT priority | 5 |

use serde_json::Value;
use strum::{Display, EnumIter, EnumString};

use crate::prefix::PrefixSettings;

/// Subsystem of `config.json` that holds the applied profile.
pub const PROFILE_SUBSYSTEM: &str = "profile";

/// Use-case profile selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Profile {
    /// Game compatibility and frame pacing.
    Gaming,
    /// Adobe, 3D and video tools.
    Creative,
    /// Office and business software.
    Business,
    /// IDEs and developer tools.
    Development,
    /// DAWs and audio software.
    Audio,
}

/// A typed profile setting value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    Flag(bool),
    Version(&'static str),
}

impl From<Setting> for Value {
    fn from(setting: Setting) -> Self {
        match setting {
            Setting::Flag(b) => Value::Bool(b),
            Setting::Version(v) => Value::from(v),
        }
    }
}

use Setting::{Flag, Version};

impl Profile {
    pub fn title(&self) -> &'static str {
        match self {
            Profile::Gaming => "Gaming Optimization",
            Profile::Creative => "Creative Professional",
            Profile::Business => "Business & Productivity",
            Profile::Development => "Development & Programming",
            Profile::Audio => "Audio Production",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Profile::Gaming => "Optimized for game compatibility and performance",
            Profile::Creative => "Optimized for creative applications (Adobe, 3D, video)",
            Profile::Business => "Optimized for office and business applications",
            Profile::Development => "Optimized for IDEs and development tools",
            Profile::Audio => "Optimized for DAWs and audio software",
        }
    }

    /// Settings written to the `profile` subsystem, in display order.
    pub fn settings(&self) -> &'static [(&'static str, Setting)] {
        match self {
            Profile::Gaming => &[
                ("esync", Flag(true)),
                ("fsync", Flag(true)),
                ("dxvk", Flag(true)),
                ("gpu_acceleration", Flag(true)),
                ("audio_lowlatency", Flag(true)),
                ("wine_min", Version("8.0")),
                ("proton_min", Version("8.0")),
            ],
            Profile::Creative => &[
                ("esync", Flag(true)),
                ("dxvk", Flag(true)),
                ("gpu_acceleration", Flag(true)),
                ("cuda_support", Flag(true)),
                ("color_management", Flag(true)),
                ("wine_min", Version("7.5")),
                ("proton_min", Version("7.0")),
            ],
            Profile::Business => &[
                ("esync", Flag(true)),
                ("dxvk", Flag(false)),
                ("gpu_acceleration", Flag(false)),
                ("stability", Flag(true)),
                ("wine_min", Version("7.0")),
                ("proton_min", Version("6.5")),
            ],
            Profile::Development => &[
                ("esync", Flag(true)),
                ("dxvk", Flag(false)),
                ("gpu_acceleration", Flag(false)),
                ("wine_min", Version("7.0")),
                ("proton_min", Version("6.5")),
            ],
            Profile::Audio => &[
                ("esync", Flag(true)),
                ("fsync", Flag(true)),
                ("audio_lowlatency", Flag(true)),
                ("rtc_priority", Flag(true)),
                ("wine_min", Version("7.2")),
                ("proton_min", Version("6.5")),
            ],
        }
    }

    /// Recommended catalog keys, in recommended install order.
    pub fn recommended_apps(&self) -> &'static [&'static str] {
        match self {
            Profile::Gaming => &["eaapp", "valorant", "r6siege", "unity", "unreal"],
            Profile::Creative => &[
                "photoshop",
                "lightroom",
                "illustrator",
                "aftereffects",
                "indesign",
                "premiere",
                "paintnet",
                "figma",
                "3dsmax",
            ],
            Profile::Business => &[
                "office",
                "visio",
                "teams",
                "sharepoint",
                "access",
                "quickbooks",
                "turbotax",
                "tableau",
                "powerbi",
            ],
            Profile::Development => &["visualstudio", "jetbrains", "notepad++", "unity", "unreal"],
            Profile::Audio => &["protools", "cubase", "reason", "ableton", "audition"],
        }
    }

    /// Tuning advice shown by `profile show`.
    pub fn tweaks(&self) -> &'static [&'static str] {
        match self {
            Profile::Gaming => &[
                "Enable ESYNC for better performance",
                "Enable FSYNC if kernel supports it",
                "Use DXVK for DirectX acceleration",
                "Enable GPU acceleration",
                "Reduce audio latency for competitive gaming",
            ],
            Profile::Creative => &[
                "Enable GPU acceleration for faster rendering",
                "Configure color management for accurate reproduction",
                "Increase memory limits for large projects",
                "Enable ESYNC for smooth interaction",
                "Use high-performance GPU drivers",
            ],
            Profile::Business => &[
                "Focus on stability over performance",
                "Enable basic ESYNC for responsiveness",
                "Disable GPU acceleration (not needed)",
                "Use standard CSMT settings",
                "Keep Wine environment clean",
            ],
            Profile::Development => &[
                "Enable ESYNC for editor responsiveness",
                "Disable GPU features (not needed)",
                "Use standard Wine configuration",
                "Ensure .NET runtime compatibility",
                "Configure debugger support",
            ],
            Profile::Audio => &[
                "Enable ESYNC and FSYNC for low latency",
                "Configure JACK for professional audio",
                "Increase RT priority for audio threads",
                "Use high-performance audio drivers",
                "Disable unnecessary background processes",
            ],
        }
    }

    /// Record this profile and its settings in `settings`.
    pub fn apply_to(&self, settings: &mut PrefixSettings) {
        settings.set(PROFILE_SUBSYSTEM, "name", Value::from(self.to_string()));
        for (name, value) in self.settings() {
            settings.set(PROFILE_SUBSYSTEM, name, Value::from(*value));
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
