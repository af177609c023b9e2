use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::profiles::Profile;

/// winpatable - run Windows professional software on Linux through Wine/Proton
#[derive(Parser)]
#[command(name = "winpatable")]
#[command(about = "Installs Windows applications into a Wine prefix with the components they need")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Dry-run mode: print the commands that would run without running them.
    ///
    /// The prefix layout and `tweaks.reg` are still written so the printed
    /// commands refer to real files. Applications are not recorded as
    /// installed in `config.json`.
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Install one or more applications (dependencies first)
    Install {
        /// Catalog keys to install
        #[arg(required_unless_present = "profile", conflicts_with = "profile")]
        keys: Vec<String>,

        /// Install the recommended applications of a profile
        #[arg(long)]
        profile: Option<Profile>,

        /// Vendor installer to run with wine (single application only)
        #[arg(short, long)]
        installer: Option<PathBuf>,

        /// Prefix directory (default: ~/.winpatable)
        #[arg(short, long)]
        prefix: Option<PathBuf>,

        /// Kill package-manager, winetricks and regedit calls after this many seconds
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },
    /// Print the resolved installation order without installing anything
    Plan {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// List every supported application
    ListApps,
    /// Install Wine, winetricks, VKD3D and fonts, then initialise the prefix
    SetupWine {
        /// Prefix directory (default: ~/.winpatable)
        #[arg(short, long)]
        prefix: Option<PathBuf>,
    },
    /// Use-case configuration profiles
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
    /// Print the environment an application is launched with
    Env {
        key: String,

        /// Prefix directory (default: ~/.winpatable)
        #[arg(short, long)]
        prefix: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// List available profiles
    List,
    /// Show a profile's settings, tweaks and recommended applications
    Show { name: Profile },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
