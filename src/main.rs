//! winpatable - main entry point
//!
//! Parses the command line, sets up logging and signal handling, then
//! dispatches to the library.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use strum::IntoEnumIterator;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use winpatable::cli::{Cli, Commands, ProfileCommands};
use winpatable::logic::environment;
use winpatable::package_manager::{self, PackageManager};
use winpatable::process_guard::{self, ProcessGuard, INTERRUPT_EXIT_CODE};
use winpatable::{
    resolve_keys, resolve_order, sanity, setup_runtime, Catalog, Installer,
    PlanReport, Prefix, Profile, RecordingRunner, StepStatus, SystemRunner, WinpatableError,
};

/// Initialize tracing; RUST_LOG overrides the level chosen by `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);
    debug!("winpatable {} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = process_guard::init_signal_handlers() {
        warn!("Failed to initialize signal handlers: {}", e);
    }
    let _guard = ProcessGuard::new();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            let code = match e.downcast_ref::<WinpatableError>() {
                Some(err) => err.exit_code(),
                None => 1,
            };
            error!("{:#}", e);
            eprintln!("✗ {:#}", e);
            ExitCode::from(code as u8)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let catalog = Catalog::builtin();

    match cli.command {
        Commands::Install {
            keys,
            profile,
            installer: installer_path,
            prefix,
            timeout,
        } => {
            let keys: Vec<String> = match profile {
                Some(profile) => profile.recommended_apps().iter().map(|k| k.to_string()).collect(),
                None => keys,
            };

            // Resolve before touching the prefix: an unknown key changes nothing
            let plan = resolve_order(&catalog, &keys, &catalog.dependency_graph())?;
            let prefix = prefix_or_default(prefix)?;

            if let Some(profile) = profile {
                apply_profile(&prefix, profile)?;
            }

            let timeout = timeout.map(Duration::from_secs);
            let report = if cli.dry_run {
                let runner = RecordingRunner::new();
                let report = Installer::new(&runner, prefix)
                    .with_step_timeout(timeout)
                    .record_installs(false)
                    .install_plan(&plan, installer_path.as_deref());
                print_dry_run(&runner);
                report
            } else {
                sanity::run_preflight_checks();
                Installer::new(SystemRunner, prefix)
                    .with_step_timeout(timeout)
                    .install_plan(&plan, installer_path.as_deref())
            };

            print_plan_report(&report);
            Ok(if report.interrupted {
                INTERRUPT_EXIT_CODE as u8
            } else {
                0
            })
        }

        Commands::Plan { keys } => {
            let order = resolve_keys(&catalog, &keys, &catalog.dependency_graph())?;
            for (idx, key) in order.iter().enumerate() {
                println!("{:>3}. {}", idx + 1, key);
            }
            Ok(0)
        }

        Commands::ListApps => {
            println!("{:<14} {:<36} {:>6}  GPU", "KEY", "APPLICATION", "RAM");
            for entry in catalog.list_all() {
                println!(
                    "{:<14} {:<36} {:>4}GB  {}",
                    entry.key,
                    entry.display_name,
                    entry.minimum_ram_gb,
                    if entry.gpu_required { "yes" } else { "-" }
                );
            }
            println!("\n{} applications", catalog.len());
            Ok(0)
        }

        Commands::SetupWine { prefix } => {
            let prefix = prefix_or_default(prefix)?;
            let package_manager = PackageManager::detect();
            let as_root = package_manager::is_running_as_root();
            info!("Using {} (root: {})", package_manager, as_root);

            let report = if cli.dry_run {
                let runner = RecordingRunner::new();
                let report = setup_runtime(&prefix, &runner, package_manager, as_root);
                print_dry_run(&runner);
                report
            } else {
                setup_runtime(&prefix, &SystemRunner, package_manager, as_root)
            };

            for (step, status) in &report.steps {
                println!("{} {}: {}", status_mark(status), step, status);
            }
            if process_guard::is_interrupted() {
                return Ok(INTERRUPT_EXIT_CODE as u8);
            }
            Ok(0)
        }

        Commands::Profile { action } => {
            match action {
                ProfileCommands::List => {
                    for profile in Profile::iter() {
                        println!(
                            "{:<12} {} ({} applications)",
                            profile,
                            profile.description(),
                            profile.recommended_apps().len()
                        );
                    }
                }
                ProfileCommands::Show { name } => print_profile(name),
            }
            Ok(0)
        }

        Commands::Env { key, prefix } => {
            let entry = catalog.require(&key)?;
            let prefix = prefix_or_default(prefix)?;
            for (name, value) in environment::launch_overlay(prefix.root(), entry) {
                println!("{}={}", name, value);
            }
            Ok(0)
        }
    }
}

fn prefix_or_default(path: Option<PathBuf>) -> Result<Prefix> {
    match path {
        Some(path) => Ok(Prefix::new(path)),
        None => Ok(Prefix::default_location()?),
    }
}

fn apply_profile(prefix: &Prefix, profile: Profile) -> Result<()> {
    prefix
        .ensure_layout()
        .with_context(|| format!("Failed to create prefix {}", prefix.root().display()))?;
    let mut settings = prefix.load_settings()?;
    profile.apply_to(&mut settings);
    prefix.save_settings(&settings)?;
    info!("Applied profile {} to {}", profile.title(), prefix.root().display());
    Ok(())
}

fn print_dry_run(runner: &RecordingRunner) {
    println!("Commands that would run:");
    for line in runner.command_lines() {
        println!("  {}", line);
    }
}

fn status_mark(status: &StepStatus) -> &'static str {
    match status {
        StepStatus::Succeeded => "✓",
        StepStatus::Skipped(_) => "-",
        StepStatus::Failed(_) => "✗",
    }
}

fn print_plan_report(report: &PlanReport) {
    for install in &report.reports {
        println!("\n{}", install.key);
        for step in &install.steps {
            println!("  {} {}: {}", status_mark(&step.status), step.step, step.status);
            for (dll, status) in &step.components {
                if status.is_failed() {
                    println!("      ✗ {}: {}", dll, status);
                }
            }
        }
    }

    println!();
    if report.interrupted && report.not_attempted.is_empty() {
        println!("Interrupted.");
    } else if report.interrupted {
        println!(
            "Interrupted. Not installed: {}",
            report.not_attempted.join(", ")
        );
    } else if report.has_warnings() {
        println!("All applications attempted, with warnings (see above).");
    } else {
        println!("All applications installed.");
    }
}

fn print_profile(profile: Profile) {
    println!("{} ({})", profile.title(), profile);
    println!("{}\n", profile.description());

    println!("Settings:");
    for (name, value) in profile.settings() {
        println!("  {}: {}", name, serde_json::Value::from(*value));
    }

    println!("\nTweaks:");
    for (idx, tweak) in profile.tweaks().iter().enumerate() {
        println!("  {}. {}", idx + 1, tweak);
    }

    println!("\nRecommended applications:");
    for key in profile.recommended_apps() {
        println!("  • {}", key);
    }
}
