//! Process lifecycle management for child processes
//!
//! Package-manager, winetricks and wine invocations can run for a long time.
//! This module makes sure they do not outlive winpatable, and that an
//! interrupt stops a plan between entries instead of half-way through the
//! next one.
//!
//! # Solution
//! - Spawn children in their own process group
//! - Track all child PIDs in a global registry
//! - On SIGINT/SIGTERM/SIGHUP: raise the interrupt flag and send SIGTERM to
//!   every registered group; a second signal exits immediately
//! - On parent exit (Drop), SIGTERM remaining children, SIGKILL after 5s

use nix::libc;
use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Global registry of child process IDs
static CHILD_REGISTRY: OnceLock<Arc<Mutex<ChildRegistry>>> = OnceLock::new();

/// Set by the signal thread, read by the installer between plan entries
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Exit code used after an interrupt (128 + SIGINT)
pub const INTERRUPT_EXIT_CODE: i32 = 130;

/// Whether an interrupt signal has been received.
pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Raise the interrupt flag. Returns true if it was already raised.
pub fn request_interrupt() -> bool {
    INTERRUPTED.swap(true, Ordering::SeqCst)
}

/// Clear the interrupt flag.
pub fn reset_interrupt() {
    INTERRUPTED.store(false, Ordering::SeqCst);
}

/// Registry tracking all spawned child processes
#[derive(Debug, Default)]
pub struct ChildRegistry {
    pids: HashSet<u32>,
    /// Prevents double cleanup on exit
    cleanup_initiated: bool,
}

impl ChildRegistry {
    /// Get or create the global child registry
    pub fn global() -> Arc<Mutex<ChildRegistry>> {
        CHILD_REGISTRY
            .get_or_init(|| Arc::new(Mutex::new(ChildRegistry::default())))
            .clone()
    }

    pub fn register(&mut self, pid: u32) {
        self.pids.insert(pid);
        debug!("Registered child process PID {}", pid);
    }

    pub fn unregister(&mut self, pid: u32) {
        self.pids.remove(&pid);
        debug!("Unregistered child process PID {}", pid);
    }

    pub fn count(&self) -> usize {
        self.pids.len()
    }

    /// Send SIGTERM to every registered process group without waiting.
    ///
    /// Used on interrupt: the runner that owns each child reaps it and
    /// reports the failed step.
    pub fn signal_all(&self, sig: Signal) {
        for &pid in &self.pids {
            if let Err(e) = send_signal_to_group(pid, sig) {
                debug!("Group signal to {} failed ({}), signalling PID", pid, e);
                if let Err(e) = send_signal(pid, sig) {
                    warn!("Failed to send {:?} to PID {}: {}", sig, pid, e);
                }
            }
        }
    }

    /// Terminate all tracked child processes
    /// Sends SIGTERM first, waits up to `grace_period`, then SIGKILL
    pub fn terminate_all(&mut self, grace_period: Duration) {
        if self.cleanup_initiated {
            debug!("Cleanup already initiated, skipping");
            return;
        }
        self.cleanup_initiated = true;

        if self.pids.is_empty() {
            debug!("No child processes to terminate");
            return;
        }

        info!("Terminating {} child process(es)...", self.pids.len());

        let pids_to_kill: Vec<u32> = self.pids.iter().copied().collect();
        self.signal_all(Signal::SIGTERM);

        let start = Instant::now();
        while start.elapsed() < grace_period {
            if !pids_to_kill.iter().any(|&pid| is_process_alive(pid)) {
                info!("All child processes terminated gracefully");
                self.pids.clear();
                return;
            }
            std::thread::sleep(Duration::from_millis(100));
        }

        for &pid in &pids_to_kill {
            if is_process_alive(pid) {
                warn!("Process group {} did not terminate, sending SIGKILL", pid);
                if let Err(e) = send_signal_to_group(pid, Signal::SIGKILL) {
                    error!("Failed to send SIGKILL to process group {}: {}", pid, e);
                    let _ = send_signal(pid, Signal::SIGKILL);
                }
            }
        }

        self.pids.clear();
        info!("Child process cleanup complete");
    }
}

fn send_signal(pid: u32, signal: Signal) -> Result<(), nix::Error> {
    signal::kill(Pid::from_raw(pid as i32), signal)
}

/// Negative PID addresses the whole group, so wine's own children
/// (wineserver, the vendor installer) receive the signal too.
pub(crate) fn send_signal_to_group(pgid: u32, signal: Signal) -> Result<(), nix::Error> {
    signal::kill(Pid::from_raw(-(pgid as i32)), signal)
}

/// Check if a process is still alive (not dead or zombie)
fn is_process_alive(pid: u32) -> bool {
    if signal::kill(Pid::from_raw(pid as i32), None).is_err() {
        return false;
    }

    // Field 3 of /proc/pid/stat is the state; Z and X are not running
    if let Ok(stat) = std::fs::read_to_string(format!("/proc/{}/stat", pid)) {
        let fields: Vec<&str> = stat.split_whitespace().collect();
        if fields.len() > 2 {
            return !matches!(fields[2], "Z" | "X");
        }
    }

    true
}

/// RAII guard that terminates all children on drop.
/// `main` holds one for the lifetime of the command; [`SystemRunner`]
/// registers its children in the same global registry.
///
/// [`SystemRunner`]: crate::command::SystemRunner
pub struct ProcessGuard {
    registry: Arc<Mutex<ChildRegistry>>,
}

impl ProcessGuard {
    pub fn new() -> Self {
        Self {
            registry: ChildRegistry::global(),
        }
    }
}

impl Default for ProcessGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ProcessGuard {
    fn drop(&mut self) {
        debug!("ProcessGuard dropped, initiating cleanup");
        if let Ok(mut registry) = self.registry.lock() {
            registry.terminate_all(Duration::from_secs(5));
        }
    }
}

/// Initialize global signal handlers for SIGINT, SIGTERM and SIGHUP.
/// Call this once at program start.
///
/// The first signal raises the interrupt flag and forwards SIGTERM to the
/// running children; the installer stops before the next plan entry. A
/// second signal exits immediately with 128 + signal number.
pub fn init_signal_handlers() -> Result<(), std::io::Error> {
    use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::thread;

    let mut signals = Signals::new([SIGINT, SIGTERM, SIGHUP])?;

    thread::spawn(move || {
        for sig in signals.forever() {
            let signal_name = match sig {
                SIGINT => "SIGINT",
                SIGTERM => "SIGTERM",
                SIGHUP => "SIGHUP",
                _ => "UNKNOWN",
            };

            if request_interrupt() {
                warn!("Received second {}, exiting", signal_name);
                if let Ok(mut registry) = ChildRegistry::global().lock() {
                    registry.terminate_all(Duration::from_secs(1));
                }
                std::process::exit(128 + sig);
            }

            info!(
                "Received {}, stopping after the current step...",
                signal_name
            );
            if let Ok(registry) = ChildRegistry::global().lock() {
                registry.signal_all(Signal::SIGTERM);
            }
        }
    });

    Ok(())
}

/// Extension trait for std::process::Command to set up process groups
pub trait CommandProcessGroup {
    /// Configure the command to run in its own process group
    fn in_new_process_group(&mut self) -> &mut Self;
}

impl CommandProcessGroup for std::process::Command {
    fn in_new_process_group(&mut self) -> &mut Self {
        use std::os::unix::process::CommandExt;
        unsafe {
            self.pre_exec(|| {
                // Leader of a new group, PGID = child PID
                nix::unistd::setpgid(Pid::from_raw(0), Pid::from_raw(0))
                    .map_err(std::io::Error::other)?;

                // Child dies with us
                if libc::prctl(libc::PR_SET_PDEATHSIG, libc::SIGTERM) == -1 {
                    return Err(std::io::Error::last_os_error());
                }

                Ok(())
            });
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;

    #[test]
    fn test_registry_register_unregister() {
        let mut registry = ChildRegistry::default();

        registry.register(1234);
        registry.register(5678);
        assert_eq!(registry.count(), 2);

        registry.unregister(1234);
        assert_eq!(registry.count(), 1);

        registry.unregister(5678);
        assert_eq!(registry.count(), 0);
    }

    /// Reap `child` within `timeout`
    fn wait_for_exit(child: &mut std::process::Child, timeout: Duration) -> bool {
        let start = Instant::now();
        while start.elapsed() < timeout {
            if let Ok(Some(_)) = child.try_wait() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        false
    }

    #[test]
    fn test_terminate_all_kills_process_group() {
        let mut child = Command::new("sh")
            .args(["-c", "sleep 60"])
            .in_new_process_group()
            .spawn()
            .expect("Failed to spawn sleep process");

        let mut registry = ChildRegistry::default();
        registry.register(child.id());
        assert!(is_process_alive(child.id()));

        registry.terminate_all(Duration::from_millis(500));

        assert!(wait_for_exit(&mut child, Duration::from_secs(3)));
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn test_signal_all_delivers_sigterm() {
        let mut child = Command::new("sh")
            .args(["-c", "sleep 60"])
            .in_new_process_group()
            .spawn()
            .expect("Failed to spawn sleep process");

        let mut registry = ChildRegistry::default();
        registry.register(child.id());
        // Let the child reach setpgid before signalling the group
        std::thread::sleep(Duration::from_millis(50));
        registry.signal_all(Signal::SIGTERM);

        assert!(wait_for_exit(&mut child, Duration::from_secs(3)));
    }

    #[test]
    fn test_terminate_all_handles_already_dead_process() {
        let mut child = Command::new("sh")
            .args(["-c", "exit 0"])
            .spawn()
            .expect("Failed to spawn sh");
        let pid = child.id();
        let _ = child.wait();

        let mut registry = ChildRegistry::default();
        registry.register(pid);
        registry.terminate_all(Duration::from_millis(100));
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn test_cleanup_initiated_flag_prevents_double_cleanup() {
        let mut registry = ChildRegistry::default();
        registry.register(12345);

        registry.terminate_all(Duration::from_millis(10));
        assert!(registry.cleanup_initiated);

        registry.register(12346);
        registry.terminate_all(Duration::from_millis(10));
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_interrupt_flag() {
        reset_interrupt();
        assert!(!is_interrupted());
        assert!(!request_interrupt());
        assert!(is_interrupted());
        assert!(request_interrupt());
        reset_interrupt();
        assert!(!is_interrupted());
    }

    #[test]
    fn test_is_process_alive_nonexistent() {
        assert!(!is_process_alive(999_999));
        assert!(send_signal(999_999, Signal::SIGTERM).is_err());
    }
}
