//! Subprocess execution
//!
//! Every external tool (package manager, winetricks, regedit, wine) is
//! started through a [`CommandRunner`]. The system implementation enforces:
//!
//! - Process group isolation, so a killed step takes its whole tree down
//! - PID registration with the global [`ChildRegistry`] while running
//! - An optional timeout, after which the group is killed
//!
//! [`RecordingRunner`] never spawns anything; it backs `--dry-run` and the
//! test suite.

use std::cell::RefCell;
use std::fmt;
use std::io::{ErrorKind, Read};
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use nix::sys::signal::Signal;
use tracing::{debug, info, warn};

use crate::error::{Result, WinpatableError};
use crate::logic::environment::EnvMap;
use crate::process_guard::{send_signal_to_group, ChildRegistry, CommandProcessGroup};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A fully described external invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Variables set on top of the inherited environment
    pub env: EnvMap,
    pub timeout: Option<Duration>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: EnvMap::new(),
            timeout: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn envs(mut self, vars: &EnvMap) -> Self {
        self.env
            .extend(vars.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Program and arguments joined by spaces, for logs and dry runs.
impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Output from a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code (None if terminated by signal).
    pub exit_code: Option<i32>,
    pub success: bool,
}

impl CommandOutput {
    pub fn succeeded() -> Self {
        Self {
            exit_code: Some(0),
            success: true,
            ..Self::default()
        }
    }

    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            stderr: stderr.into(),
            exit_code: Some(code),
            success: false,
            ..Self::default()
        }
    }

    /// One-line failure description: exit code and the last stderr line.
    pub fn failure_message(&self, program: &str) -> String {
        let code = self
            .exit_code
            .map_or_else(|| "signal".to_string(), |c| c.to_string());
        match self.stderr.lines().rev().find(|l| !l.trim().is_empty()) {
            Some(line) => format!("{} exited with {}: {}", program, code, line.trim()),
            None => format!("{} exited with {}", program, code),
        }
    }
}

/// The seam through which every subprocess is started.
pub trait CommandRunner {
    /// Run `spec` to completion.
    ///
    /// A non-zero exit is `Ok` with `success == false`. `Err` means the
    /// command could not run at all (`ResourceUnavailable`) or was killed
    /// (`Timeout`).
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        (**self).run(spec)
    }
}

// ============================================================================
// System runner
// ============================================================================

/// Runs commands for real.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        info!("Running: {}", spec);
        if !spec.env.is_empty() {
            debug!("env overlay: {:?}", spec.env);
        }

        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args)
            .envs(&spec.env)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .in_new_process_group();

        let mut child = cmd.spawn().map_err(|e| match e.kind() {
            ErrorKind::NotFound => WinpatableError::ResourceUnavailable(spec.program.clone()),
            _ => WinpatableError::Io(e),
        })?;
        let pid = child.id();

        if let Ok(mut registry) = ChildRegistry::global().lock() {
            registry.register(pid);
        }

        let result = wait_with_deadline(&mut child, spec);

        if let Ok(mut registry) = ChildRegistry::global().lock() {
            registry.unregister(pid);
        }

        let output = result?;
        if output.success {
            debug!("{} finished successfully", spec.program);
        } else {
            warn!("{}", output.failure_message(&spec.program));
        }
        Ok(output)
    }
}

fn drain<R: Read + Send + 'static>(source: Option<R>) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut source) = source {
            let _ = source.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}

/// Poll the child until it exits or `spec.timeout` elapses.
/// Pipes are drained on their own threads so a chatty child cannot block.
fn wait_with_deadline(child: &mut Child, spec: &CommandSpec) -> Result<CommandOutput> {
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());
    let start = Instant::now();

    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }

        if let Some(limit) = spec.timeout.filter(|limit| start.elapsed() >= *limit) {
            warn!("{} exceeded {}s, killing process group", spec.program, limit.as_secs());
            let _ = send_signal_to_group(child.id(), Signal::SIGKILL);
            let _ = child.kill();
            let _ = child.wait();
            let _ = stdout.join();
            let _ = stderr.join();
            return Err(WinpatableError::Timeout {
                program: spec.program.clone(),
                seconds: limit.as_secs(),
            });
        }

        thread::sleep(POLL_INTERVAL);
    };

    Ok(CommandOutput {
        stdout: stdout.join().unwrap_or_default(),
        stderr: stderr.join().unwrap_or_default(),
        exit_code: status.code(),
        success: status.success(),
    })
}

// ============================================================================
// Recording runner
// ============================================================================

/// Canned outcome for commands matching a prefix.
#[derive(Debug, Clone)]
pub enum Outcome {
    Exit(i32),
    Missing,
    Timeout(u64),
}

/// Records every command instead of running it.
///
/// By default every command succeeds. Rules match against the rendered
/// command line (`program arg1 arg2`) by prefix; the first match wins.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<CommandSpec>>,
    rules: Vec<(String, Outcome)>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands starting with `prefix` exit with `code`.
    pub fn exit_with(mut self, prefix: &str, code: i32) -> Self {
        self.rules.push((prefix.to_string(), Outcome::Exit(code)));
        self
    }

    /// Commands starting with `prefix` behave as if the program is not installed.
    pub fn missing(mut self, prefix: &str) -> Self {
        self.rules.push((prefix.to_string(), Outcome::Missing));
        self
    }

    /// Commands starting with `prefix` time out.
    pub fn timing_out(mut self, prefix: &str, seconds: u64) -> Self {
        self.rules.push((prefix.to_string(), Outcome::Timeout(seconds)));
        self
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.borrow().clone()
    }

    /// Rendered command lines, in call order.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(ToString::to_string).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        self.calls.borrow_mut().push(spec.clone());
        let line = spec.to_string();

        let outcome = self
            .rules
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix.as_str()))
            .map(|(_, outcome)| outcome);

        match outcome {
            None => Ok(CommandOutput::succeeded()),
            Some(Outcome::Exit(0)) => Ok(CommandOutput::succeeded()),
            Some(Outcome::Exit(code)) => Ok(CommandOutput::failed(*code, "simulated failure")),
            Some(Outcome::Missing) => Err(WinpatableError::ResourceUnavailable(spec.program.clone())),
            Some(Outcome::Timeout(seconds)) => Err(WinpatableError::Timeout {
                program: spec.program.clone(),
                seconds: *seconds,
            }),
        }
    }
}
