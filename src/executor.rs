//! Command executor with independent stdout/stderr capture

use crate::shells::{detect_shells, EnvLookup, SystemEnv};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::process::Stdio;
use thiserror::Error;
use tokio::io::AsyncReadExt;
use tokio::process::Command as TokioCommand;
use tracing::{debug, info};

/// Executor errors
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// The child process failed to start or exited with failure. Carries the
    /// underlying fault plus the full captured standard-error text.
    #[error("command failed: {fault}, stderr: {stderr}")]
    ExecutionFailed { fault: String, stderr: String },

    /// A shell-interpreted command was requested but the candidate list built
    /// from the environment was empty.
    #[error("no shell detected")]
    NoShellDetected,
}

impl ExecutorError {
    fn spawn_failed(fault: impl ToString) -> Self {
        Self::ExecutionFailed {
            fault: fault.to_string(),
            stderr: String::new(),
        }
    }
}

/// Record of one command invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResult {
    /// Program executed
    pub program: String,

    /// Arguments provided
    pub args: Vec<String>,

    /// Standard output
    pub stdout: String,

    /// Standard error
    pub stderr: String,

    /// Exit code
    pub exit_code: i32,

    /// Execution duration (milliseconds)
    pub duration_ms: u64,

    /// Whether the child exited with status zero
    pub success: bool,
}

/// Executor configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutorConfig {
    /// Working directory (None = inherit)
    pub working_dir: Option<String>,

    /// Extra environment variables for spawned children
    pub env_vars: HashMap<String, String>,
}

/// Command executor
///
/// Every operation spawns exactly one child process and awaits its exit;
/// there are no retries and no timeouts. A hung child hangs the caller.
#[derive(Debug, Clone, Default)]
pub struct CommandExecutor {
    config: ExecutorConfig,
}

impl CommandExecutor {
    /// Create new executor
    pub fn new(config: ExecutorConfig) -> Self {
        Self { config }
    }

    /// Execute a program directly and return its standard-output text.
    ///
    /// Arguments are passed as an argv vector; no shell interpretation takes
    /// place. On success the captured stdout is returned unmodified. If the
    /// child cannot be started or exits non-zero, the error carries the fault
    /// and the captured stderr; any partial stdout is discarded.
    pub async fn run(&self, program: &str, args: &[String]) -> Result<String, ExecutorError> {
        let result = self.capture(program, args).await?;

        if result.success {
            Ok(result.stdout)
        } else {
            Err(ExecutorError::ExecutionFailed {
                fault: format!("exit status {}", result.exit_code),
                stderr: result.stderr,
            })
        }
    }

    /// Execute a program directly and return the full invocation record.
    ///
    /// A non-zero exit is reported as a record with `success: false`; only a
    /// failure to spawn or capture is an error here.
    pub async fn capture(
        &self,
        program: &str,
        args: &[String],
    ) -> Result<CommandResult, ExecutorError> {
        let start_time = std::time::Instant::now();

        // Resolve full program path
        let program_path = self.resolve_program_path(program);

        debug!("Resolved program path: {}", program_path);
        info!("Executing command: {} with {} args", program, args.len());

        let mut cmd = TokioCommand::new(&program_path);
        cmd.args(args);

        // Set working directory
        if let Some(ref wd) = self.config.working_dir {
            cmd.current_dir(wd);
        }

        // Set environment variables
        for (key, value) in &self.config.env_vars {
            cmd.env(key, value);
        }

        // Configure stdio
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        // Spawn process
        let mut child = cmd.spawn().map_err(ExecutorError::spawn_failed)?;

        let stdout_handle = child
            .stdout
            .take()
            .ok_or_else(|| ExecutorError::spawn_failed("failed to capture stdout"))?;

        let stderr_handle = child
            .stderr
            .take()
            .ok_or_else(|| ExecutorError::spawn_failed("failed to capture stderr"))?;

        // Read output streams
        let stdout_task = tokio::spawn(async move {
            let mut reader = stdout_handle;
            let mut buf = Vec::new();
            reader.read_to_end(&mut buf).await.map(|_| buf)
        });

        let stderr_task = tokio::spawn(async move {
            let mut reader = stderr_handle;
            let mut buf = Vec::new();
            reader.read_to_end(&mut buf).await.map(|_| buf)
        });

        // Wait for process
        let status = child.wait().await.map_err(ExecutorError::spawn_failed)?;

        // Collect output
        let stdout = stdout_task
            .await
            .map_err(ExecutorError::spawn_failed)?
            .map_err(ExecutorError::spawn_failed)?;
        let stderr = stderr_task
            .await
            .map_err(ExecutorError::spawn_failed)?
            .map_err(ExecutorError::spawn_failed)?;

        let exit_code = status.code().unwrap_or(-1);

        Ok(CommandResult {
            program: program.to_string(),
            args: args.to_vec(),
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
            exit_code,
            duration_ms: start_time.elapsed().as_millis() as u64,
            success: status.success(),
        })
    }

    /// Execute a shell-syntax command line through a detected interpreter.
    ///
    /// The interpreter candidates come from the real process environment; the
    /// first candidate runs the line as `<shell> -c <command_line>`. The line
    /// is handed to the interpreter verbatim, so pipes, redirects, and
    /// expansions all apply.
    pub async fn run_via_shell(&self, command_line: &str) -> Result<String, ExecutorError> {
        self.run_via_shell_in(&SystemEnv, command_line).await
    }

    /// Same as [`run_via_shell`](Self::run_via_shell), with an explicit
    /// environment lookup for the shell detector.
    pub async fn run_via_shell_in<E: EnvLookup>(
        &self,
        env: &E,
        command_line: &str,
    ) -> Result<String, ExecutorError> {
        let shells = detect_shells(env);

        let shell = shells.first().ok_or(ExecutorError::NoShellDetected)?;

        debug!("Running combined command via shell: {}", shell);

        self.run(shell, &["-c".to_string(), command_line.to_string()])
            .await
    }

    /// Resolve program path
    fn resolve_program_path(&self, program: &str) -> String {
        // Absolute paths pass through untouched
        if std::path::Path::new(program).is_absolute() {
            return program.to_string();
        }

        // Try to find in PATH
        if let Ok(path) = which::which(program) {
            return path.to_string_lossy().to_string();
        }

        // Use program as-is if not found (will fail at spawn)
        program.to_string()
    }
}
