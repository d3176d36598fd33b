// src/exec/shell.rs

//! Runs release steps as shell command lines.

use std::path::PathBuf;
use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tracing::{debug, error, info, warn};

use crate::exec::backend::{StepBackend, StepFuture};
use crate::types::StepOutcome;

/// Name of the variable carrying the project name into every step.
pub const PROJECT_ENV_VAR: &str = "RELEASE_PROJECT";

/// Production backend: `sh -c <step>` (or `cmd /C <step>` on Windows).
#[derive(Debug, Default, Clone)]
pub struct ShellBackend {
    working_dir: Option<PathBuf>,
    env: Vec<(String, String)>,
}

impl ShellBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run steps in `dir` instead of the current directory.
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Export an extra environment variable to every step.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    fn command(&self, project: &str, step: &str) -> Command {
        let mut cmd = if cfg!(windows) {
            let mut c = Command::new("cmd");
            c.arg("/C").arg(step);
            c
        } else {
            let mut c = Command::new("sh");
            c.arg("-c").arg(step);
            c
        };

        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }
        cmd.env(PROJECT_ENV_VAR, project);
        for (k, v) in &self.env {
            cmd.env(k, v);
        }

        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }

    async fn run_step_inner(&self, project: &str, step: &str) -> Result<StepOutcome> {
        let mut child = self
            .command(project, step)
            .spawn()
            .with_context(|| format!("spawning process for step '{step}'"))?;

        let stdout = child.stdout.take().map(|out| {
            let step = step.to_string();
            tokio::spawn(forward_lines(out, step, Stream::Stdout))
        });
        let stderr = child.stderr.take().map(|err| {
            let step = step.to_string();
            tokio::spawn(forward_lines(err, step, Stream::Stderr))
        });

        let status = child
            .wait()
            .await
            .with_context(|| format!("waiting for process of step '{step}'"))?;

        // Drain remaining output before the next step starts printing.
        for handle in [stdout, stderr].into_iter().flatten() {
            if let Err(e) = handle.await {
                debug!(step, error = %e, "output forwarder did not finish cleanly");
            }
        }

        let code = status.code().unwrap_or(-1);
        info!(step, exit_code = code, success = status.success(), "step process exited");

        Ok(if status.success() {
            StepOutcome::Success
        } else {
            StepOutcome::Failed(code)
        })
    }
}

impl StepBackend for ShellBackend {
    fn run_step<'a>(&'a mut self, project: &'a str, step: &'a str) -> StepFuture<'a> {
        Box::pin(async move {
            match self.run_step_inner(project, step).await {
                Ok(outcome) => Ok(outcome),
                Err(err) => {
                    let detail = format!("{err:#}");
                    error!(project, step, error = %detail, "step execution error");
                    Ok(StepOutcome::Failed(-1))
                }
            }
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

async fn forward_lines<R>(reader: R, step: String, stream: Stream)
where
    R: AsyncRead + Unpin,
{
    // Keep reading until EOF; step output need not be UTF-8.
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                warn!(step = %step, error = %e, "reading step output failed");
                break;
            }
        }

        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = String::from_utf8_lossy(raw);
        match stream {
            Stream::Stdout => {
                debug!(step = %step, "stdout: {}", line);
                println!("{line}");
            }
            Stream::Stderr => {
                debug!(step = %step, "stderr: {}", line);
                eprintln!("{line}");
            }
        }
    }
}
