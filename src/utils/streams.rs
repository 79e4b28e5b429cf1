// src/utils/streams.rs
use std::process::ExitStatus;
use anyhow::{anyhow, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};
use crate::config::defs::{PipelineError, SHELL_TAG};

pub enum ChildStream {
    Stdout,
    Stderr,
}

/// Drains one of a child's captured output streams into a vector of lines,
/// then reaps the child.
///
/// # Arguments
///
/// * `child` - Spawned child with the requested stream piped.
/// * `stream` - Which stream to read.
///
/// # Returns
/// Lines of the stream, without terminators.
pub async fn read_child_output_to_vec(
    child: &mut Child,
    stream: ChildStream,
) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    match stream {
        ChildStream::Stdout => {
            let stdout = child
                .stdout
                .take()
                .ok_or_else(|| anyhow!("Child stdout was not piped"))?;
            let mut reader = BufReader::new(stdout).lines();
            while let Some(line) = reader.next_line().await? {
                lines.push(line);
            }
        }
        ChildStream::Stderr => {
            let stderr = child
                .stderr
                .take()
                .ok_or_else(|| anyhow!("Child stderr was not piped"))?;
            let mut reader = BufReader::new(stderr).lines();
            while let Some(line) = reader.next_line().await? {
                lines.push(line);
            }
        }
    }
    child.wait().await?;
    Ok(lines)
}

/// Runs one rendered command line through the shell and blocks until the
/// child exits. Stream routing is part of the line itself (`>`, `2>`), so
/// only stdin is touched here.
///
/// # Arguments
///
/// * `tool` - Tag of the underlying tool, for error reporting.
/// * `line` - Fully rendered shell command line.
///
/// # Returns
/// Ok on exit status zero; `ToolFailed` carrying the child's exit code
/// otherwise. A missing executable surfaces as the shell's 127.
pub async fn run_shell_line(tool: &str, line: &str) -> Result<(), PipelineError> {
    let status = Command::new(SHELL_TAG)
        .arg("-c")
        .arg(line)
        .stdin(std::process::Stdio::null())
        .status()
        .await
        .map_err(|e| PipelineError::ToolExecution {
            tool: tool.to_string(),
            error: e.to_string(),
        })?;

    if status.success() {
        return Ok(());
    }
    Err(PipelineError::ToolFailed {
        tool: tool.to_string(),
        code: exit_code(&status),
    })
}

/// Exit code of a finished child, with killed-by-signal mapped to 128+N
/// the way the shell reports it.
pub fn exit_code(status: &ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    status.code().unwrap_or(1)
}
