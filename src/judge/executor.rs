//! Program executor: runs the program under test and captures its output

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;
use tokio::time::{timeout, Duration};

use crate::config::JudgeConfig;
use crate::error::{AppError, AppResult};
use crate::judge::testcase::TestCase;

/// Everything observed from one run
#[derive(Debug, Clone, Default)]
pub struct ExecutionOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was killed by a signal or by the judge
    pub exit_code: Option<i32>,
    pub time_ms: u64,
    pub timed_out: bool,
    /// Stdout went past the output limit and the program was killed
    pub output_limit_exceeded: bool,
}

impl ExecutionOutput {
    /// Exited on its own with status zero
    pub fn success(&self) -> bool {
        !self.timed_out && !self.output_limit_exceeded && self.exit_code == Some(0)
    }
}

/// Something that can run a test case and report what happened.
#[async_trait]
pub trait ProgramRunner: Send + Sync {
    async fn run(&self, testcase: &TestCase) -> AppResult<ExecutionOutput>;
}

/// Runs a local executable as a child process.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: PathBuf,
    args: Vec<String>,
    time_limit_ms: u64,
    output_limit_bytes: u64,
}

enum Capture {
    Exited {
        stdout: Vec<u8>,
        stderr: Vec<u8>,
        exit_code: Option<i32>,
    },
    Overflow,
}

impl ProcessRunner {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>, config: &JudgeConfig) -> Self {
        Self {
            program: program.into(),
            args,
            time_limit_ms: config.time_limit_ms,
            output_limit_bytes: config.output_limit_bytes,
        }
    }

    /// Kill the child (if still there) and stop listening to it
    async fn stop(&self, child: &mut Child, stderr_task: &JoinHandle<std::io::Result<Vec<u8>>>) {
        if let Err(e) = child.kill().await {
            tracing::debug!("Program {} already gone: {}", self.program.display(), e);
        }
        stderr_task.abort();
    }
}

#[async_trait]
impl ProgramRunner for ProcessRunner {
    async fn run(&self, testcase: &TestCase) -> AppResult<ExecutionOutput> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .args(&testcase.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| AppError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        let start = Instant::now();

        // Closing stdin right after the input lets readers see EOF
        if let Some(mut stdin) = child.stdin.take() {
            let input = testcase.stdin.clone();
            tokio::spawn(async move {
                if let Err(e) = stdin.write_all(input.as_bytes()).await {
                    tracing::debug!("Program stopped reading stdin early: {}", e);
                }
            });
        }

        let limit = self.output_limit_bytes;
        let mut stdout_pipe = child.stdout.take();
        let mut stderr_task = tokio::spawn(drain_capped(child.stderr.take(), limit));

        // Everything up to the last byte of output counts against the limit:
        // a background process holding stdout keeps the run alive.
        let captured = timeout(Duration::from_millis(self.time_limit_ms), async {
            let stdout = read_capped(stdout_pipe.as_mut(), limit + 1).await?;
            if stdout.len() as u64 > limit {
                return Ok::<_, AppError>(Capture::Overflow);
            }
            let status = child.wait().await?;
            let stderr = join_pipe(&mut stderr_task).await?;
            Ok(Capture::Exited {
                stdout,
                stderr,
                exit_code: status.code(),
            })
        })
        .await;
        let time_ms = start.elapsed().as_millis() as u64;

        match captured {
            Ok(Ok(Capture::Exited {
                stdout,
                stderr,
                exit_code,
            })) => Ok(ExecutionOutput {
                stdout: String::from_utf8_lossy(&stdout).into_owned(),
                stderr: String::from_utf8_lossy(&stderr).into_owned(),
                exit_code,
                time_ms,
                ..ExecutionOutput::default()
            }),
            Ok(Ok(Capture::Overflow)) => {
                tracing::warn!(
                    "Program {} printed more than {} bytes, killing it",
                    self.program.display(),
                    limit
                );
                self.stop(&mut child, &stderr_task).await;
                Ok(ExecutionOutput {
                    time_ms,
                    output_limit_exceeded: true,
                    ..ExecutionOutput::default()
                })
            }
            Ok(Err(e)) => {
                self.stop(&mut child, &stderr_task).await;
                Err(e)
            }
            Err(_) => {
                tracing::warn!(
                    "Program {} exceeded {} ms, killing it",
                    self.program.display(),
                    self.time_limit_ms
                );
                self.stop(&mut child, &stderr_task).await;
                Ok(ExecutionOutput {
                    time_ms,
                    timed_out: true,
                    ..ExecutionOutput::default()
                })
            }
        }
    }
}

/// Read until EOF or until `max` bytes have arrived, whichever is first
async fn read_capped<R>(pipe: Option<&mut R>, max: u64) -> std::io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    if let Some(pipe) = pipe {
        pipe.take(max).read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

/// Keep the first `max` bytes, discard the rest so the writer never blocks
async fn drain_capped<R>(pipe: Option<R>, max: u64) -> std::io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let Some(mut pipe) = pipe else {
        return Ok(Vec::new());
    };
    let mut buf = Vec::new();
    (&mut pipe).take(max).read_to_end(&mut buf).await?;
    tokio::io::copy(&mut pipe, &mut tokio::io::sink()).await?;
    Ok(buf)
}

async fn join_pipe(task: &mut JoinHandle<std::io::Result<Vec<u8>>>) -> AppResult<Vec<u8>> {
    let bytes = task
        .await
        .map_err(|e| AppError::Io(std::io::Error::other(e)))??;
    Ok(bytes)
}
