use std::io::Read;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::SourceError;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run `program` to completion, killing it once `timeout` elapses.
///
/// Stdout is discarded; stderr is captured for error reporting.
pub(crate) fn run_with_timeout(
    program: &str,
    args: &[String],
    timeout: Duration,
) -> Result<(), SourceError> {
    let rendered = format!("{} {}", program, args.join(" "));
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => SourceError::CommandMissing {
                command: program.to_owned(),
            },
            _ => SourceError::Io(err),
        })?;
    debug!(command = %rendered, "spawned subprocess");

    let (stderr_tx, stderr_rx) = mpsc::channel();
    if let Some(mut pipe) = child.stderr.take() {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            let _ = stderr_tx.send(buf);
        });
    }

    let started_at = Instant::now();
    loop {
        if let Some(status) = child.try_wait()? {
            if status.success() {
                return Ok(());
            }
            let stderr = stderr_rx
                .recv_timeout(Duration::from_millis(100))
                .unwrap_or_default();
            return Err(SourceError::from_command_failure(
                rendered,
                status.code().unwrap_or(-1),
                &String::from_utf8_lossy(&stderr),
            ));
        }
        if started_at.elapsed() >= timeout {
            let _ = child.kill();
            let _ = child.wait();
            return Err(SourceError::TimedOut {
                command: rendered,
                timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            });
        }
        thread::sleep(POLL_INTERVAL);
    }
}
