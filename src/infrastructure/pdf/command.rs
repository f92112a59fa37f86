use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Why a piped renderer run did not produce output
#[derive(Debug)]
pub enum PipeError {
  /// The binary could not be started
  Spawn(std::io::Error),
  /// Talking to the running child failed
  Io(std::io::Error),
  TimedOut,
}

/// Runs `program`, feeds `input` on stdin and collects its output.
///
/// The whole interaction sits under `limit`. Stdin is written while stdout is
/// drained, so a child that reads slowly or not at all cannot wedge the
/// writer. On timeout the child is killed.
pub async fn run_piped(
  program: &str,
  args: &[String],
  input: &[u8],
  limit: Duration,
) -> Result<Output, PipeError> {
  let mut child = Command::new(program)
    .args(args)
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .kill_on_drop(true)
    .spawn()
    .map_err(PipeError::Spawn)?;

  let stdin = child.stdin.take();
  let feed = async move {
    if let Some(mut stdin) = stdin {
      stdin.write_all(input).await?;
      // dropping stdin closes the pipe so the renderer starts
    }
    Ok::<(), std::io::Error>(())
  };

  let run = async move {
    let (fed, output) = tokio::join!(feed, child.wait_with_output());
    let output = output?;
    // EPIPE from an early exit is reported through the exit status instead
    if output.status.success() {
      fed?;
    }
    Ok::<Output, std::io::Error>(output)
  };

  tokio::time::timeout(limit, run)
    .await
    .map_err(|_| PipeError::TimedOut)?
    .map_err(PipeError::Io)
}

#[cfg(all(test, unix))]
mod tests {
  use super::*;
  use std::time::Instant;

  #[tokio::test]
  async fn test_stalled_child_times_out_with_large_input() {
    // well past the pipe buffer, and `sleep` never reads stdin
    let input = vec![b'x'; 256 * 1024];
    let started = Instant::now();

    let result = run_piped(
      "sleep",
      &["30".to_string()],
      &input,
      Duration::from_secs(1),
    )
    .await;

    assert!(matches!(result, Err(PipeError::TimedOut)));
    assert!(started.elapsed() < Duration::from_secs(10));
  }

  #[tokio::test]
  async fn test_child_output_is_collected() {
    let result = run_piped("cat", &[], b"%PDF-1.5 region", Duration::from_secs(5))
      .await
      .unwrap();

    assert!(result.status.success());
    assert_eq!(result.stdout, b"%PDF-1.5 region");
  }

  #[tokio::test]
  async fn test_missing_program_is_spawn_error() {
    let result = run_piped(
      "/nonexistent/renderer",
      &[],
      b"",
      Duration::from_secs(1),
    )
    .await;

    assert!(matches!(result, Err(PipeError::Spawn(_))));
  }
}
