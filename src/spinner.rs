//! A terminal spinner shown while a scan, crawl, or model call is in flight.

use std::future::Future;
use std::io::{IsTerminal, Write};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Braille spinner frames.
const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Frame interval.
const INTERVAL: Duration = Duration::from_millis(80);

/// Writes to stderr so it never mixes into report output on stdout.
/// Does nothing when stderr is not a terminal.
pub struct Spinner {
    task: Option<(JoinHandle<()>, watch::Sender<bool>)>,
}

impl Spinner {
    /// Start a spinner with the given message (e.g. `"scanning account"`).
    pub fn start(message: &str) -> Self {
        if !std::io::stderr().is_terminal() {
            return Self { task: None };
        }

        let (stop_tx, mut stop_rx) = watch::channel(false);
        let message = message.to_string();

        let handle = tokio::spawn(async move {
            for frame in FRAMES.iter().cycle() {
                // \r moves to start of line, \x1b[2K clears the line
                eprint!("\x1b[2K\r{frame} {message}");
                let _ = std::io::stderr().flush();

                tokio::select! {
                    _ = tokio::time::sleep(INTERVAL) => {}
                    _ = stop_rx.changed() => break,
                }
            }
            eprint!("\x1b[2K\r");
            let _ = std::io::stderr().flush();
        });

        Self {
            task: Some((handle, stop_tx)),
        }
    }

    /// Stop the spinner and clear its line.
    pub async fn stop(self) {
        if let Some((handle, stop)) = self.task {
            let _ = stop.send(true);
            let _ = handle.await;
        }
    }

    /// Spin while `work` runs, then return its output.
    pub async fn during<F: Future>(message: &str, work: F) -> F::Output {
        let spinner = Self::start(message);
        let output = work.await;
        spinner.stop().await;
        output
    }
}
