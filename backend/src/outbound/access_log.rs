//! File-backed access log.
//!
//! Entries travel over an unbounded channel to a background task that owns
//! the file handle, so recording never waits on disk I/O. Write failures are
//! logged and otherwise ignored; lines may be lost and are not ordered
//! relative to responses.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::domain::ports::{AccessLogEntry, AccessLogError, AccessLogSink};

/// Sending half of the access log, shared behind `Arc`.
#[derive(Debug)]
pub struct FileAccessLog {
    sender: mpsc::UnboundedSender<String>,
}

impl FileAccessLog {
    /// Open `path` for appending, creating missing parent directories, and
    /// start the writer task.
    ///
    /// The returned handle completes once every sender has been dropped and
    /// the queued lines have been flushed.
    ///
    /// # Errors
    /// Returns the I/O error when the directory or file cannot be created.
    pub async fn open(path: impl AsRef<Path>) -> io::Result<(Self, JoinHandle<()>)> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;

        let (sender, receiver) = mpsc::unbounded_channel();
        let writer = tokio::spawn(write_lines(file, path.to_path_buf(), receiver));
        Ok((Self { sender }, writer))
    }
}

async fn write_lines(mut file: File, path: PathBuf, mut lines: mpsc::UnboundedReceiver<String>) {
    while let Some(mut line) = lines.recv().await {
        line.push('\n');
        let written = async {
            file.write_all(line.as_bytes()).await?;
            file.flush().await
        }
        .await;
        if let Err(err) = written {
            warn!(path = %path.display(), error = %err, "failed to append access log line");
        }
    }
}

impl AccessLogSink for FileAccessLog {
    fn record(&self, entry: AccessLogEntry) -> Result<(), AccessLogError> {
        self.sender
            .send(entry.line())
            .map_err(|err| AccessLogError::closed(err.to_string()))
    }
}
