//! Append-only line sinks.

use crate::StoreError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// A line-oriented append-only sink.
///
/// Implementations append whole lines atomically with respect to each other:
/// once `append_line` returns `Ok`, the line (with its terminating newline)
/// is durably part of the store and will never be removed or rewritten.
pub trait AppendLog: Send + Sync {
    /// Appends one line to the store.
    ///
    /// The line must not contain the newline terminator; the store adds it.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the underlying sink cannot be opened,
    /// written or flushed. On error no partial line is observable.
    fn append_line(&self, line: &str) -> Result<(), StoreError>;
}

impl<T: AppendLog + ?Sized> AppendLog for Arc<T> {
    fn append_line(&self, line: &str) -> Result<(), StoreError> {
        (**self).append_line(line)
    }
}

/// File-backed append-only store.
///
/// Each append opens the file in create+append mode, writes one
/// newline-terminated line, flushes and closes the handle — the handle is
/// released on every exit path, including I/O failure. The lock serialises
/// the whole open/append/close sequence so two writers sharing one `FileLog`
/// cannot interleave partial lines.
#[derive(Debug)]
pub struct FileLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileLog {
    /// Creates a store backed by the file at `path`.
    ///
    /// The file is not touched until the first append; it is created on
    /// demand and never truncated.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AppendLog for FileLog {
    fn append_line(&self, line: &str) -> Result<(), StoreError> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                StoreError::Open(std::io::Error::new(
                    e.kind(),
                    format!("Failed to open store {}: {}", self.path.display(), e),
                ))
            })?;

        file.write_all(line.as_bytes())
            .and_then(|()| file.write_all(b"\n"))
            .map_err(|e| {
                StoreError::Write(std::io::Error::new(
                    e.kind(),
                    format!("Failed to append to store {}: {}", self.path.display(), e),
                ))
            })?;

        file.flush().map_err(|e| {
            StoreError::Flush(std::io::Error::new(
                e.kind(),
                format!("Failed to flush store {}: {}", self.path.display(), e),
            ))
        })
    }
}

/// In-memory append-only store.
///
/// Used as the test double for [`FileLog`] and by embedding code that wants
/// a dry run without touching the filesystem.
#[derive(Debug, Default)]
pub struct MemoryLog {
    lines: Mutex<Vec<String>>,
}

impl MemoryLog {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every line appended so far, in append order.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl AppendLog for MemoryLog {
    fn append_line(&self, line: &str) -> Result<(), StoreError> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line.to_owned());
        Ok(())
    }
}
