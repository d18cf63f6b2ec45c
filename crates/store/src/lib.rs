//! Oculog append-only stores
//!
//! This crate provides the line-oriented, append-only text stores that hold
//! accepted prescriptions and remarks.
//!
//! ## Design principles
//!
//! - Stores are append-only: prior lines are permanent and are never
//!   truncated, rewritten or reordered
//! - Each append is a scoped acquisition of the store handle — open in append
//!   mode, write one newline-terminated line, flush, close on every exit path
//! - Appends to one store are serialised behind a lock so concurrent callers
//!   cannot interleave partial lines
//! - No read or query interface exists; consumers needing search or listing
//!   are external collaborators
//!
//! The [`AppendLog`] trait is the injection seam: the recorder in
//! `oculog-core` is written against it, so tests and embedding code can
//! substitute [`MemoryLog`] for the real [`FileLog`].

mod append;

pub use append::{AppendLog, FileLog, MemoryLog};

/// Errors that can occur while appending to a store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store file could not be opened in append mode
    #[error("failed to open store: {0}")]
    Open(std::io::Error),

    /// The line could not be written to the store
    #[error("failed to append to store: {0}")]
    Write(std::io::Error),

    /// The store handle could not be flushed before closing
    #[error("failed to flush store: {0}")]
    Flush(std::io::Error),
}
