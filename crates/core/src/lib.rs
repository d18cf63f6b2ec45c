//! # Oculog Core
//!
//! Core business logic for the oculog prescription recording system.
//!
//! This crate contains the record model, the pure rule checks, and the
//! recorder that appends accepted entries to the append-only stores:
//! - [`Prescription`] record with its bounded remark sequence
//! - field-level validation rules in [`validation`]
//! - [`PrescriptionService`] combining validation with persistence
//!
//! **No interface concerns**: command-line or other outward surfaces belong
//! in `oculog-cli`.

mod config;
mod error;
mod prescription;
mod recorder;
pub mod validation;

pub use config::{CoreConfig, DEFAULT_PRESCRIPTION_LOG, DEFAULT_REMARK_LOG};
pub use error::{PrescriptionError, PrescriptionResult};
pub use oculog_types::RemarkKind;
pub use prescription::{Prescription, MAX_REMARKS};
pub use recorder::PrescriptionService;
pub use validation::ValidationError;
