//! The prescription record and its bounded remark sequence.

use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};

/// Maximum number of remarks a prescription may carry.
pub const MAX_REMARKS: usize = 2;

/// One eye-examination outcome for one patient.
///
/// The seven scalar fields are fixed at construction; no update operation
/// exists. The remark sequence is owned by the record, capped at
/// [`MAX_REMARKS`], grows only through a successful
/// [`PrescriptionService::submit_remark`](crate::PrescriptionService::submit_remark)
/// call, and never shrinks or reorders.
///
/// Construction does not validate: a record holds whatever the caller
/// supplied, and the rules in [`validation`](crate::validation) are applied
/// when the record is submitted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Prescription {
    first_name: String,
    last_name: String,
    address: String,
    sphere: f64,
    cylinder: f64,
    axis: i32,
    examination_date: String,
    optometrist: String,
    #[serde(skip)]
    remarks: Vec<String>,
}

impl Prescription {
    /// Builds a record from the eight scalar inputs.
    ///
    /// Sphere and cylinder are in diopters, axis in degrees, and the
    /// examination date in the fixed `dd/mm/yy` text form.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        sphere: f64,
        cylinder: f64,
        axis: i32,
        examination_date: impl Into<String>,
        optometrist: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            sphere,
            cylinder,
            axis,
            examination_date: examination_date.into(),
            optometrist: optometrist.into(),
            remarks: Vec::new(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn sphere(&self) -> f64 {
        self.sphere
    }

    pub fn cylinder(&self) -> f64 {
        self.cylinder
    }

    pub fn axis(&self) -> i32 {
        self.axis
    }

    pub fn examination_date(&self) -> &str {
        &self.examination_date
    }

    pub fn optometrist(&self) -> &str {
        &self.optometrist
    }

    /// Returns the accepted remark texts in acceptance order.
    pub fn remarks(&self) -> &[String] {
        &self.remarks
    }

    /// Returns how many remarks have been accepted for this record.
    pub fn remark_count(&self) -> usize {
        self.remarks.len()
    }

    /// Appends an accepted remark text, refusing beyond capacity.
    ///
    /// The capacity invariant lives here, with the data it protects; the
    /// validator checks the same bound before any store write is attempted.
    pub(crate) fn push_remark(&mut self, text: String) -> Result<(), ValidationError> {
        if self.remarks.len() >= MAX_REMARKS {
            return Err(ValidationError::RemarkLimitReached);
        }
        self.remarks.push(text);
        Ok(())
    }

    /// Renders the single-line store form of the record.
    ///
    /// Numeric fields use Rust's default decimal text form.
    pub fn store_line(&self) -> String {
        format!(
            "{} {}, {}, Sphere: {}, Cylinder: {}, Axis: {}, Exam Date: {}, Optometrist: {}",
            self.first_name,
            self.last_name,
            self.address,
            self.sphere,
            self.cylinder,
            self.axis,
            self.examination_date,
            self.optometrist
        )
    }
}
