//! Field-level rule checks for prescriptions and remarks.
//!
//! Every check here is pure: it inspects a candidate value and reports
//! accept/reject without touching the stores, so a check may be repeated any
//! number of times with the same outcome. Checks run in field order and the
//! first failing rule is returned; the rejection names the offending field
//! and carries the offending value.

use crate::prescription::{Prescription, MAX_REMARKS};
use chrono::NaiveDate;

const NAME_MIN_LEN: usize = 4;
const NAME_MAX_LEN: usize = 15;
const ADDRESS_MIN_LEN: usize = 20;
const SPHERE_MIN: f64 = -20.00;
const SPHERE_MAX: f64 = 20.00;
const CYLINDER_MIN: f64 = -4.00;
const CYLINDER_MAX: f64 = 4.00;
const AXIS_MIN: i32 = 0;
const AXIS_MAX: i32 = 180;
const OPTOMETRIST_MIN_LEN: usize = 8;
const OPTOMETRIST_MAX_LEN: usize = 25;
const REMARK_MIN_WORDS: usize = 6;
const REMARK_MAX_WORDS: usize = 20;

/// The only accepted examination date layout: day/month/2-digit-year.
const DATE_FORMAT: &str = "%d/%m/%y";

/// A rule check failed.
///
/// Rejections are fully recoverable; the caller may retry with corrected
/// input. Each variant names the offending field and carries the value that
/// was rejected.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid first name: {0}")]
    FirstName(String),
    #[error("invalid last name: {0}")]
    LastName(String),
    #[error("invalid address: {0}")]
    Address(String),
    #[error("invalid sphere value: {0}")]
    Sphere(f64),
    #[error("invalid cylinder value: {0}")]
    Cylinder(f64),
    #[error("invalid axis value: {0}")]
    Axis(i32),
    #[error("invalid examination date: {0}")]
    ExaminationDate(String),
    #[error("invalid optometrist name: {0}")]
    Optometrist(String),
    #[error("invalid remark: {0}")]
    Remark(String),
    #[error("no more than 2 remarks allowed")]
    RemarkLimitReached,
}

/// Checks every field rule for a candidate prescription.
///
/// Rules, in order: first and last name length 4–15, address length ≥ 20,
/// sphere in [-20.00, 20.00], cylinder in [-4.00, 4.00], axis in [0, 180],
/// examination date a real calendar date under the fixed `dd/mm/yy` layout,
/// optometrist name length 8–25.
///
/// # Errors
///
/// Returns the first failing rule as a [`ValidationError`].
pub fn validate_prescription(record: &Prescription) -> Result<(), ValidationError> {
    let name_len = NAME_MIN_LEN..=NAME_MAX_LEN;
    if !name_len.contains(&record.first_name().chars().count()) {
        return Err(ValidationError::FirstName(record.first_name().to_owned()));
    }
    if !name_len.contains(&record.last_name().chars().count()) {
        return Err(ValidationError::LastName(record.last_name().to_owned()));
    }

    if record.address().chars().count() < ADDRESS_MIN_LEN {
        return Err(ValidationError::Address(record.address().to_owned()));
    }

    if !(SPHERE_MIN..=SPHERE_MAX).contains(&record.sphere()) {
        return Err(ValidationError::Sphere(record.sphere()));
    }
    if !(CYLINDER_MIN..=CYLINDER_MAX).contains(&record.cylinder()) {
        return Err(ValidationError::Cylinder(record.cylinder()));
    }
    if !(AXIS_MIN..=AXIS_MAX).contains(&record.axis()) {
        return Err(ValidationError::Axis(record.axis()));
    }

    // Strict calendar parse: a shape-valid but impossible date like
    // "31/02/23" must be rejected, and a parse failure is an outcome, not a
    // fault.
    if NaiveDate::parse_from_str(record.examination_date(), DATE_FORMAT).is_err() {
        return Err(ValidationError::ExaminationDate(
            record.examination_date().to_owned(),
        ));
    }

    let optometrist_len = OPTOMETRIST_MIN_LEN..=OPTOMETRIST_MAX_LEN;
    if !optometrist_len.contains(&record.optometrist().chars().count()) {
        return Err(ValidationError::Optometrist(record.optometrist().to_owned()));
    }

    Ok(())
}

/// Checks a candidate remark against the text rules and the owning record's
/// remaining capacity.
///
/// The text must split on single spaces into 6–20 words and start with an
/// uppercase letter, and the record must currently hold fewer than
/// [`MAX_REMARKS`] remarks. An empty text splits into one (empty) word and
/// fails the word-count rule rather than faulting on first-character
/// inspection.
///
/// The remark category is not checked here: it is a closed
/// [`RemarkKind`](oculog_types::RemarkKind) enumeration, so an unrecognised
/// category is rejected when the caller parses it.
///
/// # Errors
///
/// Returns the first failing rule as a [`ValidationError`].
pub fn validate_remark(text: &str, current_count: usize) -> Result<(), ValidationError> {
    let words = text.split(' ').count();
    if !(REMARK_MIN_WORDS..=REMARK_MAX_WORDS).contains(&words) {
        return Err(ValidationError::Remark(text.to_owned()));
    }

    if !text.chars().next().is_some_and(|c| c.is_uppercase()) {
        return Err(ValidationError::Remark(text.to_owned()));
    }

    if current_count >= MAX_REMARKS {
        return Err(ValidationError::RemarkLimitReached);
    }

    Ok(())
}
