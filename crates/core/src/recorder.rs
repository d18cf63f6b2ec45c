//! The recorder: validation combined with append-only persistence.

use crate::config::CoreConfig;
use crate::error::{PrescriptionError, PrescriptionResult};
use crate::prescription::Prescription;
use crate::validation;
use oculog_store::{AppendLog, FileLog};
use oculog_types::RemarkKind;

/// Validates candidate prescriptions and remarks and appends accepted
/// entries to the two stores.
///
/// The stores are injected as [`AppendLog`] capabilities, so embedding code
/// and tests can substitute an in-memory sink for the real files. The
/// service holds no other state; all record state lives on the
/// [`Prescription`] itself.
pub struct PrescriptionService {
    prescription_log: Box<dyn AppendLog>,
    remark_log: Box<dyn AppendLog>,
}

impl PrescriptionService {
    /// Creates a service writing to the file stores named by `config`.
    pub fn from_config(config: &CoreConfig) -> Self {
        Self::with_logs(
            Box::new(FileLog::new(config.prescription_log())),
            Box::new(FileLog::new(config.remark_log())),
        )
    }

    /// Creates a service writing to the supplied sinks.
    pub fn with_logs(prescription_log: Box<dyn AppendLog>, remark_log: Box<dyn AppendLog>) -> Self {
        Self {
            prescription_log,
            remark_log,
        }
    }

    /// Validates `record` and, when accepted, appends its store line.
    ///
    /// Returns `true` only when validation passed and the line reached the
    /// store. A rejected record performs no I/O. A store failure after
    /// successful validation also reports `false` — the only case where
    /// validation success and submission success diverge. The rejection or
    /// failure reason is logged.
    pub fn submit_prescription(&self, record: &Prescription) -> bool {
        match self.try_submit_prescription(record) {
            Ok(()) => {
                tracing::info!(
                    "valid prescription added: {} {}",
                    record.first_name(),
                    record.last_name()
                );
                true
            }
            Err(e) => {
                log_failure(&e);
                false
            }
        }
    }

    /// Result-returning form of [`Self::submit_prescription`].
    ///
    /// # Errors
    ///
    /// Returns `PrescriptionError::Validation` when a field rule fails and
    /// `PrescriptionError::Store` when the append write fails.
    pub fn try_submit_prescription(&self, record: &Prescription) -> PrescriptionResult<()> {
        validation::validate_prescription(record)?;
        self.prescription_log.append_line(&record.store_line())?;
        Ok(())
    }

    /// Validates a remark for `record` and, when accepted, stores it on the
    /// record and appends `"<kind>: <text>"` to the remark store.
    ///
    /// A rejected remark performs no I/O and leaves the record untouched.
    /// On a store write failure the remark has already been added to the
    /// record's in-memory sequence and is not retracted, but the call still
    /// reports `false`.
    pub fn submit_remark(&self, record: &mut Prescription, text: &str, kind: RemarkKind) -> bool {
        match self.try_submit_remark(record, text, kind) {
            Ok(()) => {
                tracing::info!("valid remark added: {text}");
                true
            }
            Err(e) => {
                log_failure(&e);
                false
            }
        }
    }

    /// Result-returning form of [`Self::submit_remark`].
    ///
    /// # Errors
    ///
    /// Returns `PrescriptionError::Validation` when a remark rule fails or
    /// the record is at capacity, and `PrescriptionError::Store` when the
    /// append write fails (the in-memory remark is kept in that case).
    pub fn try_submit_remark(
        &self,
        record: &mut Prescription,
        text: &str,
        kind: RemarkKind,
    ) -> PrescriptionResult<()> {
        validation::validate_remark(text, record.remark_count())?;
        record.push_remark(text.to_owned())?;
        self.remark_log.append_line(&format!("{kind}: {text}"))?;
        Ok(())
    }
}

fn log_failure(error: &PrescriptionError) {
    match error {
        PrescriptionError::Validation(e) => tracing::warn!("submission rejected: {e}"),
        PrescriptionError::Store(e) => tracing::error!("submission not persisted: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oculog_store::{MemoryLog, StoreError};
    use std::fs;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tempfile::TempDir;

    /// Sink that always fails, standing in for unavailable storage.
    struct FailingLog;

    impl AppendLog for FailingLog {
        fn append_line(&self, _line: &str) -> Result<(), StoreError> {
            Err(StoreError::Write(std::io::Error::new(
                std::io::ErrorKind::Other,
                "store unavailable",
            )))
        }
    }

    fn valid_record() -> Prescription {
        Prescription::new(
            "John",
            "Smith",
            "123 Long Avenue, Sydney, Australia",
            1.50,
            -1.00,
            90,
            "12/03/23",
            "Dr. Williams",
        )
    }

    fn memory_service() -> (PrescriptionService, Arc<MemoryLog>, Arc<MemoryLog>) {
        let prescriptions = Arc::new(MemoryLog::new());
        let remarks = Arc::new(MemoryLog::new());
        let service = PrescriptionService::with_logs(
            Box::new(prescriptions.clone()),
            Box::new(remarks.clone()),
        );
        (service, prescriptions, remarks)
    }

    #[test]
    fn test_accepted_prescription_appends_exactly_one_line() {
        let (service, prescriptions, _) = memory_service();

        assert!(service.submit_prescription(&valid_record()));

        assert_eq!(
            prescriptions.lines(),
            vec![
                "John Smith, 123 Long Avenue, Sydney, Australia, Sphere: 1.5, \
                 Cylinder: -1, Axis: 90, Exam Date: 12/03/23, Optometrist: Dr. Williams"
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_rejected_prescription_performs_no_io() {
        let (service, prescriptions, _) = memory_service();
        let record = Prescription::new(
            "Al",
            "Smith",
            "123 Long Avenue, Sydney, Australia",
            1.50,
            -1.00,
            90,
            "12/03/23",
            "Dr. Williams",
        );

        assert!(!service.submit_prescription(&record));
        assert!(prescriptions.lines().is_empty());
    }

    #[test]
    fn test_each_submission_writes_once() {
        let (service, prescriptions, _) = memory_service();
        let record = valid_record();

        assert!(service.submit_prescription(&record));
        assert!(service.submit_prescription(&record));

        assert_eq!(prescriptions.lines().len(), 2);
    }

    #[test]
    fn test_store_failure_reports_false_after_valid_record() {
        let service =
            PrescriptionService::with_logs(Box::new(FailingLog), Box::new(FailingLog));
        let record = valid_record();

        assert!(validation::validate_prescription(&record).is_ok());
        assert!(!service.submit_prescription(&record));
        assert!(matches!(
            service.try_submit_prescription(&record),
            Err(PrescriptionError::Store(_))
        ));
    }

    #[test]
    fn test_accepted_remark_stored_on_record_and_in_store() {
        let (service, _, remarks) = memory_service();
        let mut record = valid_record();

        assert!(service.submit_remark(
            &mut record,
            "This is a valid client remark with ten words total.",
            RemarkKind::Client,
        ));

        assert_eq!(record.remark_count(), 1);
        assert_eq!(
            remarks.lines(),
            vec!["client: This is a valid client remark with ten words total.".to_string()]
        );
    }

    #[test]
    fn test_rejected_remark_leaves_record_and_store_untouched() {
        let (service, _, remarks) = memory_service();
        let mut record = valid_record();

        assert!(!service.submit_remark(&mut record, "Too short", RemarkKind::Client));

        assert_eq!(record.remark_count(), 0);
        assert!(remarks.lines().is_empty());
    }

    #[test]
    fn test_third_remark_rejected_even_when_otherwise_valid() {
        let (service, _, remarks) = memory_service();
        let mut record = valid_record();

        assert!(service.submit_remark(
            &mut record,
            "This is the first valid remark text.",
            RemarkKind::Client,
        ));
        assert!(service.submit_remark(
            &mut record,
            "Another valid optometrist remark with seven words.",
            RemarkKind::Optometrist,
        ));
        assert!(!service.submit_remark(
            &mut record,
            "This third remark is valid text but one too many.",
            RemarkKind::Client,
        ));

        assert_eq!(record.remark_count(), 2);
        assert_eq!(remarks.lines().len(), 2);
    }

    #[test]
    fn test_remark_ceiling_holds_across_kind_interleavings() {
        for kinds in [
            [RemarkKind::Client, RemarkKind::Client, RemarkKind::Optometrist],
            [RemarkKind::Optometrist, RemarkKind::Client, RemarkKind::Client],
            [RemarkKind::Client, RemarkKind::Optometrist, RemarkKind::Client],
        ] {
            let (service, _, _) = memory_service();
            let mut record = valid_record();

            assert!(service.submit_remark(
                &mut record,
                "This is the first valid remark text.",
                kinds[0],
            ));
            assert!(service.submit_remark(
                &mut record,
                "This is the second valid remark text.",
                kinds[1],
            ));
            assert!(!service.submit_remark(
                &mut record,
                "This is the third valid remark text.",
                kinds[2],
            ));
        }
    }

    #[test]
    fn test_remark_kept_in_memory_when_store_write_fails() {
        let service =
            PrescriptionService::with_logs(Box::new(MemoryLog::new()), Box::new(FailingLog));
        let mut record = valid_record();

        assert!(!service.submit_remark(
            &mut record,
            "This remark is valid but the store is down.",
            RemarkKind::Client,
        ));

        // The in-memory add is not rolled back on a failed write.
        assert_eq!(record.remark_count(), 1);
    }

    #[test]
    fn test_remark_line_uses_kind_wire_name() {
        let (service, _, remarks) = memory_service();
        let mut record = valid_record();

        assert!(service.submit_remark(
            &mut record,
            "Dilation recommended at the next annual examination visit.",
            RemarkKind::Optometrist,
        ));

        assert_eq!(
            remarks.lines(),
            vec![
                "optometrist: Dilation recommended at the next annual examination visit."
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_from_config_writes_to_the_configured_files() {
        let temp = TempDir::new().unwrap();
        let config = CoreConfig::new(
            temp.path().join("presc.txt"),
            temp.path().join("remark.txt"),
        );
        let service = PrescriptionService::from_config(&config);
        let mut record = valid_record();

        assert!(service.submit_prescription(&record));
        assert!(service.submit_remark(
            &mut record,
            "This is a valid client remark with ten words total.",
            RemarkKind::Client,
        ));

        let presc = fs::read_to_string(config.prescription_log()).unwrap();
        assert!(presc.starts_with("John Smith, "));
        assert!(presc.ends_with("Optometrist: Dr. Williams\n"));

        let remark = fs::read_to_string(config.remark_log()).unwrap();
        assert_eq!(
            remark,
            "client: This is a valid client remark with ten words total.\n"
        );
    }

    #[test]
    fn test_from_config_default_paths() {
        // Only checks construction; the default paths are relative to the
        // working directory and must not be written from tests.
        let config = CoreConfig::default();
        assert_eq!(config.prescription_log(), PathBuf::from("presc.txt"));
    }
}
