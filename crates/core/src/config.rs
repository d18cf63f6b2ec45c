//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into the
//! recorder. Store paths are never read from the environment during a
//! submission, which keeps behaviour consistent across callers and test
//! harnesses.

use std::path::{Path, PathBuf};

/// Default path of the prescription store.
pub const DEFAULT_PRESCRIPTION_LOG: &str = "presc.txt";
/// Default path of the remark store.
pub const DEFAULT_REMARK_LOG: &str = "remark.txt";

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    prescription_log: PathBuf,
    remark_log: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig` with explicit store paths.
    pub fn new(prescription_log: PathBuf, remark_log: PathBuf) -> Self {
        Self {
            prescription_log,
            remark_log,
        }
    }

    pub fn prescription_log(&self) -> &Path {
        &self.prescription_log
    }

    pub fn remark_log(&self) -> &Path {
        &self.remark_log
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(
            PathBuf::from(DEFAULT_PRESCRIPTION_LOG),
            PathBuf::from(DEFAULT_REMARK_LOG),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_standard_store_paths() {
        let config = CoreConfig::default();
        assert_eq!(config.prescription_log(), Path::new("presc.txt"));
        assert_eq!(config.remark_log(), Path::new("remark.txt"));
    }

    #[test]
    fn test_explicit_paths_are_kept() {
        let config = CoreConfig::new(
            PathBuf::from("/var/lib/oculog/presc.txt"),
            PathBuf::from("/var/lib/oculog/remark.txt"),
        );
        assert_eq!(
            config.prescription_log(),
            Path::new("/var/lib/oculog/presc.txt")
        );
        assert_eq!(config.remark_log(), Path::new("/var/lib/oculog/remark.txt"));
    }
}
