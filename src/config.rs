//! Export configuration resolved from flags, environment, and defaults.

use std::path::PathBuf;

use crate::export::DEFAULT_OUTPUT;

/// Environment variable naming the parent document.
pub const SOURCE_ENV: &str = "TASK_EXPORT_SOURCE";
/// Environment variable naming the output file.
pub const OUTPUT_ENV: &str = "TASK_EXPORT_OUTPUT";
/// Parent document used when neither flag nor environment names one.
pub const DEFAULT_SOURCE: &str = "parent.yaml";

/// Where to read the parent from and where to write the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Parent document path.
    pub source: PathBuf,
    /// Output file path.
    pub output: PathBuf,
}

impl ExportConfig {
    /// Resolves each setting as flag, then environment variable, then default.
    #[must_use]
    pub fn resolve(source: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        Self::resolve_with(source, output, |key| std::env::var(key).ok())
    }

    /// Same as [`ExportConfig::resolve`] with an explicit environment lookup.
    #[must_use]
    pub fn resolve_with(
        source: Option<PathBuf>,
        output: Option<PathBuf>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let pick = |flag: Option<PathBuf>, key: &str, default: &str| {
            flag.or_else(|| env(key).filter(|v| !v.is_empty()).map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(default))
        };
        Self {
            source: pick(source, SOURCE_ENV, DEFAULT_SOURCE),
            output: pick(output, OUTPUT_ENV, DEFAULT_OUTPUT),
        }
    }
}
