//! Check operation - manifest validation.

use std::path::Path;

use recgen_codegen::{Dispatcher, Severity};
use recgen_manifest::Manifest;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Lowers every record without writing anything and collects diagnostics.
pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    let batch = Dispatcher::new(manifest.generator_config()).dispatch(&manifest.candidates());

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &batch.diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        record_count: manifest.records.len(),
        artifact_count: batch.artifacts.len(),
        errors,
        warnings,
        infos,
    }
}
