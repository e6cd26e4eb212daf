//! Bake command report data structures.

use std::path::PathBuf;

use recgen_codegen::{CandidateFailure, Diagnostic};
use recgen_core::WriteResult;
use serde::Serialize;

use super::output::{Output, Report};

/// Report data from artifact generation.
#[derive(Debug, Serialize)]
pub struct BakeReport {
    /// Number of records in the manifest.
    pub record_count: usize,

    /// Name of the marker artifact.
    pub marker: String,

    /// Records that produced no artifact.
    pub failures: Vec<FailedCandidate>,

    /// Non-error diagnostics from dispatch.
    pub notes: Vec<Diagnostic>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

impl BakeReport {
    /// Whether every record produced an artifact.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A record that failed to lower.
#[derive(Debug, Serialize)]
pub struct FailedCandidate {
    pub candidate: String,
    /// Machine-readable error code.
    pub code: &'static str,
    pub message: String,
}

impl From<&CandidateFailure> for FailedCandidate {
    fn from(failure: &CandidateFailure) -> Self {
        let candidate = if failure.candidate.is_empty() {
            "<unnamed>".to_string()
        } else {
            failure.candidate.clone()
        };
        Self {
            candidate,
            code: failure.error.code(),
            message: failure.error.to_string(),
        }
    }
}

/// Result of artifact generation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug, Serialize)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Every artifact file, marker first.
    pub files: Vec<WrittenFile>,
}

/// A file produced by a bake.
#[derive(Debug, Serialize)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub status: FileStatus,
}

/// What happened to a file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Written,
    Unchanged,
}

impl From<WriteResult> for FileStatus {
    fn from(result: WriteResult) -> Self {
        match result {
            WriteResult::Written => Self::Written,
            WriteResult::Unchanged => Self::Unchanged,
        }
    }
}

/// Result of a dry-run preview.
#[derive(Debug, Serialize)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug, Serialize)]
pub struct PreviewFile {
    /// File name.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        for note in &self.notes {
            let text = match &note.location {
                Some(loc) => format!("{} (at {})", note.message, loc),
                None => note.message.clone(),
            };
            if note.severity.is_warning() {
                out.warning(&text);
            } else {
                out.preformatted(&format!("{}: {}", note.severity, text));
            }
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }

        self.render_failures(out);
    }
}

impl BakeReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.section(&format!(
            "Artifacts ({} of {} records)",
            written.files.len().saturating_sub(1),
            self.record_count
        ));
        for file in &written.files {
            let name = file
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.path.display().to_string());
            match file.status {
                FileStatus::Written => out.added_item(&name),
                FileStatus::Unchanged => out.list_item(&format!("{} (unchanged)", name)),
            }
        }
        out.newline();
        out.key_value("Generated", &written.output_dir.display().to_string());
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }

    fn render_failures(&self, out: &mut dyn Output) {
        if self.failures.is_empty() {
            return;
        }
        out.newline();
        for failure in &self.failures {
            out.error(&format!("{}: {}", failure.candidate, failure.message));
        }
    }
}
