//! Pattern dispatch: turn a batch of candidates into text artifacts.
//!
//! A batch always yields the marker artifact plus one artifact per candidate
//! that lowers cleanly. A candidate that fails to lower is recorded as a
//! [`CandidateFailure`] and the rest of the batch carries on. Only a name
//! that already produced an artifact makes a later candidate a duplicate.

use indexmap::IndexSet;
use recgen_ir::Candidate;
use serde::Serialize;

use crate::{
    builder::Render,
    config::GeneratorConfig,
    diagnostic::Diagnostic,
    error::LowerError,
    model::{MarkerDeclaration, TypeFile},
};

/// File extension used when an artifact is written to disk.
pub const FILE_EXTENSION: &str = "g.cs";

/// A named piece of generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub name: String,
    pub content: String,
}

impl Artifact {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// File name for this artifact, e.g. `Person.Builder.g.cs`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, FILE_EXTENSION)
    }
}

/// A candidate that produced no artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFailure {
    /// Type name of the candidate, possibly empty.
    pub candidate: String,
    pub error: LowerError,
}

/// Everything produced for one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutput {
    pub marker: Artifact,
    /// Candidate artifacts, in input order.
    pub artifacts: Vec<Artifact>,
    pub failures: Vec<CandidateFailure>,
    pub diagnostics: Vec<Diagnostic>,
}

impl BatchOutput {
    /// Returns true if every candidate produced an artifact.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// The marker artifact followed by every candidate artifact.
    pub fn all_artifacts(&self) -> impl Iterator<Item = &Artifact> {
        std::iter::once(&self.marker).chain(self.artifacts.iter())
    }
}

/// Runs lowering and rendering for batches of candidates.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    config: GeneratorConfig,
}

impl Dispatcher {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Name of the artifact generated for a type, e.g. `<TypeName>.Builder`.
    pub fn artifact_name(&self, type_name: &str) -> String {
        format!("{type_name}.{}", self.config.pattern.artifact_suffix())
    }

    /// The marker type definition. Its content depends only on the
    /// configuration, so emitting it again for every batch is harmless.
    pub fn marker_artifact(&self) -> Artifact {
        let marker = MarkerDeclaration::new(&self.config.marker).target(self.config.marker_target);
        let name = marker.type_name();
        let file = TypeFile::new(marker)
            .usings(&self.config.marker_usings)
            .namespace(self.config.marker_namespace.clone());
        Artifact::new(name, file.to_text())
    }

    /// Lower and render a single candidate.
    ///
    /// # Errors
    ///
    /// Returns the [`LowerError`] describing why the candidate is malformed.
    pub fn generate(&self, candidate: &Candidate) -> Result<Artifact, LowerError> {
        let declaration = self.config.pattern.lower(&candidate.record)?;
        let file = TypeFile::new(declaration)
            .usings(&candidate.usings)
            .namespace(candidate.namespace.clone());
        Ok(Artifact::new(
            self.artifact_name(candidate.name()),
            file.to_text(),
        ))
    }

    /// Process a batch. Failures are isolated per candidate.
    #[tracing::instrument(skip_all, fields(pattern = %self.config.pattern, candidates = candidates.len()))]
    pub fn dispatch(&self, candidates: &[Candidate]) -> BatchOutput {
        let mut artifacts = Vec::with_capacity(candidates.len());
        let mut failures = Vec::new();
        let mut diagnostics = Vec::new();
        let mut seen: IndexSet<&str> = IndexSet::new();

        for candidate in candidates {
            let name = candidate.name();

            if seen.contains(name) {
                tracing::warn!(candidate = name, "duplicate candidate skipped");
                diagnostics.push(
                    Diagnostic::warning(
                        "dispatch",
                        format!("'{name}' was already generated; this candidate is skipped"),
                    )
                    .at(name),
                );
                continue;
            }

            match self.generate(candidate) {
                Ok(artifact) => {
                    seen.insert(name);
                    tracing::debug!(
                        candidate = name,
                        fields = candidate.record.fields.len(),
                        "lowered candidate"
                    );
                    if candidate.record.fields.is_empty() {
                        diagnostics.push(
                            Diagnostic::info("lower", format!("'{name}' has no fields")).at(name),
                        );
                    }
                    artifacts.push(artifact);
                }
                Err(error) => {
                    tracing::warn!(candidate = name, %error, "candidate failed to lower");
                    diagnostics.push(Diagnostic::error("lower", error.to_string()).at(name));
                    failures.push(CandidateFailure {
                        candidate: name.to_string(),
                        error,
                    });
                }
            }
        }

        BatchOutput {
            marker: self.marker_artifact(),
            artifacts,
            failures,
            diagnostics,
        }
    }
}
