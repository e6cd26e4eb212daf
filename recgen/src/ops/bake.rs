//! Bake operation - artifact generation from manifest.

use std::path::Path;

use eyre::{Context, Result};
use recgen_codegen::Dispatcher;
use recgen_core::{File, Overwrite};
use recgen_manifest::Manifest;

use crate::reports::{
    BakeReport, FailedCandidate, GenerationResult, PreviewFile, PreviewResult, WrittenFile,
    WrittenResult,
};

/// Options for the bake operation.
pub struct BakeOptions<'a> {
    /// Output directory for generated artifacts.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the bake operation.
///
/// Dispatches every record in the manifest and writes one `.g.cs` file per
/// artifact. Records that fail to lower are reported, not written.
#[tracing::instrument(skip_all, fields(records = manifest.records.len(), dry_run = opts.dry_run))]
pub fn bake(manifest: &Manifest, opts: BakeOptions) -> Result<BakeReport> {
    let dispatcher = Dispatcher::new(manifest.generator_config());
    let batch = dispatcher.dispatch(&manifest.candidates());

    let result = if opts.dry_run {
        let files = batch
            .all_artifacts()
            .map(|artifact| PreviewFile {
                path: artifact.file_name(),
                content: artifact.content.clone(),
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let mut files = Vec::new();
        for artifact in batch.all_artifacts() {
            let path = opts.output_dir.join(artifact.file_name());
            let status = File::new(&path, &artifact.content)
                .overwrite(Overwrite::IfChanged)
                .write()
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            tracing::debug!(path = %path.display(), ?status, "artifact written");
            files.push(WrittenFile {
                path,
                status: status.into(),
            });
        }
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            files,
        })
    };

    let notes = batch
        .diagnostics
        .iter()
        .filter(|d| !d.severity.is_error())
        .cloned()
        .collect();

    Ok(BakeReport {
        record_count: manifest.records.len(),
        marker: batch.marker.name.clone(),
        failures: batch.failures.iter().map(FailedCandidate::from).collect(),
        notes,
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::{fs, str::FromStr};

    use super::*;
    use crate::reports::FileStatus;

    const MANIFEST: &str = r#"
[generator]
namespace = "Sample"

[[records]]
name = "Person"

[[records.fields]]
name = "FirstName"
type = "string"

[[records]]
name = "Order"

[[records.fields]]
name = "Id"
type = "int"

[[records.fields]]
name = "Id"
type = "int"

[[records]]
name = "Address"

[[records.fields]]
name = "Street"
type = "string"
"#;

    fn manifest() -> Manifest {
        Manifest::from_str(MANIFEST).unwrap()
    }

    #[test]
    fn test_bake_writes_successful_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let report = bake(
            &manifest(),
            BakeOptions {
                output_dir: dir.path(),
                dry_run: false,
            },
        )
        .unwrap();

        assert!(dir.path().join("BuilderPatternAttribute.g.cs").exists());
        assert!(dir.path().join("Person.Builder.g.cs").exists());
        assert!(dir.path().join("Address.Builder.g.cs").exists());
        assert!(!dir.path().join("Order.Builder.g.cs").exists());

        assert!(!report.is_success());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].candidate, "Order");
        assert_eq!(report.failures[0].code, "duplicate_field");
    }

    #[test]
    fn test_bake_twice_leaves_files_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let opts = || BakeOptions {
            output_dir: dir.path(),
            dry_run: false,
        };

        bake(&manifest(), opts()).unwrap();
        let report = bake(&manifest(), opts()).unwrap();

        let GenerationResult::Written(written) = report.result else {
            panic!("expected written result");
        };
        assert_eq!(written.files.len(), 3);
        assert!(written.files.iter().all(|f| f.status == FileStatus::Unchanged));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let report = bake(
            &manifest(),
            BakeOptions {
                output_dir: dir.path(),
                dry_run: true,
            },
        )
        .unwrap();

        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
        let GenerationResult::Preview(preview) = report.result else {
            panic!("expected preview result");
        };
        let paths: Vec<_> = preview.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "BuilderPatternAttribute.g.cs",
                "Person.Builder.g.cs",
                "Address.Builder.g.cs"
            ]
        );
    }

    #[test]
    fn test_report_serializes() {
        let dir = tempfile::tempdir().unwrap();
        let report = bake(
            &manifest(),
            BakeOptions {
                output_dir: dir.path(),
                dry_run: true,
            },
        )
        .unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["marker"], "BuilderPatternAttribute");
        assert_eq!(json["failures"][0]["code"], "duplicate_field");
        assert_eq!(json["result"]["preview"]["files"][1]["path"], "Person.Builder.g.cs");
    }

    #[test]
    fn test_bake_bad_field_keeps_good_record() {
        let manifest = Manifest::from_str(
            r#"
            [[records]]
            name = "Good"

            [[records.fields]]
            name = "Name"
            type = "string"

            [[records]]
            name = "Bad"

            [[records.fields]]
            name = ""
            type = "string"
            "#,
        )
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let report = bake(
            &manifest,
            BakeOptions {
                output_dir: dir.path(),
                dry_run: false,
            },
        )
        .unwrap();

        assert!(dir.path().join("Good.Builder.g.cs").exists());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].candidate, "Bad");
        assert_eq!(report.failures[0].code, "empty_name");
    }

    #[test]
    fn test_bake_primary_constructor_pattern() {
        let manifest = Manifest::from_str(
            r#"
            [generator]
            pattern = "primary_constructor"
            namespace = "Sample"

            [[records]]
            name = "Service"

            [[records.fields]]
            name = "_data"
            type = "System.Guid"
            "#,
        )
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let report = bake(
            &manifest,
            BakeOptions {
                output_dir: dir.path(),
                dry_run: false,
            },
        )
        .unwrap();

        assert!(report.is_success());
        assert_eq!(report.marker, "PrimaryConstructorAttribute");
        assert!(dir.path().join("PrimaryConstructorAttribute.g.cs").exists());
        let content =
            fs::read_to_string(dir.path().join("Service.PrimaryConstructor.g.cs")).unwrap();
        assert!(content.contains("public Service(System.Guid data)"));
    }
}
