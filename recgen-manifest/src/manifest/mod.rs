//! Manifest types and parsing for recgen.toml files.

mod generator;
mod record;
mod validate;

use std::{path::Path, str::FromStr};

pub use generator::GeneratorSection;
use recgen_codegen::GeneratorConfig;
use recgen_ir::Candidate;
pub use record::RecordEntry;
use serde::Deserialize;
pub use validate::ParseContext;

use crate::{Error, Result, SourceContext};

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "recgen.toml";

/// Root manifest for recgen.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Generator settings shared by every record
    #[serde(default)]
    pub generator: GeneratorSection,

    /// Records to generate builders for, in order
    #[serde(default)]
    pub records: Vec<RecordEntry>,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Parse a recgen.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a recgen.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(content)
            .map_err(|e| SourceContext::new(content, filename).parse_error(e))?;
        manifest.validate(content, filename)?;
        Ok(manifest)
    }

    /// One candidate per record, in manifest order.
    pub fn candidates(&self) -> Vec<Candidate> {
        self.records
            .iter()
            .map(|r| r.candidate(&self.generator))
            .collect()
    }

    /// Dispatcher settings from the `[generator]` table.
    pub fn generator_config(&self) -> GeneratorConfig {
        self.generator.config()
    }

    /// Validate the manifest after parsing
    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        let ctx = ParseContext::new(src, filename);

        self.generator.validate(&ctx)?;
        for record in &self.records {
            record.validate(&ctx)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use recgen_codegen::{Pattern, model::MarkerTarget};

    use super::*;

    fn parse(content: &str) -> Manifest {
        Manifest::from_str(content).expect("Failed to parse manifest")
    }

    #[test]
    fn test_empty_manifest_uses_defaults() {
        let manifest = parse("");
        assert!(manifest.records.is_empty());
        assert_eq!(manifest.generator, GeneratorSection::default());
        assert_eq!(manifest.generator_config(), GeneratorConfig::default());
    }

    #[test]
    fn test_records_keep_field_order() {
        let manifest = parse(
            r#"
            [[records]]
            name = "Person"

            [[records.fields]]
            name = "FirstName"
            type = "string"

            [[records.fields]]
            name = "A"
            type = "string?"
            optional = true

            [[records.fields]]
            name = "B"
            type = "string"
            default = "\"B val\""
            "#,
        );

        let person = &manifest.records[0];
        let names: Vec<_> = person.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["FirstName", "A", "B"]);
        assert!(person.fields[1].optional);
        assert_eq!(person.fields[2].default.as_deref(), Some("\"B val\""));
    }

    #[test]
    fn test_candidates_inherit_generator_context() {
        let manifest = parse(
            r#"
            [generator]
            namespace = "Sample"
            usings = ["System", "System.Collections.Generic"]

            [[records]]
            name = "Person"

            [[records]]
            name = "Order"
            namespace = "Shop"
            usings = []
            "#,
        );

        let candidates = manifest.candidates();
        assert_eq!(candidates[0].namespace.as_deref(), Some("Sample"));
        assert_eq!(candidates[0].usings, vec!["System", "System.Collections.Generic"]);
        assert_eq!(candidates[1].namespace.as_deref(), Some("Shop"));
        assert!(candidates[1].usings.is_empty());
    }

    #[test]
    fn test_generator_settings() {
        let manifest = parse(
            r#"
            [generator]
            marker = "AutoBuilder"
            marker_namespace = ""
            marker_target = "struct"
            "#,
        );

        let config = manifest.generator_config();
        assert_eq!(config.marker, "AutoBuilder");
        assert_eq!(config.marker_namespace, None);
        assert_eq!(config.marker_target, MarkerTarget::Struct);
    }

    #[test]
    fn test_pattern_names_the_default_marker() {
        let manifest = parse("[generator]\npattern = \"primary_constructor\"\n");
        let config = manifest.generator_config();
        assert_eq!(config.pattern, Pattern::PrimaryConstructor);
        assert_eq!(config.marker, "PrimaryConstructor");

        let renamed = parse("[generator]\npattern = \"primary_constructor\"\nmarker = \"Inject\"\n");
        assert_eq!(renamed.generator_config().marker, "Inject");
    }

    #[test]
    fn test_unknown_pattern() {
        let err = Manifest::from_str("[generator]\npattern = \"visitor\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_duplicate_fields_are_left_to_lowering() {
        let manifest = parse(
            r#"
            [[records]]
            name = "Order"

            [[records.fields]]
            name = "Id"
            type = "int"

            [[records.fields]]
            name = "Id"
            type = "int"
            "#,
        );
        assert_eq!(manifest.records[0].fields.len(), 2);
    }

    #[test]
    fn test_unknown_marker_target() {
        let err = Manifest::from_str("[generator]\nmarker_target = \"enum\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_field_key() {
        let err = Manifest::from_str(
            r#"
            [[records]]
            name = "Person"

            [[records.fields]]
            name = "Age"
            type = "int"
            optinal = true
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_record_names_are_left_to_lowering() {
        let manifest = parse(
            r#"
            [[records]]
            name = "Good"

            [[records.fields]]
            name = "Name"
            type = "string"

            [[records]]
            name = "class"

            [[records]]
            name = "Bad"

            [[records.fields]]
            name = ""
            type = ""
            "#,
        );
        assert_eq!(manifest.candidates().len(), 3);
        assert_eq!(manifest.records[2].fields[0].ty, "");
    }

    #[test]
    fn test_record_namespace_names_its_record() {
        let err = Manifest::from_str(
            r#"
            [[records]]
            name = "Person"
            namespace = "My App"
            "#,
        )
        .unwrap_err();
        match *err {
            Error::InvalidIdentifier {
                ref context,
                ref name,
                span,
                ..
            } => {
                assert_eq!(context, "namespace in 'Person'");
                assert_eq!(name, "My App");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_namespace() {
        let err = Manifest::from_str("[generator]\nnamespace = \"My App\"\n").unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }
}
