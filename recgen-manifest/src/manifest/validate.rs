//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;
use recgen_core::{is_csharp_keyword, validate_identifier};

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Nested contexts share the source and extend the path, so errors can say
/// where in the manifest a name came from.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "recgen.toml");
/// ctx.validate_identifier_value("marker", "BuilderPattern", "marker")?;
///
/// let nested = ctx.push("Person");
/// nested.validate_dotted("namespace", "Sample.Models", "namespace")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["Person"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "field in 'Person'" or just "record" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a `key = "value"` assignment's value in the source.
    pub fn find_span(&self, key: &str, value: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), key, value)
    }

    /// Validate that a value assigned to `key` is a valid identifier.
    ///
    /// Checks for reserved keywords and valid identifier format.
    pub fn validate_identifier_value(&self, key: &str, name: &str, kind: &str) -> Result<()> {
        if is_csharp_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(key, name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(key, name),
            ));
        }

        Ok(())
    }

    /// Validate a dotted name such as a namespace or using directive.
    pub fn validate_dotted(&self, key: &str, value: &str, kind: &str) -> Result<()> {
        for segment in value.split('.') {
            if let Some(reason) = validate_identifier(segment) {
                return Err(self.source.invalid_identifier_error(
                    value,
                    self.context_for(kind),
                    reason,
                    self.find_span(key, value),
                ));
            }
        }
        Ok(())
    }
}

/// Find the span of a value assigned to `key` in the TOML source.
///
/// Matches `key = "value"`, `key="value"` and the single-quoted forms, and
/// values inside arrays like `usings = ["System"]`.
pub(crate) fn find_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        for sep in [" = ", "="] {
            let pattern = format!("{key}{sep}{quote}{value}{quote}");
            if let Some(pos) = src.find(&pattern) {
                let start = pos + key.len() + sep.len() + 1;
                return Some(SourceSpan::from((start, value.len())));
            }
        }
    }

    // Array entries: only trust the match if it sits on a line assigning `key`
    let quoted = format!("\"{value}\"");
    for (offset, line) in line_offsets(src) {
        if !line.trim_start().starts_with(key) {
            continue;
        }
        if let Some(pos) = line.find(&quoted) {
            return Some(SourceSpan::from((offset + pos + 1, value.len())));
        }
    }

    // No fallback - better to have no span than point to wrong location
    None
}

fn line_offsets(src: &str) -> impl Iterator<Item = (usize, &str)> {
    src.split_inclusive('\n').scan(0, |offset, line| {
        let start = *offset;
        *offset += line.len();
        Some((start, line))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_value_span() {
        let src = "[[records]]\nname = \"Person\"\n";
        let span = find_value_span(src, "name", "Person").unwrap();
        assert_eq!(span.offset(), 20);
        assert_eq!(span.len(), 6);
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "Person");
    }

    #[test]
    fn test_find_value_span_compact_and_single_quoted() {
        let src = "marker='Tag'\n";
        let span = find_value_span(src, "marker", "Tag").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "Tag");
    }

    #[test]
    fn test_find_value_span_in_array() {
        let src = "[generator]\nusings = [\"System\", \"Bad Name\"]\n";
        let span = find_value_span(src, "usings", "Bad Name").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "Bad Name");
    }

    #[test]
    fn test_find_value_span_missing() {
        assert!(find_value_span("name = \"Other\"", "name", "Person").is_none());
    }

    #[test]
    fn test_context_for_nested_path() {
        let ctx = ParseContext::new("", "recgen.toml");
        assert_eq!(ctx.context_for("record"), "record");
        assert_eq!(ctx.push("Person").context_for("field"), "field in 'Person'");
    }

    #[test]
    fn test_validate_identifier_value() {
        let ctx = ParseContext::new("marker = \"class\"", "recgen.toml");
        assert!(ctx.validate_identifier_value("marker", "Tag", "marker").is_ok());
        assert!(matches!(
            *ctx.validate_identifier_value("marker", "class", "marker").unwrap_err(),
            crate::Error::ReservedKeyword { .. }
        ));
        assert!(matches!(
            *ctx.validate_identifier_value("marker", "9lives", "marker").unwrap_err(),
            crate::Error::InvalidIdentifier { .. }
        ));
    }

    #[test]
    fn test_validate_dotted() {
        let ctx = ParseContext::new("", "recgen.toml");
        assert!(ctx.validate_dotted("namespace", "Company.Product", "namespace").is_ok());
        assert!(ctx.validate_dotted("namespace", "Company..Product", "namespace").is_err());
    }
}
