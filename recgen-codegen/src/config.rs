//! Generator settings.

use crate::{model::MarkerTarget, pattern::Pattern};

/// Settings shared by every candidate in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Code pattern applied to every candidate.
    pub pattern: Pattern,
    /// Marker name; the injected type is `<marker>Attribute`.
    pub marker: String,
    /// Namespace the marker type is declared in.
    pub marker_namespace: Option<String>,
    /// Declaration kind the marker applies to.
    pub marker_target: MarkerTarget,
    /// Using directives emitted ahead of the marker type.
    pub marker_usings: Vec<String>,
}

impl GeneratorConfig {
    /// Default marker name.
    pub const DEFAULT_MARKER: &'static str = "BuilderPattern";

    /// Default marker namespace.
    pub const DEFAULT_MARKER_NAMESPACE: &'static str = "AutoStar";

    /// Defaults for a pattern, with the marker named after it.
    pub fn for_pattern(pattern: Pattern) -> Self {
        Self {
            pattern,
            marker: pattern.default_marker().to_string(),
            ..Self::default()
        }
    }

    /// Set the marker name.
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Set (or clear) the marker namespace.
    pub fn marker_namespace(mut self, namespace: Option<String>) -> Self {
        self.marker_namespace = namespace;
        self
    }

    /// Set the marker target.
    pub fn marker_target(mut self, target: MarkerTarget) -> Self {
        self.marker_target = target;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            pattern: Pattern::default(),
            marker: Self::DEFAULT_MARKER.to_string(),
            marker_namespace: Some(Self::DEFAULT_MARKER_NAMESPACE.to_string()),
            marker_target: MarkerTarget::Class,
            marker_usings: vec!["System".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_builder_pattern() {
        let config = GeneratorConfig::default();
        assert_eq!(config.pattern, Pattern::Builder);
        assert_eq!(config.marker, Pattern::Builder.default_marker());
        assert_eq!(config, GeneratorConfig::for_pattern(Pattern::Builder));
    }

    #[test]
    fn test_for_pattern_names_marker() {
        let config = GeneratorConfig::for_pattern(Pattern::PrimaryConstructor);
        assert_eq!(config.marker, "PrimaryConstructor");
        assert_eq!(config.marker_namespace.as_deref(), Some("AutoStar"));
    }
}
