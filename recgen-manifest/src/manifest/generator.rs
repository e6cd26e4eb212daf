use std::{fmt::Display, str::FromStr};

use recgen_codegen::{GeneratorConfig, Pattern, model::MarkerTarget};
use serde::{Deserialize, Deserializer};

use super::ParseContext;
use crate::Result;

/// The `[generator]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorSection {
    /// Code pattern applied to every record.
    #[serde(default, deserialize_with = "deserialize_parsed")]
    pub pattern: Pattern,

    /// Marker name; the injected type is `<marker>Attribute`. Defaults to
    /// the pattern's own marker.
    pub marker: Option<String>,

    /// Namespace of the marker type. An empty string emits it at the top level.
    #[serde(default = "default_marker_namespace")]
    pub marker_namespace: String,

    /// Kind of declaration the marker applies to.
    #[serde(default, deserialize_with = "deserialize_parsed")]
    pub marker_target: MarkerTarget,

    /// Using directives for records that don't set their own.
    #[serde(default = "default_usings")]
    pub usings: Vec<String>,

    /// Namespace for records that don't set their own.
    pub namespace: Option<String>,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            pattern: Pattern::default(),
            marker: None,
            marker_namespace: default_marker_namespace(),
            marker_target: MarkerTarget::default(),
            usings: default_usings(),
            namespace: None,
        }
    }
}

impl GeneratorSection {
    /// Settings for the dispatcher.
    pub fn config(&self) -> GeneratorConfig {
        let namespace = Some(self.marker_namespace.clone()).filter(|ns| !ns.is_empty());
        let config = GeneratorConfig::for_pattern(self.pattern);
        let config = match &self.marker {
            Some(marker) => config.marker(marker),
            None => config,
        };
        config
            .marker_namespace(namespace)
            .marker_target(self.marker_target)
    }

    pub(crate) fn validate(&self, ctx: &ParseContext<'_>) -> Result<()> {
        if let Some(marker) = &self.marker {
            ctx.validate_identifier_value("marker", marker, "marker")?;
        }
        if !self.marker_namespace.is_empty() {
            ctx.validate_dotted("marker_namespace", &self.marker_namespace, "namespace")?;
        }
        if let Some(namespace) = &self.namespace {
            ctx.validate_dotted("namespace", namespace, "namespace")?;
        }
        for using in &self.usings {
            ctx.validate_dotted("usings", using, "using")?;
        }
        Ok(())
    }
}

fn default_marker_namespace() -> String {
    GeneratorConfig::DEFAULT_MARKER_NAMESPACE.to_string()
}

fn default_usings() -> Vec<String> {
    vec!["System".to_string()]
}

/// Deserialize a string through the target's `FromStr`.
fn deserialize_parsed<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(D::Error::custom)
}
