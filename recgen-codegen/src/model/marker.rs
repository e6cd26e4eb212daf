//! Marker (attribute) declarations.

use super::Visibility;
use crate::builder::{Emitter, Render};

/// Kind of declaration a marker may be applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerTarget {
    #[default]
    Class,
    Struct,
    Interface,
}

impl MarkerTarget {
    /// The `AttributeTargets` member name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Struct => "Struct",
            Self::Interface => "Interface",
        }
    }
}

impl std::str::FromStr for MarkerTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "class" => Ok(Self::Class),
            "struct" => Ok(Self::Struct),
            "interface" => Ok(Self::Interface),
            _ => Err(format!(
                "unknown marker target '{}', expected class, struct or interface",
                s
            )),
        }
    }
}

/// The attribute type that tags candidate types for generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerDeclaration {
    /// Marker name without the `Attribute` suffix.
    pub name: String,
    pub target: MarkerTarget,
    pub inherited: bool,
    pub allow_multiple: bool,
    pub visibility: Visibility,
}

impl MarkerDeclaration {
    /// Create a public, inherited, single-use marker for classes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: MarkerTarget::Class,
            inherited: true,
            allow_multiple: false,
            visibility: Visibility::Public,
        }
    }

    /// Set the target kind.
    pub fn target(mut self, target: MarkerTarget) -> Self {
        self.target = target;
        self
    }

    /// The declared type name, e.g. `BuilderPatternAttribute`.
    pub fn type_name(&self) -> String {
        format!("{}Attribute", self.name)
    }
}

impl Render for MarkerDeclaration {
    fn render(&self, out: &mut Emitter) {
        out.write_line(&format!(
            "[AttributeUsage(AttributeTargets.{}, Inherited = {}, AllowMultiple = {})]",
            self.target.as_str(),
            self.inherited,
            self.allow_multiple
        ));
        out.emit(&self.visibility)
            .write("class ")
            .write(&self.type_name())
            .write_line(" : Attribute");
        out.write_line("{");
        out.write_line("}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_render() {
        let marker = MarkerDeclaration::new("BuilderPattern");
        assert_eq!(
            marker.to_text(),
            "[AttributeUsage(AttributeTargets.Class, Inherited = true, AllowMultiple = false)]\n\
             public class BuilderPatternAttribute : Attribute\n{\n}\n"
        );
    }

    #[test]
    fn test_marker_target() {
        let marker = MarkerDeclaration::new("Tag").target(MarkerTarget::Struct);
        assert!(marker.to_text().starts_with(
            "[AttributeUsage(AttributeTargets.Struct, Inherited = true, AllowMultiple = false)]\n"
        ));
    }

    #[test]
    fn test_marker_target_from_str() {
        assert_eq!("class".parse::<MarkerTarget>(), Ok(MarkerTarget::Class));
        assert_eq!("Struct".parse::<MarkerTarget>(), Ok(MarkerTarget::Struct));
        assert!("enum".parse::<MarkerTarget>().is_err());
    }
}
