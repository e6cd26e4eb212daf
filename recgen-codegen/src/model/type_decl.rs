//! Class declarations.

use super::{Constructor, Node, Visibility};
use crate::builder::{Emitter, Render};

/// A class declaration.
///
/// Renders its header, then constructors followed by the remaining members
/// in insertion order, one scope deeper.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDeclaration {
    pub name: String,
    pub visibility: Visibility,
    pub is_partial: bool,
    /// Base class and implemented interfaces, in order.
    pub bases: Vec<String>,
    pub constructors: Vec<Constructor>,
    /// Methods, properties and nested types.
    pub members: Vec<Node>,
}

impl TypeDeclaration {
    /// Create a new public, non-partial class.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_partial: false,
            bases: Vec::new(),
            constructors: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Set visibility.
    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.visibility = vis;
        self
    }

    /// Mark as partial.
    pub fn partial(mut self) -> Self {
        self.is_partial = true;
        self
    }

    /// Add a base class or interface.
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.bases.push(base.into());
        self
    }

    /// Add a constructor.
    pub fn constructor(mut self, ctor: Constructor) -> Self {
        self.constructors.push(ctor);
        self
    }

    /// Add a member.
    pub fn member(mut self, member: impl Into<Node>) -> Self {
        self.members.push(member.into());
        self
    }

    /// Add multiple members.
    pub fn members<N: Into<Node>>(mut self, members: impl IntoIterator<Item = N>) -> Self {
        self.members.extend(members.into_iter().map(Into::into));
        self
    }

    /// Find a nested type by name.
    #[cfg(test)]
    pub(crate) fn nested_type(&self, name: &str) -> Option<&TypeDeclaration> {
        self.members.iter().find_map(|m| match m {
            Node::Type(t) if t.name == name => Some(t),
            _ => None,
        })
    }
}

impl Render for TypeDeclaration {
    fn render(&self, out: &mut Emitter) {
        out.emit(&self.visibility);
        if self.is_partial {
            out.write("partial ");
        }
        out.write("class ").write(&self.name);

        if !self.bases.is_empty() {
            out.write(" : ").write(&self.bases.join(", "));
        }

        out.write_line("");
        out.write_line("{");
        {
            let mut body = out.scoped_indent();
            for ctor in &self.constructors {
                body.emit(ctor);
            }
            for member in &self.members {
                body.emit(member);
            }
        }
        out.write_line("}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldDeclaration, MethodDeclaration, Statement};

    #[test]
    fn test_empty_class() {
        let decl = TypeDeclaration::new("Empty");
        assert_eq!(decl.to_text(), "public class Empty\n{\n}\n");
    }

    #[test]
    fn test_partial_class_with_bases() {
        let decl = TypeDeclaration::new("Person")
            .partial()
            .base("Base")
            .base("System.IEquatable<Person>");
        assert!(
            decl.to_text()
                .starts_with("public partial class Person : Base, System.IEquatable<Person>\n{\n")
        );
    }

    #[test]
    fn test_constructors_render_before_members() {
        let decl = TypeDeclaration::new("Point")
            .member(FieldDeclaration::new("X", "int"))
            .constructor(Constructor::new("Point"));

        assert_eq!(
            decl.to_text(),
            "public class Point\n{\n    public Point()\n    {\n    }\n    public int X { get; }\n}\n"
        );
    }

    #[test]
    fn test_nested_indentation() {
        let inner = TypeDeclaration::new("Inner").member(
            MethodDeclaration::new("Run", "void").statement(Statement::new("return;")),
        );
        let outer = TypeDeclaration::new("Outer").member(inner);

        let expected = "\
public class Outer
{
    public class Inner
    {
        public void Run()
        {
            return;
        }
    }
}
";
        assert_eq!(outer.to_text(), expected);
        assert!(outer.nested_type("Inner").is_some());
        assert!(outer.nested_type("Missing").is_none());
    }
}
