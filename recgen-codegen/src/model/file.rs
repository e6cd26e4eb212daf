//! File-level node.

use super::Node;
use crate::builder::{Emitter, Render};

/// A generated source file: using directives, an optional namespace and a
/// single root declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeFile {
    pub usings: Vec<String>,
    pub namespace: Option<String>,
    pub declaration: Node,
}

impl TypeFile {
    pub fn new(declaration: impl Into<Node>) -> Self {
        Self {
            usings: Vec::new(),
            namespace: None,
            declaration: declaration.into(),
        }
    }

    /// Add multiple using directives.
    pub fn usings(mut self, usings: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.usings.extend(usings.into_iter().map(Into::into));
        self
    }

    /// Set (or clear) the enclosing namespace.
    pub fn namespace(mut self, namespace: Option<String>) -> Self {
        self.namespace = namespace;
        self
    }
}

impl Render for TypeFile {
    fn render(&self, out: &mut Emitter) {
        for using in &self.usings {
            out.write("using ").write(using).write_line(";");
        }

        match &self.namespace {
            Some(ns) => {
                out.write("namespace ").write_line(ns);
                out.write_line("{");
                out.indented(|out| {
                    out.emit(&self.declaration);
                });
                out.write_line("}");
            }
            None => {
                out.emit(&self.declaration);
            }
        }
    }
}
