//! Body-level nodes.

use crate::builder::{Emitter, Render};

/// An opaque, pre-rendered line of body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement(pub String);

impl Statement {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }
}

impl Render for Statement {
    fn render(&self, out: &mut Emitter) {
        out.write_line(&self.0);
    }
}

/// `lhs = rhs;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentStatement {
    pub lhs: String,
    pub rhs: String,
}

impl AssignmentStatement {
    pub fn new(lhs: impl Into<String>, rhs: impl Into<String>) -> Self {
        Self {
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }
}

impl Render for AssignmentStatement {
    fn render(&self, out: &mut Emitter) {
        out.write(&self.lhs)
            .write(" = ")
            .write(&self.rhs)
            .write_line(";");
    }
}

/// `return new Type(args...);`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorInvocation {
    pub type_name: String,
    pub args: Vec<String>,
}

impl ConstructorInvocation {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            args: Vec::new(),
        }
    }

    /// Add an argument expression.
    pub fn arg(mut self, expr: impl Into<String>) -> Self {
        self.args.push(expr.into());
        self
    }

    /// Add multiple argument expressions.
    pub fn args(mut self, exprs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(exprs.into_iter().map(Into::into));
        self
    }
}

impl Render for ConstructorInvocation {
    fn render(&self, out: &mut Emitter) {
        out.write("return new ")
            .write(&self.type_name)
            .write("(")
            .write(&self.args.join(", "))
            .write_line(");");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement() {
        assert_eq!(Statement::new("Validate();").to_text(), "Validate();\n");
    }

    #[test]
    fn test_assignment() {
        let stmt = AssignmentStatement::new("this.Name", "Name");
        assert_eq!(stmt.to_text(), "this.Name = Name;\n");
    }

    #[test]
    fn test_constructor_invocation() {
        let call = ConstructorInvocation::new("Person").args(["FirstName", "LastName"]);
        assert_eq!(call.to_text(), "return new Person(FirstName, LastName);\n");
    }

    #[test]
    fn test_constructor_invocation_no_args() {
        assert_eq!(
            ConstructorInvocation::new("Empty").to_text(),
            "return new Empty();\n"
        );
    }
}
