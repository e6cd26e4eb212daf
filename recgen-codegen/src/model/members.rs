//! Member declarations: constructors, methods, properties and parameters.

use super::{AssignmentStatement, Node, Visibility};
use crate::builder::{Emitter, Render};

/// A method or constructor parameter: `Type name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl Render for Parameter {
    fn render(&self, out: &mut Emitter) {
        out.write(&self.ty).write(" ").write(&self.name);
    }
}

/// A block constructor.
///
/// Renders as `<vis>Name(<params>)[ : base(<args>)]` followed by a braced
/// body of assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    /// Name of the owning type.
    pub type_name: String,
    pub visibility: Visibility,
    pub params: Vec<Parameter>,
    /// Arguments forwarded to the base constructor, if any.
    pub base_call: Option<Vec<String>>,
    pub body: Vec<AssignmentStatement>,
}

impl Constructor {
    /// Create a new public constructor with no parameters.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            visibility: Visibility::Public,
            params: Vec::new(),
            base_call: None,
            body: Vec::new(),
        }
    }

    /// Add a parameter.
    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    /// Add multiple parameters.
    pub fn params(mut self, params: impl IntoIterator<Item = Parameter>) -> Self {
        self.params.extend(params);
        self
    }

    /// Forward arguments to the base constructor.
    pub fn base_call(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.base_call = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Add an assignment to the body.
    pub fn assign(mut self, lhs: impl Into<String>, rhs: impl Into<String>) -> Self {
        self.body.push(AssignmentStatement::new(lhs, rhs));
        self
    }

    /// Add multiple assignments to the body.
    pub fn assignments(mut self, stmts: impl IntoIterator<Item = AssignmentStatement>) -> Self {
        self.body.extend(stmts);
        self
    }
}

impl Render for Constructor {
    fn render(&self, out: &mut Emitter) {
        out.emit(&self.visibility).write(&self.type_name).write("(");
        out.render_all(&self.params, ", ");
        out.write(")");

        if let Some(args) = self.base_call.as_ref().filter(|args| !args.is_empty()) {
            out.write(" : base(").write(&args.join(", ")).write(")");
        }

        out.write_line("");
        out.write_line("{");
        {
            let mut body = out.scoped_indent();
            for stmt in &self.body {
                body.emit(stmt);
            }
        }
        out.write_line("}");
    }
}

/// A method with a braced body.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDeclaration {
    pub name: String,
    pub return_type: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_override: bool,
    pub params: Vec<Parameter>,
    pub body: Vec<Node>,
}

impl MethodDeclaration {
    /// Create a new public instance method.
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            visibility: Visibility::Public,
            is_static: false,
            is_override: false,
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Set visibility.
    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.visibility = vis;
        self
    }

    /// Mark as static.
    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark as overriding a base member.
    pub fn override_(mut self) -> Self {
        self.is_override = true;
        self
    }

    /// Add a parameter.
    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    /// Add a node to the body.
    pub fn statement(mut self, node: impl Into<Node>) -> Self {
        self.body.push(node.into());
        self
    }

    /// Add multiple nodes to the body.
    pub fn statements<N: Into<Node>>(mut self, nodes: impl IntoIterator<Item = N>) -> Self {
        self.body.extend(nodes.into_iter().map(Into::into));
        self
    }
}

impl Render for MethodDeclaration {
    fn render(&self, out: &mut Emitter) {
        out.emit(&self.visibility);
        if self.is_static {
            out.write("static ");
        }
        if self.is_override {
            out.write("override ");
        }
        out.write(&self.return_type)
            .write(" ")
            .write(&self.name)
            .write("(");
        out.render_all(&self.params, ", ");
        out.write_line(")");

        out.write_line("{");
        {
            let mut body = out.scoped_indent();
            for node in &self.body {
                body.emit(node);
            }
        }
        out.write_line("}");
    }
}

/// A property-like field: `<vis><Type> <Name> { get; [set; ]}[ = default;]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    pub name: String,
    pub ty: String,
    pub has_setter: bool,
    pub visibility: Visibility,
    /// Default-value literal, rendered verbatim.
    pub default: Option<String>,
}

impl FieldDeclaration {
    /// Create a new public get-only property.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            has_setter: false,
            visibility: Visibility::Public,
            default: None,
        }
    }

    /// Give the property a setter.
    pub fn settable(mut self) -> Self {
        self.has_setter = true;
        self
    }

    /// Set (or clear) the default-value literal.
    pub fn default_value(mut self, literal: Option<String>) -> Self {
        self.default = literal;
        self
    }
}

impl Render for FieldDeclaration {
    fn render(&self, out: &mut Emitter) {
        out.emit(&self.visibility)
            .write(&self.ty)
            .write(" ")
            .write(&self.name);

        if self.has_setter {
            out.write(" { get; set; }");
        } else {
            out.write(" { get; }");
        }

        if let Some(default) = &self.default {
            out.write(" = ").write(default).write(";");
        }

        out.write_line("");
    }
}
