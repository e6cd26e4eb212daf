//! The closed set of node kinds that can appear as children.

use super::{
    AssignmentStatement, Constructor, ConstructorInvocation, FieldDeclaration, MarkerDeclaration,
    MethodDeclaration, Parameter, Statement, TypeDeclaration,
};
use crate::builder::{Emitter, Render};

/// Any code-model node.
///
/// Type declarations and method bodies hold their children as `Node`s;
/// rendering dispatches exhaustively on the variant, so adding a node kind
/// means adding a variant here and an arm below.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Type(TypeDeclaration),
    Constructor(Constructor),
    Method(MethodDeclaration),
    Field(FieldDeclaration),
    Parameter(Parameter),
    Statement(Statement),
    Assignment(AssignmentStatement),
    Construct(ConstructorInvocation),
    Marker(MarkerDeclaration),
}

impl Render for Node {
    fn render(&self, out: &mut Emitter) {
        match self {
            Node::Type(node) => node.render(out),
            Node::Constructor(node) => node.render(out),
            Node::Method(node) => node.render(out),
            Node::Field(node) => node.render(out),
            Node::Parameter(node) => node.render(out),
            Node::Statement(node) => node.render(out),
            Node::Assignment(node) => node.render(out),
            Node::Construct(node) => node.render(out),
            Node::Marker(node) => node.render(out),
        }
    }
}

macro_rules! impl_from_node {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(node: $ty) -> Self {
                    Node::$variant(node)
                }
            }
        )*
    };
}

impl_from_node! {
    TypeDeclaration => Type,
    Constructor => Constructor,
    MethodDeclaration => Method,
    FieldDeclaration => Field,
    Parameter => Parameter,
    Statement => Statement,
    AssignmentStatement => Assignment,
    ConstructorInvocation => Construct,
    MarkerDeclaration => Marker,
}
