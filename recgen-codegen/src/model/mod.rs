//! Code model: the tree of declarations and statements the generator emits.
//!
//! Every node implements [`Render`](crate::builder::Render). Trees are built
//! once, rendered, and dropped; nothing in here validates names or shapes.
//! The lowering pass is responsible for only ever building valid trees.
//!
//! - [`TypeFile`] - Using directives, optional namespace, one declaration
//! - [`TypeDeclaration`] - A class with constructors and ordered members
//! - [`Constructor`], [`MethodDeclaration`], [`FieldDeclaration`], [`Parameter`]
//! - [`Statement`], [`AssignmentStatement`], [`ConstructorInvocation`]
//! - [`MarkerDeclaration`] - The attribute type used to tag candidates
//! - [`Node`] - Closed set of child node kinds

mod file;
mod marker;
mod members;
mod node;
mod statements;
mod type_decl;
mod visibility;

pub use file::TypeFile;
pub use marker::{MarkerDeclaration, MarkerTarget};
pub use members::{Constructor, FieldDeclaration, MethodDeclaration, Parameter};
pub use node::Node;
pub use statements::{AssignmentStatement, ConstructorInvocation, Statement};
pub use type_decl::TypeDeclaration;
pub use visibility::Visibility;
