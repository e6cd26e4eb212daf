//! Text emission building blocks.
//!
//! This module provides the primitives every code-model node renders through:
//! - [`Emitter`] - Indentation-aware text accumulator
//! - [`IndentGuard`] - Scoped indentation that is released on every exit path
//! - [`Render`] - Trait for nodes that can write themselves into an [`Emitter`]

mod emitter;
mod render;

pub use emitter::{Emitter, INDENT_UNIT, IndentGuard};
pub use render::Render;
