//! Indentation-aware text emitter.

use std::ops::{Deref, DerefMut};

use super::Render;

/// One level of indentation. Generated code always uses four spaces.
pub const INDENT_UNIT: &str = "    ";

/// Stateful text accumulator with a nesting depth.
///
/// Indentation is written lazily: the first write on a new line emits
/// `depth × INDENT_UNIT` before the text. Nodes therefore never write
/// leading whitespace themselves, and all nesting goes through
/// [`Emitter::scoped_indent`].
///
/// # Example
///
/// ```
/// use recgen_codegen::builder::Emitter;
///
/// let mut out = Emitter::new();
/// out.write_line("class Foo");
/// out.write_line("{");
/// {
///     let mut body = out.scoped_indent();
///     body.write("int ").write("X");
///     body.write_line(";");
/// }
/// out.write_line("}");
///
/// assert_eq!(out.finish(), "class Foo\n{\n    int X;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct Emitter {
    buffer: String,
    depth: usize,
    indent_pending: bool,
}

impl Emitter {
    /// Create an empty emitter at depth zero.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            depth: 0,
            indent_pending: true,
        }
    }

    /// Write text at the cursor, indenting first if a new line has started.
    ///
    /// Empty text writes nothing and leaves a pending indent pending, so
    /// blank lines never carry trailing whitespace.
    pub fn write(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        if self.indent_pending {
            for _ in 0..self.depth {
                self.buffer.push_str(INDENT_UNIT);
            }
            self.indent_pending = false;
        }
        self.buffer.push_str(text);
        self
    }

    /// Write text followed by a line terminator.
    pub fn write_line(&mut self, text: &str) -> &mut Self {
        self.write(text);
        self.buffer.push('\n');
        self.indent_pending = true;
        self
    }

    /// Increase the depth for as long as the returned guard lives.
    ///
    /// The guard dereferences to the emitter, so the scope body writes
    /// through it. Dropping the guard restores the previous depth, including
    /// when the scope is left by unwinding.
    pub fn scoped_indent(&mut self) -> IndentGuard<'_> {
        self.depth += 1;
        IndentGuard { emitter: self }
    }

    /// Run `f` one level deeper.
    pub fn indented<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Emitter),
    {
        {
            let mut scope = self.scoped_indent();
            f(&mut scope);
        }
        self
    }

    /// Decrease the depth by one, never going below zero.
    pub fn dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Render a node at the cursor.
    pub fn emit(&mut self, node: &impl Render) -> &mut Self {
        node.render(self);
        self
    }

    /// Render a sequence of nodes, writing `separator` between consecutive
    /// nodes only.
    pub fn render_all<I>(&mut self, nodes: I, separator: &str) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Render,
    {
        for (i, node) in nodes.into_iter().enumerate() {
            if i > 0 {
                self.write(separator);
            }
            node.render(self);
        }
        self
    }

    /// Get the current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Get a reference to the text written so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the emitter and return the generated text.
    pub fn finish(self) -> String {
        self.buffer
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Indentation held for the lifetime of a scope.
///
/// Created by [`Emitter::scoped_indent`].
#[must_use = "the indentation is released as soon as the guard is dropped"]
pub struct IndentGuard<'a> {
    emitter: &'a mut Emitter,
}

impl Deref for IndentGuard<'_> {
    type Target = Emitter;

    fn deref(&self) -> &Emitter {
        self.emitter
    }
}

impl DerefMut for IndentGuard<'_> {
    fn deref_mut(&mut self) -> &mut Emitter {
        self.emitter
    }
}

impl Drop for IndentGuard<'_> {
    fn drop(&mut self) {
        self.emitter.dedent();
    }
}
