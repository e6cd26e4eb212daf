//! Rendering trait for code-model nodes.

use super::Emitter;

/// A node that can write itself into an emission context.
///
/// Composite nodes write their own header, open a scope with
/// [`Emitter::scoped_indent`], render each child through this same trait,
/// then close the scope. Implementations never write leading whitespace
/// themselves.
pub trait Render {
    /// Render this node into the emitter.
    fn render(&self, out: &mut Emitter);

    /// Render this node into a fresh emitter and return the text.
    fn to_text(&self) -> String {
        let mut out = Emitter::new();
        self.render(&mut out);
        out.finish()
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, out: &mut Emitter) {
        (**self).render(out);
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self, out: &mut Emitter) {
        (**self).render(out);
    }
}
