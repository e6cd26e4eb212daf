//! Access modifiers.

use crate::builder::{Emitter, Render};

/// Visibility/access level for types and members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// `public`
    #[default]
    Public,
    /// `private`
    Private,
    /// `internal`
    Internal,
    /// No modifier (the language default applies).
    None,
}

impl Visibility {
    /// The modifier token including its trailing space, or `""` for [`Visibility::None`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public ",
            Self::Private => "private ",
            Self::Internal => "internal ",
            Self::None => "",
        }
    }
}

impl Render for Visibility {
    fn render(&self, out: &mut Emitter) {
        out.write(self.as_str());
    }
}
