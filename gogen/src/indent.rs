//! Indentation configuration for generated Go code.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Tab indentation, as produced by `gofmt`.
    pub const GO: Self = Self::Tab;

    /// 4-space indentation, handy for embedding snippets in docs.
    pub const SPACES_4: Self = Self::Spaces(4);

    /// Append one indent level to `buffer`.
    pub fn write_to(&self, buffer: &mut String) {
        match *self {
            Self::Spaces(width) => buffer.extend(std::iter::repeat_n(' ', usize::from(width))),
            Self::Tab => buffer.push('\t'),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::GO
    }
}
