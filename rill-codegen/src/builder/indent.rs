//! Indentation used by the XML writer.

/// Indentation emitted per nesting depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (2 or 4).
    Spaces(u8),
}

impl Indent {
    /// 2-space indentation, what process documents are written with.
    pub const XML: Self = Self::Spaces(2);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(4) => "    ",
            // Everything else falls back to two spaces
            Self::Spaces(_) => "  ",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::XML
    }
}
