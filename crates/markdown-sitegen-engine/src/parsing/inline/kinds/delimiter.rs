use crate::parsing::inline::types::FragmentKind;

/// A paired inline marker that wraps its content in a fragment kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    pub marker: &'static str,
    pub kind: FragmentKind,
}

impl Delimiter {
    pub const BOLD: Delimiter = Delimiter {
        marker: "**",
        kind: FragmentKind::Bold,
    };
    pub const ITALIC: Delimiter = Delimiter {
        marker: "_",
        kind: FragmentKind::Italic,
    };
    pub const CODE: Delimiter = Delimiter {
        marker: "`",
        kind: FragmentKind::Code,
    };

    /// Order in which delimiters are applied. Bold runs first so `**` is
    /// never read as two separate markers.
    pub const ORDER: [Delimiter; 3] = [Self::BOLD, Self::ITALIC, Self::CODE];

    /// Splits `text` on this marker.
    ///
    /// Returns `None` when the marker is absent or unpaired (an even number
    /// of parts), in which case the text stays as it is.
    pub fn split<'a>(&self, text: &'a str) -> Option<Vec<&'a str>> {
        let parts: Vec<&str> = text.split(self.marker).collect();
        if parts.len() == 1 || parts.len() % 2 == 0 {
            return None;
        }
        Some(parts)
    }
}
