use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Whether a list item is bulleted or numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ListMarker {
    Bullet,
    Ordered,
}

impl ListMarker {
    pub fn is_ordered(self) -> bool {
        matches!(self, ListMarker::Ordered)
    }
}

/// Single-level list item with owned marker knowledge.
pub struct ListItem;

impl ListItem {
    /// Bullet prefixes, each including its separating space.
    pub const BULLETS: [&'static str; 2] = ["- ", "* "];

    /// Strips a list marker, returning the marker kind and the item text.
    ///
    /// Bullets are `- ` and `* `; ordered items match `^[0-9]+\.\s`.
    pub fn strip(line: &str) -> Option<(ListMarker, &str)> {
        if let Some(rest) = Self::BULLETS
            .iter()
            .find_map(|bullet| line.strip_prefix(bullet))
        {
            return Some((ListMarker::Bullet, rest));
        }
        ordered_marker()
            .find(line)
            .map(|m| (ListMarker::Ordered, &line[m.end()..]))
    }
}

fn ordered_marker() -> &'static Regex {
    static ORDERED_MARKER: OnceLock<Regex> = OnceLock::new();
    ORDERED_MARKER
        .get_or_init(|| Regex::new(r"^[0-9]+\.\s").expect("Invalid ordered list marker regex"))
}
