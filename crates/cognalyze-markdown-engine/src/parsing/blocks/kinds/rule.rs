/// Thematic break (horizontal rule) type.
pub struct ThematicBreak;

impl ThematicBreak {
    /// The exact trimmed lines that form a rule.
    pub const MARKERS: [&'static str; 2] = ["---", "***"];

    pub fn matches(line: &str) -> bool {
        Self::MARKERS.contains(&line)
    }
}
