/// ATX heading type with owned marker constants.
///
/// Only levels 1 to 3 are part of the subset; `#### x` is a paragraph.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: u8 = b'#';
    /// Deepest supported level.
    pub const MAX_LEVEL: u8 = 3;

    /// Strips a `# `, `## ` or `### ` prefix, returning (level, remainder).
    pub fn strip(line: &str) -> Option<(u8, &str)> {
        let hashes = line.bytes().take_while(|b| *b == Self::MARKER).count();
        if hashes == 0 || hashes > usize::from(Self::MAX_LEVEL) {
            return None;
        }
        let rest = line[hashes..].strip_prefix(' ')?;
        Some((hashes as u8, rest))
    }
}
