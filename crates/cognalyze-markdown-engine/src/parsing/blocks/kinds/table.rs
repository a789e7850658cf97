use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// CSS `text-align` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// Pipe table type with owned delimiter knowledge.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    /// Splits a row into trimmed cells, ignoring one leading and one
    /// trailing pipe. Ragged rows keep whatever cells they have.
    pub fn split_cells(line: &str) -> Vec<&str> {
        let t = line.trim();
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        let t = t.strip_suffix(Self::PIPE).unwrap_or(t);
        t.split(Self::PIPE).map(str::trim).collect()
    }

    /// Parses a separator row (`|---|:---:|---:|`) into column alignments.
    ///
    /// Returns `None` unless the line contains a pipe and every cell
    /// matches `^:?-{3,}:?$`.
    pub fn separator(line: &str) -> Option<Vec<Alignment>> {
        if !line.contains(Self::PIPE) {
            return None;
        }
        Self::split_cells(line)
            .into_iter()
            .map(Self::alignment)
            .collect()
    }

    fn alignment(cell: &str) -> Option<Alignment> {
        if !separator_cell().is_match(cell) {
            return None;
        }
        Some(match (cell.starts_with(':'), cell.ends_with(':')) {
            (true, true) => Alignment::Center,
            (false, true) => Alignment::Right,
            _ => Alignment::Left,
        })
    }
}

fn separator_cell() -> &'static Regex {
    static SEPARATOR_CELL: OnceLock<Regex> = OnceLock::new();
    SEPARATOR_CELL.get_or_init(|| Regex::new(r"^:?-{3,}:?$").expect("Invalid separator cell regex"))
}
