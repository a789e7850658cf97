use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Presentation density of rendered markdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    /// Smaller text and tighter spacing for cards and side panels.
    Compact,
    /// Larger prose for full-page reading.
    Rich,
}

/// A styled element of rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Root,
    Heading(u8),
    List { ordered: bool },
    ListItem,
    BlockQuote,
    CodeBlock,
    CodeBlockText,
    Rule,
    Table,
    TableHeaderCell,
    TableCell,
    Paragraph,
    Spacer,
    Bold,
    Italic,
    InlineCode,
    EmptyPreview,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Default, Variant::Compact, Variant::Rich];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Compact => "compact",
            Variant::Rich => "rich",
        }
    }

    /// The next variant in [`Variant::ALL`], wrapping around.
    pub fn next(self) -> Self {
        match self {
            Variant::Default => Variant::Compact,
            Variant::Compact => Variant::Rich,
            Variant::Rich => Variant::Default,
        }
    }

    fn compact(self) -> bool {
        self == Variant::Compact
    }

    /// CSS classes for `slot` under this variant.
    pub fn classes(self, slot: Slot) -> String {
        let (base, compact) = match slot {
            Slot::Root => {
                let extra = match self {
                    Variant::Default => "",
                    Variant::Compact => "prose-sm",
                    Variant::Rich => "prose-lg",
                };
                return join(&["prose prose-gray max-w-none", extra]);
            }
            Slot::Heading(1) => ("text-2xl font-bold mb-4 text-gray-900", "text-xl mb-2"),
            Slot::Heading(2) => ("text-xl font-semibold mb-3 text-gray-800", "text-lg mb-2"),
            Slot::Heading(_) => ("text-lg font-medium mb-2 text-gray-700", "text-base mb-1"),
            Slot::List { ordered } => {
                let marker = if ordered { "list-decimal" } else { "list-disc" };
                let size = if self.compact() { "text-sm" } else { "" };
                return join(&["space-y-1 ml-4", size, marker]);
            }
            Slot::ListItem => ("leading-relaxed", ""),
            Slot::BlockQuote => (
                "border-l-4 border-blue-500 pl-4 py-2 bg-blue-50 text-gray-700 italic",
                "text-sm py-1",
            ),
            Slot::CodeBlock => (
                "bg-gray-100 rounded-md p-3 font-mono text-sm border",
                "p-2 text-xs",
            ),
            Slot::CodeBlockText => ("text-gray-800 whitespace-pre-wrap", ""),
            Slot::Rule => ("my-6 border-gray-300", ""),
            Slot::Table => (
                "min-w-full border-collapse border border-gray-300 mb-4",
                "text-sm mb-2",
            ),
            Slot::TableHeaderCell => (
                "border border-gray-300 bg-gray-50 px-3 py-2 font-semibold",
                "px-2 py-1",
            ),
            Slot::TableCell => ("border border-gray-300 px-3 py-2", "px-2 py-1"),
            Slot::Paragraph => ("mb-4 leading-relaxed text-gray-700", "mb-2 text-sm"),
            Slot::Spacer => ("h-2", ""),
            Slot::Bold => ("font-semibold", ""),
            Slot::Italic => ("italic", ""),
            Slot::InlineCode => ("bg-gray-100 px-1 py-0.5 rounded text-sm font-mono", ""),
            Slot::EmptyPreview => ("text-gray-500 italic", ""),
        };
        join(&[base, if self.compact() { compact } else { "" }])
    }
}

/// Joins non-empty class fragments with single spaces.
fn join(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown variant '{input}', expected one of: default, compact, rich")]
pub struct ParseVariantError {
    pub input: String,
}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Variant::Default),
            "compact" => Ok(Variant::Compact),
            "rich" => Ok(Variant::Rich),
            _ => Err(ParseVariantError {
                input: s.to_string(),
            }),
        }
    }
}
