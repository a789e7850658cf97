/// What an opening fence line says about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceLine<'a> {
    /// The word characters directly after the opening backticks.
    pub lang: Option<&'a str>,
    /// Remainder of the line after the language tag and any closing fence.
    pub body: &'a str,
    /// Whether the same line also ends with a closing fence.
    pub closed: bool,
}

/// Fenced code type with owned delimiter constant.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Parses an opening fence line.
    ///
    /// The language tag is the run of ASCII word characters (`[A-Za-z0-9_]`)
    /// directly after the backticks. A trailing fence is stripped from what
    /// remains.
    pub fn open(line: &str) -> Option<FenceLine<'_>> {
        let rest = line.strip_prefix(Self::BACKTICKS)?;
        let lang_len = rest
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();
        let (lang, rest) = rest.split_at(lang_len);
        let (body, closed) = match rest.strip_suffix(Self::BACKTICKS) {
            Some(body) => (body, true),
            None => (rest, false),
        };

        Some(FenceLine {
            lang: (!lang.is_empty()).then_some(lang),
            body,
            closed,
        })
    }

    /// Whether a trimmed line closes an open multi-line fence.
    pub fn closes(line: &str) -> bool {
        line.starts_with(Self::BACKTICKS)
    }
}
