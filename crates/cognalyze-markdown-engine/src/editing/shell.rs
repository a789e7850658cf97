use crate::parsing::{FormatVersion, ParsedDoc, inline::InlineStyle, parse_document};

/// Textarea placeholder used when none is configured.
pub const DEFAULT_PLACEHOLDER: &str = "Type your markdown content...";

/// Shown in the preview tab while the value is empty.
pub const EMPTY_PREVIEW_MESSAGE: &str = "Nothing to preview yet...";

/// One entry of the syntax cheat sheet shown under the textarea.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxHint {
    /// The markdown as the user would type it.
    pub sample: &'static str,
    /// How the sample itself is styled in the hint bar.
    pub style: InlineStyle,
}

pub const SYNTAX_HINTS: [SyntaxHint; 6] = [
    SyntaxHint {
        sample: "**bold**",
        style: InlineStyle::Bold,
    },
    SyntaxHint {
        sample: "*italic*",
        style: InlineStyle::Italic,
    },
    SyntaxHint {
        sample: "`code`",
        style: InlineStyle::Code,
    },
    SyntaxHint {
        sample: "# Heading",
        style: InlineStyle::Plain,
    },
    SyntaxHint {
        sample: "- List",
        style: InlineStyle::Plain,
    },
    SyntaxHint {
        sample: "> Quote",
        style: InlineStyle::Plain,
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EditorTab {
    #[default]
    Edit,
    Preview,
}

impl EditorTab {
    pub const ALL: [EditorTab; 2] = [EditorTab::Edit, EditorTab::Preview];

    pub fn label(self) -> &'static str {
        match self {
            EditorTab::Edit => "Edit",
            EditorTab::Preview => "Preview",
        }
    }

    pub fn other(self) -> Self {
        match self {
            EditorTab::Edit => EditorTab::Preview,
            EditorTab::Preview => EditorTab::Edit,
        }
    }
}

/// What a front end should draw for the current shell state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellView<'a> {
    /// Raw text input.
    Editing { value: &'a str, placeholder: &'a str },
    /// Rendered blocks of a non-empty value.
    Preview(ParsedDoc),
    /// Preview tab with nothing to render.
    EmptyPreview(&'a str),
}

/// Editor/preview state for a single markdown value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorShell {
    value: String,
    tab: EditorTab,
    show_preview: bool,
    placeholder: String,
    empty_preview_message: String,
    version: FormatVersion,
}

impl EditorShell {
    /// A shell in edit mode holding `value`, with the preview tab enabled.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            tab: EditorTab::Edit,
            show_preview: true,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            empty_preview_message: EMPTY_PREVIEW_MESSAGE.to_string(),
            version: FormatVersion::default(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Disabling the preview pins the shell to edit mode.
    pub fn with_preview_toggle(mut self, show_preview: bool) -> Self {
        self.show_preview = show_preview;
        if !show_preview {
            self.tab = EditorTab::Edit;
        }
        self
    }

    pub fn with_empty_preview_message(mut self, message: impl Into<String>) -> Self {
        self.empty_preview_message = message.into();
        self
    }

    pub fn with_format_version(mut self, version: FormatVersion) -> Self {
        self.version = version;
        self
    }

    pub fn with_tab(mut self, tab: EditorTab) -> Self {
        self.select(tab);
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn tab(&self) -> EditorTab {
        self.tab
    }

    pub fn show_preview(&self) -> bool {
        self.show_preview
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn format_version(&self) -> FormatVersion {
        self.version
    }

    /// Tabs a front end should offer; none when the preview is disabled.
    pub fn tabs(&self) -> &'static [EditorTab] {
        if self.show_preview {
            &EditorTab::ALL
        } else {
            &[]
        }
    }

    /// The cheat sheet is only shown while editing.
    pub fn shows_hints(&self) -> bool {
        self.tab == EditorTab::Edit
    }

    /// Replaces the value and returns it, ready to hand to a change callback.
    pub fn edit(&mut self, next: impl Into<String>) -> &str {
        self.value = next.into();
        &self.value
    }

    pub fn select(&mut self, tab: EditorTab) {
        if !self.show_preview && tab == EditorTab::Preview {
            log::debug!("preview disabled, staying in edit mode");
            return;
        }
        self.tab = tab;
    }

    pub fn toggle(&mut self) {
        self.select(self.tab.other());
    }

    pub fn view(&self) -> ShellView<'_> {
        match self.tab {
            EditorTab::Edit => ShellView::Editing {
                value: &self.value,
                placeholder: &self.placeholder,
            },
            EditorTab::Preview if self.value.is_empty() => {
                ShellView::EmptyPreview(&self.empty_preview_message)
            }
            EditorTab::Preview => ShellView::Preview(parse_document(&self.value, self.version)),
        }
    }
}

impl Default for EditorShell {
    fn default() -> Self {
        Self::new(String::new())
    }
}
