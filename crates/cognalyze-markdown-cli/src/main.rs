use anyhow::{Context, Result, bail};
use clap::Parser;
use cognalyze_markdown_config::Config;
use cognalyze_markdown_engine::{
    EditorShell, EditorTab, FormatVersion, ShellView, Variant, render_html,
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::{
    io::{self, IsTerminal, Read, stdin, stdout},
    path::PathBuf,
    process,
};

mod preview;

#[derive(Parser, Debug)]
#[command(name = "cognalyze-markdown")]
#[command(version, about = "Preview markdown evaluation content in the terminal")]
struct Cli {
    /// Markdown file to open (reads stdin when omitted and input is piped)
    input: Option<PathBuf>,

    /// Print the rendered HTML fragment instead of opening the previewer
    #[arg(long)]
    html: bool,

    /// Format version: v1 (single-line code fences) or v2 (multi-line)
    #[arg(short, long)]
    format: Option<FormatVersion>,

    /// Presentation variant: default, compact or rich
    #[arg(short, long)]
    variant: Option<Variant>,
}

struct App {
    shell: EditorShell,
    variant: Variant,
    source_name: String,
    scroll: u16,
}

impl App {
    fn new(shell: EditorShell, variant: Variant, source_name: String) -> Self {
        Self {
            shell,
            variant,
            source_name,
            scroll: 0,
        }
    }

    fn cycle_variant(&mut self) {
        self.variant = self.variant.next();
        log::debug!("variant switched to {}", self.variant);
    }

    fn toggle_tab(&mut self) {
        self.shell.toggle();
        self.scroll = 0;
    }

    fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn content_lines(&self) -> Vec<Line<'static>> {
        let muted = Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC);
        match self.shell.view() {
            ShellView::Editing { value, placeholder } if value.is_empty() => {
                vec![Line::from(Span::styled(placeholder.to_string(), muted))]
            }
            ShellView::Editing { value, .. } => value
                .split('\n')
                .map(|line| Line::from(line.trim_end_matches('\r').to_string()))
                .collect(),
            ShellView::Preview(doc) => preview::render_lines(&doc, self.variant),
            ShellView::EmptyPreview(message) => {
                vec![Line::from(Span::styled(message.to_string(), muted))]
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!(
                "Fix or remove the config file at {}",
                Config::config_path().display()
            );
            process::exit(1);
        }
    };

    let version = cli.format.unwrap_or(config.format_version);
    let variant = cli.variant.unwrap_or(config.variant);
    let input = cli.input.or_else(|| config.default_document.clone());
    let (content, source_name) = read_input(input)?;

    if cli.html {
        print!("{}", render_html(&content, variant, version));
        return Ok(());
    }

    let shell = config
        .editor_shell(content)
        .with_format_version(version)
        .with_tab(EditorTab::Preview);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(shell, variant, source_name);

    // Main loop
    let res = run_app(&mut terminal, &mut app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

/// Reads the document from `path`, or from piped stdin when there is none.
fn read_input(path: Option<PathBuf>) -> Result<(String, String)> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok((content, path.display().to_string()))
        }
        None => {
            if stdin().is_terminal() {
                bail!("No input: pass a markdown file or pipe content on stdin");
            }
            let mut content = String::new();
            stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok((content, "<stdin>".to_string()))
        }
    }
}

/// Draws and handles events until `q`; event source failures end the loop.
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut next_event: impl FnMut() -> io::Result<Event>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = next_event()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                KeyCode::Char('v') => app.cycle_variant(),
                KeyCode::Tab | KeyCode::Char('t') => app.toggle_tab(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let title = format!(
        "{} [{} | {}]",
        app.source_name,
        app.shell.tab().label(),
        app.variant
    );
    let content = Paragraph::new(app.content_lines())
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(ratatui::widgets::Wrap { trim: false })
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[0]);

    // Instructions
    let mut help = vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Scroll | "),
        Span::raw("v: Variant"),
    ];
    if !app.shell.tabs().is_empty() {
        help.push(Span::raw(" | Tab/t: Edit/Preview"));
    }

    f.render_widget(Paragraph::new(Line::from(help)), chunks[1]);
}
