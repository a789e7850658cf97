use cognalyze_markdown_config::Config;
use dioxus::prelude::*;
use std::env;
use std::path::PathBuf;
use std::process;

mod ui;

use ui::App;
use ui::components::ErrorScreen;

/// Everything the window needs at launch.
#[derive(Clone)]
struct Startup {
    config: Config,
    content: String,
}

/// Failure to assemble [`Startup`], shown both on stderr and in the window.
#[derive(Clone)]
struct StartupError {
    title: &'static str,
    message: String,
    details: Option<String>,
    config_path: PathBuf,
}

type StartupResult = Result<Startup, StartupError>;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("cognalyze-markdown starting up!");

    if env::args().count() > 2 {
        let program_name = env::args()
            .next()
            .unwrap_or_else(|| "cognalyze-markdown-dioxus".to_string());
        eprintln!("Usage: {program_name} [markdown-file]");
        process::exit(1);
    }

    let startup = load_startup(env::args().nth(1).map(PathBuf::from));
    if let Err(e) = &startup {
        eprintln!("Error: {}", e.message);
        if let Some(details) = &e.details {
            eprintln!("{details}");
        }
    }

    log::info!("About to launch Dioxus app for desktop");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .with_context(startup)
        .launch(app_root);
}

fn load_startup(document: Option<PathBuf>) -> StartupResult {
    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => {
            log::info!("No config file found, using defaults");
            Config::default()
        }
        Err(e) => {
            log::error!("Config::load() failed with error: {e}");
            return Err(StartupError {
                title: "Config Error",
                message: "Failed to load config file".to_string(),
                details: Some(e.to_string()),
                config_path,
            });
        }
    };

    let content = read_document(&config, document, config_path)?;
    Ok(Startup { config, content })
}

/// Reads the document named on the command line, else the configured
/// default, else starts empty.
fn read_document(
    config: &Config,
    document: Option<PathBuf>,
    config_path: PathBuf,
) -> Result<String, StartupError> {
    match document.or_else(|| config.default_document.clone()) {
        Some(path) => {
            log::info!("Opening {}", path.display());
            std::fs::read_to_string(&path).map_err(|e| StartupError {
                title: "Document Error",
                message: format!("Failed to read '{}'", path.display()),
                details: Some(e.to_string()),
                config_path,
            })
        }
        None => Ok(String::new()),
    }
}

fn app_root() -> Element {
    match use_context::<StartupResult>() {
        Ok(startup) => rsx! {
            App {
                config: startup.config,
                initial_content: startup.content
            }
        },
        Err(e) => rsx! {
            ErrorScreen {
                title: e.title.to_string(),
                message: e.message,
                details: e.details,
                config_path: Some(e.config_path.display().to_string())
            }
        },
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("cognalyze-markdown")
        .with_always_on_top(false);

    Config::default().with_window(window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn render_root(startup: StartupResult) -> String {
        let mut dom = VirtualDom::new(app_root).with_root_context(startup);
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_startup_error_renders_error_screen() {
        let html = render_root(Err(StartupError {
            title: "Config Error",
            message: "Failed to load config file".to_string(),
            details: Some("expected `=`".to_string()),
            config_path: PathBuf::from("/home/me/.config/cognalyze-markdown/config.toml"),
        }));

        assert!(html.contains("Config Error"));
        assert!(html.contains("expected `=`"));
        assert!(html.contains("/home/me/.config/cognalyze-markdown/config.toml"));
        assert!(!html.contains("<textarea"));
    }

    #[test]
    fn test_startup_renders_app_with_content() {
        let html = render_root(Ok(Startup {
            config: Config::default(),
            content: "# Loaded".to_string(),
        }));

        assert!(html.contains("<textarea"));
        assert!(html.contains("Loaded</h1>"));
    }

    #[test]
    fn test_document_argument_wins_over_default() {
        let temp_dir = TempDir::new().unwrap();
        let arg = temp_dir.path().join("arg.md");
        let fallback = temp_dir.path().join("fallback.md");
        std::fs::write(&arg, "from arg").unwrap();
        std::fs::write(&fallback, "from config").unwrap();
        let config = Config {
            default_document: Some(fallback),
            ..Config::default()
        };

        let content = read_document(&config, Some(arg), PathBuf::new()).ok();
        assert_eq!(content.as_deref(), Some("from arg"));

        let content = read_document(&config, None, PathBuf::new()).ok();
        assert_eq!(content.as_deref(), Some("from config"));
    }

    #[test]
    fn test_no_document_starts_empty() {
        let content = read_document(&Config::default(), None, PathBuf::new()).ok();
        assert_eq!(content.as_deref(), Some(""));
    }

    #[test]
    fn test_missing_document_is_a_document_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.md");

        let err = read_document(&Config::default(), Some(missing), PathBuf::new()).unwrap_err();

        assert_eq!(err.title, "Document Error");
        assert!(err.message.contains("missing.md"));
        assert!(err.details.is_some());
    }
}
