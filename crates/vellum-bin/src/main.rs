//! Vellum entrypoint.
//!
//! Startup order: parse arguments, load configuration, install logging, build
//! the editor (default bindings, then the binding-definition source, then the
//! file named on the command line), enter the terminal, then loop reading one
//! key at a time until the quit command.
use anyhow::Result;
use clap::Parser;
use core_actions::{Editor, FsPersistence};
use core_config::Config;
use core_input::InputEvent;
use core_keymap::Keymap;
use core_state::EditorState;
use core_terminal::{CrosstermBackend, TerminalBackend};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Once;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;

const LOG_FILE_NAME: &str = "vellum.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "vellum", version, about = "Vellum modal text editor")]
struct Args {
    /// File to open at startup. A missing file opens as a new buffer.
    pub path: Option<PathBuf>,
    /// Configuration file path (overrides discovery of `vellum.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Tracing filter directive, e.g. `debug` or `keymap=trace`.
    #[arg(long = "log-filter")]
    pub log_filter: Option<String>,
}

struct AppStartup {
    backend: CrosstermBackend,
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self {
            backend: CrosstermBackend::new(),
            log_guard: None,
        }
    }

    /// Log to `vellum.log` in the working directory; the terminal owns stdout.
    fn configure_logging(&mut self, filter: Option<&str>) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE_NAME);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let env_filter = match filter {
            Some(directive) => tracing_subscriber::EnvFilter::try_new(directive)?,
            None => tracing_subscriber::EnvFilter::from_default_env(),
        };
        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        if tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(nb_writer)
            .with_ansi(false)
            .try_init()
            .is_ok()
        {
            self.log_guard = Some(guard);
        }
        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }
}

/// Assemble the session: bindings first, then the startup file.
fn build_editor(args: &Args, config: &Config) -> Editor {
    let mut keymap = Keymap::with_defaults();
    let keys_path = config.keymap_path();
    let keys_note = match keymap.load_file(&keys_path) {
        Ok(count) => {
            info!(target: "keymap", path = %keys_path.display(), bindings = count, "source_loaded");
            None
        }
        Err(e) => {
            warn!(target: "keymap", path = %keys_path.display(), error = %e, "source_unavailable");
            Some(format!(
                "Key bindings not loaded: {}",
                keys_path.display()
            ))
        }
    };

    let mut editor = Editor::new(EditorState::default(), keymap, Box::new(FsPersistence));
    if let Some(note) = keys_note {
        editor.state.set_status(note);
    }
    if let Some(path) = &args.path {
        editor.open(path);
    }
    editor
}

fn render(editor: &Editor, width: u16) -> Result<()> {
    let frame = core_render::compose_frame(&editor.state, width);
    core_render::paint(&frame).flush()
}

/// Blocking read-dispatch-render loop. Returns only on quit or input failure.
fn run_loop(editor: &mut Editor, backend: &CrosstermBackend) -> Result<ExitCode> {
    let (mut width, height) = backend.size()?;
    editor.state.viewport_height = usize::from(height);
    editor.state.scroll_active();
    render(editor, width)?;

    loop {
        match core_input::read_event()? {
            Some(InputEvent::Key(key)) => {
                let result = editor.handle_key(key);
                if result.quit {
                    info!(target: "runtime", "quit");
                    return Ok(ExitCode::SUCCESS);
                }
                if result.dirty {
                    render(editor, width)?;
                }
            }
            Some(InputEvent::Resize(w, h)) => {
                width = w;
                editor.state.viewport_height = usize::from(h);
                editor.state.scroll_active();
                render(editor, width)?;
            }
            None => {}
        }
    }
}

fn run(startup: &mut AppStartup) -> Result<ExitCode> {
    let args = Args::parse();
    let config = core_config::load_from(args.config.clone())?;
    let filter = args.log_filter.as_deref().or(config.log_filter());
    startup.configure_logging(filter)?;
    AppStartup::install_panic_hook();
    info!(
        target: "runtime",
        config = ?config.source,
        path = ?args.path,
        "startup"
    );

    let mut editor = build_editor(&args, &config);
    startup.backend.set_title("vellum")?;
    let mut guard = startup.backend.enter_guard()?;
    run_loop(&mut editor, guard.backend())
}

fn main() -> ExitCode {
    let mut startup = AppStartup::new();
    match run(&mut startup) {
        Ok(code) => code,
        Err(e) => {
            error!(target: "runtime", error = ?e, "fatal");
            // Terminal guard has been dropped by now; stderr is visible again.
            eprintln!("vellum: {e:#}");
            ExitCode::FAILURE
        }
    }
}
