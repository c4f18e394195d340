//! wren - A small modal terminal text editor with soft wrapping
//! Main entry point

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::sync::{Mutex, Once};
use tracing_subscriber::EnvFilter;
use wren::constants::defaults::LOG_FILTER;
use wren::document;
use wren::editor::Editor;
use wren::settings::Settings;
use wren::term::crossterm::{self, CrosstermBackend};

#[derive(Parser, Debug)]
#[command(name = "wren", version, about)]
struct Args {
    /// File to edit; it must already exist
    file: PathBuf,

    /// Cells a tab is drawn as
    #[arg(long, value_name = "N")]
    tab_width: Option<usize>,

    /// Insert spaces for the Tab key
    #[arg(long, value_name = "BOOL")]
    expand_tabs: Option<bool>,

    /// Hide the line number gutter
    #[arg(long)]
    no_line_numbers: bool,

    /// Do not carry indentation into new lines
    #[arg(long)]
    no_smart_indent: bool,

    /// Write diagnostics to this file (filtered by RUST_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        if let Some(tab_width) = self.tab_width {
            settings.tab_width = tab_width.max(1);
        }
        if let Some(expand_tabs) = self.expand_tabs {
            settings.expand_tabs = expand_tabs;
        }
        settings.show_line_numbers = !self.no_line_numbers;
        settings.smart_indent = !self.no_smart_indent;
        settings
    }
}

/// Restore the terminal before the default hook prints, so the message is not
/// lost in the alternate screen
fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            crossterm::restore_terminal();
            tracing::error!(target: "runtime.panic", %info, "panic");
            default_panic(info);
        }));
    });
}

fn run(args: &Args) -> Result<()> {
    // Read the file before touching the terminal
    let buf = document::load(&args.file)
        .with_context(|| format!("failed to open {}", args.file.display()))?;

    let backend =
        CrosstermBackend::new().map_err(|e| anyhow::anyhow!(e)).context("terminal backend")?;
    let mut editor = Editor::new(backend, buf, args.file.clone(), args.settings())
        .context("failed to initialize editor")?;
    editor.run().context("editor error")?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    install_panic_hook();

    let result = match &args.log_file {
        Some(path) => match File::create(path) {
            Ok(file) => {
                let filter = EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(LOG_FILTER));
                let subscriber = tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .finish();
                tracing::subscriber::with_default(subscriber, || run(&args))
            }
            Err(e) => Err(anyhow::Error::new(e))
                .with_context(|| format!("failed to create log file {}", path.display())),
        },
        None => run(&args),
    };

    if let Err(e) = result {
        eprintln!("wren: {:#}", e);
        std::process::exit(1);
    }
}
