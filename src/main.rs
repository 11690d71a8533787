use std::path::PathBuf;

use color_eyre::Result;
use crossterm::event::{self, Event};
use tracing::info;

use sheetnav::app::App;
use sheetnav::cli::{parse_args, CliCommand};
use sheetnav::config::AppConfig;
use sheetnav::logging;
use sheetnav::scan::{flatten, scan};
use sheetnav::terminal::{setup_panic_hook, TerminalManager};
use sheetnav::ui;
use sheetnav::workbook::CalamineSheetSource;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    // Install the panic hook before anything can take over the terminal
    setup_panic_hook();
    color_eyre::install()?;
    logging::init()?;

    match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("sheetnav {VERSION}");
            Ok(())
        }
        CliCommand::List { root } => run_list(root),
        CliCommand::RunTui { root } => run_tui(root),
    }
}

/// Print the flattened folder paths to stdout without entering the TUI.
fn run_list(cli_root: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::resolve(cli_root);
    let tree = scan(&config.root)?;
    for path in flatten(&tree, &config.root) {
        println!("{}", path.display());
    }
    Ok(())
}

fn run_tui(cli_root: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::resolve(cli_root);

    // Scan before touching the terminal, so a bad root is reported as a
    // plain error instead of aborting mid-TUI.
    let tree = scan(&config.root)?;
    info!(
        root = %config.root.display(),
        folders = tree.total_count(),
        "scan complete"
    );

    let mut app = App::new(config.root, &tree, CalamineSheetSource);

    let mut term_manager = TerminalManager::new()?;
    while !app.should_quit {
        term_manager
            .terminal()
            .draw(|frame| ui::render(frame, &app))?;

        // Blocking read: handlers run to completion before the next event
        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }
    term_manager.restore()?;

    Ok(())
}
