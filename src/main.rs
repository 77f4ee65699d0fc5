mod app;
mod browse;
mod config;
mod git;
mod grep;
mod reconcile;
mod report;
mod ui;

use anyhow::Result;
use app::{DetailContent, Effect, Session, SessionEvent};
use clap::{Parser, Subcommand};
use config::GtConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::layout::Rect;
use ratatui::prelude::*;
use std::io;
use std::process::ExitCode;

/// Git branch reconciliation tools
#[derive(Parser)]
#[command(name = "git-tools", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find commits in one branch that are missing from another
    FindMissing {
        /// Browse commits interactively with a detailed view
        #[arg(short = 'i', long = "browse", visible_alias = "interactive")]
        browse: bool,

        /// Launch the dual-pane terminal UI
        #[arg(short = 't', long = "tui")]
        tui: bool,

        /// Branch to take commits from
        branch_a: String,

        /// Branch to check them against
        branch_b: String,
    },
    /// List branches and commits whose message contains the given text
    GrepBranch {
        /// Search all refs (branches, remotes, tags)
        #[arg(long)]
        all: bool,

        /// Text to search commit messages for
        text: String,
    },
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load()?;
    match cli.command {
        Commands::FindMissing {
            browse,
            tui,
            branch_a,
            branch_b,
        } => {
            git::resolve_branches(&branch_a, &branch_b)?;
            let missing = reconcile::reconcile(&branch_a, &branch_b)?;
            if tui {
                run_tui(missing, &branch_a, &branch_b, &config)
            } else if browse {
                browse::run(&missing, &branch_a, &branch_b, &config)
            } else {
                report::print_report(&missing, &branch_a, &branch_b, &config);
                Ok(())
            }
        }
        Commands::GrepBranch { all, text } => grep::run(all, &text, &config),
    }
}

fn run_tui(
    commits: Vec<git::CommitRecord>,
    branch_a: &str,
    branch_b: &str,
    config: &GtConfig,
) -> Result<()> {
    let mut session = Session::new(branch_a, branch_b, commits);
    fetch_selected(&mut session);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut session, config);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &mut Session,
    config: &GtConfig,
) -> Result<()>
where
    B::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, session, config))?;

        // Block until the next input event; a resize just redraws
        match event::read()? {
            Event::Key(key) => {
                let Some(ev) = map_key(key) else { continue };
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                let page = ui::detail_page_height(area);
                match session.dispatch(ev, page, config.ui.page_overlap) {
                    Effect::Quit => return Ok(()),
                    Effect::FetchPatch => fetch_selected(session),
                    Effect::None => {}
                }
            }
            Event::Resize(..) => {}
            _ => {}
        }
    }
}

/// Map terminal keys onto session events; unbound keys return None
fn map_key(key: KeyEvent) -> Option<SessionEvent> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(SessionEvent::Quit)
        }
        KeyCode::Char('q') => Some(SessionEvent::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(SessionEvent::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(SessionEvent::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(SessionEvent::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(SessionEvent::Right),
        KeyCode::Enter => Some(SessionEvent::Enter),
        KeyCode::Esc => Some(SessionEvent::Escape),
        KeyCode::PageUp => Some(SessionEvent::PageUp),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(SessionEvent::PageDown),
        _ => None,
    }
}

/// Fetch the selected commit's patch. A failure only degrades the detail
/// pane; the session keeps running.
fn fetch_selected(session: &mut Session) {
    let Some(hash) = session.selected_commit().map(|c| c.hash.clone()) else {
        return;
    };
    session.detail = match git::full_patch(&hash) {
        Ok(text) => DetailContent::Patch(text),
        Err(err) => DetailContent::Error(format!("Error getting commit details: {}", err)),
    };
}
