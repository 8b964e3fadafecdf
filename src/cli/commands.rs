use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::indexer::{DEFAULT_KEYWORD_COUNT, SummaryOptions};
use crate::parsers::load_archive;
use crate::render::ConsoleRenderer;
use crate::search::{HighlightTerm, SearchOutcome};
use crate::session::Session;
use crate::utils::{format_path_with_tilde, resolve_archive_path};

const DEFAULT_LISTING_COUNT: usize = 10;

#[derive(Debug, Parser)]
#[command(name = "chat-archive-explorer")]
#[command(version)]
#[command(about = "Browse, search and reflect on an exported chat archive", long_about = None)]
pub struct Cli {
    /// Archive file (defaults to $CHAT_ARCHIVE_PATH, then ~/conversations.json)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Dashboard: size, keywords, topics, repetitions, rediscovery
    Summary {
        /// Number of top keywords to show
        #[arg(long, default_value_t = DEFAULT_KEYWORD_COUNT)]
        keywords: usize,
        /// Seed for the rediscovery sample
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List every conversation, most recent first
    List,
    /// List the most recent conversations
    Recent {
        #[arg(short = 'n', long, default_value_t = DEFAULT_LISTING_COUNT)]
        count: usize,
    },
    /// Show one conversation by its number
    View {
        number: usize,
        /// Emphasize this term in the transcript
        #[arg(long)]
        highlight: Option<String>,
    },
    /// Search titles and message text
    Search {
        query: String,
        /// Open this conversation number with matches highlighted
        #[arg(long, value_name = "N")]
        open: Option<usize>,
    },
    /// List themes, or browse one by its letter
    Themes {
        key: Option<String>,
        #[arg(short = 'n', long, default_value_t = DEFAULT_LISTING_COUNT)]
        limit: usize,
    },
    /// Unfinished ideas and follow-ups
    Reflect,
    /// Show a random conversation
    Random {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Interactive split-pane browser
    Browse,
}

pub fn run(cli: &Cli) -> Result<()> {
    let Some(command) = &cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let session = open_session(cli.file.clone())?;
    if let Commands::Browse = command {
        return crate::tui::run_interactive(&session);
    }

    let renderer = ConsoleRenderer::new(use_color(cli.no_color));
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(command, &session, &renderer, &mut out)?;
    out.flush()?;
    Ok(())
}

fn use_color(no_color: bool) -> bool {
    !no_color && std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
}

fn open_session(explicit: Option<PathBuf>) -> Result<Session> {
    let path = resolve_archive_path(explicit)?;
    debug!(path = %path.display(), "resolved archive path");

    let archive = load_archive(&path)
        .with_context(|| format!("Failed to load archive: {}", format_path_with_tilde(&path)))?;
    Ok(Session::new(archive))
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Run one non-interactive command against a loaded session
pub fn execute<W: Write>(
    command: &Commands,
    session: &Session,
    renderer: &ConsoleRenderer,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::Summary { keywords, seed } => {
            let options = SummaryOptions { keyword_count: *keywords, ..SummaryOptions::default() };
            let summary = session.summary(&options, &mut seeded_rng(*seed));
            renderer.render_banner(out)?;
            renderer.render_summary(out, &summary)?;
        }
        Commands::List => renderer.render_listing(out, &session.list_titles())?,
        Commands::Recent { count } => {
            writeln!(out, "Your most recent {} conversations:", (*count).min(session.len()))?;
            renderer.render_listing(out, &session.recent(*count))?;
        }
        Commands::View { number, highlight } => {
            let term = match highlight {
                Some(raw) => HighlightTerm::new(raw)?,
                None => None,
            };
            let view = session.view(*number, term)?;
            renderer.render_conversation(out, &view)?;
        }
        Commands::Search { query, open } => {
            let outcome = session.search(query)?;
            renderer.render_search_outcome(out, &outcome)?;
            if let Some(number) = open {
                let highlight = match &outcome {
                    SearchOutcome::Completed { term, .. } => Some(term.clone()),
                    SearchOutcome::Skipped => None,
                };
                writeln!(out)?;
                renderer.render_conversation(out, &session.view(*number, highlight)?)?;
            }
        }
        Commands::Themes { key: None, .. } => renderer.render_theme_menu(out, session.categories())?,
        Commands::Themes { key: Some(key), limit } => {
            let listing = session.browse(key, *limit)?;
            renderer.render_theme_listing(out, &listing)?;
        }
        Commands::Reflect => renderer.render_follow_ups(out, &session.follow_ups())?,
        Commands::Random { seed } => {
            let view = session.random_view(&mut seeded_rng(*seed))?;
            renderer.render_conversation(out, &view)?;
        }
        Commands::Browse => crate::tui::run_interactive(session)?,
    }
    Ok(())
}
