//! Interactive split-pane browser over a loaded session
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::App;
use tracing::info;

use crate::session::Session;
use terminal::TerminalManager;

/// Run the interactive browser until the user quits
///
/// The terminal is restored on every exit path, including errors and panics
/// unwinding through the event loop.
pub fn run_interactive(session: &Session) -> Result<()> {
    info!(conversations = session.len(), "starting interactive browser");

    let mut manager = TerminalManager::new()?;
    let mut app = App::new(session);
    let result = app.run(manager.terminal_mut());
    manager.restore()?;

    result
}
