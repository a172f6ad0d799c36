//! TUI application state and event loop

use crate::game::{GuessOutcome, Session, Snapshot};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Longest wait between redraws when nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Type(char),
    Backspace,
    Check,
    Refresh,
    Quit,
}

impl Action {
    /// Map a key press to an action
    #[must_use]
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => Some(Self::Quit),
            KeyCode::Char('r') if ctrl => Some(Self::Refresh),
            KeyCode::Esc => Some(Self::Quit),
            KeyCode::Enter => Some(Self::Check),
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Char(c) if !ctrl => Some(Self::Type(c)),
            _ => None,
        }
    }
}

/// Application state
pub struct App {
    pub session: Session,
    pub should_quit: bool,
    started: Instant,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            should_quit: false,
            started: Instant::now(),
        }
    }

    /// Time since the app started, as seen by the scheduler
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Apply one user action
    ///
    /// # Errors
    ///
    /// Returns an error if a refresh cannot draw a new word.
    pub fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Type(c) => self.session.controller_mut().push_char(c),
            Action::Backspace => self.session.controller_mut().pop_char(),
            Action::Check => {
                let outcome = self.session.submit_input();
                if outcome == GuessOutcome::RoundClosed {
                    debug!("check ignored, round already resolved");
                }
            }
            Action::Refresh => self.session.start_round()?,
            Action::Quit => self.should_quit = true,
        }
        Ok(())
    }

    /// Run every deferred action that is due
    ///
    /// # Errors
    ///
    /// Returns an error if advancing to the next round fails.
    pub fn update(&mut self) -> Result<()> {
        let now = self.elapsed();
        self.session.advance(now)?;
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    /// How long the event loop may block before something is due
    fn poll_timeout(&self) -> Duration {
        let now = self.elapsed();
        self.session
            .next_due()
            .map_or(IDLE_POLL, |due| due.saturating_sub(now).min(IDLE_POLL))
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if there's an I/O error
/// during rendering or event handling, or if the catalog cannot supply a word.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.session.start_round()?;

    loop {
        let snapshot = app.snapshot();
        terminal.draw(|f| super::rendering::ui(f, &snapshot))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(app.poll_timeout())?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = Action::from_key(key)
        {
            app.handle_action(action)?;
        }

        app.update()?;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WordCatalog;
    use crate::catalog::loader::entries_from_slice;
    use crate::game::{GameConfig, RoundController, RoundStatus};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn app() -> App {
        let controller = RoundController::new(
            WordCatalog::new(entries_from_slice(&[("cat", "pet")])),
            GameConfig::default(),
            StdRng::seed_from_u64(3),
        );
        let mut app = App::new(Session::new(controller));
        app.session.start_round().unwrap();
        app
    }

    #[test]
    fn key_mapping() {
        assert_eq!(
            Action::from_key(key(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(Action::Type('a'))
        );
        assert_eq!(
            Action::from_key(key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Action::Type('A'))
        );
        assert_eq!(
            Action::from_key(key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Action::Check)
        );
        assert_eq!(
            Action::from_key(key(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            Some(Action::Refresh)
        );
        assert_eq!(
            Action::from_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            Action::from_key(key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(Action::from_key(key(KeyCode::Tab, KeyModifiers::NONE)), None);
        assert_eq!(
            Action::from_key(key(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn typing_and_checking() {
        let mut app = app();
        for c in ['c', 'a', 't'] {
            app.handle_action(Action::Type(c)).unwrap();
        }
        assert_eq!(app.snapshot().input, "cat");

        app.handle_action(Action::Check).unwrap();
        let snapshot = app.snapshot();
        assert_eq!(snapshot.status, Some(RoundStatus::Correct));
        assert!(snapshot.score > 0);
    }

    #[test]
    fn refresh_starts_new_round() {
        let mut app = app();
        let before = app.snapshot().round;
        app.handle_action(Action::Refresh).unwrap();
        assert_ne!(app.snapshot().round, before);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = app();
        app.handle_action(Action::Quit).unwrap();
        assert!(app.should_quit);
    }
}
