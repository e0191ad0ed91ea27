//! TUI application state and logic

use crate::dictionary::{DictionaryValidator, Verdict, verdict_for};
use crate::game::{GameSession, PendingGuess, Phase, SubmitOutcome};
use crate::wordlists::TargetPicker;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// How long to wait for a key before checking for finished lookups
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Application state
pub struct App {
    pub session: GameSession,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    targets: TargetPicker,
    validator: Arc<dyn DictionaryValidator>,
    runtime: Handle,
    lookups_tx: UnboundedSender<(PendingGuess, Verdict)>,
    lookups_rx: UnboundedReceiver<(PendingGuess, Verdict)>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(
        session: GameSession,
        targets: TargetPicker,
        validator: Arc<dyn DictionaryValidator>,
        runtime: Handle,
    ) -> Self {
        let (lookups_tx, lookups_rx) = unbounded_channel();

        Self {
            session,
            messages: vec![Message {
                text: "Welcome! Guess the five-letter word.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            targets,
            validator,
            runtime,
            lookups_tx,
            lookups_rx,
        }
    }

    /// Start a lookup for the full buffer; the result arrives via [`Self::drain_lookups`]
    pub fn submit(&mut self) {
        if self.session.is_submitting() {
            return;
        }
        let Some(pending) = self.session.begin_submit() else {
            if self.session.phase() == Phase::Active {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            return;
        };

        let validator = Arc::clone(&self.validator);
        let tx = self.lookups_tx.clone();
        self.runtime.spawn(async move {
            let verdict = verdict_for(validator.as_ref(), pending.word()).await;
            // Receiver is gone only when the app is shutting down
            let _ = tx.send((pending, verdict));
        });
    }

    /// Apply every lookup that has finished since the last call
    pub fn drain_lookups(&mut self) {
        while let Ok((pending, verdict)) = self.lookups_rx.try_recv() {
            let outcome = self.session.resolve_submit(pending, verdict);
            self.report(outcome);
        }
    }

    pub fn new_game(&mut self) {
        match self.targets.next_target() {
            Some(target) => self.session.restart_with(target),
            None => self.session.restart(),
        }
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn restart(&mut self) {
        self.session.restart();
        self.messages.clear();
        self.add_message("Restarted with the same word.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Route one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char('r') if ctrl => self.restart(),
            KeyCode::Esc => self.should_quit = true,
            _ if self.session.phase().is_over() => match key.code {
                KeyCode::Char('n' | 'N') | KeyCode::Enter => self.new_game(),
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                _ => {}
            },
            KeyCode::Char(c) => {
                self.session.add_letter(c);
            }
            KeyCode::Backspace => {
                self.session.remove_letter();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn report(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Ignored | SubmitOutcome::Stale => {}
            SubmitOutcome::Rejected => self.add_message("Not in word list", MessageStyle::Error),
            SubmitOutcome::Unverified => self.add_message(
                "Could not reach the dictionary. Press Enter to retry.",
                MessageStyle::Error,
            ),
            SubmitOutcome::Accepted { phase, .. } => match phase {
                Phase::Won => {
                    let celebration = match self.session.history().len() {
                        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                        3 => "✨ SPLENDID! Three guesses! ✨",
                        4 => "👏 GREAT JOB! Four guesses! 👏",
                        5 => "🎉 NICE WORK! Five guesses! 🎉",
                        _ => "😅 PHEW! Got it! 😅",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
                Phase::Lost => {
                    let answer = self
                        .session
                        .snapshot()
                        .target
                        .map_or_else(String::new, ToString::to_string);
                    self.add_message(
                        &format!("Out of guesses! The word was {answer}."),
                        MessageStyle::Error,
                    );
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
                Phase::Active => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "TUI exited with error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.drain_lookups();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
