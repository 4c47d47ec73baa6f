mod state;
mod views;
mod widgets;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crossterm::event::{
    self,
    KeyCode,
    KeyEvent,
    KeyModifiers,
};

use ratatui::DefaultTerminal;

use simplelog::{Config, LevelFilter, WriteLogger};

use conference::Roster;

use state::reducers::AppAction;
use state::store::Store;
use views::error::ErrorView;
use views::speakers::SpeakersView;
use views::startup::StartupView;
use views::{View, ViewType};

const LOG_FILE: &str = "conference-cli.log";

fn main() -> io::Result<()> {
    init_logger();

    let mut terminal = ratatui::init();
    let app_result = App::new().run(&mut terminal);
    ratatui::restore();
    app_result
}

// The terminal owns stdout, so logs go to a file next to the binary.
fn init_logger() {
    if let Ok(file) = File::create(LOG_FILE) {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }
}

fn roster_path() -> PathBuf {
    std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("src/assets/speakers.json"))
}

pub struct App {
    exit: bool,
    store: Arc<Store>,
}

impl App {
    fn new() -> Self {
        Self {
            exit: false,
            store: Arc::new(Store::new()),
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        let roster_path = roster_path();
        let assets_root = roster_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let mut startup_view = StartupView::new(self.store.clone());
        let mut speakers_view = SpeakersView::new(self.store.clone(), assets_root);
        let mut error_view = ErrorView::new(self.store.clone());

        terminal.draw(|frame| startup_view.render(frame))?;

        match Roster::load(&roster_path) {
            Ok(roster) => self.store.dispatch(AppAction::SetRoster(roster)),
            Err(e) => {
                log::error!("failed to load roster from {}: {}", roster_path.display(), e);
                self.store.dispatch(AppAction::SetError(e.to_string()));
            }
        }

        while !self.exit {
            let view: &mut dyn View = match self.store.with_state(|state| state.view) {
                ViewType::Startup => &mut startup_view,
                ViewType::Speakers => &mut speakers_view,
                ViewType::Error => &mut error_view,
            };

            terminal.draw(|frame| view.render(frame))?;
            self.handle_events(view)?;
        }
        Ok(())
    }

    fn handle_events(&mut self, view: &mut dyn View) -> io::Result<()> {
        if let event::Event::Key(key_event) = event::read()? {
            if self.handle_shared_event(key_event) {
                return Ok(());
            }

            view.handle_input(key_event, &self.store)?;
        }
        Ok(())
    }

    fn handle_shared_event(&mut self, key_event: KeyEvent) -> bool {
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.exit();
                true
            }
            // Esc quits unless the speakers view still has a query to clear
            KeyCode::Esc => {
                let query_pending = self.store.with_state(|state| {
                    state.view == ViewType::Speakers && !state.search_query.is_empty()
                });
                if query_pending {
                    return false;
                }
                self.exit();
                true
            }
            _ => false,
        }
    }

    fn exit(&mut self) {
        self.exit = true;
    }
}
