use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use crate::state::reducers::AppAction;
use crate::state::store::Store;
use crate::widgets::search_bar::SearchBar;
use crate::widgets::speaker_card::SpeakerCard;
use crate::widgets::speaker_list::SpeakerList;
use crate::widgets::{footer, header, layout, menu};

use super::View;

/// The speaker listing: a search bar over the roster, the filtered list, and a
/// card for the selected speaker. Roster and query live in the store; only the
/// list selection is view-local.
pub struct SpeakersView {
    store: Arc<Store>,
    list_widget: SpeakerList,
    assets_root: PathBuf,
}

impl SpeakersView {
    pub fn new(store: Arc<Store>, assets_root: PathBuf) -> Self {
        Self {
            store,
            list_widget: SpeakerList::new(),
            assets_root,
        }
    }

    fn edit_query(&self, store: &Store, edit: impl FnOnce(&mut String)) {
        let mut query = store.with_state(|state| state.search_query.clone());
        edit(&mut query);
        store.dispatch(AppAction::SetSearchQuery(query));
    }
}

impl View for SpeakersView {
    fn render(&mut self, frame: &mut Frame) {
        let (header_area, menu_area, body_area, footer_area) = layout::chrome(frame.area());
        header::draw(frame, header_area);
        menu::draw(frame, menu_area);
        footer::draw(frame, footer_area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(body_area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Percentage(60),
            ])
            .split(rows[1]);

        let store = self.store.clone();
        store.with_state(|state| {
            SearchBar::new(&state.search_query).draw(frame, rows[0]);

            let visible = state.roster.filter(&state.search_query);
            self.list_widget.update(&visible);
            self.list_widget.draw(frame, columns[0]);

            let selected = self
                .list_widget
                .selected_id()
                .and_then(|id| state.roster.get(id));
            if let Some(speaker) = selected {
                SpeakerCard::new(speaker, &self.assets_root).draw(frame, columns[1]);
            }
        });
    }

    fn handle_input(&mut self, key_event: KeyEvent, store: &Store) -> io::Result<()> {
        match key_event.code {
            KeyCode::Up => {
                self.list_widget.previous();
            }
            KeyCode::Down => {
                self.list_widget.next();
            }
            KeyCode::Enter => {
                if let Some(id) = self.list_widget.selected_id() {
                    store.dispatch(AppAction::ToggleFavorite(id.clone()));
                }
            }
            KeyCode::Esc => {
                store.dispatch(AppAction::ClearSearchQuery);
            }
            KeyCode::Backspace => {
                self.edit_query(store, |query| {
                    query.pop();
                });
            }
            KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit_query(store, |query| query.push(c));
            }
            _ => {}
        }
        Ok(())
    }
}
