use conference::{Roster, SpeakerId};

use crate::views::ViewType;

use super::store::AppState;

#[derive(Debug)]
pub enum AppAction {
    SetRoster(Roster),
    SetSearchQuery(String),
    ClearSearchQuery,
    ToggleFavorite(SpeakerId),
    SetError(String),
}

pub fn app_reducer(state: &mut AppState, action: AppAction) {
    match action {
        AppAction::SetRoster(roster) => {
            log::debug!(
                "SetRoster action received with {} speakers, switching to Speakers view",
                roster.len()
            );
            state.roster = roster;
            state.view = ViewType::Speakers;
        }
        AppAction::SetSearchQuery(query) => {
            // The search bar reports the full query on every keystroke
            state.search_query = query;
        }
        AppAction::ClearSearchQuery => {
            log::debug!("ClearSearchQuery action received");
            state.search_query.clear();
        }
        AppAction::ToggleFavorite(id) => {
            log::debug!("ToggleFavorite action received: {}", id);
            match state.roster.toggle_favorite(&id) {
                Ok(flag) => log::debug!("speaker {} favorite set to {}", id, flag),
                Err(e) => log::warn!("favorite toggle ignored: {}", e),
            }
        }
        AppAction::SetError(message) => {
            log::debug!("SetError action received: {}", message);
            state.error = Some(message);
            state.view = ViewType::Error;
        }
    }
}
