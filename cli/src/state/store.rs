use std::sync::{ Arc, Mutex };

use conference::Roster;

use crate::views::ViewType;

use super::reducers::{ self, AppAction };

pub struct AppState {
  pub view: ViewType,
  pub roster: Roster,
  pub search_query: String,
  pub error: Option<String>,
}

impl Default for AppState {
  fn default() -> Self {
    Self {
      view: ViewType::Startup,
      roster: Roster::default(),
      search_query: String::new(),
      error: None,
    }
  }
}

pub struct Store {
  state: Arc<Mutex<AppState>>,
}

impl Store {
  pub fn new() -> Self {
    Self {
      state: Arc::new(Mutex::new(AppState::default())),
    }
  }

  pub fn dispatch(&self, action: AppAction) {
    let mut state = self.state.lock().unwrap();
    reducers::app_reducer(&mut state, action);
  }

  pub fn with_state<F, T>(&self, f: F) -> T
  where
    F: FnOnce(&AppState) -> T
  {
    let state = self.state.lock().unwrap();
    f(&state)
  }
}
