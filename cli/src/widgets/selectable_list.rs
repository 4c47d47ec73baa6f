use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

#[derive(Clone)]
pub struct SelectableList {
    title: String,
    items: Vec<ListItem<'static>>,
    state: ListState,
}

impl SelectableList {
    pub fn new(title: &str, items: Vec<ListItem<'static>>) -> Self {
        let mut state = ListState::default();
        // Only select first item if list is not empty
        if !items.is_empty() {
            state.select(Some(0));
        }

        Self {
            title: title.to_string(),
            items,
            state,
        }
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let list = List::new(self.items.clone())
            .block(Block::default().title(self.title.clone()))
            .highlight_style(Style::new().reversed())
            .highlight_symbol("≡ ");

        frame.render_stateful_widget(list, area, &mut self.state);
    }

    pub fn next(&mut self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }

        let i = self.state.selected().unwrap_or(0);
        let next = (i + 1) % self.items.len();
        self.state.select(Some(next));
        Some(next)
    }

    pub fn previous(&mut self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.items.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
        Some(i)
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replaces the items, keeping the selection when it still points inside
    /// the new list and clamping it to the last entry otherwise. Filtering
    /// shrinks and regrows the list between draws.
    pub fn update_items(&mut self, items: Vec<ListItem<'static>>) {
        self.items = items;

        if self.items.is_empty() {
            self.state.select(None);
            return;
        }

        let selected = self.state.selected().unwrap_or(0);
        self.state.select(Some(selected.min(self.items.len() - 1)));
    }
}
