use ratatui::layout::Rect;
use ratatui::style::{Style, Stylize};
use ratatui::widgets::Tabs;
use ratatui::Frame;

const ENTRIES: [&str; 3] = ["Home", "Speakers", "Sessions"];

// Speakers is the only page this front end serves; the other entries are
// static chrome.
const ACTIVE: usize = 1;

pub fn draw(frame: &mut Frame, area: Rect) {
    let tabs = Tabs::new(ENTRIES.to_vec())
        .select(ACTIVE)
        .highlight_style(Style::new().bold().underlined());
    frame.render_widget(tabs, area);
}
