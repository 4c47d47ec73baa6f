use ratatui::layout::Rect;
use ratatui::style::{Style, Stylize};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub const TITLE: &str = "Code Camp Conference";

pub fn draw(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(TITLE).style(Style::new().bold());
    frame.render_widget(header, area);
}
