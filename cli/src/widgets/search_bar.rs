use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const PLACEHOLDER: &str = "Search by name";

/// One-line text input reflecting the caller-owned query. The widget holds no
/// state of its own; keystrokes are turned into SetSearchQuery dispatches by
/// the speakers view.
pub struct SearchBar<'a> {
    query: &'a str,
}

impl<'a> SearchBar<'a> {
    pub fn new(query: &'a str) -> Self {
        Self { query }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let content = if self.query.is_empty() {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(vec![
                Span::raw(self.query.to_string()),
                Span::styled("█", Style::default().fg(Color::DarkGray)),
            ])
        };

        let paragraph = Paragraph::new(content)
            .block(Block::default().borders(Borders::ALL).title("Search"));
        frame.render_widget(paragraph, area);
    }
}
