use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const FAVORITE_GLYPH: &str = "♥";
const NOT_FAVORITE_GLYPH: &str = "♡";

/// Two-state favorite indicator: a red filled heart when favorited, a dark
/// open heart otherwise. Pure function of its input; toggling is dispatched
/// by the view that owns the key event.
pub struct FavoriteButton {
    is_favorite: bool,
}

impl FavoriteButton {
    pub fn new(is_favorite: bool) -> Self {
        Self { is_favorite }
    }

    pub fn span(&self) -> Span<'static> {
        if self.is_favorite {
            Span::styled(FAVORITE_GLYPH, Style::default().fg(Color::Red))
        } else {
            Span::styled(NOT_FAVORITE_GLYPH, Style::default().fg(Color::DarkGray))
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.span()).alignment(Alignment::Right);
        frame.render_widget(paragraph, area);
    }
}
