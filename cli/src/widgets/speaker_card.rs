use std::path::Path;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use conference::Speaker;

use crate::widgets::favorite_button::FavoriteButton;
use crate::widgets::speaker_image::{self, SpeakerImage};

/// One speaker as a card: full name with the favorite indicator on the right,
/// the photo panel, and the bio excerpt underneath.
pub struct SpeakerCard<'a> {
    speaker: &'a Speaker,
    image: SpeakerImage,
}

impl<'a> SpeakerCard<'a> {
    pub fn new(speaker: &'a Speaker, assets_root: &Path) -> Self {
        Self {
            speaker,
            image: SpeakerImage::new(speaker, assets_root),
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(speaker_image::PANEL_HEIGHT),
                Constraint::Min(1),
            ])
            .split(inner);

        let title_columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(2),
            ])
            .split(rows[0]);

        let name = Paragraph::new(self.speaker.full_name()).style(Style::new().bold());
        frame.render_widget(name, title_columns[0]);

        FavoriteButton::new(self.speaker.is_favorite).draw(frame, title_columns[1]);

        self.image.draw(frame, rows[1]);

        let excerpt = Paragraph::new(self.speaker.bio_excerpt())
            .style(Style::new().dim())
            .wrap(Wrap { trim: true });
        frame.render_widget(excerpt, rows[2]);
    }
}
