use std::path::Path;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use conference::Speaker;

/// Source dimensions of a speaker photo as published with the site assets.
pub const PHOTO_WIDTH: u16 = 200;
pub const PHOTO_HEIGHT: u16 = 200;

/// Card rows reserved for the photo panel.
pub const PANEL_HEIGHT: u16 = 8;

/// Placeholder panel standing in for the speaker photo. The photo itself lives
/// at `/speakers/speaker-<id>.jpg` under the assets root; when the file is
/// missing the panel degrades to a "no photo" caption instead of failing.
pub struct SpeakerImage {
    path: String,
    available: bool,
}

impl SpeakerImage {
    pub fn new(speaker: &Speaker, assets_root: &Path) -> Self {
        let path = speaker.image_path();
        let on_disk = assets_root.join(path.trim_start_matches('/'));

        Self {
            available: on_disk.is_file(),
            path,
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let (caption, style) = if self.available {
            (self.path.as_str(), Style::default())
        } else {
            ("no photo", Style::default().fg(Color::DarkGray))
        };

        let title = format!("photo {}x{}", PHOTO_WIDTH, PHOTO_HEIGHT);
        let paragraph = Paragraph::new(caption)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(paragraph, area);
    }
}
