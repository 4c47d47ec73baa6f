use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Splits the frame into the page chrome and the body: header, menu, body,
/// footer. Every page shares this arrangement.
pub fn chrome(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2], chunks[3])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrome_covers_the_whole_area() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, menu, body, footer) = chrome(area);

        assert_eq!(header.height, 1);
        assert_eq!(menu.height, 1);
        assert_eq!(footer.height, 1);
        assert_eq!(
            header.height + menu.height + body.height + footer.height,
            area.height
        );
    }

    #[test]
    fn test_body_gets_the_remaining_rows() {
        let (_, _, body, _) = chrome(Rect::new(0, 0, 80, 24));
        assert_eq!(body.height, 21);
    }
}
