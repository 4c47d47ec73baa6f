use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;
use ratatui::Frame;

use conference::{Speaker, SpeakerId};

use crate::widgets::favorite_button::FavoriteButton;
use crate::widgets::selectable_list::SelectableList;

/// The visible (filtered) roster entries as selectable rows. Rows carry the
/// speaker ids in parallel so a selection maps back to the roster.
pub struct SpeakerList {
  widget: SelectableList,
  ids: Vec<SpeakerId>,
}

impl SpeakerList {
  pub fn new() -> Self {
    Self {
      widget: SelectableList::new("Speakers", Vec::new()),
      ids: Vec::new(),
    }
  }

  pub fn update(&mut self, speakers: &[&Speaker]) {
    let (items, ids): (Vec<ListItem<'static>>, Vec<SpeakerId>) = speakers
      .iter()
      .copied()
      .map(|speaker| (Self::row(speaker), speaker.get_id().clone()))
      .unzip();

    self.widget.update_items(items);
    self.ids = ids;
  }

  fn row(speaker: &Speaker) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
      FavoriteButton::new(speaker.is_favorite).span(),
      Span::raw(" "),
      Span::raw(speaker.full_name()),
    ]))
  }

  pub fn draw(&mut self, frame: &mut Frame, area: Rect) {
    self.widget.draw(frame, area);
  }

  pub fn next(&mut self) {
    self.widget.next();
  }

  pub fn previous(&mut self) {
    self.widget.previous();
  }

  pub fn len(&self) -> usize {
    self.widget.len()
  }

  fn selected(&self) -> Option<usize> {
    self.widget.selected()
  }

  pub fn selected_id(&self) -> Option<&SpeakerId> {
    self.selected().and_then(|i| self.ids.get(i))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use conference::Roster;

  fn test_speakers() -> Roster {
    Roster::from_json_str(
      r#"[
        {"id": "1", "firstName": "Ada", "lastName": "Lovelace", "bio": "Mathematician"},
        {"id": "2", "firstName": "Grace", "lastName": "Hopper", "bio": "Rear admiral"},
        {"id": "3", "firstName": "Alan", "lastName": "Turing", "bio": "Logician"}
      ]"#,
    )
    .unwrap()
  }

  #[test]
  fn test_update_populates_rows() {
    let roster = test_speakers();
    let mut list = SpeakerList::new();
    list.update(&roster.filter(""));

    assert_eq!(list.len(), 3, "List should have 3 speakers");
    assert_eq!(list.selected(), Some(0), "First speaker should be initially selected");
    assert_eq!(list.selected_id().map(SpeakerId::as_str), Some("1"));
  }

  #[test]
  fn test_selection_follows_navigation() {
    let roster = test_speakers();
    let mut list = SpeakerList::new();
    list.update(&roster.filter(""));

    list.next();
    assert_eq!(list.selected_id().map(SpeakerId::as_str), Some("2"));

    list.previous();
    assert_eq!(list.selected_id().map(SpeakerId::as_str), Some("1"));
  }

  #[test]
  fn test_update_with_narrower_filter_remaps_ids() {
    let roster = test_speakers();
    let mut list = SpeakerList::new();
    list.update(&roster.filter(""));
    list.next();
    list.next();
    assert_eq!(list.selected_id().map(SpeakerId::as_str), Some("3"));

    // Narrow to one entry; selection clamps onto it
    list.update(&roster.filter("grace"));
    assert_eq!(list.len(), 1);
    assert_eq!(list.selected_id().map(SpeakerId::as_str), Some("2"));
  }

  #[test]
  fn test_no_match_has_no_selection() {
    let roster = test_speakers();
    let mut list = SpeakerList::new();
    list.update(&roster.filter("bob"));

    assert_eq!(list.len(), 0);
    assert_eq!(list.selected_id(), None);
  }
}
