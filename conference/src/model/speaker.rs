use serde::Deserialize;

use crate::SpeakerId;

/// Number of bio characters shown on a card before the ellipsis.
pub const BIO_EXCERPT_CHARS: usize = 70;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
  pub id: SpeakerId,
  pub first_name: String,
  pub last_name: String,
  #[serde(default)]
  pub bio: String,
  #[serde(default)]
  pub is_favorite: bool,
}

impl Speaker {
  pub fn get_id(&self) -> &SpeakerId {
    &self.id
  }

  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
  }

  /// First 70 characters of the bio followed by an ellipsis. The ellipsis is
  /// appended even when the bio is shorter than the cutoff; cards always
  /// render a trailing "...".
  pub fn bio_excerpt(&self) -> String {
    let head: String = self.bio.chars().take(BIO_EXCERPT_CHARS).collect();
    head + "..."
  }

  /// Path of the speaker photo under the static assets root.
  pub fn image_path(&self) -> String {
    format!("/speakers/speaker-{}.jpg", self.id)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn speaker_with_bio(bio: &str) -> Speaker {
    Speaker {
      id: SpeakerId::new("1"),
      first_name: "Ada".to_string(),
      last_name: "Lovelace".to_string(),
      bio: bio.to_string(),
      is_favorite: false,
    }
  }

  #[test]
  fn test_full_name() {
    let speaker = speaker_with_bio("");
    assert_eq!(speaker.full_name(), "Ada Lovelace");
  }

  #[test]
  fn test_excerpt_truncates_long_bio() {
    let bio = "x".repeat(200);
    let speaker = speaker_with_bio(&bio);
    let excerpt = speaker.bio_excerpt();
    assert_eq!(excerpt.len(), BIO_EXCERPT_CHARS + 3);
    assert!(excerpt.ends_with("..."));
  }

  #[test]
  fn test_excerpt_appends_ellipsis_to_short_bio() {
    let speaker = speaker_with_bio("Mathematician");
    assert_eq!(speaker.bio_excerpt(), "Mathematician...");
  }

  #[test]
  fn test_excerpt_of_empty_bio() {
    let speaker = speaker_with_bio("");
    assert_eq!(speaker.bio_excerpt(), "...");
  }

  #[test]
  fn test_excerpt_exactly_at_cutoff() {
    let bio = "y".repeat(BIO_EXCERPT_CHARS);
    let speaker = speaker_with_bio(&bio);
    assert_eq!(speaker.bio_excerpt(), bio + "...");
  }

  #[test]
  fn test_excerpt_counts_chars_not_bytes() {
    let bio = "é".repeat(100);
    let speaker = speaker_with_bio(&bio);
    let excerpt = speaker.bio_excerpt();
    assert_eq!(excerpt.chars().count(), BIO_EXCERPT_CHARS + 3);
  }

  #[test]
  fn test_image_path() {
    let speaker = speaker_with_bio("");
    assert_eq!(speaker.image_path(), "/speakers/speaker-1.jpg");
  }

  #[test]
  fn test_deserialize_defaults_favorite_to_false() {
    let json = r#"{"id":"3","firstName":"Grace","lastName":"Hopper"}"#;
    let speaker: Speaker = serde_json::from_str(json).unwrap();
    assert_eq!(speaker.first_name, "Grace");
    assert_eq!(speaker.bio, "");
    assert!(!speaker.is_favorite);
  }
}
