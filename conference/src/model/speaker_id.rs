use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpeakerId(String);

impl SpeakerId {
  pub fn new(id: impl Into<String>) -> Self {
    Self(id.into())
  }

  /// Returns the ID as a string slice
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl std::fmt::Display for SpeakerId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl AsRef<str> for SpeakerId {
  fn as_ref(&self) -> &str {
    &self.0
  }
}
