use std::fs;
use std::path::Path;

use crate::error::{Result, RosterError};
use crate::{Speaker, SpeakerId};

/// The ordered collection of speakers being displayed. Order is fixed at load
/// time; filtering and favorite toggles never reorder it.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    speakers: Vec<Speaker>,
}

impl Roster {
    pub fn from_speakers(speakers: Vec<Speaker>) -> Self {
        Self { speakers }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let speakers: Vec<Speaker> = serde_json::from_str(json)?;
        Ok(Self { speakers })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let roster = Self::from_json_str(&json)?;
        log::debug!("loaded {} speakers from {}", roster.len(), path.display());
        Ok(roster)
    }

    pub fn len(&self) -> usize {
        self.speakers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speakers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Speaker> {
        self.speakers.iter()
    }

    pub fn get(&self, id: &SpeakerId) -> Option<&Speaker> {
        self.speakers.iter().find(|speaker| &speaker.id == id)
    }

    /// Speakers whose full name contains `query`, case-insensitively. An empty
    /// query matches everyone. Result order follows roster order.
    pub fn filter(&self, query: &str) -> Vec<&Speaker> {
        let needle = query.to_lowercase();
        self.speakers
            .iter()
            .filter(|speaker| speaker.full_name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Flips the favorite flag of exactly one speaker and returns the new
    /// value. Every other entry is left untouched.
    pub fn toggle_favorite(&mut self, id: &SpeakerId) -> Result<bool> {
        let speaker = self
            .speakers
            .iter_mut()
            .find(|speaker| &speaker.id == id)
            .ok_or_else(|| RosterError::SpeakerNotFound(id.clone()))?;
        speaker.is_favorite = !speaker.is_favorite;
        Ok(speaker.is_favorite)
    }
}
