pub mod model;
pub mod roster;
pub mod error;

// Re-export key types for easier access
pub use model::{Speaker, SpeakerId};
pub use roster::Roster;
pub use error::{RosterError, Result};
