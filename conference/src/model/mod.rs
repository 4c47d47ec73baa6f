mod speaker;
mod speaker_id;

pub use speaker::{Speaker, BIO_EXCERPT_CHARS};
pub use speaker_id::SpeakerId;
