mod audio;
mod client;
mod parse;
mod schema;
mod text;
mod thesaurus;
mod types;

pub use audio::{audio_subdirectory, audio_url, extract_audio_info, AUDIO_BASE_URL};
pub use client::{ApiClient, ApiConfig};
pub use parse::parse_dictionary_response;
pub use thesaurus::parse_thesaurus_response;
pub use types::{
    AudioInfo, CombinedWordResult, ThesaurusData, ThesaurusRecord, WordRecord,
    NO_THESAURUS_DATA, THESAURUS_UNAVAILABLE, TRANSLATION_NOT_FOUND,
};

/// Failure classes a lookup can surface to the caller. Thesaurus and
/// translation failures never show up here, they degrade to placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    WordNotFound { suggestions: Vec<String> },
    Network(String),
    UpstreamStatus(u16),
    Unknown(String),
}

impl LookupError {
    /// Wire-format error code, matching the original service payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::WordNotFound { .. } => "word_not_found",
            LookupError::Network(_) => "network_error",
            LookupError::UpstreamStatus(_) => "api_error",
            LookupError::Unknown(_) => "unknown_error",
        }
    }

    pub fn suggestions(&self) -> Option<&[String]> {
        match self {
            LookupError::WordNotFound { suggestions } if !suggestions.is_empty() => {
                Some(suggestions)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LookupError::WordNotFound { .. } => write!(f, "word not found"),
            LookupError::Network(e) => write!(f, "network error: {}", e),
            LookupError::UpstreamStatus(code) => write!(f, "upstream returned status {}", code),
            LookupError::Unknown(e) => write!(f, "unknown error: {}", e),
        }
    }
}
