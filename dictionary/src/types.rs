use serde::{Deserialize, Serialize};

pub const NO_THESAURUS_DATA: &str = "No thesaurus data available";
pub const THESAURUS_UNAVAILABLE: &str = "Thesaurus data unavailable";
pub const TRANSLATION_NOT_FOUND: &str = "Çeviri bulunamadı";

/// One flattened dictionary entry. Immutable once built.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordRecord {
    pub headword: String,
    pub part_of_speech: String,
    pub pronunciation: String,
    pub etymology: String,
    pub definitions: Vec<String>,
    pub examples: Vec<String>,
}

/// One flattened thesaurus entry; list order follows the API, duplicates kept.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThesaurusRecord {
    pub headword: String,
    pub part_of_speech: String,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub related_words: Vec<String>,
    pub near_antonyms: Vec<String>,
}

/// Either parsed thesaurus entries or the sentinel string the wire format
/// uses when the vendor has nothing for the word. Absence is not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThesaurusData {
    Entries(Vec<ThesaurusRecord>),
    Unavailable(String),
}

impl Default for ThesaurusData {
    fn default() -> Self {
        ThesaurusData::Unavailable(NO_THESAURUS_DATA.to_string())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioInfo {
    pub url: String,
    pub filename: String,
    pub pronunciation: String,
    pub entry_id: String,
}

/// Full lookup payload. Field names are the wire format of the original
/// service and must not change.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombinedWordResult {
    #[serde(rename = "Word")]
    pub word: String,
    #[serde(rename = "Part_of_Speech")]
    pub part_of_speech: String,
    #[serde(rename = "Main_Definition")]
    pub main_definition: String,
    #[serde(rename = "Main_Example")]
    pub main_example: String,
    #[serde(rename = "Pronunciation")]
    pub pronunciation: String,
    #[serde(rename = "Dictionary_Data")]
    pub dictionary_data: Vec<WordRecord>,
    #[serde(rename = "Thesaurus_Data")]
    pub thesaurus_data: ThesaurusData,
    #[serde(rename = "Audio_Files")]
    pub audio_files: Vec<AudioInfo>,
    #[serde(rename = "Turkish_Translation")]
    pub turkish_translation: String,
}
