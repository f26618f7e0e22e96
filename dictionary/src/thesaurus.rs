use crate::parse::entry_headword;
use crate::schema::Entry;
use crate::types::{ThesaurusData, ThesaurusRecord, NO_THESAURUS_DATA};
use serde_json::Value;

/// Flattens a thesaurus response into records. An empty list or a
/// suggestions list (string first element) means the vendor has nothing for
/// this word; that is the sentinel, not a failure.
pub fn parse_thesaurus_response(data: &Value) -> ThesaurusData {
    let entries: Vec<Entry> = match data.as_array() {
        Some(items) if !items.is_empty() && !items[0].is_string() => items
            .iter()
            .map(|item| serde_json::from_value(item.clone()).unwrap_or_default())
            .collect(),
        _ => return ThesaurusData::Unavailable(NO_THESAURUS_DATA.to_string()),
    };
    ThesaurusData::Entries(entries.iter().map(thesaurus_record).collect())
}

fn thesaurus_record(entry: &Entry) -> ThesaurusRecord {
    let meta = entry.meta.clone().unwrap_or_default();
    ThesaurusRecord {
        headword: entry_headword(entry),
        part_of_speech: entry.fl.clone().unwrap_or_default(),
        synonyms: meta.syns.into_iter().flatten().collect(),
        antonyms: meta.ants.into_iter().flatten().collect(),
        related_words: meta.rel.into_iter().flatten().collect(),
        near_antonyms: meta.near.into_iter().flatten().collect(),
    }
}
