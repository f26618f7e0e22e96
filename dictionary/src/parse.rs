use crate::audio::extract_audio_info;
use crate::schema::{DtItem, Entry, EtItem, SenseItem};
use crate::text::{strip_tags, title_case, DEFINITION_TAGS, ETYMOLOGY_TAGS, EXAMPLE_TAGS};
use crate::types::{CombinedWordResult, WordRecord};
use crate::LookupError;
use serde_json::Value;

const MAX_SUGGESTIONS: usize = 5;

/// Flattens a raw collegiate-dictionary response into a combined result.
///
/// A list whose first element is a string is the vendor's "did you mean"
/// signal and becomes a not-found error carrying up to five suggestions; an
/// empty or non-list response is a plain not-found. Individual entries parse
/// best-effort: a malformed entry degrades to empty fields rather than
/// failing the lookup.
pub fn parse_dictionary_response(data: &Value, word: &str) -> Result<CombinedWordResult, LookupError> {
    let Some(items) = data.as_array() else {
        return Err(LookupError::WordNotFound { suggestions: Vec::new() });
    };
    if items.is_empty() {
        return Err(LookupError::WordNotFound { suggestions: Vec::new() });
    }
    if items[0].is_string() {
        let suggestions = items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .take(MAX_SUGGESTIONS)
            .collect();
        return Err(LookupError::WordNotFound { suggestions });
    }

    let entries: Vec<Entry> = items
        .iter()
        .map(|item| serde_json::from_value(item.clone()).unwrap_or_default())
        .collect();
    Ok(combined_result(word, &entries))
}

pub(crate) fn combined_result(word: &str, entries: &[Entry]) -> CombinedWordResult {
    let records = word_records(entries);
    let mut result = CombinedWordResult {
        word: title_case(word),
        ..CombinedWordResult::default()
    };
    if let Some(first) = records.first() {
        if !first.headword.is_empty() {
            result.word = first.headword.clone();
        }
        result.part_of_speech = first.part_of_speech.clone();
        result.main_definition = first.definitions.first().cloned().unwrap_or_default();
        result.main_example = first.examples.first().cloned().unwrap_or_default();
        result.pronunciation = first.pronunciation.clone();
    }
    result.audio_files = extract_audio_info(entries);
    result.dictionary_data = records;
    result
}

/// The id before the first colon, title-cased (homograph suffixes like
/// `cat:2` drop the `:2`).
pub(crate) fn entry_headword(entry: &Entry) -> String {
    entry
        .meta
        .as_ref()
        .map(|meta| title_case(meta.id.split(':').next().unwrap_or("")))
        .unwrap_or_default()
}

fn word_records(entries: &[Entry]) -> Vec<WordRecord> {
    entries.iter().map(word_record).collect()
}

fn word_record(entry: &Entry) -> WordRecord {
    let pronunciation = entry
        .hwi
        .as_ref()
        .map(|hwi| {
            hwi.prs
                .iter()
                .filter(|prs| !prs.mw.is_empty())
                .map(|prs| format!("/{}/", prs.mw))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();

    let etymology = entry
        .et
        .iter()
        .flatten()
        .filter_map(|item| match item {
            EtItem::Tagged(tag, text) if tag == "text" => {
                Some(strip_tags(text, ETYMOLOGY_TAGS))
            }
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ");

    let mut definitions = Vec::new();
    let mut examples = Vec::new();
    for section in entry.def_sections.iter().flatten() {
        for sequence in &section.sseq {
            for sense_item in sequence {
                let SenseItem::Tagged(_, sense) = sense_item else {
                    continue;
                };
                for dt_item in &sense.dt {
                    match dt_item {
                        DtItem::Text(tag, text) if tag == "text" => {
                            definitions.push(strip_tags(text, DEFINITION_TAGS));
                        }
                        DtItem::Vis(tag, illustrations) if tag == "vis" => {
                            for vis in illustrations {
                                if !vis.t.is_empty() {
                                    examples.push(strip_tags(&vis.t, EXAMPLE_TAGS));
                                }
                            }
                        }
                        _ => {}
                    }
                }
            }
        }
    }
    // shortdefs fill in anything the sense walk missed; dedup is exact-match only
    for short_def in entry.shortdef.iter().flatten() {
        if !definitions.contains(short_def) {
            definitions.push(short_def.clone());
        }
    }

    WordRecord {
        headword: entry_headword(entry),
        part_of_speech: entry.fl.clone().unwrap_or_default(),
        pronunciation,
        etymology,
        definitions,
        examples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_first_element_yields_suggestions_capped_at_five() {
        let data = json!(["cat", "cot", "cut", "coat", "chat", "scat", "that"]);
        let err = parse_dictionary_response(&data, "czt").unwrap_err();
        assert_eq!(err.kind(), "word_not_found");
        assert_eq!(
            err.suggestions().unwrap(),
            &["cat", "cot", "cut", "coat", "chat"]
        );
    }

    #[test]
    fn empty_list_yields_not_found_without_suggestions() {
        let err = parse_dictionary_response(&json!([]), "zzz").unwrap_err();
        assert_eq!(err.kind(), "word_not_found");
        assert!(err.suggestions().is_none());
    }

    #[test]
    fn non_list_yields_not_found() {
        let err = parse_dictionary_response(&json!({"unexpected": true}), "cat").unwrap_err();
        assert_eq!(err.kind(), "word_not_found");
    }

    #[test]
    fn full_entry_flattens_into_record() {
        let data = json!([
            {
                "meta": {"id": "cat:1"},
                "fl": "noun",
                "hwi": {
                    "prs": [
                        {"mw": "ˈkat", "sound": {"audio": "cat00001"}},
                        {"mw": "ˈkæt"}
                    ]
                },
                "et": [
                    ["text", "Middle English {it}catte{/it}"],
                    ["et_link", ["cattus", "cattus"]]
                ],
                "def": [
                    {
                        "sseq": [
                            [
                                ["sense", {
                                    "dt": [
                                        ["text", "{bc}a small domesticated carnivore"],
                                        ["vis", [{"t": "the {wi}cat{/wi} purred"}]]
                                    ]
                                }],
                                ["pseq", [["bs", {"sense": {}}]]]
                            ]
                        ]
                    }
                ],
                "shortdef": [
                    "a small domesticated carnivore",
                    "a player of jazz"
                ]
            }
        ]);

        let result = parse_dictionary_response(&data, "cat").unwrap();
        assert_eq!(result.word, "Cat");
        assert_eq!(result.part_of_speech, "noun");
        assert_eq!(result.pronunciation, "/ˈkat/, /ˈkæt/");
        assert_eq!(result.main_definition, "a small domesticated carnivore");
        assert_eq!(result.main_example, "the cat purred");
        assert_eq!(result.dictionary_data.len(), 1);

        let record = &result.dictionary_data[0];
        assert_eq!(record.etymology, "Middle English catte");
        // the shortdef duplicate of the parsed definition is skipped, the new one kept
        assert_eq!(
            record.definitions,
            vec!["a small domesticated carnivore", "a player of jazz"]
        );
        assert_eq!(record.examples, vec!["the cat purred"]);

        assert_eq!(result.audio_files.len(), 1);
        assert_eq!(result.audio_files[0].entry_id, "cat:1");
    }

    #[test]
    fn malformed_entry_degrades_to_empty_fields() {
        let data = json!([{"meta": 17, "fl": ["not", "a", "string"]}]);
        let result = parse_dictionary_response(&data, "odd word").unwrap();
        // entry failed to parse, falls back to defaults and the input word
        assert_eq!(result.word, "Odd Word");
        assert_eq!(result.part_of_speech, "");
        assert!(result.dictionary_data[0].definitions.is_empty());
    }

    #[test]
    fn headword_defaults_to_title_cased_input() {
        let data = json!([{"fl": "verb"}]);
        let result = parse_dictionary_response(&data, "run").unwrap();
        assert_eq!(result.word, "Run");
        assert_eq!(result.part_of_speech, "verb");
    }
}
