use crate::schema::Entry;
use crate::types::AudioInfo;

/// Merriam-Webster pronunciation CDN root.
pub const AUDIO_BASE_URL: &str = "https://media.merriam-webster.com/audio/prons/en/us/mp3/";

/// One-level CDN subdirectory for a pronunciation file. The precedence order
/// mirrors the vendor's bucketing layout and must match exactly for audio to
/// resolve.
pub fn audio_subdirectory(filename: &str) -> String {
    let Some(first) = filename.chars().next() else {
        return "bix".to_string();
    };
    if first.is_ascii_digit() {
        return "number".to_string();
    }
    if matches!(first, '_' | '.' | '!' | '?' | ',') {
        return "bix".to_string();
    }
    if filename.starts_with("gg") {
        return "gg".to_string();
    }
    first.to_lowercase().to_string()
}

pub fn audio_url(filename: &str) -> String {
    format!("{}{}/{}.mp3", AUDIO_BASE_URL, audio_subdirectory(filename), filename)
}

/// Pulls every pronunciation sound file out of a dictionary response, paired
/// with its transcription and the enclosing entry's id.
pub fn extract_audio_info(entries: &[Entry]) -> Vec<AudioInfo> {
    let mut audio_files = Vec::new();
    for entry in entries {
        let entry_id = entry
            .meta
            .as_ref()
            .map(|meta| meta.id.clone())
            .unwrap_or_default();
        let Some(hwi) = &entry.hwi else { continue };
        for prs in &hwi.prs {
            let Some(sound) = &prs.sound else { continue };
            if sound.audio.is_empty() {
                continue;
            }
            audio_files.push(AudioInfo {
                url: audio_url(&sound.audio),
                filename: sound.audio.clone(),
                pronunciation: prs.mw.clone(),
                entry_id: entry_id.clone(),
            });
        }
    }
    audio_files
}
