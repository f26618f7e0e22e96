use crate::parse::parse_dictionary_response;
use crate::thesaurus::parse_thesaurus_response;
use crate::types::{CombinedWordResult, ThesaurusData, THESAURUS_UNAVAILABLE, TRANSLATION_NOT_FOUND};
use crate::LookupError;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::warn;

const DICTIONARY_URL: &str = "https://www.dictionaryapi.com/api/v3/references/collegiate/json";
const THESAURUS_URL: &str = "https://www.dictionaryapi.com/api/v3/references/thesaurus/json";
const TRANSLATION_URL: &str = "https://translate.googleapis.com/translate_a/single";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub dictionary_key: String,
    pub thesaurus_key: String,
    pub dictionary_url: String,
    pub thesaurus_url: String,
    pub translation_url: String,
}

impl ApiConfig {
    pub fn new(dictionary_key: String, thesaurus_key: String) -> Self {
        ApiConfig {
            dictionary_key,
            thesaurus_key,
            dictionary_url: DICTIONARY_URL.to_string(),
            thesaurus_url: THESAURUS_URL.to_string(),
            translation_url: TRANSLATION_URL.to_string(),
        }
    }
}

/// Word-lookup orchestrator over the dictionary, thesaurus and translation
/// providers, with an unbounded process-lifetime cache keyed by the
/// lowercased word. Cached results are never refreshed.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    config: Arc<ApiConfig>,
    cache: Arc<RwLock<HashMap<String, CombinedWordResult>>>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        ApiClient {
            client: reqwest::Client::new(),
            config: Arc::new(config),
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Looks a word up. A dictionary failure ends the lookup; thesaurus
    /// absence and translation failures fold in as placeholders.
    pub async fn lookup(&self, word: &str) -> Result<CombinedWordResult, LookupError> {
        let word = word.trim().to_lowercase();

        if let Some(hit) = self.cache.read().await.get(&word) {
            return Ok(hit.clone());
        }

        let mut result = self.dictionary_data(&word).await?;
        result.thesaurus_data = self.thesaurus_data(&word).await;
        result.turkish_translation = self.translate(&word).await;

        self.cache
            .write()
            .await
            .insert(word, result.clone());
        Ok(result)
    }

    async fn dictionary_data(&self, word: &str) -> Result<CombinedWordResult, LookupError> {
        let url = format!("{}/{}", self.config.dictionary_url, word);
        let response = self
            .client
            .get(&url)
            .query(&[("key", self.config.dictionary_key.as_str())])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LookupError::UpstreamStatus(response.status().as_u16()));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| LookupError::Unknown(e.to_string()))?;
        parse_dictionary_response(&data, word)
    }

    async fn thesaurus_data(&self, word: &str) -> ThesaurusData {
        let url = format!("{}/{}", self.config.thesaurus_url, word);
        let request = self
            .client
            .get(&url)
            .query(&[("key", self.config.thesaurus_key.as_str())])
            .timeout(REQUEST_TIMEOUT);

        let response = match request.send().await {
            Ok(response) if response.status().is_success() => response,
            Ok(_) | Err(_) => {
                return ThesaurusData::Unavailable(THESAURUS_UNAVAILABLE.to_string())
            }
        };
        match response.json::<Value>().await {
            Ok(data) => parse_thesaurus_response(&data),
            Err(e) => {
                warn!("thesaurus response unreadable: {}", e);
                ThesaurusData::Unavailable(THESAURUS_UNAVAILABLE.to_string())
            }
        }
    }

    async fn translate(&self, word: &str) -> String {
        match self.fetch_translation(word).await {
            Ok(translated) if !translated.is_empty() => translated,
            Ok(_) => TRANSLATION_NOT_FOUND.to_string(),
            Err(e) => {
                warn!("translation failed for {:?}: {}", word, e);
                TRANSLATION_NOT_FOUND.to_string()
            }
        }
    }

    async fn fetch_translation(&self, word: &str) -> Result<String, reqwest::Error> {
        let response = self
            .client
            .get(&self.config.translation_url)
            .query(&[
                ("client", "gtx"),
                ("sl", "en"),
                ("tl", "tr"),
                ("dt", "t"),
                ("q", word),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;
        let value: Value = response.json().await?;

        // response shape: [[["çeviri", "original", ...], ...], ...]
        let translated = value
            .get(0)
            .and_then(Value::as_array)
            .map(|segments| {
                segments
                    .iter()
                    .filter_map(|segment| segment.get(0).and_then(Value::as_str))
                    .collect::<String>()
            })
            .unwrap_or_default();
        Ok(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unroutable_config() -> ApiConfig {
        // nothing listens here; any remote call fails fast
        ApiConfig {
            dictionary_key: "test".to_string(),
            thesaurus_key: "test".to_string(),
            dictionary_url: "http://127.0.0.1:1/dict".to_string(),
            thesaurus_url: "http://127.0.0.1:1/thes".to_string(),
            translation_url: "http://127.0.0.1:1/translate".to_string(),
        }
    }

    #[tokio::test]
    async fn cache_hit_skips_remote_calls() {
        let client = ApiClient::new(unroutable_config());
        let cached = CombinedWordResult {
            word: "Cat".to_string(),
            turkish_translation: "kedi".to_string(),
            ..CombinedWordResult::default()
        };
        client
            .cache
            .write()
            .await
            .insert("cat".to_string(), cached.clone());

        // normalization maps to the cached key; a miss would hit the
        // unroutable endpoints and error
        let result = client.lookup("  CAT ").await.unwrap();
        assert_eq!(result, cached);
    }

    #[tokio::test]
    async fn transport_failure_is_a_network_error() {
        let client = ApiClient::new(unroutable_config());
        let err = client.lookup("cat").await.unwrap_err();
        assert_eq!(err.kind(), "network_error");
    }
}
