use dictionary::ApiClient;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub word: String,
}

/// Lookup failures travel as 200 payloads in the original wire format, not
/// as rejections.
#[derive(Serialize)]
struct LookupFailure {
    error: &'static str,
    word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestions: Option<Vec<String>>,
}

pub async fn search_word(
    client: ApiClient,
    request: SearchRequest,
) -> Result<impl warp::Reply, warp::Rejection> {
    let word = request.word.trim().to_string();
    if word.is_empty() {
        return Err(warp::reject::custom(handle_errors::Error::MissingWord));
    }

    match client.lookup(&word).await {
        Ok(result) => Ok(warp::reply::json(&result)),
        Err(error) => {
            info!("lookup for {:?} failed: {}", word, error);
            let suggestions = error.suggestions().map(<[String]>::to_vec);
            let failure = LookupFailure {
                error: error.kind(),
                word: word.to_lowercase(),
                suggestions,
            };
            Ok(warp::reply::json(&failure))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dictionary::LookupError;

    #[test]
    fn failure_payload_carries_suggestions_only_when_present() {
        let not_found = LookupFailure {
            error: LookupError::WordNotFound {
                suggestions: vec!["cat".to_string()],
            }
            .kind(),
            word: "czt".to_string(),
            suggestions: Some(vec!["cat".to_string()]),
        };
        let json = serde_json::to_value(&not_found).unwrap();
        assert_eq!(json["error"], "word_not_found");
        assert_eq!(json["suggestions"][0], "cat");

        let network = LookupFailure {
            error: LookupError::Network("timed out".to_string()).kind(),
            word: "cat".to_string(),
            suggestions: None,
        };
        let json = serde_json::to_value(&network).unwrap();
        assert_eq!(json["error"], "network_error");
        assert!(json.get("suggestions").is_none());
    }
}
