use crate::store::Store;
use serde::{Deserialize, Serialize};
use serde_json::json;

pub async fn get_random_quiz(store: Store) -> Result<impl warp::Reply, warp::Rejection> {
    match store.random_question().await {
        Some(question) => Ok(warp::reply::json(&question)),
        None => Ok(warp::reply::json(&json!({
            "error": "No questions available"
        }))),
    }
}

#[derive(Deserialize)]
pub struct QuizCheckRequest {
    #[serde(default)]
    pub selected_option: String,
    #[serde(default)]
    pub correct_answer: String,
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Serialize)]
struct QuizCheckResponse {
    is_correct: bool,
    correct_answer: String,
}

pub async fn check_quiz_answer(
    request: QuizCheckRequest,
) -> Result<impl warp::Reply, warp::Rejection> {
    let correct_text = resolve_correct_answer(
        &request.correct_answer,
        &request.selected_option,
        &request.options,
    );
    let is_correct =
        request.selected_option.trim().to_lowercase() == correct_text.trim().to_lowercase();
    Ok(warp::reply::json(&QuizCheckResponse {
        is_correct,
        correct_answer: correct_text,
    }))
}

/// Resolves an `OPTIONn` reference (1-indexed) against the submitted options.
/// Out-of-range or unparsable references fall back to the submitted option
/// text; any other form is treated as the literal answer, upper-trimmed.
fn resolve_correct_answer(correct_answer: &str, selected_option: &str, options: &[String]) -> String {
    let reference = correct_answer.trim().to_uppercase();
    let Some(number) = reference.strip_prefix("OPTION") else {
        return reference;
    };
    match number.parse::<usize>() {
        Ok(n) if n >= 1 && n <= options.len() => options[n - 1].clone(),
        _ => selected_option.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["x".to_string(), "y".to_string(), "z".to_string()]
    }

    #[test]
    fn resolves_option_reference_one_indexed() {
        assert_eq!(resolve_correct_answer("OPTION2", "x", &options()), "y");
        assert_eq!(resolve_correct_answer("option1", "z", &options()), "x");
    }

    #[test]
    fn out_of_range_reference_falls_back_to_selected() {
        assert_eq!(resolve_correct_answer("OPTION9", "z", &options()), "z");
        assert_eq!(resolve_correct_answer("OPTION0", "x", &options()), "x");
    }

    #[test]
    fn unparsable_reference_falls_back_to_selected() {
        assert_eq!(resolve_correct_answer("OPTIONx", "y", &options()), "y");
    }

    #[test]
    fn literal_answer_is_upper_trimmed() {
        assert_eq!(resolve_correct_answer("  the moon ", "x", &options()), "THE MOON");
    }
}
