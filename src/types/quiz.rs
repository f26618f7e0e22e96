use serde::{Deserialize, Serialize};

/// One quiz row bulk-loaded from a spreadsheet. Read-only at runtime; the
/// field names are the wire format the frontend expects.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "Options")]
    pub options: Vec<String>,
    #[serde(rename = "Answer")]
    pub answer: String,
    #[serde(rename = "Explain")]
    pub explain: String,
}
