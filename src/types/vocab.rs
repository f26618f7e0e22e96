use serde::{Deserialize, Serialize};

/// One vocabulary word bulk-loaded from a spreadsheet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VocabWord {
    #[serde(rename = "Word")]
    pub word: String,
}
