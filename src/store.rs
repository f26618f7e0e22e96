use crate::types::quiz::QuizQuestion;
use crate::types::vocab::VocabWord;
use calamine::{open_workbook_auto, Data, Reader};
use dictionary::CombinedWordResult;
use rand::seq::SliceRandom;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

const NO_EXPLANATION: &str = "No explanation available.";
const MIN_QUESTION_LEN: usize = 10;
const MIN_OPTIONS: usize = 2;

/// Process-wide owned state: bulk-loaded vocabulary and quiz rows plus the
/// persisted favorites collection. Words and questions are rewritten
/// wholesale on every reload; favorites are written back to disk after every
/// mutation.
#[derive(Clone)]
pub struct Store {
    words: Arc<RwLock<Vec<VocabWord>>>,
    questions: Arc<RwLock<Vec<QuizQuestion>>>,
    favorites: Arc<RwLock<Vec<CombinedWordResult>>>,
    database_dir: PathBuf,
    favorites_file: PathBuf,
}

impl Store {
    pub async fn new(database_dir: &str, favorites_file: &str) -> Self {
        let store = Store {
            words: Arc::new(RwLock::new(Vec::new())),
            questions: Arc::new(RwLock::new(Vec::new())),
            favorites: Arc::new(RwLock::new(Vec::new())),
            database_dir: PathBuf::from(database_dir),
            favorites_file: PathBuf::from(favorites_file),
        };
        store.load_database().await;
        store.load_favorites().await;
        store
    }

    /// Rescans the database directory and replaces both collections. A file
    /// that fails to load is logged and skipped; it never aborts the rest of
    /// the bulk load.
    pub async fn load_database(&self) -> (usize, usize) {
        let mut words = Vec::new();
        let mut questions = Vec::new();

        if let Err(e) = std::fs::create_dir_all(&self.database_dir) {
            error!("cannot create database dir {:?}: {}", self.database_dir, e);
        }

        match std::fs::read_dir(&self.database_dir) {
            Ok(dir_entries) => {
                for dir_entry in dir_entries.flatten() {
                    let path = dir_entry.path();
                    if !is_spreadsheet(&path) {
                        continue;
                    }
                    match read_rows(&path) {
                        Ok(rows) => {
                            let (mut w, mut q) = parse_rows(&rows);
                            words.append(&mut w);
                            questions.append(&mut q);
                        }
                        Err(e) => error!("error loading {:?}, skipping: {}", path, e),
                    }
                }
            }
            Err(e) => error!("cannot read database dir {:?}: {}", self.database_dir, e),
        }

        info!(
            "database loaded: {} words, {} questions",
            words.len(),
            questions.len()
        );
        let counts = (words.len(), questions.len());
        *self.words.write().await = words;
        *self.questions.write().await = questions;
        counts
    }

    async fn load_favorites(&self) {
        let favorites = match std::fs::read_to_string(&self.favorites_file) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(favorites) => favorites,
                Err(e) => {
                    error!("favorites file unreadable, starting empty: {}", e);
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };
        *self.favorites.write().await = favorites;
    }

    async fn persist_favorites(&self, favorites: &[CombinedWordResult]) {
        let json = match serde_json::to_string_pretty(favorites) {
            Ok(json) => json,
            Err(e) => {
                error!("cannot serialize favorites: {}", e);
                return;
            }
        };
        if let Err(e) = tokio::fs::write(&self.favorites_file, json).await {
            error!("cannot write favorites to {:?}: {}", self.favorites_file, e);
        }
    }

    pub async fn favorites(&self) -> Vec<CombinedWordResult> {
        self.favorites.read().await.clone()
    }

    /// Adds unless a case-insensitive `Word` match already exists. Returns
    /// whether the entry was added.
    pub async fn add_favorite(&self, entry: CombinedWordResult) -> bool {
        let mut favorites = self.favorites.write().await;
        let word = entry.word.to_lowercase();
        if favorites.iter().any(|fav| fav.word.to_lowercase() == word) {
            return false;
        }
        favorites.push(entry);
        self.persist_favorites(&favorites).await;
        true
    }

    /// Removes every case-insensitive match. Returns whether anything was
    /// removed.
    pub async fn remove_favorite(&self, word: &str) -> bool {
        let mut favorites = self.favorites.write().await;
        let word = word.to_lowercase();
        let before = favorites.len();
        favorites.retain(|fav| fav.word.to_lowercase() != word);
        if favorites.len() == before {
            return false;
        }
        self.persist_favorites(&favorites).await;
        true
    }

    pub async fn clear_favorites(&self) {
        let mut favorites = self.favorites.write().await;
        favorites.clear();
        self.persist_favorites(&favorites).await;
    }

    /// Uniform sample without replacement, at most `count` entries.
    pub async fn random_words(&self, count: usize) -> Vec<VocabWord> {
        let words = self.words.read().await;
        let mut rng = rand::thread_rng();
        words.choose_multiple(&mut rng, count).cloned().collect()
    }

    pub async fn random_question(&self) -> Option<QuizQuestion> {
        let questions = self.questions.read().await;
        let mut rng = rand::thread_rng();
        questions.choose(&mut rng).cloned()
    }

    pub async fn counts(&self) -> (usize, usize, usize) {
        (
            self.words.read().await.len(),
            self.questions.read().await.len(),
            self.favorites.read().await.len(),
        )
    }

    pub async fn save_upload(&self, filename: &str, data: &[u8]) -> Result<(), handle_errors::Error> {
        tokio::fs::create_dir_all(&self.database_dir)
            .await
            .map_err(handle_errors::Error::FileSaveError)?;
        let path = self.database_dir.join(filename);
        tokio::fs::write(&path, data)
            .await
            .map_err(handle_errors::Error::FileSaveError)?;
        info!("saved upload {:?}", path);
        Ok(())
    }
}

fn is_spreadsheet(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("xlsx") | Some("xls")
    )
}

fn read_rows(path: &Path) -> Result<Vec<Vec<String>>, calamine::Error> {
    let mut workbook = open_workbook_auto(path)?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Ok(Vec::new()),
    };
    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect())
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        other => other.to_string().trim().to_string(),
    }
}

/// Dispatches a sheet on its first column header: `question` sheets carry
/// quiz rows, `word` sheets carry vocabulary, anything else is ignored.
fn parse_rows(rows: &[Vec<String>]) -> (Vec<VocabWord>, Vec<QuizQuestion>) {
    let Some((headers, body)) = rows.split_first() else {
        return (Vec::new(), Vec::new());
    };
    let first_column = headers
        .first()
        .map(|h| h.trim().to_lowercase())
        .unwrap_or_default();
    match first_column.as_str() {
        "question" => (Vec::new(), questions_from_rows(headers, body)),
        "word" => (words_from_rows(headers, body), Vec::new()),
        _ => (Vec::new(), Vec::new()),
    }
}

/// Rows failing minimum validity (question length >10, at least 2 options,
/// non-empty answer) are silently skipped.
fn questions_from_rows(headers: &[String], rows: &[Vec<String>]) -> Vec<QuizQuestion> {
    let mut questions = Vec::new();
    for row in rows {
        let mut question = String::new();
        let mut answer = String::new();
        let mut explain = String::new();
        let mut options = Vec::new();

        for (i, header) in headers.iter().enumerate() {
            let value = row.get(i).map(|cell| cell.trim()).unwrap_or("");
            let header = header.trim().to_lowercase();
            if header == "question" {
                question = value.to_string();
            } else if header.starts_with("option") {
                if !value.is_empty() {
                    options.push(value.to_string());
                }
            } else if header == "answer" {
                answer = value.to_string();
            } else if header == "explain" {
                explain = value.to_string();
            }
        }

        if question.is_empty()
            || answer.is_empty()
            || question.chars().count() <= MIN_QUESTION_LEN
            || options.len() < MIN_OPTIONS
        {
            continue;
        }
        questions.push(QuizQuestion {
            question,
            options,
            answer,
            explain: if explain.is_empty() {
                NO_EXPLANATION.to_string()
            } else {
                explain
            },
        });
    }
    questions
}

fn words_from_rows(headers: &[String], rows: &[Vec<String>]) -> Vec<VocabWord> {
    let word_column = headers
        .iter()
        .position(|h| h.trim().to_lowercase() == "word");
    let Some(word_column) = word_column else {
        return Vec::new();
    };
    rows.iter()
        .filter_map(|row| {
            let word = row.get(word_column).map(|cell| cell.trim()).unwrap_or("");
            if word.is_empty() {
                None
            } else {
                Some(VocabWord {
                    word: word.to_string(),
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    async fn temp_store(dir: &tempfile::TempDir) -> Store {
        let database_dir = dir.path().join("database");
        let favorites_file = dir.path().join("favorites.json");
        Store::new(
            database_dir.to_str().unwrap(),
            favorites_file.to_str().unwrap(),
        )
        .await
    }

    fn favorite(word: &str) -> CombinedWordResult {
        CombinedWordResult {
            word: word.to_string(),
            ..CombinedWordResult::default()
        }
    }

    #[test]
    fn question_rows_parse_and_invalid_rows_are_skipped() {
        let sheet = rows(&[
            &["Question", "Option1", "Option2", "Answer", "Explain"],
            &["What does 'cat' mean?", "an animal", "a plant", "OPTION1", ""],
            &["Only one option given?", "an animal", "", "OPTION1", "nope"],
            &["short?", "a", "b", "OPTION1", ""],
            &["What is missing an answer entirely?", "a", "b", "", ""],
        ]);
        let (words, questions) = parse_rows(&sheet);
        assert!(words.is_empty());
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "What does 'cat' mean?");
        assert_eq!(questions[0].options, vec!["an animal", "a plant"]);
        assert_eq!(questions[0].answer, "OPTION1");
        assert_eq!(questions[0].explain, "No explanation available.");
    }

    #[test]
    fn word_rows_skip_empty_cells() {
        let sheet = rows(&[&["Word"], &["apple"], &[""], &["  banana  "]]);
        let (words, questions) = parse_rows(&sheet);
        assert!(questions.is_empty());
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].word, "apple");
        assert_eq!(words[1].word, "banana");
    }

    #[test]
    fn unknown_first_header_yields_nothing() {
        let sheet = rows(&[&["Whatever"], &["data"]]);
        assert_eq!(parse_rows(&sheet), (Vec::new(), Vec::new()));
    }

    #[tokio::test]
    async fn favorite_add_is_idempotent_under_case_variation() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;

        assert!(store.add_favorite(favorite("Cat")).await);
        assert!(!store.add_favorite(favorite("cat")).await);
        assert_eq!(store.favorites().await.len(), 1);
        assert_eq!(store.favorites().await[0].word, "Cat");
    }

    #[tokio::test]
    async fn favorite_removal_matches_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;

        store.add_favorite(favorite("Cat")).await;
        assert!(store.remove_favorite("CAT").await);
        assert!(!store.remove_favorite("cat").await);
        assert!(store.favorites().await.is_empty());
    }

    #[tokio::test]
    async fn favorites_survive_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;
        store.add_favorite(favorite("Dog")).await;

        let reloaded = temp_store(&dir).await;
        let favorites = reloaded.favorites().await;
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].word, "Dog");
    }

    #[tokio::test]
    async fn clear_empties_the_collection() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;
        store.add_favorite(favorite("Cat")).await;
        store.add_favorite(favorite("Dog")).await;

        store.clear_favorites().await;
        assert!(store.favorites().await.is_empty());
        assert_eq!(store.counts().await, (0, 0, 0));
    }

    #[tokio::test]
    async fn random_words_caps_at_available_count() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;
        assert!(store.random_words(16).await.is_empty());
        assert!(store.random_question().await.is_none());
    }
}
