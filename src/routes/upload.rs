use crate::store::Store;
use bytes::BufMut;
use futures::{StreamExt, TryStreamExt};
use serde::Serialize;
use std::path::Path;
use tracing::info;
use warp::multipart::FormData;

#[derive(Serialize)]
struct UploadResponse {
    success: bool,
    message: String,
    word_count: usize,
    question_count: usize,
}

/// Accepts a multipart `file` part, saves it under the database directory
/// and reloads the vocabulary/quiz collections. The extension is checked
/// before anything touches storage.
pub async fn upload_file(store: Store, form: FormData) -> Result<impl warp::Reply, warp::Rejection> {
    let mut parts = form.into_stream();
    while let Some(Ok(part)) = parts.next().await {
        if part.name() != "file" {
            continue;
        }
        let filename = sanitize_filename(part.filename().unwrap_or(""));
        if filename.is_empty() {
            return Err(warp::reject::custom(handle_errors::Error::NoFileSelected));
        }
        if !has_spreadsheet_extension(&filename) {
            return Err(warp::reject::custom(handle_errors::Error::InvalidFileType));
        }

        let contents = part
            .stream()
            .try_fold(Vec::new(), |mut vec, data| {
                vec.put(data);
                async move { Ok(vec) }
            })
            .await
            .map_err(|e| {
                info!("reading uploaded file failed: {}", e);
                warp::reject::reject()
            })?;

        store.save_upload(&filename, &contents).await?;
        let (word_count, question_count) = store.load_database().await;

        return Ok(warp::reply::json(&UploadResponse {
            success: true,
            message: format!("File '{}' uploaded successfully", filename),
            word_count,
            question_count,
        }));
    }
    Err(warp::reject::custom(handle_errors::Error::NoFileProvided))
}

/// Keeps only the final path component, so a crafted filename cannot escape
/// the database directory.
fn sanitize_filename(raw: &str) -> String {
    Path::new(raw)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("")
        .to_string()
}

fn has_spreadsheet_extension(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    lower.ends_with(".xlsx") || lower.ends_with(".xls")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_spreadsheet_extensions_pass() {
        assert!(has_spreadsheet_extension("words.xlsx"));
        assert!(has_spreadsheet_extension("QUIZ.XLS"));
        assert!(!has_spreadsheet_extension("notes.txt"));
        assert!(!has_spreadsheet_extension("xlsx"));
    }

    #[test]
    fn filenames_are_reduced_to_their_last_component() {
        assert_eq!(sanitize_filename("../../etc/passwd.xlsx"), "passwd.xlsx");
        assert_eq!(sanitize_filename("plain.xls"), "plain.xls");
        assert_eq!(sanitize_filename(""), "");
    }
}
