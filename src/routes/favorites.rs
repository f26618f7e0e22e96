use crate::store::Store;
use dictionary::CombinedWordResult;
use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct AddFavoriteRequest {
    pub word_data: Option<CombinedWordResult>,
}

#[derive(Serialize)]
struct StatusMessage {
    success: bool,
    message: String,
}

pub async fn get_favorites(store: Store) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(warp::reply::json(&store.favorites().await))
}

pub async fn add_favorite(
    store: Store,
    request: AddFavoriteRequest,
) -> Result<impl warp::Reply, warp::Rejection> {
    let Some(word_data) = request.word_data else {
        return Err(warp::reject::custom(handle_errors::Error::MissingWordData));
    };
    let word = word_data.word.clone();
    let added = store.add_favorite(word_data).await;
    let message = if added {
        format!("'{}' added to favorites", word)
    } else {
        format!("'{}' already in favorites", word)
    };
    Ok(warp::reply::json(&StatusMessage {
        success: added,
        message,
    }))
}

pub async fn remove_favorite(
    word: String,
    store: Store,
) -> Result<impl warp::Reply, warp::Rejection> {
    let word = percent_decode_str(&word).decode_utf8_lossy();
    let removed = store.remove_favorite(word.as_ref()).await;
    let message = if removed {
        format!("'{}' removed from favorites", word)
    } else {
        format!("'{}' not found in favorites", word)
    };
    Ok(warp::reply::json(&StatusMessage {
        success: removed,
        message,
    }))
}

pub async fn clear_favorites(store: Store) -> Result<impl warp::Reply, warp::Rejection> {
    store.clear_favorites().await;
    Ok(warp::reply::json(&StatusMessage {
        success: true,
        message: "All favorites cleared".to_string(),
    }))
}
