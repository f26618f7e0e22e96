use crate::store::Store;
use serde::Serialize;

const RANDOM_WORD_COUNT: usize = 16;

pub async fn get_random_words(store: Store) -> Result<impl warp::Reply, warp::Rejection> {
    let words = store.random_words(RANDOM_WORD_COUNT).await;
    Ok(warp::reply::json(&words))
}

#[derive(Serialize)]
struct Stats {
    word_count: usize,
    question_count: usize,
    favorites_count: usize,
}

pub async fn get_stats(store: Store) -> Result<impl warp::Reply, warp::Rejection> {
    let (word_count, question_count, favorites_count) = store.counts().await;
    Ok(warp::reply::json(&Stats {
        word_count,
        question_count,
        favorites_count,
    }))
}
