pub mod routes;
mod store;
pub mod types;

use crate::store::Store;
use config::Config;
use dictionary::{ApiClient, ApiConfig};
use handle_errors::return_error;
use serde::Deserialize;
use tracing_subscriber::fmt::format::FmtSpan;
use warp::{http::Method, Filter};

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Args {
    log_level: String,
    port: u16,
    database_dir: String,
    favorites_file: String,
    dictionary_key: String,
    thesaurus_key: String,
}

#[tokio::main]
async fn main() -> Result<(), handle_errors::Error> {
    let config = Config::builder()
        .add_source(config::File::with_name("setup"))
        .build()
        .unwrap();

    let config = config.try_deserialize::<Args>().unwrap();

    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        format!(
            "handle_errors={},lexindex_web={},dictionary={},warp={}",
            config.log_level, config.log_level, config.log_level, config.log_level
        )
    });

    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let store = Store::new(&config.database_dir, &config.favorites_file).await;
    let store_filter = warp::any().map(move || store.clone());

    let api_client = ApiClient::new(ApiConfig::new(config.dictionary_key, config.thesaurus_key));
    let client_filter = warp::any().map(move || api_client.clone());

    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["Content-Type", "Authorization"])
        .allow_methods(&[Method::PUT, Method::DELETE, Method::GET, Method::POST]);

    let search = warp::post()
        .and(warp::path("api"))
        .and(warp::path("search"))
        .and(warp::path::end())
        .and(client_filter.clone())
        .and(warp::body::json())
        .and_then(routes::search::search_word)
        .with(warp::trace(|info| {
            tracing::info_span!(
                "search request",
                method = %info.method(),
                path = %info.path(),
                id = %uuid::Uuid::new_v4(),
            )
        }));

    let get_random_words = warp::get()
        .and(warp::path("api"))
        .and(warp::path("random-words"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::words::get_random_words);

    let get_random_quiz = warp::get()
        .and(warp::path("api"))
        .and(warp::path("quiz"))
        .and(warp::path("random"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::quiz::get_random_quiz);

    let check_quiz_answer = warp::post()
        .and(warp::path("api"))
        .and(warp::path("quiz"))
        .and(warp::path("check"))
        .and(warp::path::end())
        .and(warp::body::json())
        .and_then(routes::quiz::check_quiz_answer);

    let get_favorites = warp::get()
        .and(warp::path("api"))
        .and(warp::path("favorites"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::favorites::get_favorites);

    let add_favorite = warp::post()
        .and(warp::path("api"))
        .and(warp::path("favorites"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and(warp::body::json())
        .and_then(routes::favorites::add_favorite);

    // registered before the parameterized delete so "clear" is never treated
    // as a word
    let clear_favorites = warp::delete()
        .and(warp::path("api"))
        .and(warp::path("favorites"))
        .and(warp::path("clear"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::favorites::clear_favorites);

    let remove_favorite = warp::delete()
        .and(warp::path("api"))
        .and(warp::path("favorites"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::favorites::remove_favorite);

    let upload_file = warp::post()
        .and(warp::path("api"))
        .and(warp::path("upload"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and(warp::multipart::form().max_length(10_000_000))
        .and_then(routes::upload::upload_file);

    let get_stats = warp::get()
        .and(warp::path("api"))
        .and(warp::path("stats"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::words::get_stats);

    let routes = search
        .or(get_random_words)
        .or(get_random_quiz)
        .or(check_quiz_answer)
        .or(get_favorites)
        .or(add_favorite)
        .or(clear_favorites)
        .or(remove_favorite)
        .or(upload_file)
        .or(get_stats)
        .with(warp::trace::request())
        .with(cors)
        .recover(return_error);

    warp::serve(routes).run(([0, 0, 0, 0], config.port)).await;

    Ok(())
}
