use serde::Serialize;
use tracing::{event, instrument, Level};
use warp::{
    filters::{body::BodyDeserializeError, cors::CorsForbidden},
    http::StatusCode,
    reject::Reject,
    Rejection, Reply,
};

#[derive(Debug)]
pub enum Error {
    MissingWord,
    MissingWordData,
    NoFileProvided,
    NoFileSelected,
    InvalidFileType,
    FileSaveError(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::MissingWord => write!(f, "No word provided"),
            Error::MissingWordData => write!(f, "No word data provided"),
            Error::NoFileProvided => write!(f, "No file uploaded"),
            Error::NoFileSelected => write!(f, "No file selected"),
            Error::InvalidFileType => {
                write!(f, "Invalid file type. Please upload .xlsx or .xls files")
            }
            Error::FileSaveError(ref err) => write!(f, "Cannot save uploaded file: {}", err),
        }
    }
}

impl Reject for Error {}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn json_error(message: String, status: StatusCode) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(warp::reply::json(&ErrorBody { error: message }), status)
}

#[instrument]
pub async fn return_error(r: Rejection) -> Result<impl Reply, Rejection> {
    if let Some(Error::FileSaveError(e)) = r.find() {
        event!(Level::ERROR, "{}", e);
        Ok(json_error(
            "Could not save uploaded file".to_string(),
            StatusCode::INTERNAL_SERVER_ERROR,
        ))
    } else if let Some(error) = r.find::<Error>() {
        event!(Level::WARN, "{}", error);
        Ok(json_error(error.to_string(), StatusCode::BAD_REQUEST))
    } else if let Some(error) = r.find::<CorsForbidden>() {
        event!(Level::ERROR, "{}", error);
        Ok(json_error(error.to_string(), StatusCode::FORBIDDEN))
    } else if let Some(error) = r.find::<BodyDeserializeError>() {
        event!(Level::WARN, "{}", error);
        Ok(json_error(
            error.to_string(),
            StatusCode::UNPROCESSABLE_ENTITY,
        ))
    } else {
        Ok(json_error(
            "Route not found".to_string(),
            StatusCode::NOT_FOUND,
        ))
    }
}
