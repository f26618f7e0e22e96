pub mod favorites;
pub mod quiz;
pub mod search;
pub mod upload;
pub mod words;
