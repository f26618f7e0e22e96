pub mod quiz;
pub mod vocab;
