pub mod export;
pub mod submission;
