pub mod analysis;
pub mod prompt;
pub mod vision;
