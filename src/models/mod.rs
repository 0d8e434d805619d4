pub mod analysis;
pub mod locale;
pub mod response;
