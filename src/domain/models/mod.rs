pub mod profile;
pub mod registration;
pub mod token;
