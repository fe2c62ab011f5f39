pub mod clients;
pub mod error;
pub mod models;
pub mod services;
