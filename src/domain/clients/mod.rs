pub mod identity_client;
pub mod profile_client;
