pub mod downstream;
pub mod identity_client;
pub mod jwt_claim_reader;
pub mod profile_client;
