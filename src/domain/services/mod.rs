pub mod claim_service;
