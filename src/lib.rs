pub mod config;
pub mod identity_verifier;
pub mod models;
pub mod processing;
pub mod storage;
pub mod utils;
pub mod validation;

pub use identity_verifier::IdentityVerifier;
