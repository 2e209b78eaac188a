pub mod claims;
pub mod dates;
pub mod matcher;

pub use claims::ClaimValidator;
pub use matcher::FieldMatcher;
