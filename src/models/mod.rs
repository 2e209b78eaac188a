pub mod data;
pub mod registration;

pub use data::*;
pub use registration::{stamped_filename, Applicant, Registration};
