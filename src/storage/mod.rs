pub mod registration_log;

pub use registration_log::RegistrationLog;
