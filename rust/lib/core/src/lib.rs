pub mod config;
pub mod error;
pub mod types;

pub use config::ClinicConfig;
pub use error::ClinicError;
pub use types::{DATE_FORMAT, today};
