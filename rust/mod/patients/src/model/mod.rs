mod form;
mod patient;

pub use form::*;
pub use patient::*;
