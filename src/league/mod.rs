//! League data model and caller-side validation

pub mod types;
pub mod validate;

pub use types::*;
pub use validate::validate_week;
