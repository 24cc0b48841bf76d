//! Input validation against statutory limits.

pub mod pix_key;
pub mod validator;

pub use pix_key::is_plausible_pix_key;
pub use validator::{ValidationReport, validate};
