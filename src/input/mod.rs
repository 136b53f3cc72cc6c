//! Loading profile documents from disk.

pub mod error;
pub mod load;

pub use error::InputError;
pub use load::{load_document, parse_document};
