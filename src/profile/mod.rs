//! Profile layer: lenient serde model of published service APIs.
//!
//! It owns:
//! - Entries / Text (normalization of missing or misshapen fields)
//! - the AEF profile record tree
//! - ProfileDocument (the accepted top-level input shapes)

pub mod document;
pub mod entries;
pub mod model;

pub use document::{ProfileDocument, Section};
pub use entries::{Entries, Text};
pub use model::{AefProfile, CustomOperation, InterfaceDescription, Resource, ServiceApiDescription, Version};
