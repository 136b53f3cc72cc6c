//! Render published CAPIF service API descriptions as HTML.
//!
//! - [`profile`]: lenient serde model of AEF profiles and their nested
//!   interfaces, versions, custom operations and resources
//! - [`render`]: pure renderers from that model to table rows and list
//!   fragments, plus a full-page wrapper
//! - [`input`]: reading a profile document from disk
//!
//! Rendering never fails: missing or misshapen nested fields show up as empty
//! lists and empty cells.

pub mod input;
pub mod logging;
pub mod profile;
pub mod render;

pub type Result<T> = anyhow::Result<T>;

pub use input::{InputError, load_document};
pub use profile::{AefProfile, Entries, ProfileDocument, Text};
pub use render::{PageOptions, render_aef_profiles, render_page};
