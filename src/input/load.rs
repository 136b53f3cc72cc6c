use crate::input::error::InputError;
use crate::profile::ProfileDocument;
use std::fs;
use std::path::Path;
use tracing::info;

/// Read and parse a profile document (published service APIs or a bare list
/// of AEF profiles) from a JSON file.
pub fn load_document(path: impl AsRef<Path>) -> Result<ProfileDocument, InputError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let doc = parse_document(&text).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "loaded {} with {} AEF profile(s) from {}",
        doc.kind(),
        doc.profile_count(),
        path.display()
    );
    Ok(doc)
}

pub fn parse_document(text: &str) -> serde_json::Result<ProfileDocument> {
    serde_json::from_str(text)
}
