use std::fs;
use std::path::Path;

use tracing::info;

use crate::errors::{GeneratorError, GeneratorResult};
use crate::models::MockDocument;

/// Pretty JSON with two-space indentation.
pub fn render(document: &MockDocument) -> GeneratorResult<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(document)?)
}

/// Serialize fully, then write in one call so a failed run leaves no partial file.
pub fn write_document(document: &MockDocument, path: &Path) -> GeneratorResult<()> {
    let bytes = render(document)?;
    fs::write(path, &bytes).map_err(|source| GeneratorError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = bytes.len(), "Mock data written");
    Ok(())
}
