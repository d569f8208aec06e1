//! Static resource metadata read once when the server is created.
use std::{fs, io, path::Path};

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::lib::errors::ServerCreationError;

/// Descriptive metadata about the data the server exposes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResourceMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Load metadata from `path`.
///
/// A missing file yields empty metadata. A file that exists but cannot be read, or does not hold
/// a JSON object, is a creation error.
pub fn load_metadata(path: &Path) -> Result<ResourceMetadata, ServerCreationError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!(
                target: "mherb_mcp::metadata",
                path = %path.display(),
                "Metadata file not found; continuing with empty metadata"
            );
            return Ok(ResourceMetadata::default());
        }
        Err(source) => {
            return Err(ServerCreationError::MetadataRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let parse_error = |source| ServerCreationError::MetadataParse {
        path: path.to_path_buf(),
        source,
    };
    let value: Value = serde_json::from_str(&text).map_err(parse_error)?;
    if !value.is_object() {
        return Err(parse_error(serde::de::Error::custom(
            "metadata must be a JSON object",
        )));
    }
    let metadata: ResourceMetadata = serde_json::from_value(value).map_err(parse_error)?;

    info!(
        target: "mherb_mcp::metadata",
        path = %path.display(),
        title = metadata.title.as_deref().unwrap_or(""),
        entries = metadata.extra.len(),
        "Loaded resource metadata"
    );
    Ok(metadata)
}
