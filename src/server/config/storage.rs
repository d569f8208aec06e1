use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_DATABASE_PATH: &str = "data/mherb.db";
pub const DEFAULT_METADATA_PATH: &str = "resources/metadata.json";

/// Filesystem locations the server opens later. Not checked at load time.
#[derive(Debug, Clone)]
pub struct StorageSection {
    pub database_path: PathBuf,
    pub metadata_path: PathBuf,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawStorageSection {
    pub database_path: Option<PathBuf>,
    pub metadata_path: Option<PathBuf>,
}

pub fn parse_storage_section(raw: Option<RawStorageSection>) -> StorageSection {
    let raw = raw.unwrap_or_default();
    StorageSection {
        database_path: raw
            .database_path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH)),
        metadata_path: raw
            .metadata_path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_METADATA_PATH)),
    }
}
