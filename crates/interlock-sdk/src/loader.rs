//! Name table loading
//!
//! Name tables are flat maps from device name to type, stored as YAML or JSON:
//!
//! ```yaml
//! "21": point
//! "1R": signal
//! "10T": track
//! ```

use crate::error::{Result, SdkError};
use interlock_core::NameTable;
use std::path::Path;

/// On-disk format of a name table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameTableFormat {
    Yaml,
    Json,
}

impl NameTableFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("yaml") | Some("yml") => Ok(NameTableFormat::Yaml),
            Some("json") => Ok(NameTableFormat::Json),
            _ => Err(SdkError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Parse name table content; `origin` is only used in error messages
pub fn parse_name_table(content: &str, format: NameTableFormat, origin: &Path) -> Result<NameTable> {
    match format {
        NameTableFormat::Yaml => serde_yaml::from_str(content).map_err(|source| SdkError::Yaml {
            path: origin.to_path_buf(),
            source,
        }),
        NameTableFormat::Json => serde_json::from_str(content).map_err(|source| SdkError::Json {
            path: origin.to_path_buf(),
            source,
        }),
    }
}

/// Load a single name table file
pub async fn load_name_table_file(path: &Path) -> Result<NameTable> {
    let format = NameTableFormat::from_path(path)?;
    let content = tokio::fs::read_to_string(path).await?;

    let table = parse_name_table(&content, format, path)?;
    tracing::debug!("Loaded {} name table entries from {:?}", table.len(), path);
    Ok(table)
}

/// Load and merge name table files; later files override earlier ones
pub async fn load_name_tables<P: AsRef<Path>>(paths: &[P]) -> Result<NameTable> {
    let mut merged = NameTable::new();
    for path in paths {
        merged.extend(load_name_table_file(path.as_ref()).await?);
    }
    Ok(merged)
}
