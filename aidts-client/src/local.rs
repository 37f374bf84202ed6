use std::path::Path;

use aidts_ir::SchemaSnapshot;
use tracing::info;

use crate::{FetchError, ndjson::parse_ndjson};

pub const ENTITY_FILE: &str = "Entity.ndjson";
pub const ATTRIBUTE_FILE: &str = "Attribute.ndjson";

/// Read a snapshot saved as `Entity.ndjson` and `Attribute.ndjson` in `dir`.
pub fn read_snapshot(dir: &Path) -> Result<SchemaSnapshot, FetchError> {
    let entities = read_file(&dir.join(ENTITY_FILE))?;
    let attributes = read_file(&dir.join(ATTRIBUTE_FILE))?;
    info!(
        dir = %dir.display(),
        entities = entities.len(),
        attributes = attributes.len(),
        "read local snapshot"
    );
    Ok(SchemaSnapshot::new(entities, attributes))
}

fn read_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, FetchError> {
    let text = std::fs::read_to_string(path).map_err(|source| FetchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_ndjson(&text, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_read_snapshot() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(ENTITY_FILE),
            "{\"id\":\"Patient\",\"type\":\"resource\",\"_source\":\"code\"}\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join(ATTRIBUTE_FILE),
            concat!(
                "{\"id\":\"Patient.name\",\"resource\":{\"id\":\"Patient\",\"resourceType\":\"Entity\"},",
                "\"path\":[\"name\"],\"isCollection\":true}\n",
            ),
        )
        .unwrap();

        let snapshot = read_snapshot(dir.path()).unwrap();
        assert_eq!(snapshot.entities.len(), 1);
        assert_eq!(snapshot.attributes.len(), 1);
        assert!(snapshot.attributes[0].is_collection);
        assert_eq!(snapshot.attributes[0].entity_id(), "Patient");
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_snapshot(dir.path()).unwrap_err();
        match err {
            FetchError::Io { path, .. } => assert!(path.ends_with(ENTITY_FILE)),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
