//! JSON Store
//!
//! A single JSON file standing in for the metadata server:
//!
//! ```json
//! {
//!   "classificationDefs": [ { "name": "PII", "guid": "...", "superTypes": [] } ],
//!   "tagEntities": { "PII": 12 },
//!   "session": { "searchUrl": "#!/search/searchResult?tag=PII" }
//! }
//! ```
//!
//! Writes take an exclusive lock on a sibling `.lock` file and replace the
//! store atomically.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{ClassificationType, EntityCountIndex};
use crate::domain::ports::{
    ClassificationRepository, FetchMode, MetricsRepository, RepositoryError, TypeDefsPayload,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreFile {
    #[serde(default)]
    pub classification_defs: Vec<ClassificationType>,
    #[serde(default)]
    pub tag_entities: EntityCountIndex,
    #[serde(default)]
    pub session: SessionState,
}

pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    /// Read the store. A missing file is an empty store.
    pub fn load(&self) -> Result<StoreFile, RepositoryError> {
        if !self.path.exists() {
            return Ok(StoreFile::default());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| RepositoryError::unavailable("read", e))?;
        serde_json::from_str(&content).map_err(|e| RepositoryError::Corrupted {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn save_to_disk(&self, store: &StoreFile) -> Result<(), RepositoryError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|e| RepositoryError::unavailable("write", e))?;

        let content = serde_json::to_string_pretty(store)
            .map_err(|e| RepositoryError::unavailable("serialize", e))?;

        let mut tmp = tempfile::NamedTempFile::new_in(&parent)
            .map_err(|e| RepositoryError::unavailable("write", e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| RepositoryError::unavailable("write", e))?;
        tmp.persist(&self.path)
            .map_err(|e| RepositoryError::unavailable("write", e.error))?;
        Ok(())
    }

    /// Load, modify and save under the store lock.
    pub fn update<T>(
        &self,
        f: impl FnOnce(&mut StoreFile) -> Result<T, RepositoryError>,
    ) -> Result<T, RepositoryError> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| RepositoryError::unavailable("lock", e))?;
        }

        let lock_file =
            fs::File::create(&lock_path).map_err(|e| RepositoryError::unavailable("lock", e))?;
        lock_file
            .lock_exclusive()
            .map_err(|e| RepositoryError::unavailable("lock", e))?;

        let result = self.load().and_then(|mut store| {
            let value = f(&mut store)?;
            self.save_to_disk(&store)?;
            Ok(value)
        });

        let _ = lock_file.unlock();
        result
    }

    pub fn search_url(&self) -> Result<Option<String>, RepositoryError> {
        Ok(self.load()?.session.search_url)
    }

    pub fn set_search_url(&self, url: Option<String>) -> Result<(), RepositoryError> {
        self.update(|store| {
            store.session.search_url = url;
            Ok(())
        })
    }
}

#[async_trait(?Send)]
impl ClassificationRepository for JsonStore {
    async fn fetch_all(
        &self,
        mode: FetchMode,
    ) -> Result<Vec<ClassificationType>, RepositoryError> {
        log::debug!("loading classifications from {} ({:?})", self.path.display(), mode);
        Ok(self.load()?.classification_defs)
    }

    async fn save(&self, payload: TypeDefsPayload) -> Result<TypeDefsPayload, RepositoryError> {
        self.update(|store| {
            let mut saved = Vec::with_capacity(payload.classification_defs.len());
            for mut def in payload.classification_defs {
                if store.classification_defs.iter().any(|t| t.name == def.name) {
                    return Err(RepositoryError::AlreadyExists { name: def.name });
                }
                if def.guid.is_empty() {
                    def.guid = uuid::Uuid::new_v4().to_string();
                }
                for parent in &def.super_types {
                    if let Some(parent) = store
                        .classification_defs
                        .iter_mut()
                        .find(|t| &t.name == parent)
                    {
                        parent.add_sub_type(&def.name);
                    }
                }
                store.classification_defs.push(def.clone());
                saved.push(def);
            }

            Ok(TypeDefsPayload {
                classification_defs: saved,
                ..TypeDefsPayload::default()
            })
        })
    }

    async fn delete_by_name(&self, name: &str) -> Result<(), RepositoryError> {
        self.update(|store| {
            let before = store.classification_defs.len();
            store.classification_defs.retain(|t| t.name != name);
            if store.classification_defs.len() == before {
                return Err(RepositoryError::NotFound {
                    name: name.to_string(),
                });
            }
            for ty in &mut store.classification_defs {
                ty.remove_sub_type(name);
            }
            store.tag_entities.remove(name);
            Ok(())
        })
    }
}

#[async_trait(?Send)]
impl MetricsRepository for JsonStore {
    async fn fetch_counts(&self, _mode: FetchMode) -> Result<EntityCountIndex, RepositoryError> {
        Ok(self.load()?.tag_entities)
    }
}
