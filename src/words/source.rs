//! Word list loading.
//!
//! An index file enumerates the available lists; each list is its own JSON
//! file of word entries. Both live under a single lists directory:
//!
//! ```text
//! word_lists/
//!   word_lists_index.json   [{"id", "name", "description", "path"}, ...]
//!   animals.json            [{"word", "correctLetter", "incorrectLetter"}, ...]
//! ```

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::game::WordEntry;

pub const DEFAULT_LISTS_DIR: &str = "word_lists";
pub const DEFAULT_INDEX_FILE: &str = "word_lists_index.json";

/// One entry of the index file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordListDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Location of the list file, relative to the lists directory
    pub path: String,
}

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no words could be loaded from the selected lists")]
    NoWords,
}

/// Anything that can enumerate word lists and fetch their contents.
#[allow(async_fn_in_trait)]
pub trait WordSource {
    async fn index(&self) -> Result<Vec<WordListDescriptor>, WordListError>;

    async fn list(&self, descriptor: &WordListDescriptor) -> Result<Vec<WordEntry>, WordListError>;
}

/// Word lists stored as JSON files in a directory
#[derive(Debug, Clone)]
pub struct DirWordSource {
    root: PathBuf,
    index_file: String,
}

impl DirWordSource {
    pub fn new(root: impl Into<PathBuf>, index_file: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            index_file: index_file.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        &self,
        relative: &str,
    ) -> Result<T, WordListError> {
        let path = self.root.join(relative);
        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| WordListError::Io {
                path: path.clone(),
                source,
            })?;
        serde_json::from_str(&text).map_err(|source| WordListError::Parse { path, source })
    }
}

impl WordSource for DirWordSource {
    async fn index(&self) -> Result<Vec<WordListDescriptor>, WordListError> {
        self.read_json(&self.index_file).await
    }

    async fn list(&self, descriptor: &WordListDescriptor) -> Result<Vec<WordEntry>, WordListError> {
        self.read_json(&descriptor.path).await
    }
}

/// Word lists held in memory, keyed by descriptor path
#[derive(Debug, Clone, Default)]
pub struct StaticWordSource {
    index: Vec<WordListDescriptor>,
    lists: HashMap<String, Vec<WordEntry>>,
}

impl StaticWordSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a list under `id`; its path is `<id>.json`
    pub fn with_list(
        mut self,
        id: &str,
        name: &str,
        description: &str,
        words: Vec<WordEntry>,
    ) -> Self {
        let path = format!("{id}.json");
        self.index.push(WordListDescriptor {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            path: path.clone(),
        });
        self.lists.insert(path, words);
        self
    }
}

impl WordSource for StaticWordSource {
    async fn index(&self) -> Result<Vec<WordListDescriptor>, WordListError> {
        Ok(self.index.clone())
    }

    async fn list(&self, descriptor: &WordListDescriptor) -> Result<Vec<WordEntry>, WordListError> {
        self.lists
            .get(&descriptor.path)
            .cloned()
            .ok_or_else(|| WordListError::Io {
                path: PathBuf::from(&descriptor.path),
                source: io::Error::new(io::ErrorKind::NotFound, "no such list"),
            })
    }
}

/// Load and concatenate the selected lists, in selection order.
///
/// Lists that are unknown or fail to load are skipped. Fails only when
/// nothing at all could be loaded.
pub async fn load_selected<S: WordSource>(
    source: &S,
    index: &[WordListDescriptor],
    selected_ids: &[String],
) -> Result<Vec<WordEntry>, WordListError> {
    let mut words = Vec::new();

    for id in selected_ids {
        let Some(descriptor) = index.iter().find(|list| &list.id == id) else {
            warn!(list = %id, "selected list is not in the index, skipping");
            continue;
        };

        match source.list(descriptor).await {
            Ok(entries) => {
                debug!(list = %id, count = entries.len(), "loaded word list");
                words.extend(entries);
            }
            Err(err) => {
                warn!(list = %descriptor.name, error = %err, "failed to load word list, skipping");
            }
        }
    }

    if words.is_empty() {
        return Err(WordListError::NoWords);
    }
    Ok(words)
}
