//! File-based persistence for the document store
//!
//! One JSON-lines file per collection under the data directory:
//!
//! ```text
//! data/
//! ├── properties.jsonl
//! ├── blogs.jsonl
//! └── ...
//! ```
//!
//! Each line is `{"id": "...", "doc": {...}}`. Collections are loaded
//! whole on open and rewritten whole on every mutation (write-through);
//! the rewrite goes to a temp file first and is renamed into place.

use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{Document, StoreError, StoreResult};

#[derive(Serialize, Deserialize)]
struct Record {
    id: String,
    doc: Document,
}

/// File storage engine for collections
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    /// Open (and create if needed) the storage directory
    pub fn open(base_path: impl AsRef<Path>) -> StoreResult<Self> {
        let base_path = base_path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).map_err(|e| {
            StoreError::Persistence(format!(
                "Failed to create data directory {}: {}",
                base_path.display(),
                e
            ))
        })?;
        Ok(Self { base_path })
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.base_path.join(format!("{collection}.jsonl"))
    }

    /// Load every collection file found in the data directory
    pub fn load_all(&self) -> StoreResult<HashMap<String, HashMap<String, Document>>> {
        let mut collections = HashMap::new();

        for entry in fs::read_dir(&self.base_path)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("jsonl") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            collections.insert(name.to_string(), self.load_collection(&path)?);
        }

        log::info!(
            "Loaded {} collection(s) from {}",
            collections.len(),
            self.base_path.display()
        );
        Ok(collections)
    }

    fn load_collection(&self, path: &Path) -> StoreResult<HashMap<String, Document>> {
        let file = fs::File::open(path)?;
        let reader = BufReader::new(file);
        let mut docs = HashMap::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: Record = serde_json::from_str(&line).map_err(|e| {
                StoreError::Persistence(format!(
                    "Corrupt record at {}:{}: {}",
                    path.display(),
                    line_no + 1,
                    e
                ))
            })?;
            docs.insert(record.id, record.doc);
        }

        Ok(docs)
    }

    /// Rewrite one collection file from the given snapshot
    pub fn persist_collection(
        &self,
        collection: &str,
        docs: &[(String, Document)],
    ) -> StoreResult<()> {
        let path = self.collection_path(collection);
        let tmp_path = self.base_path.join(format!("{collection}.jsonl.tmp"));

        {
            let file = fs::File::create(&tmp_path)?;
            let mut writer = BufWriter::new(file);
            for (id, doc) in docs {
                let record = Record { id: id.clone(), doc: doc.clone() };
                let line = serde_json::to_string(&record)?;
                writer.write_all(line.as_bytes())?;
                writer.write_all(b"\n")?;
            }
            writer.flush()?;
        }

        fs::rename(&tmp_path, &path).map_err(|e| {
            StoreError::Persistence(format!(
                "Failed to replace collection file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }
}
