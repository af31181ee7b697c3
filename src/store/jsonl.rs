use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::{
    fs::{File, OpenOptions},
    io::AsyncWriteExt,
    sync::Mutex,
};
use tracing::debug;

use crate::curation::Fact;
use crate::store::{FactSink, StoreError, StoredFact};

/// Appends one JSON document per fact to a local file.
pub struct JsonlFactSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl JsonlFactSink {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FactSink for JsonlFactSink {
    async fn put(&self, fact: &Fact) -> Result<String, StoreError> {
        let stored = StoredFact::new(fact.clone());
        let mut line = serde_json::to_vec(&stored)?;
        line.push(b'\n');

        let mut file = self.file.lock().await;
        file.write_all(&line).await?;
        file.flush().await?;

        debug!(id = %stored.id, path = %self.path.display(), "Fact appended");
        Ok(stored.id)
    }
}
