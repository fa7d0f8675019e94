use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use crate::core::feed::types::JobEntry;

pub type EntryMap = BTreeMap<String, JobEntry>;

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache file {} is not accessible: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cache file {} is not valid json: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no cached entry with guid {0:?}")]
    UnknownGuid(String),
}

#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn overwrite(&self, entries: &[JobEntry]) -> Result<usize, CacheError> {
        let map: EntryMap = entries
            .iter()
            .map(|entry| (entry.guid.clone(), entry.clone()))
            .collect();

        let file = fs::File::create(&self.path).map_err(|source| self.io_error(source))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &map).map_err(|source| self.json_error(source))?;
        writer.flush().map_err(|source| self.io_error(source))?;

        tracing::info!(path = %self.path.display(), keys = map.len(), "cache written");
        Ok(map.len())
    }

    pub fn load(&self) -> Result<EntryMap, CacheError> {
        let file = fs::File::open(&self.path).map_err(|source| self.io_error(source))?;
        let map: EntryMap = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| self.json_error(source))?;
        tracing::debug!(path = %self.path.display(), keys = map.len(), "cache loaded");
        Ok(map)
    }

    pub fn lookup(&self, guid: &str) -> Result<JobEntry, CacheError> {
        self.load()?
            .remove(guid)
            .ok_or_else(|| CacheError::UnknownGuid(guid.to_string()))
    }

    fn io_error(&self, source: std::io::Error) -> CacheError {
        CacheError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn json_error(&self, source: serde_json::Error) -> CacheError {
        CacheError::Json {
            path: self.path.clone(),
            source,
        }
    }
}
