//! Keyed record persistence.
//!
//! The engine hands every recompute to a [`RecordStore`] as a partial update.
//! [`MemoryStore`] backs tests and one-shot runs; [`JsonFileStore`] keeps one
//! pretty-printed JSON file per record.

use crate::error::{JudgeError, JudgeResult};
use crate::record::{RecordPatch, ScoreRecord};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub trait RecordStore {
    /// Reads a record, or `None` if it was never written.
    fn read(&self, id: &str) -> JudgeResult<Option<ScoreRecord>>;

    /// Merges `patch` into the stored record, creating it if missing.
    fn write(&mut self, id: &str, patch: &RecordPatch) -> JudgeResult<()>;
}

fn check_id(id: &str) -> JudgeResult<()> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(JudgeError::InvalidInput(format!("record id '{}'", id)))
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, ScoreRecord>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `write` calls accepted so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn insert(&mut self, id: &str, record: ScoreRecord) {
        self.records.insert(id.to_string(), record);
    }
}

impl RecordStore for MemoryStore {
    fn read(&self, id: &str) -> JudgeResult<Option<ScoreRecord>> {
        check_id(id)?;
        Ok(self.records.get(id).copied())
    }

    fn write(&mut self, id: &str, patch: &RecordPatch) -> JudgeResult<()> {
        check_id(id)?;
        self.records
            .entry(id.to_string())
            .or_default()
            .apply_patch(patch);
        self.writes += 1;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}

impl RecordStore for JsonFileStore {
    fn read(&self, id: &str) -> JudgeResult<Option<ScoreRecord>> {
        check_id(id)?;
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(None);
        }
        let file = File::open(&path)?;
        let record = serde_json::from_reader(BufReader::new(file))?;
        Ok(Some(record))
    }

    fn write(&mut self, id: &str, patch: &RecordPatch) -> JudgeResult<()> {
        let mut record = self.read(id)?.unwrap_or_default();
        record.apply_patch(patch);

        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(id);
        let tmp = path.with_extension("json.tmp");
        {
            let mut writer = BufWriter::new(File::create(&tmp)?);
            serde_json::to_writer_pretty(&mut writer, &record)?;
            writer.flush()?;
        }
        fs::rename(&tmp, &path)?;

        debug!(
            "Stored {} ({} fields) at {}",
            id,
            patch.changed_fields().len(),
            path.display()
        );
        Ok(())
    }
}
