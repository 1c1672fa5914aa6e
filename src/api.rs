use crate::config::{PanelSettings, SessionParams};
use crate::error::{JudgeError, JudgeResult};
use crate::record::{Edit, NumericField, RecordPatch, ScoreRecord};
use crate::scorer::consistency::{self, ConsistencyResult, ConsistencyState};
use crate::scorer::engine;
use crate::store::{JsonFileStore, MemoryStore, RecordStore};
use tracing::{debug, info};

/// Read-only view of a session handed to reports.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSummary {
    pub id: String,
    pub record: ScoreRecord,
    pub consistency: ConsistencyResult,
}

/// Owns one record and its store; the adapter between UI edits and the engine.
///
/// Every accepted edit is written back as a partial update. Callers serialize
/// access: a session assumes nothing else writes the same record meanwhile.
pub struct ScoringSession<S: RecordStore> {
    store: S,
    id: String,
    record: ScoreRecord,
}

impl<S: RecordStore> ScoringSession<S> {
    /// Loads `id` from `store`, creating it for `params` if absent, and applies
    /// the first-load element-group default. With `params.existing` a missing
    /// record is an error instead.
    pub fn open(mut store: S, params: &SessionParams, settings: &PanelSettings) -> JudgeResult<Self> {
        let id = params.record.clone();

        let mut record = match store.read(&id)? {
            Some(existing) => {
                info!(
                    "Opened record '{}' ({} {})",
                    id, existing.discipline, existing.event
                );
                existing
            }
            None if params.existing => return Err(JudgeError::UnknownRecord(id)),
            None => {
                info!(
                    "Creating record '{}' ({} {})",
                    id, params.discipline, params.event
                );
                let fresh = ScoreRecord::new(params.discipline, params.event);
                store.write(&id, &RecordPatch::full(&fresh))?;
                fresh
            }
        };

        settings.validate(record.discipline, record.event)?;
        let patch = engine::bootstrap_groups(&mut record, settings.bootstrap_group_value);
        if !patch.is_empty() {
            store.write(&id, &patch)?;
        }

        Ok(Self { store, id, record })
    }

    pub fn apply(&mut self, edit: Edit) -> JudgeResult<&ScoreRecord> {
        let patch = engine::apply_edit(&mut self.record, edit)?;
        debug!("{:?} -> {:?}", edit, patch.changed_fields());
        if !patch.is_empty() {
            self.store.write(&self.id, &patch)?;
        }
        Ok(&self.record)
    }

    /// Parses a raw text edit for `field`. Invalid text keeps the previous value.
    pub fn apply_text(&mut self, field: NumericField, raw: &str) -> JudgeResult<&ScoreRecord> {
        let edit = Edit::from_text(field, raw)?;
        self.apply(edit)
    }

    pub fn record(&self) -> &ScoreRecord {
        &self.record
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn consistency(&self) -> ConsistencyState {
        self.record.consistency
    }

    /// Consistency with the resolved deduction interval.
    pub fn consistency_detail(&self) -> ConsistencyResult {
        consistency::evaluate(self.record.score.execution_score, self.record.competition.e)
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary {
            id: self.id.clone(),
            record: self.record,
            consistency: self.consistency_detail(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

/// Session over whichever store `params` selects.
pub enum AnySession {
    Memory(ScoringSession<MemoryStore>),
    File(ScoringSession<JsonFileStore>),
}

impl AnySession {
    pub fn open(params: &SessionParams, settings: &PanelSettings) -> JudgeResult<Self> {
        match &params.store_dir {
            Some(dir) => Ok(Self::File(ScoringSession::open(
                JsonFileStore::new(dir),
                params,
                settings,
            )?)),
            None => Ok(Self::Memory(ScoringSession::open(
                MemoryStore::new(),
                params,
                settings,
            )?)),
        }
    }

    pub fn apply(&mut self, edit: Edit) -> JudgeResult<&ScoreRecord> {
        match self {
            Self::Memory(s) => s.apply(edit),
            Self::File(s) => s.apply(edit),
        }
    }

    pub fn record(&self) -> &ScoreRecord {
        match self {
            Self::Memory(s) => s.record(),
            Self::File(s) => s.record(),
        }
    }

    pub fn summary(&self) -> ScoreSummary {
        match self {
            Self::Memory(s) => s.summary(),
            Self::File(s) => s.summary(),
        }
    }
}
