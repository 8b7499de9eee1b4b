//! Snapshot persistence for the event store.
//!
//! The whole store state is written as one JSON document after every
//! mutation. Unversioned documents (version 0) load unchanged.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EventDeckError, EventDeckResult};
use crate::event::Event;
use crate::rsvp::UserRsvp;

/// Fixed storage key; also the snapshot file stem.
pub const STORAGE_KEY: &str = "newcool-events-storage";

pub const SCHEMA_VERSION: u32 = 1;

/// Everything the store owns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreState {
    pub events: Vec<Event>,
    #[serde(rename = "userRSVPs")]
    pub user_rsvps: Vec<UserRsvp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub version: u32,
    pub state: StoreState,
}

impl Snapshot {
    pub fn new(state: StoreState) -> Self {
        Snapshot {
            version: SCHEMA_VERSION,
            state,
        }
    }

    pub fn to_json(&self) -> EventDeckResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and bring a snapshot up to `SCHEMA_VERSION`.
    pub fn from_json(json: &str) -> EventDeckResult<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        snapshot.migrate()
    }

    fn migrate(mut self) -> EventDeckResult<Self> {
        if self.version > SCHEMA_VERSION {
            return Err(EventDeckError::UnsupportedSchema {
                found: self.version,
                supported: SCHEMA_VERSION,
            });
        }
        // 0 -> 1: same layout, only the version marker was missing
        if self.version == 0 {
            self.version = 1;
        }
        Ok(self)
    }
}

/// Where the store keeps its snapshot.
pub trait SnapshotStorage {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> EventDeckResult<Option<Snapshot>>;
    fn save(&self, snapshot: &Snapshot) -> EventDeckResult<()>;
}

/// A JSON file named after `STORAGE_KEY` inside a data directory.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn in_dir(data_dir: &Path) -> Self {
        FileStorage {
            path: data_dir.join(format!("{STORAGE_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStorage for FileStorage {
    fn load(&self) -> EventDeckResult<Option<Snapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        Snapshot::from_json(&content).map(Some)
    }

    fn save(&self, snapshot: &Snapshot) -> EventDeckResult<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, snapshot.to_json()?)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

/// Keeps the serialized snapshot in memory.
#[derive(Default)]
pub struct MemoryStorage {
    json: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(json: &str) -> Self {
        MemoryStorage {
            json: RefCell::new(Some(json.to_string())),
        }
    }

    /// The last saved document, if any.
    pub fn json(&self) -> Option<String> {
        self.json.borrow().clone()
    }
}

impl SnapshotStorage for MemoryStorage {
    fn load(&self) -> EventDeckResult<Option<Snapshot>> {
        self.json
            .borrow()
            .as_deref()
            .map(Snapshot::from_json)
            .transpose()
    }

    fn save(&self, snapshot: &Snapshot) -> EventDeckResult<()> {
        *self.json.borrow_mut() = Some(snapshot.to_json()?);
        Ok(())
    }
}

// Lets callers keep a handle on a storage they hand to the store.
impl<S: SnapshotStorage + ?Sized> SnapshotStorage for std::rc::Rc<S> {
    fn load(&self) -> EventDeckResult<Option<Snapshot>> {
        (**self).load()
    }

    fn save(&self, snapshot: &Snapshot) -> EventDeckResult<()> {
        (**self).save(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_state;
    use chrono::{TimeZone, Utc};

    fn state() -> StoreState {
        demo_state(Utc.with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap())
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::in_dir(dir.path());
        assert!(storage.load().unwrap().is_none());

        let snapshot = Snapshot::new(state());
        storage.save(&snapshot).unwrap();

        assert!(storage.path().ends_with("newcool-events-storage.json"));
        assert_eq!(storage.load().unwrap(), Some(snapshot));
    }

    #[test]
    fn unversioned_snapshot_migrates() {
        let json = r#"{"state": {"events": [], "userRSVPs": []}}"#;
        let snapshot = Snapshot::from_json(json).unwrap();
        assert_eq!(snapshot.version, SCHEMA_VERSION);
        assert!(snapshot.state.events.is_empty());
    }

    #[test]
    fn newer_schema_is_rejected() {
        let json = r#"{"version": 99, "state": {"events": [], "userRSVPs": []}}"#;
        let err = Snapshot::from_json(json).unwrap_err();
        assert!(matches!(err, EventDeckError::UnsupportedSchema { found: 99, .. }));
    }

    #[test]
    fn serialized_field_names_are_camel_case() {
        let json = Snapshot::new(state()).to_json().unwrap();
        assert!(json.contains("\"userRSVPs\""));
        assert!(json.contains("\"currentAttendees\""));
        assert!(json.contains("\"type\": \"virtual\""));
        assert!(json.contains("\"office_hours\""));
    }
}
