//! Candidate profile store — a flat JSON file keyed by email address.
//!
//! Whole-file rewrite on every put; single-process, single-writer by
//! construction. A missing or unreadable backing file degrades to an empty
//! store, and a failed flush keeps the in-memory copy updated.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::models::candidate::CandidateProfile;

pub struct ProfileStore {
    path: PathBuf,
    records: BTreeMap<String, CandidateProfile>,
}

impl ProfileStore {
    /// Opens the store, loading every record from the backing file.
    /// Never fails: absent file → empty store; unparsable file → warn and
    /// start empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(records) => records,
                Err(e) => {
                    warn!(
                        "candidate store at {} is corrupted or empty ({e}); starting fresh",
                        path.display()
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!(
                    "candidate store at {} could not be read ({e}); starting fresh",
                    path.display()
                );
                BTreeMap::new()
            }
        };
        Self { path, records }
    }

    /// Inserts or overwrites the record for `email` and rewrites the backing
    /// file. A write failure is logged and otherwise ignored — the in-memory
    /// record stays.
    pub fn put(&mut self, email: String, profile: CandidateProfile) {
        self.records.insert(email.clone(), profile);
        match self.flush() {
            Ok(()) => info!("data for {email} saved to {}", self.path.display()),
            Err(e) => error!("error saving data for {email}: {e:#}"),
        }
    }

    /// Every stored record, keyed by email.
    pub fn all(&self) -> &BTreeMap<String, CandidateProfile> {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.records)
            .context("failed to serialize candidate records")?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}
