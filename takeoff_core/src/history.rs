//! # Calculation History
//!
//! The data shape the persistence collaborator round-trips: the *raw*
//! calculation request (not the computed result), keyed by id and carrying
//! the owning user and a creation timestamp. Results are recomputed on
//! retrieval; the engine is pure, so re-running is free and the stored
//! document stays small.
//!
//! Actual storage (database, files) is out of scope; this module pins the
//! record shape so a stored request deserializes and re-estimates
//! identically after a round-trip.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::building::CalculationRequest;

/// One saved calculation: the raw request plus ownership metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCalculation {
    /// Record id
    pub id: Uuid,

    /// Owning user
    pub user_id: String,

    /// When the calculation was saved
    pub created: DateTime<Utc>,

    /// The raw request, exactly as submitted
    pub request: CalculationRequest,
}

/// In-memory collection of saved calculations, keyed by record id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationHistory {
    entries: HashMap<Uuid, SavedCalculation>,
}

impl CalculationHistory {
    pub fn new() -> Self {
        CalculationHistory::default()
    }

    /// Save a request for a user. Returns the assigned record id.
    pub fn save(&mut self, user_id: impl Into<String>, request: CalculationRequest) -> Uuid {
        let id = Uuid::new_v4();
        self.entries.insert(
            id,
            SavedCalculation {
                id,
                user_id: user_id.into(),
                created: Utc::now(),
                request,
            },
        );
        id
    }

    /// Get a saved calculation by id.
    pub fn get(&self, id: &Uuid) -> Option<&SavedCalculation> {
        self.entries.get(id)
    }

    /// Remove a saved calculation by id, returning it if it existed.
    pub fn remove(&mut self, id: &Uuid) -> Option<SavedCalculation> {
        self.entries.remove(id)
    }

    /// All calculations saved by a user, newest first.
    pub fn for_user(&self, user_id: &str) -> Vec<&SavedCalculation> {
        let mut entries: Vec<&SavedCalculation> = self
            .entries
            .values()
            .filter(|e| e.user_id == user_id)
            .collect();
        entries.sort_by(|a, b| b.created.cmp(&a.created));
        entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
