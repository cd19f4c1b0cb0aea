use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::StoreError;
use crate::types::incident::{Incident, Severity};

/// A validated incident that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIncident {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub reported_at: String,
    pub tags: Option<Vec<String>>,
}

#[derive(Default)]
struct StoreInner {
    incidents: Vec<Incident>,
    last_id: u64,
}

/// Session-lifetime, append-only incident list.
///
/// Shared with the command layer as managed state, so access goes through a
/// mutex even though every mutation is a single short append.
#[derive(Default)]
pub struct IncidentStore {
    inner: Mutex<StoreInner>,
}

impl IncidentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `incidents`. Fails on duplicate ids.
    pub fn seeded(incidents: Vec<Incident>) -> Result<Self, StoreError> {
        let mut inner = StoreInner::default();
        for incident in incidents {
            if inner.incidents.iter().any(|i| i.id == incident.id) {
                return Err(StoreError::DuplicateId(incident.id));
            }
            inner.last_id = inner.last_id.max(incident.id);
            inner.incidents.push(incident);
        }
        info!(count = inner.incidents.len(), "Incident store seeded");
        Ok(Self {
            inner: Mutex::new(inner),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>, StoreError> {
        self.inner.lock().map_err(|_| StoreError::Poisoned)
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.incidents.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.lock()?.incidents.is_empty())
    }

    /// Copy of the full list in insertion order.
    pub fn snapshot(&self) -> Result<Vec<Incident>, StoreError> {
        Ok(self.lock()?.incidents.clone())
    }

    pub fn get(&self, id: u64) -> Result<Option<Incident>, StoreError> {
        Ok(self.lock()?.incidents.iter().find(|i| i.id == id).cloned())
    }

    /// Run `f` against the list without cloning it.
    pub fn with_incidents<T>(&self, f: impl FnOnce(&[Incident]) -> T) -> Result<T, StoreError> {
        let inner = self.lock()?;
        Ok(f(&inner.incidents))
    }

    /// Assign an id and append. Ids are the creation time in milliseconds,
    /// bumped past the last assigned id so two submissions in the same
    /// millisecond still get distinct ids.
    pub(crate) fn insert(
        &self,
        new: NewIncident,
        now: DateTime<Utc>,
    ) -> Result<Incident, StoreError> {
        let mut inner = self.lock()?;
        let stamp = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let next = inner.last_id.checked_add(1).ok_or(StoreError::IdsExhausted)?;
        let id = stamp.max(next);
        let incident = Incident {
            id,
            title: new.title,
            description: new.description,
            severity: new.severity,
            reported_at: new.reported_at,
            tags: new.tags,
        };
        inner.last_id = id;
        inner.incidents.push(incident.clone());
        Ok(incident)
    }
}
