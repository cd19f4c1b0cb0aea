use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::{SubmitError, ValidationError};
use crate::store::{IncidentStore, NewIncident};
use crate::tags;
use crate::timestamp;
use crate::types::incident::{Incident, IncidentDraft};

/// Check and normalize a draft. Title is checked before description.
pub fn validate(draft: &IncidentDraft, now: DateTime<Utc>) -> Result<NewIncident, ValidationError> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    let description = draft.description.trim();
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }

    let reported_at = match draft.reported_at.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => timestamp::parse(raw)
            .map(timestamp::format)
            .ok_or_else(|| ValidationError::InvalidTimestamp(raw.to_string()))?,
        _ => timestamp::format(now),
    };

    let tags = tags::normalize(&draft.tags);
    Ok(NewIncident {
        title: title.to_string(),
        description: description.to_string(),
        severity: draft.severity,
        reported_at,
        tags: if tags.is_empty() { None } else { Some(tags) },
    })
}

/// Validate `draft` and append it to `store`. The only path that adds
/// incidents after startup.
pub fn submit(
    store: &IncidentStore,
    draft: &IncidentDraft,
    now: DateTime<Utc>,
) -> Result<Incident, SubmitError> {
    let new = validate(draft, now).inspect_err(|e| {
        debug!(reason = %e, "Incident submission rejected");
    })?;
    let incident = store.insert(new, now)?;
    info!(
        id = incident.id,
        severity = incident.severity.as_str(),
        tags = incident.tag_list().len(),
        "Incident reported"
    );
    Ok(incident)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Invalid {
        message: String,
    },
}

/// The report form: editable fields plus the error banner state.
#[derive(Debug, Clone, Default)]
pub struct IncidentForm {
    pub draft: IncidentDraft,
    state: FormState,
}

impl IncidentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            FormState::Idle => None,
            FormState::Invalid { message } => Some(message.as_str()),
        }
    }

    pub fn add_tag(&mut self, tag: &str) -> bool {
        tags::add_tag(&mut self.draft.tags, tag)
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        tags::remove_tag(&mut self.draft.tags, tag)
    }

    /// On success the fields reset and the form returns to `Idle`. On a
    /// validation failure the fields are kept for correction.
    pub fn submit(
        &mut self,
        store: &IncidentStore,
        now: DateTime<Utc>,
    ) -> Result<Incident, SubmitError> {
        match submit(store, &self.draft, now) {
            Ok(incident) => {
                self.draft = IncidentDraft::default();
                self.state = FormState::Idle;
                Ok(incident)
            }
            Err(SubmitError::Validation(e)) => {
                self.state = FormState::Invalid {
                    message: e.to_string(),
                };
                Err(SubmitError::Validation(e))
            }
            Err(e) => Err(e),
        }
    }
}
