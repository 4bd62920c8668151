//! Lead Form State
//!
//! Two views, form and success, with an in-flight `Pending` phase used by
//! variants that simulate network latency.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LeadError, Result};
use crate::field::{Field, LeadFields};
use crate::query;
use crate::tracking::TrackingParams;
use crate::validate::{FieldErrors, validate};

/// Where the form is in its lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormPhase {
    /// Accepting input
    #[default]
    Editing,
    /// Valid submission accepted, side effects not yet complete
    Pending,
    /// Success view is showing
    Success,
}

impl FormPhase {
    /// Whether the form (rather than the success card) is on screen
    pub const fn shows_form(self) -> bool {
        !matches!(self, Self::Success)
    }
}

/// A validated lead, snapshotted at submission time
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub fields: LeadFields,
    pub tracking: TrackingParams,
    pub submitted_at: DateTime<Utc>,
}

impl Lead {
    /// Query string carrying the tracking parameters present at load,
    /// followed by every form field (empty company name included)
    pub fn to_query(&self) -> String {
        query::encode(self.tracking.pairs().chain(self.fields.pairs()))
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.fields.first_name.trim(), self.fields.last_name.trim())
    }
}

/// Output of an accepted submit, handed to the submission handler
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub lead: Lead,
    pub query: String,
}

impl Submission {
    fn new(lead: Lead) -> Self {
        let query = lead.to_query();
        Self { lead, query }
    }
}

/// In-memory form model
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadForm {
    fields: LeadFields,
    errors: FieldErrors,
    tracking: TrackingParams,
    phase: FormPhase,
}

impl LeadForm {
    pub fn new(tracking: TrackingParams) -> Self {
        Self {
            tracking,
            ..Default::default()
        }
    }

    pub const fn fields(&self) -> &LeadFields {
        &self.fields
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Inline error message for a field, if any
    pub fn error_message(&self, field: Field) -> Option<String> {
        self.errors.get(field).map(ToString::to_string)
    }

    pub const fn tracking(&self) -> &TrackingParams {
        &self.tracking
    }

    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    pub const fn is_pending(&self) -> bool {
        matches!(self.phase, FormPhase::Pending)
    }

    pub const fn is_submitted(&self) -> bool {
        matches!(self.phase, FormPhase::Success)
    }

    /// Store a keystroke; clears that field's error only
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
        self.errors.remove(field);
    }

    /// Validate and, if clean, move to `Pending`
    ///
    /// Repeat submits while `Pending` are accepted.
    pub fn submit(&mut self) -> Result<Submission> {
        if self.phase == FormPhase::Success {
            return Err(LeadError::InvalidState("form already submitted"));
        }

        let errors = validate(&self.fields);
        if !errors.is_empty() {
            tracing::debug!(%errors, "lead form rejected");
            self.errors = errors.clone();
            return Err(LeadError::Validation(errors));
        }

        self.errors.clear();
        self.phase = FormPhase::Pending;

        let submission = Submission::new(Lead {
            fields: self.fields.clone(),
            tracking: self.tracking.clone(),
            submitted_at: Utc::now(),
        });
        tracing::info!(
            tracking_params = self.tracking.len(),
            has_company = !self.fields.company_name.is_empty(),
            "lead form accepted"
        );
        Ok(submission)
    }

    /// Flip to the success view once side effects are done
    pub fn confirm(&mut self) -> Result<()> {
        match self.phase {
            FormPhase::Pending => {
                self.phase = FormPhase::Success;
                Ok(())
            }
            FormPhase::Success => Ok(()),
            FormPhase::Editing => Err(LeadError::InvalidState("nothing to confirm")),
        }
    }

    /// Clear every field and error and return to the form view
    ///
    /// Tracking parameters are kept; they describe the visit, not the lead.
    pub fn reset(&mut self) {
        self.fields = LeadFields::new();
        self.errors.clear();
        self.phase = FormPhase::Editing;
    }
}
