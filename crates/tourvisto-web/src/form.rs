//! Create-trip form state

use crate::submission::{SubmissionCoordinator, SubmissionOutcome};
use std::fmt;
use tourvisto_client::{IdentityProvider, TripApi};
use tourvisto_core::{Country, TripDraft, validate};
use tracing::{debug, warn};

/// Rejected field update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown form field: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

/// Holds the draft, the current error message and the loading flag
#[derive(Debug)]
pub struct TripForm {
    default_country: String,
    draft: TripDraft,
    error: Option<String>,
    coordinator: SubmissionCoordinator,
}

impl TripForm {
    /// Fresh form preselecting the first country
    pub fn new(countries: &[Country]) -> Self {
        let default_country = countries
            .first()
            .map(|c| c.value.clone())
            .unwrap_or_default();

        Self {
            draft: TripDraft::with_country(default_country.clone()),
            default_country,
            error: None,
            coordinator: SubmissionCoordinator::new(),
        }
    }

    /// Form restored from a submitted draft
    pub fn from_draft(draft: TripDraft) -> Self {
        Self {
            default_country: draft.country.clone(),
            draft,
            error: None,
            coordinator: SubmissionCoordinator::new(),
        }
    }

    /// Apply one field change.
    ///
    /// Empty values for the select fields are ignored. Duration text that is
    /// empty or not a whole number clears the duration.
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<(), UnknownField> {
        if key == "duration" {
            self.draft.duration = value.trim().parse().ok();
            return Ok(());
        }

        let slot = match key {
            "country" => &mut self.draft.country,
            "budget" => &mut self.draft.budget,
            "travelStyle" => &mut self.draft.travel_style,
            "groupType" => &mut self.draft.group_type,
            "interest" => &mut self.draft.interest,
            other => return Err(UnknownField(other.to_string())),
        };

        if value.is_empty() {
            debug!(key, "Ignoring empty selection");
        } else {
            *slot = value.to_string();
        }
        Ok(())
    }

    /// Copy of the current draft
    pub fn snapshot(&self) -> TripDraft {
        self.draft.clone()
    }

    /// Message from the last submission, if it failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a submission is in flight
    pub fn is_loading(&self) -> bool {
        self.coordinator.is_loading()
    }

    /// Validate and submit the draft.
    ///
    /// On success the draft is discarded and a fresh one takes its place.
    /// On failure the draft is kept and the error message stored.
    pub async fn submit(
        &mut self,
        identity: &dyn IdentityProvider,
        api: &dyn TripApi,
    ) -> SubmissionOutcome {
        self.error = None;

        let checked = validate(&self.draft);
        if !checked.is_valid() {
            warn!(outcome = ?checked, "Form rejected before submission");
            let outcome = SubmissionOutcome::Rejected(checked);
            self.error = outcome.user_message().map(str::to_string);
            return outcome;
        }

        let draft = self.snapshot();
        let outcome = self.coordinator.submit(&draft, identity, api).await;

        match outcome.user_message() {
            Some(message) => self.error = Some(message.to_string()),
            None => self.draft = TripDraft::with_country(self.default_country.clone()),
        }
        outcome
    }
}
