//! Trip draft submission
//!
//! [`SubmissionCoordinator::submit`] runs one attempt end to end:
//! identity, re-validation, payload assembly, a single call to the trip
//! API and interpretation of the answer. At most one attempt runs at a time
//! per coordinator; the in-flight flag is released on every exit path.

use std::sync::atomic::{AtomicBool, Ordering};
use tourvisto_client::{CreateTripRequest, IdentityProvider, TripApi, created_trip_id};
use tourvisto_core::{TripDraft, ValidationOutcome, validate};
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

/// Shown for both generation and transport failures
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate trip, please try again later.";

/// Shown when no account is signed in
pub const NOT_AUTHENTICATED_MESSAGE: &str = "You must be signed in to create a trip";

/// Shown when a submission is already in flight
pub const IN_PROGRESS_MESSAGE: &str = "A trip is already being generated";

/// Result of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Trip created
    Created {
        /// New trip id
        id: String,
    },
    /// Draft failed validation, nothing was sent
    Rejected(ValidationOutcome),
    /// No signed-in account, nothing was sent
    NotAuthenticated,
    /// Another attempt is still running, nothing was sent
    SubmissionInProgress,
    /// Trip API answered without an id
    GenerationFailed {
        /// Payload that was sent
        payload: CreateTripRequest,
        /// Body the API answered with
        response: serde_json::Value,
    },
    /// Trip API could not be reached or answered with something other than JSON
    TransportFailed {
        /// Diagnostic detail, never shown to users
        reason: String,
    },
}

impl SubmissionOutcome {
    /// Message to surface on the form, `None` on success
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::Created { .. } => None,
            Self::Rejected(outcome) => outcome.message(),
            Self::NotAuthenticated => Some(NOT_AUTHENTICATED_MESSAGE),
            Self::SubmissionInProgress => Some(IN_PROGRESS_MESSAGE),
            Self::GenerationFailed { .. } | Self::TransportFailed { .. } => {
                Some(GENERATION_FAILED_MESSAGE)
            }
        }
    }

    /// Where to navigate after the attempt, `None` unless a trip was created
    pub fn redirect_target(&self) -> Option<String> {
        match self {
            Self::Created { id } => Some(format!("/trips/{id}")),
            _ => None,
        }
    }
}

/// Mutual-exclusion flag for in-flight submissions
#[derive(Debug, Default)]
pub struct LoadingFlag(AtomicBool);

impl LoadingFlag {
    /// Unset flag
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Whether an attempt currently holds the flag
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Set the flag unless it is already set
    pub fn try_acquire(&self) -> Option<LoadingGuard<'_>> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| LoadingGuard(&self.0))
    }
}

/// Clears the [`LoadingFlag`] when dropped
#[derive(Debug)]
pub struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Runs submission attempts for one form
#[derive(Debug, Default)]
pub struct SubmissionCoordinator {
    loading: LoadingFlag,
}

impl SubmissionCoordinator {
    /// Idle coordinator
    pub const fn new() -> Self {
        Self {
            loading: LoadingFlag::new(),
        }
    }

    /// Whether an attempt is in flight
    pub fn is_loading(&self) -> bool {
        self.loading.is_set()
    }

    /// Submit `draft` on behalf of the current user
    pub async fn submit(
        &self,
        draft: &TripDraft,
        identity: &dyn IdentityProvider,
        api: &dyn TripApi,
    ) -> SubmissionOutcome {
        let attempt = Uuid::new_v4();
        let span = info_span!("trip_submission", %attempt, country = %draft.country);

        let Some(_guard) = self.loading.try_acquire() else {
            warn!(%attempt, "Submission refused, another attempt is in flight");
            return SubmissionOutcome::SubmissionInProgress;
        };

        Self::run(draft, identity, api).instrument(span).await
    }

    async fn run(
        draft: &TripDraft,
        identity: &dyn IdentityProvider,
        api: &dyn TripApi,
    ) -> SubmissionOutcome {
        let user = match identity.current_user().await {
            Ok(user) if user.is_authenticated() => user,
            Ok(_) => {
                warn!("Identity has an empty id");
                return SubmissionOutcome::NotAuthenticated;
            }
            Err(e) => {
                warn!(error = %e, "Could not resolve the current user");
                return SubmissionOutcome::NotAuthenticated;
            }
        };

        let outcome = validate(draft);
        let number_of_days = match (outcome, draft.duration) {
            (ValidationOutcome::Valid, Some(days)) => days,
            (ValidationOutcome::Valid, None) => {
                return SubmissionOutcome::Rejected(ValidationOutcome::IncompleteFields);
            }
            (rejected, _) => {
                warn!(?rejected, "Draft failed validation");
                return SubmissionOutcome::Rejected(rejected);
            }
        };

        let payload = CreateTripRequest::from_draft(draft, number_of_days, user.id);

        match api.create_trip(&payload).await {
            Ok(response) => match created_trip_id(&response) {
                Some(id) => {
                    info!(trip_id = %id, "Trip created");
                    SubmissionOutcome::Created { id }
                }
                None => {
                    error!(%response, "Trip API answered without a trip id");
                    SubmissionOutcome::GenerationFailed { payload, response }
                }
            },
            Err(e) => {
                error!(error = %e, severity = ?e.severity(), "Trip API request failed");
                SubmissionOutcome::TransportFailed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
