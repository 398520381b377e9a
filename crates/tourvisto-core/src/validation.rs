//! Trip draft validation

use crate::types::TripDraft;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Allowed trip length in days
pub const DURATION_RANGE: RangeInclusive<i64> = 1..=10;

/// Result of checking a draft before submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// Every field is filled in and in bounds
    Valid,
    /// At least one field is empty or the duration was never entered
    IncompleteFields,
    /// Duration lies outside [`DURATION_RANGE`]
    DurationOutOfRange,
}

impl ValidationOutcome {
    /// Whether the draft may be submitted
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Message shown next to the form, `None` when valid
    #[must_use]
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::IncompleteFields => Some("Please fill in all fields"),
            Self::DurationOutOfRange => Some("Duration must be between 1 and 10 days"),
        }
    }
}

/// Check a draft for completeness and bounds.
///
/// Completeness is checked first, so a draft with empty fields reports
/// [`ValidationOutcome::IncompleteFields`] even when its duration is also
/// out of range.
#[must_use]
pub fn validate(draft: &TripDraft) -> ValidationOutcome {
    let text_fields = [
        &draft.country,
        &draft.interest,
        &draft.travel_style,
        &draft.budget,
        &draft.group_type,
    ];

    if text_fields.iter().any(|field| field.trim().is_empty()) {
        return ValidationOutcome::IncompleteFields;
    }

    match draft.duration {
        None => ValidationOutcome::IncompleteFields,
        Some(days) if !DURATION_RANGE.contains(&days) => ValidationOutcome::DurationOutOfRange,
        Some(_) => ValidationOutcome::Valid,
    }
}
