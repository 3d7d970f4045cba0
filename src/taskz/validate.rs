//! Field validation and normalization.
//!
//! Every function takes a raw candidate value and either returns the
//! normalized value to store or a [`ValidationError`] naming the violated
//! constraint. Nothing here touches storage; looking up whether an ID
//! actually exists is the store's job.

use thiserror::Error;

use crate::model::{
    Priority, Recurrence, RecurrencePattern, TaskId, DESCRIPTION_MAX_CHARS, TAG_MAX_CHARS,
    TITLE_MAX_CHARS,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title exceeds {} character limit", TITLE_MAX_CHARS)]
    TitleTooLong,

    #[error("Description exceeds {} character limit", DESCRIPTION_MAX_CHARS)]
    DescriptionTooLong,

    #[error("ID must be a positive integer")]
    InvalidId,

    #[error("Priority must be High, Medium, or Low")]
    InvalidPriority,

    #[error("Each tag must be 1-{} characters", TAG_MAX_CHARS)]
    TagTooLong,

    #[error("Recurrence pattern must be None, Daily, Weekly, or Monthly")]
    InvalidRecurrencePattern,

    #[error("Recurrence interval must be a positive integer")]
    InvalidRecurrenceInterval,
}

/// Accepts any non-blank title of at most 200 code points, unmodified.
pub fn title(raw: &str) -> Result<String, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if raw.chars().count() > TITLE_MAX_CHARS {
        return Err(ValidationError::TitleTooLong);
    }
    Ok(raw.to_string())
}

/// Accepts up to 1000 code points; an absent description is the empty string.
pub fn description(raw: Option<&str>) -> Result<String, ValidationError> {
    let raw = raw.unwrap_or("");
    if raw.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(ValidationError::DescriptionTooLong);
    }
    Ok(raw.to_string())
}

/// Parses a raw ID string. Anything that is not a positive integer is
/// rejected; whether the ID refers to a stored task is a separate question.
pub fn task_id(raw: &str) -> Result<TaskId, ValidationError> {
    raw.trim()
        .parse::<TaskId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(ValidationError::InvalidId)
}

/// Case-insensitive match against the three priority levels.
pub fn priority(raw: &str) -> Result<Priority, ValidationError> {
    match raw.trim().to_lowercase().as_str() {
        "high" => Ok(Priority::High),
        "medium" => Ok(Priority::Medium),
        "low" => Ok(Priority::Low),
        _ => Err(ValidationError::InvalidPriority),
    }
}

/// Parses a comma-separated tag string: trim, lowercase, drop empties,
/// de-duplicate keeping first occurrence. Any tag over 20 code points
/// rejects the whole input.
pub fn tags(raw: &str) -> Result<Vec<String>, ValidationError> {
    let mut tags: Vec<String> = Vec::new();
    for piece in raw.split(',') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        let tag = piece.to_lowercase();
        if tag.chars().count() > TAG_MAX_CHARS {
            return Err(ValidationError::TagTooLong);
        }
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    Ok(tags)
}

/// Parses a recurrence rule. "none" or a blank pattern clear the rule; the
/// interval defaults to 1 when omitted and must be at least 1.
pub fn recurrence(
    pattern: &str,
    interval: Option<u32>,
) -> Result<Option<Recurrence>, ValidationError> {
    let pattern = match pattern.trim().to_lowercase().as_str() {
        "" | "none" => return Ok(None),
        "daily" => RecurrencePattern::Daily,
        "weekly" => RecurrencePattern::Weekly,
        "monthly" => RecurrencePattern::Monthly,
        _ => return Err(ValidationError::InvalidRecurrencePattern),
    };
    let interval = interval.unwrap_or(1);
    if interval == 0 {
        return Err(ValidationError::InvalidRecurrenceInterval);
    }
    Ok(Some(Recurrence { pattern, interval }))
}
