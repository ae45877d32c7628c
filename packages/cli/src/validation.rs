// ABOUTME: Input validation for CLI-built requests
// ABOUTME: Mirrors the backend's field limits so bad input fails before any request

use std::ops::RangeInclusive;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use svara_tags::TagCreate;
use svara_tasks::{TaskCreate, TaskUpdate};
use thiserror::Error;

pub const MAX_TITLE_LENGTH: usize = 255;
pub const MAX_TAG_NAME_LENGTH: usize = 100;
pub const TODAY_RANK_RANGE: RangeInclusive<i32> = 1..=3;

/// Validation errors for request data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub fn validate_task_create(data: &TaskCreate) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_title(&data.title, &mut errors);

    if let Some(rank) = data.today_rank {
        check_today_rank(rank, &mut errors);
    }

    errors
}

pub fn validate_task_update(data: &TaskUpdate) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if data.is_empty() {
        errors.push(ValidationError::new("update", "Nothing to change"));
        return errors;
    }

    if let Some(ref title) = data.title {
        check_title(title, &mut errors);
    }

    if let Some(Some(rank)) = data.today_rank {
        check_today_rank(rank, &mut errors);
    }

    errors
}

pub fn validate_tag_create(data: &TagCreate) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let name = data.name.trim();

    if name.is_empty() {
        errors.push(ValidationError::new("name", "Tag name is required"));
    } else if name.chars().count() > MAX_TAG_NAME_LENGTH {
        errors.push(ValidationError::new(
            "name",
            format!("Tag name cannot exceed {} characters", MAX_TAG_NAME_LENGTH),
        ));
    }

    errors
}

/// Turns a list of validation errors into a single error, if there are any
pub fn ensure_valid(errors: Vec<ValidationError>) -> anyhow::Result<()> {
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    anyhow::bail!("Invalid input: {}", message)
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM[:SS]` (or with a space) and
/// RFC 3339. Naive inputs are sent as `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_due_date(input: &str) -> Result<String, ValidationError> {
    let value = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.to_rfc3339());
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, pattern) {
            return Ok(dt.format("%Y-%m-%dT%H:%M:%S").to_string());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).format("%Y-%m-%dT%H:%M:%S").to_string());
    }

    Err(ValidationError::new(
        "due",
        format!(
            "Expected YYYY-MM-DD, YYYY-MM-DDTHH:MM[:SS] or RFC 3339, got '{}'",
            input
        ),
    ))
}

fn check_title(title: &str, errors: &mut Vec<ValidationError>) {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        errors.push(ValidationError::new("title", "Task title is required"));
    } else if trimmed.chars().count() > MAX_TITLE_LENGTH {
        errors.push(ValidationError::new(
            "title",
            format!("Task title cannot exceed {} characters", MAX_TITLE_LENGTH),
        ));
    }
}

fn check_today_rank(rank: i32, errors: &mut Vec<ValidationError>) {
    if !TODAY_RANK_RANGE.contains(&rank) {
        errors.push(ValidationError::new(
            "today_rank",
            format!(
                "Today rank must be between {} and {}",
                TODAY_RANK_RANGE.start(),
                TODAY_RANK_RANGE.end()
            ),
        ));
    }
}
