//! Validation of contract entities and checkout inputs
//!
//! The contract states invariants it does not enforce; these checks enforce
//! them on the client side.

use crate::contract::{BackendError, Event, RecurrenceRule, ShoppingItem};
use url::Url;

/// Validate an event's temporal invariant, title and recurrence rule
pub fn validate_event(event: &Event) -> Result<(), BackendError> {
    if event.start_time > event.end_time {
        return Err(BackendError::validation(format!(
            "event {} starts at {} after it ends at {}",
            event.id, event.start_time, event.end_time
        )));
    }

    if event.title.trim().is_empty() {
        return Err(BackendError::validation(format!(
            "event {} has an empty title",
            event.id
        )));
    }

    if let Some(rule) = &event.recurrence_rule {
        validate_recurrence_rule(rule)?;
    }

    Ok(())
}

/// Validate a recurrence rule
///
/// At most one termination condition may be set.
pub fn validate_recurrence_rule(rule: &RecurrenceRule) -> Result<(), BackendError> {
    if rule.interval == 0 {
        return Err(BackendError::validation(
            "recurrence interval must be at least 1",
        ));
    }

    if rule.end_date.is_some() && rule.occurrences.is_some() {
        return Err(BackendError::validation(
            "recurrence rule cannot have both an end date and an occurrence count",
        ));
    }

    if rule.occurrences == Some(0) {
        return Err(BackendError::validation(
            "recurrence occurrence count must be at least 1",
        ));
    }

    Ok(())
}

/// Validate checkout line items
pub fn validate_shopping_items(items: &[ShoppingItem]) -> Result<(), BackendError> {
    if items.is_empty() {
        return Err(BackendError::validation("checkout requires at least one item"));
    }

    for item in items {
        if item.price_id.trim().is_empty() {
            return Err(BackendError::validation("shopping item has an empty price id"));
        }
        if item.quantity < 1 {
            return Err(BackendError::validation(format!(
                "shopping item '{}' must have a quantity of at least 1",
                item.price_id
            )));
        }
    }

    Ok(())
}

/// Validate a checkout redirect target: absolute http(s) URL
pub fn validate_redirect_url(raw: &str) -> Result<(), BackendError> {
    let url = Url::parse(raw).map_err(|e| {
        BackendError::validation(format!("invalid redirect URL '{}': {}", raw, e))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(BackendError::validation(format!(
            "redirect URL '{}' must use http or https, not '{}'",
            raw, other
        ))),
    }
}
