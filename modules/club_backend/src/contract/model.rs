//! Contract models for the club backend
//!
//! These are the value records exchanged with the backend canister. They carry
//! serde derives because their camelCase JSON form is the wire contract itself.
//! Nothing here is mutated locally; a changed entity is a new value.

use super::error::BackendError;
use serde::{Deserialize, Serialize};

/// Club identifier
pub type ClubId = u64;
/// Team identifier
pub type TeamId = u64;
/// Event identifier
pub type EventId = u64;
/// Chat message identifier
pub type MessageId = u64;
/// Chat thread identifier
pub type ThreadId = u64;
/// Announcement comment identifier
pub type CommentId = u64;
/// Notification identifier
pub type NotificationId = u64;

/// Nanoseconds since the Unix epoch, as reported by the backend
pub type TimestampNanos = i64;

/// Opaque caller identity issued by the identity subsystem
///
/// Only passed through; this crate never builds one from its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(candid::Principal);

impl Principal {
    /// Borrow the identity subsystem's representation
    pub fn as_inner(&self) -> &candid::Principal {
        &self.0
    }

    pub fn into_inner(self) -> candid::Principal {
        self.0
    }
}

impl From<candid::Principal> for Principal {
    fn from(value: candid::Principal) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

closed_tag_enum! {
    /// Application-level role of a caller
    pub enum UserRole {
        Admin => "admin",
        User => "user",
    }
}

closed_tag_enum! {
    /// Role of a member within a team
    pub enum TeamRole {
        TeamAdmin => "teamAdmin",
        Coach => "coach",
        Player => "player",
        Parent => "parent",
    }
}

closed_tag_enum! {
    /// Role of a member within a club
    pub enum ClubRole {
        ClubAdmin => "clubAdmin",
    }
}

closed_tag_enum! {
    /// Kind of scheduled event
    pub enum EventType {
        Game => "game",
        Training => "training",
        SocialEvent => "socialEvent",
    }
}

closed_tag_enum! {
    /// Repetition frequency of a recurring event
    pub enum RecurrenceFrequency {
        Daily => "daily",
        Weekly => "weekly",
        Monthly => "monthly",
        Custom => "custom",
    }
}

/// Self-description of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Reported by the backend, never computed locally
    pub is_profile_complete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    pub creator: Principal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    /// Owning club
    pub club_id: ClubId,
    pub name: String,
    pub creator: Principal,
}

/// Chat message; append-only on the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub thread_id: ThreadId,
    pub sender: Principal,
    pub text: String,
    pub timestamp: TimestampNanos,
}

/// Repetition rule attached to an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    pub frequency: RecurrenceFrequency,
    /// Number of `frequency` units between occurrences
    pub interval: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<TimestampNanos>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<u64>,
}

/// How a recurrence stops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurrenceEnd {
    /// Repeats indefinitely
    Never,
    /// Stops after the given timestamp
    Until(TimestampNanos),
    /// Stops after the given number of occurrences
    After(u64),
}

impl RecurrenceRule {
    /// Effective termination condition. An end date takes precedence over an
    /// occurrence count when a rule carries both.
    pub fn termination(&self) -> RecurrenceEnd {
        match (self.end_date, self.occurrences) {
            (Some(end), _) => RecurrenceEnd::Until(end),
            (None, Some(count)) => RecurrenceEnd::After(count),
            (None, None) => RecurrenceEnd::Never,
        }
    }
}

/// One duty roster slot on an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutyAssignment {
    /// Free-text role label (e.g. "canteen", "scorer")
    pub role: String,
    pub assignee: Principal,
}

/// Scheduled occurrence (game, training, social)
///
/// `start_time <= end_time` is expected but not enforced by the contract;
/// see [`crate::domain::validation::validate_event`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suburb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    pub start_time: TimestampNanos,
    pub end_time: TimestampNanos,
    pub club_id: Option<ClubId>,
    pub team_id: Option<TeamId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_rule: Option<RecurrenceRule>,
    pub event_type: EventType,
    /// Ordered role to assignee pairs
    pub duty_roster: Vec<DutyAssignment>,
}

impl Event {
    /// An event owned by neither a club nor a team
    pub fn is_global(&self) -> bool {
        self.club_id.is_none() && self.team_id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMembership {
    pub user: Principal,
    /// Order is irrelevant
    pub roles: Vec<TeamRole>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubMembership {
    pub user: Principal,
    pub roles: Vec<ClubRole>,
}

/// Asynchronous alert delivered to a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub kind: String,
    pub created_at: TimestampNanos,
    pub read: bool,
    /// Shape depends on `kind`; treat as opaque
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentReaction {
    pub comment_id: CommentId,
    pub user: Principal,
    pub reaction_type: String,
    pub timestamp: TimestampNanos,
}

/// Checkout line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub price_id: String,
    pub quantity: u32,
}

/// Decoded response of `createCheckoutSession`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Provider session identifier
    pub id: String,
    /// Redirect target for the buyer
    pub url: String,
}

impl CheckoutSession {
    /// Decode the JSON string returned by the backend. Extra fields are ignored.
    pub fn from_json(raw: &str) -> Result<Self, BackendError> {
        serde_json::from_str(raw).map_err(|e| BackendError::MalformedCheckoutSession {
            details: e.to_string(),
        })
    }
}
