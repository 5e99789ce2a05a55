//! Contract layer - public API of the club backend
//!
//! Entities, closed enumerations, the operation set and its errors.

#[macro_use]
mod tag;

pub mod client;
pub mod error;
pub mod model;
pub mod operation;

pub use client::BackendApi;
pub use error::{BackendError, UnknownTag};
pub use model::{
    CheckoutSession, Club, ClubId, ClubMembership, ClubRole, CommentId, CommentReaction,
    DutyAssignment, Event, EventId, EventType, Message, MessageId, Notification, NotificationId,
    Principal, RecurrenceEnd, RecurrenceFrequency, RecurrenceRule, ShoppingItem, Team, TeamId,
    TeamMembership, TeamRole, ThreadId, TimestampNanos, UserProfile, UserRole,
};
pub use operation::Operation;
