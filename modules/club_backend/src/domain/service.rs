//! Domain service - orchestration on top of the backend contract

use crate::config::Config;
use crate::contract::{
    BackendApi, BackendError, CheckoutSession, CommentId, Event, Principal, ShoppingItem, TeamId,
    TeamRole,
};
use super::validation;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Result of adding a comment reaction
///
/// The backend only reports whether state changed; a no-op is not
/// necessarily a duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionOutcome {
    /// The reaction was recorded
    Applied,
    /// The backend left state unchanged
    Unchanged,
}

impl From<bool> for ReactionOutcome {
    fn from(changed: bool) -> Self {
        if changed {
            Self::Applied
        } else {
            Self::Unchanged
        }
    }
}

/// Domain service over a `BackendApi` implementation
pub struct BackendService {
    client: Arc<dyn BackendApi>,
    strict_event_validation: bool,
}

impl BackendService {
    /// Create a new service with strict event validation
    pub fn new(client: Arc<dyn BackendApi>) -> Self {
        Self {
            client,
            strict_event_validation: true,
        }
    }

    /// Create a service configured from `config`
    pub fn with_config(client: Arc<dyn BackendApi>, config: &Config) -> Self {
        Self {
            client,
            strict_event_validation: config.strict_event_validation,
        }
    }

    /// Underlying contract, for operations the service does not wrap
    pub fn client(&self) -> &Arc<dyn BackendApi> {
        &self.client
    }

    /// Validate the basket and redirect targets, then start a checkout session
    pub async fn checkout(
        &self,
        items: &[ShoppingItem],
        success_url: &str,
        cancel_url: &str,
    ) -> Result<CheckoutSession, BackendError> {
        validation::validate_shopping_items(items)?;
        validation::validate_redirect_url(success_url)?;
        validation::validate_redirect_url(cancel_url)?;

        let raw = self
            .client
            .create_checkout_session(items, success_url, cancel_url)
            .await?;
        let session = CheckoutSession::from_json(&raw)?;

        tracing::info!(session_id = %session.id, items = items.len(), "checkout session created");
        Ok(session)
    }

    /// All events. In strict mode events breaking the entity invariants are dropped.
    pub async fn events(&self) -> Result<Vec<Event>, BackendError> {
        let events = self.client.get_all_events().await?;
        if !self.strict_event_validation {
            return Ok(events);
        }

        let total = events.len();
        let valid: Vec<Event> = events
            .into_iter()
            .filter(|event| match validation::validate_event(event) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(event_id = event.id, error = %e, "dropping invalid event");
                    false
                }
            })
            .collect();

        if valid.len() != total {
            tracing::debug!(total, kept = valid.len(), "filtered events from backend");
        }
        Ok(valid)
    }

    /// Add a reaction for the caller
    pub async fn react(
        &self,
        comment_id: CommentId,
        reaction_type: &str,
    ) -> Result<ReactionOutcome, BackendError> {
        if reaction_type.trim().is_empty() {
            return Err(BackendError::validation("reaction type cannot be empty"));
        }

        let changed = self
            .client
            .add_comment_reaction(comment_id, reaction_type)
            .await?;
        Ok(changed.into())
    }

    /// Replace a member's role set; duplicates are collapsed
    pub async fn set_team_roles(
        &self,
        team_id: TeamId,
        user: Principal,
        roles: &[TeamRole],
    ) -> Result<(), BackendError> {
        let roles: Vec<TeamRole> = roles
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        tracing::debug!(team_id, %user, roles = roles.len(), "replacing team roles");
        self.client.manage_team_roles(team_id, user, &roles).await
    }
}
