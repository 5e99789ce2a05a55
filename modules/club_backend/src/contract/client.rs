//! Backend client trait
//!
//! The full operation set of the club backend canister. A real transport and
//! the unwired placeholder both implement it; callers only see this trait.
//! No method carries a timeout; cancellation belongs to the caller.

use super::{
    error::BackendError,
    model::{
        Club, ClubId, ClubMembership, ClubRole, CommentId, CommentReaction, Event, Message,
        Principal, ShoppingItem, Team, TeamId, TeamMembership, TeamRole, UserProfile,
    },
};
use async_trait::async_trait;

/// Club backend API
#[async_trait]
pub trait BackendApi: Send + Sync {
    // ===== Users / auth =====

    /// Whether the caller holds the app-level admin role
    async fn is_caller_admin(&self) -> Result<bool, BackendError>;

    /// Caller's own profile, `None` when nothing has been saved yet
    async fn get_caller_user_profile(&self) -> Result<Option<UserProfile>, BackendError>;

    /// Replace the caller's profile as a whole
    async fn save_caller_user_profile(&self, profile: UserProfile) -> Result<(), BackendError>;

    // ===== Directory =====

    async fn get_all_clubs(&self) -> Result<Vec<Club>, BackendError>;

    async fn get_all_teams(&self) -> Result<Vec<Team>, BackendError>;

    /// Teams owned by one club
    async fn get_teams_by_club_id(&self, club_id: ClubId) -> Result<Vec<Team>, BackendError>;

    // ===== Memberships =====

    async fn get_club_memberships_by_club(
        &self,
        club_id: ClubId,
    ) -> Result<Vec<ClubMembership>, BackendError>;

    async fn get_team_memberships_by_team(
        &self,
        team_id: TeamId,
    ) -> Result<Vec<TeamMembership>, BackendError>;

    /// Add the caller to a team with an initial role set
    async fn add_team_membership(
        &self,
        team_id: TeamId,
        roles: &[TeamRole],
    ) -> Result<TeamMembership, BackendError>;

    /// Remove a member and all of their roles
    async fn remove_team_member(&self, team_id: TeamId, user: Principal)
        -> Result<(), BackendError>;

    /// Remove a single role, keeping the member's other roles
    async fn remove_team_role(
        &self,
        team_id: TeamId,
        user: Principal,
        role: TeamRole,
    ) -> Result<(), BackendError>;

    /// Replace a member's full role set
    async fn manage_team_roles(
        &self,
        team_id: TeamId,
        user: Principal,
        roles: &[TeamRole],
    ) -> Result<(), BackendError>;

    /// Add the caller to a club with an initial role set
    async fn add_club_membership(
        &self,
        club_id: ClubId,
        roles: &[ClubRole],
    ) -> Result<ClubMembership, BackendError>;

    // ===== Messages / events =====

    async fn get_all_messages(&self) -> Result<Vec<Message>, BackendError>;

    /// Every event, unfiltered and unpaginated
    async fn get_all_events(&self) -> Result<Vec<Event>, BackendError>;

    // ===== Comment reactions =====

    async fn get_comment_reactions(
        &self,
        comment_id: CommentId,
    ) -> Result<Vec<CommentReaction>, BackendError>;

    /// Add a reaction for the caller. `true` when state changed, `false` for a no-op.
    async fn add_comment_reaction(
        &self,
        comment_id: CommentId,
        reaction_type: &str,
    ) -> Result<bool, BackendError>;

    // ===== Checkout =====

    /// Start a checkout session. Returns a JSON string holding at least `id`
    /// and `url`; decode it with [`super::model::CheckoutSession::from_json`].
    async fn create_checkout_session(
        &self,
        items: &[ShoppingItem],
        success_url: &str,
        cancel_url: &str,
    ) -> Result<String, BackendError>;
}
