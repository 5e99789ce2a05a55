//! Unwired client implementation - satisfies `BackendApi` without a transport
//!
//! Every call fails immediately with [`BackendError::Unwired`] naming the
//! operation, so an accidental real invocation is loud instead of hanging or
//! returning empty data.

use crate::contract::{
    BackendApi, BackendError, Club, ClubId, ClubMembership, ClubRole, CommentId, CommentReaction,
    Event, Message, Operation, Principal, ShoppingItem, Team, TeamId, TeamMembership, TeamRole,
    UserProfile,
};
use async_trait::async_trait;
use std::sync::Arc;

/// `BackendApi` with no canister bindings behind it
#[derive(Debug, Clone, Copy, Default)]
pub struct UnwiredBackend;

impl UnwiredBackend {
    pub fn new() -> Self {
        Self
    }
}

/// Build the backend actor. Until a transport is wired this is the unwired placeholder.
pub fn create_actor() -> Arc<dyn BackendApi> {
    Arc::new(UnwiredBackend::new())
}

fn unwired<T>(operation: Operation) -> Result<T, BackendError> {
    tracing::error!(operation = %operation, "backend operation invoked without canister bindings");
    Err(BackendError::Unwired { operation })
}

#[async_trait]
impl BackendApi for UnwiredBackend {
    async fn is_caller_admin(&self) -> Result<bool, BackendError> {
        unwired(Operation::IsCallerAdmin)
    }

    async fn get_caller_user_profile(&self) -> Result<Option<UserProfile>, BackendError> {
        unwired(Operation::GetCallerUserProfile)
    }

    async fn save_caller_user_profile(&self, _profile: UserProfile) -> Result<(), BackendError> {
        unwired(Operation::SaveCallerUserProfile)
    }

    async fn get_all_clubs(&self) -> Result<Vec<Club>, BackendError> {
        unwired(Operation::GetAllClubs)
    }

    async fn get_all_teams(&self) -> Result<Vec<Team>, BackendError> {
        unwired(Operation::GetAllTeams)
    }

    async fn get_teams_by_club_id(&self, _club_id: ClubId) -> Result<Vec<Team>, BackendError> {
        unwired(Operation::GetTeamsByClubId)
    }

    async fn get_club_memberships_by_club(
        &self,
        _club_id: ClubId,
    ) -> Result<Vec<ClubMembership>, BackendError> {
        unwired(Operation::GetClubMembershipsByClub)
    }

    async fn get_team_memberships_by_team(
        &self,
        _team_id: TeamId,
    ) -> Result<Vec<TeamMembership>, BackendError> {
        unwired(Operation::GetTeamMembershipsByTeam)
    }

    async fn add_team_membership(
        &self,
        _team_id: TeamId,
        _roles: &[TeamRole],
    ) -> Result<TeamMembership, BackendError> {
        unwired(Operation::AddTeamMembership)
    }

    async fn remove_team_member(
        &self,
        _team_id: TeamId,
        _user: Principal,
    ) -> Result<(), BackendError> {
        unwired(Operation::RemoveTeamMember)
    }

    async fn remove_team_role(
        &self,
        _team_id: TeamId,
        _user: Principal,
        _role: TeamRole,
    ) -> Result<(), BackendError> {
        unwired(Operation::RemoveTeamRole)
    }

    async fn manage_team_roles(
        &self,
        _team_id: TeamId,
        _user: Principal,
        _roles: &[TeamRole],
    ) -> Result<(), BackendError> {
        unwired(Operation::ManageTeamRoles)
    }

    async fn add_club_membership(
        &self,
        _club_id: ClubId,
        _roles: &[ClubRole],
    ) -> Result<ClubMembership, BackendError> {
        unwired(Operation::AddClubMembership)
    }

    async fn get_all_messages(&self) -> Result<Vec<Message>, BackendError> {
        unwired(Operation::GetAllMessages)
    }

    async fn get_all_events(&self) -> Result<Vec<Event>, BackendError> {
        unwired(Operation::GetAllEvents)
    }

    async fn get_comment_reactions(
        &self,
        _comment_id: CommentId,
    ) -> Result<Vec<CommentReaction>, BackendError> {
        unwired(Operation::GetCommentReactions)
    }

    async fn add_comment_reaction(
        &self,
        _comment_id: CommentId,
        _reaction_type: &str,
    ) -> Result<bool, BackendError> {
        unwired(Operation::AddCommentReaction)
    }

    async fn create_checkout_session(
        &self,
        _items: &[ShoppingItem],
        _success_url: &str,
        _cancel_url: &str,
    ) -> Result<String, BackendError> {
        unwired(Operation::CreateCheckoutSession)
    }
}
