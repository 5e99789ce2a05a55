//! Common test utilities: in-memory backend and fixture identities

#![allow(dead_code)]

use async_trait::async_trait;
use club_backend::contract::*;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Deterministic principal for fixtures
pub fn principal(id: u8) -> Principal {
    candid::Principal::from_slice(&[id; 29]).into()
}

/// Fixture identities
#[derive(Debug, Clone)]
pub struct TestPeople {
    pub admin: Principal,
    pub coach: Principal,
    pub parent: Principal,
}

impl TestPeople {
    pub fn new() -> Self {
        Self {
            admin: principal(1),
            coach: principal(2),
            parent: principal(3),
        }
    }
}

impl Default for TestPeople {
    fn default() -> Self {
        Self::new()
    }
}

pub fn event(id: EventId, start_time: TimestampNanos, end_time: TimestampNanos) -> Event {
    Event {
        id,
        title: format!("Event {}", id),
        description: None,
        address: None,
        suburb: None,
        state: None,
        postcode: None,
        start_time,
        end_time,
        club_id: None,
        team_id: Some(5),
        recurrence_rule: None,
        event_type: EventType::Training,
        duty_roster: vec![],
    }
}

#[derive(Default)]
struct State {
    admins: Vec<Principal>,
    profiles: HashMap<Principal, UserProfile>,
    clubs: Vec<Club>,
    teams: Vec<Team>,
    team_memberships: HashMap<TeamId, Vec<TeamMembership>>,
    club_memberships: HashMap<ClubId, Vec<ClubMembership>>,
    messages: Vec<Message>,
    events: Vec<Event>,
    reactions: Vec<CommentReaction>,
    checkout_response: String,
    calls: Vec<Operation>,
    now: TimestampNanos,
}

/// In-memory `BackendApi` acting on behalf of a single caller
#[derive(Clone)]
pub struct MockBackend {
    caller: Principal,
    state: Arc<RwLock<State>>,
}

impl MockBackend {
    pub fn new(caller: Principal) -> Self {
        Self {
            caller,
            state: Arc::new(RwLock::new(State {
                checkout_response: r#"{"id":"cs_test_1","url":"https://checkout.example/cs_test_1"}"#
                    .to_string(),
                now: 1_700_000_000_000_000_000,
                ..State::default()
            })),
        }
    }

    /// Same backend state seen by another caller
    pub fn as_caller(&self, caller: Principal) -> Self {
        Self {
            caller,
            state: self.state.clone(),
        }
    }

    pub fn grant_admin(&self, user: Principal) {
        self.state.write().admins.push(user);
    }

    pub fn seed_club(&self, club: Club) {
        self.state.write().clubs.push(club);
    }

    pub fn seed_team(&self, team: Team) {
        self.state.write().teams.push(team);
    }

    pub fn seed_event(&self, event: Event) {
        self.state.write().events.push(event);
    }

    pub fn seed_message(&self, message: Message) {
        self.state.write().messages.push(message);
    }

    pub fn set_checkout_response(&self, raw: &str) {
        self.state.write().checkout_response = raw.to_string();
    }

    /// Operations invoked so far, in order
    pub fn calls(&self) -> Vec<Operation> {
        self.state.read().calls.clone()
    }

    pub fn team_roles(&self, team_id: TeamId, user: Principal) -> Option<Vec<TeamRole>> {
        self.state
            .read()
            .team_memberships
            .get(&team_id)?
            .iter()
            .find(|m| m.user == user)
            .map(|m| m.roles.clone())
    }

    fn record(&self, operation: Operation) {
        self.state.write().calls.push(operation);
    }

    fn tick(state: &mut State) -> TimestampNanos {
        state.now += 1_000;
        state.now
    }
}

#[async_trait]
impl BackendApi for MockBackend {
    async fn is_caller_admin(&self) -> Result<bool, BackendError> {
        self.record(Operation::IsCallerAdmin);
        Ok(self.state.read().admins.contains(&self.caller))
    }

    async fn get_caller_user_profile(&self) -> Result<Option<UserProfile>, BackendError> {
        self.record(Operation::GetCallerUserProfile);
        Ok(self.state.read().profiles.get(&self.caller).cloned())
    }

    async fn save_caller_user_profile(&self, profile: UserProfile) -> Result<(), BackendError> {
        self.record(Operation::SaveCallerUserProfile);
        self.state.write().profiles.insert(self.caller, profile);
        Ok(())
    }

    async fn get_all_clubs(&self) -> Result<Vec<Club>, BackendError> {
        self.record(Operation::GetAllClubs);
        Ok(self.state.read().clubs.clone())
    }

    async fn get_all_teams(&self) -> Result<Vec<Team>, BackendError> {
        self.record(Operation::GetAllTeams);
        Ok(self.state.read().teams.clone())
    }

    async fn get_teams_by_club_id(&self, club_id: ClubId) -> Result<Vec<Team>, BackendError> {
        self.record(Operation::GetTeamsByClubId);
        Ok(self
            .state
            .read()
            .teams
            .iter()
            .filter(|t| t.club_id == club_id)
            .cloned()
            .collect())
    }

    async fn get_club_memberships_by_club(
        &self,
        club_id: ClubId,
    ) -> Result<Vec<ClubMembership>, BackendError> {
        self.record(Operation::GetClubMembershipsByClub);
        Ok(self
            .state
            .read()
            .club_memberships
            .get(&club_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_team_memberships_by_team(
        &self,
        team_id: TeamId,
    ) -> Result<Vec<TeamMembership>, BackendError> {
        self.record(Operation::GetTeamMembershipsByTeam);
        Ok(self
            .state
            .read()
            .team_memberships
            .get(&team_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn add_team_membership(
        &self,
        team_id: TeamId,
        roles: &[TeamRole],
    ) -> Result<TeamMembership, BackendError> {
        self.record(Operation::AddTeamMembership);
        let mut state = self.state.write();
        if !state.teams.iter().any(|t| t.id == team_id) {
            return Err(BackendError::remote(format!("team {} does not exist", team_id)));
        }

        let members = state.team_memberships.entry(team_id).or_default();
        let idx = match members.iter().position(|m| m.user == self.caller) {
            Some(idx) => idx,
            None => {
                members.push(TeamMembership {
                    user: self.caller,
                    roles: vec![],
                });
                members.len() - 1
            }
        };
        for role in roles {
            if !members[idx].roles.contains(role) {
                members[idx].roles.push(*role);
            }
        }
        Ok(members[idx].clone())
    }

    async fn remove_team_member(&self, team_id: TeamId, user: Principal) -> Result<(), BackendError> {
        self.record(Operation::RemoveTeamMember);
        if let Some(members) = self.state.write().team_memberships.get_mut(&team_id) {
            members.retain(|m| m.user != user);
        }
        Ok(())
    }

    async fn remove_team_role(
        &self,
        team_id: TeamId,
        user: Principal,
        role: TeamRole,
    ) -> Result<(), BackendError> {
        self.record(Operation::RemoveTeamRole);
        let mut state = self.state.write();
        let member = state
            .team_memberships
            .get_mut(&team_id)
            .and_then(|members| members.iter_mut().find(|m| m.user == user))
            .ok_or_else(|| BackendError::remote("user is not a member of this team"))?;
        member.roles.retain(|r| *r != role);
        Ok(())
    }

    async fn manage_team_roles(
        &self,
        team_id: TeamId,
        user: Principal,
        roles: &[TeamRole],
    ) -> Result<(), BackendError> {
        self.record(Operation::ManageTeamRoles);
        let mut state = self.state.write();
        let member = state
            .team_memberships
            .get_mut(&team_id)
            .and_then(|members| members.iter_mut().find(|m| m.user == user))
            .ok_or_else(|| BackendError::remote("user is not a member of this team"))?;
        member.roles = roles.to_vec();
        Ok(())
    }

    async fn add_club_membership(
        &self,
        club_id: ClubId,
        roles: &[ClubRole],
    ) -> Result<ClubMembership, BackendError> {
        self.record(Operation::AddClubMembership);
        let membership = ClubMembership {
            user: self.caller,
            roles: roles.to_vec(),
        };
        let mut state = self.state.write();
        let members = state.club_memberships.entry(club_id).or_default();
        members.retain(|m| m.user != self.caller);
        members.push(membership.clone());
        Ok(membership)
    }

    async fn get_all_messages(&self) -> Result<Vec<Message>, BackendError> {
        self.record(Operation::GetAllMessages);
        Ok(self.state.read().messages.clone())
    }

    async fn get_all_events(&self) -> Result<Vec<Event>, BackendError> {
        self.record(Operation::GetAllEvents);
        Ok(self.state.read().events.clone())
    }

    async fn get_comment_reactions(
        &self,
        comment_id: CommentId,
    ) -> Result<Vec<CommentReaction>, BackendError> {
        self.record(Operation::GetCommentReactions);
        Ok(self
            .state
            .read()
            .reactions
            .iter()
            .filter(|r| r.comment_id == comment_id)
            .cloned()
            .collect())
    }

    async fn add_comment_reaction(
        &self,
        comment_id: CommentId,
        reaction_type: &str,
    ) -> Result<bool, BackendError> {
        self.record(Operation::AddCommentReaction);
        let mut state = self.state.write();
        if state
            .reactions
            .iter()
            .any(|r| r.comment_id == comment_id && r.user == self.caller)
        {
            return Ok(false);
        }
        let timestamp = Self::tick(&mut state);
        state.reactions.push(CommentReaction {
            comment_id,
            user: self.caller,
            reaction_type: reaction_type.to_string(),
            timestamp,
        });
        Ok(true)
    }

    async fn create_checkout_session(
        &self,
        _items: &[ShoppingItem],
        _success_url: &str,
        _cancel_url: &str,
    ) -> Result<String, BackendError> {
        self.record(Operation::CreateCheckoutSession);
        Ok(self.state.read().checkout_response.clone())
    }
}
