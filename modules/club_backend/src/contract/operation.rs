//! Backend operation names
//!
//! The runtime view of the operation set declared by [`super::BackendApi`].
//! Tags are the canister method names.

closed_tag_enum! {
    /// Every operation callable against the backend canister
    pub enum Operation {
        // ===== Users / auth =====
        IsCallerAdmin => "isCallerAdmin",
        GetCallerUserProfile => "getCallerUserProfile",
        SaveCallerUserProfile => "saveCallerUserProfile",

        // ===== Directory =====
        GetAllClubs => "getAllClubs",
        GetAllTeams => "getAllTeams",
        GetTeamsByClubId => "getTeamsByClubId",

        // ===== Memberships =====
        GetClubMembershipsByClub => "getClubMembershipsByClub",
        GetTeamMembershipsByTeam => "getTeamMembershipsByTeam",
        AddTeamMembership => "addTeamMembership",
        RemoveTeamMember => "removeTeamMember",
        RemoveTeamRole => "removeTeamRole",
        ManageTeamRoles => "manageTeamRoles",
        AddClubMembership => "addClubMembership",

        // ===== Messages / events =====
        GetAllMessages => "getAllMessages",
        GetAllEvents => "getAllEvents",

        // ===== Comment reactions =====
        GetCommentReactions => "getCommentReactions",
        AddCommentReaction => "addCommentReaction",

        // ===== Checkout =====
        CreateCheckoutSession => "createCheckoutSession",
    }
}
