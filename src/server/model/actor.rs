//! The user attempting an operation, as seen by the authorization gate.

use serenity::all::Member;

/// Snapshot of a guild member's privileges at the time of a request.
///
/// Built from the interaction payload on the bot side and resolved through the
/// Discord API on the dashboard side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub user_id: u64,
    /// Whether the member holds the platform's administrator permission in the guild.
    pub is_administrator: bool,
    pub role_ids: Vec<u64>,
}

impl Actor {
    pub fn new(user_id: u64, is_administrator: bool, role_ids: Vec<u64>) -> Self {
        Self {
            user_id,
            is_administrator,
            role_ids,
        }
    }

    /// Builds an actor from the member attached to a guild interaction.
    ///
    /// Interaction members carry their computed channel permissions; a member
    /// without them is treated as non-administrator.
    pub fn from_member(member: &Member) -> Self {
        Self {
            user_id: member.user.id.get(),
            is_administrator: member
                .permissions
                .map(|permissions| permissions.administrator())
                .unwrap_or(false),
            role_ids: member.roles.iter().map(|role| role.get()).collect(),
        }
    }

    pub fn has_role(&self, role_id: u64) -> bool {
        self.role_ids.contains(&role_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::member::create_test_member;

    #[test]
    fn administrator_permission_is_read_from_member() {
        let member = create_test_member(1, 10, &[], Some(8));
        let actor = Actor::from_member(&member);

        assert_eq!(actor.user_id, 10);
        assert!(actor.is_administrator);
    }

    #[test]
    fn missing_permissions_mean_not_administrator() {
        let member = create_test_member(1, 10, &[200, 300], None);
        let actor = Actor::from_member(&member);

        assert!(!actor.is_administrator);
        assert!(actor.has_role(200));
        assert!(actor.has_role(300));
        assert!(!actor.has_role(400));
    }
}
