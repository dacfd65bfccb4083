//! Test factory for guild members as they arrive on slash command interactions.

use serenity::all::Member;

use crate::serenity::user::user_json;

/// Creates a test Serenity Member.
///
/// Interaction members carry the permissions the member has in the channel the
/// command was used in; pass `None` to leave them out as Discord does for members
/// fetched outside an interaction.
///
/// # Arguments
/// - `guild_id` - Guild the member belongs to
/// - `user_id` - Member's user ID
/// - `role_ids` - Roles assigned to the member
/// - `permissions` - Permission bits, e.g. `Some(8)` for administrator
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(
    guild_id: u64,
    user_id: u64,
    role_ids: &[u64],
    permissions: Option<u64>,
) -> Member {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": user_json(user_id, &format!("member{}", user_id)),
        "nick": null,
        "avatar": null,
        "roles": roles,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": permissions.map(|bits| bits.to_string()),
        "communication_disabled_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
