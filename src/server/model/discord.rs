use crate::model::discord::{DiscordGuildDto, GuildResourceDto};

/// Guild the signed-in dashboard user administers.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminGuild {
    pub guild_id: u64,
    pub name: String,
    pub icon_hash: Option<String>,
}

impl AdminGuild {
    pub fn into_dto(self) -> DiscordGuildDto {
        DiscordGuildDto {
            guild_id: self.guild_id,
            name: self.name,
            icon_hash: self.icon_hash,
        }
    }
}

/// Named guild object offered by the dashboard selectors.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildResource {
    pub id: u64,
    pub name: String,
}

impl GuildResource {
    pub fn into_dto(self) -> GuildResourceDto {
        GuildResourceDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Guild objects the dashboard can list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuildResourceKind {
    /// Text channels only, as candidates for the log channel.
    Channels,
    /// Roles, as candidates for the staff role.
    Roles,
}

impl GuildResourceKind {
    pub fn parse(resource: &str) -> Option<Self> {
        match resource {
            "channels" => Some(Self::Channels),
            "roles" => Some(Self::Roles),
            _ => None,
        }
    }
}
