use crate::model::admin::BotStatusDto;

/// Process-wide bot status shared by the bot and the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BotStatus {
    pub maintenance_mode: bool,
}

impl BotStatus {
    pub fn from_entity(entity: entity::bot_status::Model) -> Self {
        Self {
            maintenance_mode: entity.maintenance_mode,
        }
    }

    pub fn into_dto(self) -> BotStatusDto {
        BotStatusDto {
            maintenance_mode: self.maintenance_mode,
        }
    }
}
