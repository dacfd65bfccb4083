use crate::server::{
    data::{bot_status::BotStatusRepository, warning::WarningRepository},
    error::{access::AccessError, moderation::ModerationError, AppError},
    i18n::Catalog,
    model::{
        actor::Actor,
        moderation::{ModerationAction, ModerationRequest, ModerationState, ModerationTarget},
    },
    service::{
        moderation::ModerationService,
        platform::fake::{PlatformCall, RecordingPlatform},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod audit;

const OWNER_ID: u64 = 1000;
const GUILD_ID: u64 = 1;
const MODERATOR_ID: u64 = 10;
const TARGET_ID: u64 = 20;
const STAFF_ROLE_ID: u64 = 200;
const LOG_CHANNEL_ID: u64 = 300;

fn administrator() -> Actor {
    Actor::new(MODERATOR_ID, true, vec![])
}

fn target() -> ModerationTarget {
    ModerationTarget {
        user_id: TARGET_ID,
        display_name: "Troublemaker".to_string(),
    }
}

fn request(actor: Actor, action: ModerationAction, reason: Option<&str>) -> ModerationRequest {
    ModerationRequest {
        guild_id: GUILD_ID,
        guild_name: "Galaxy".to_string(),
        actor,
        target: target(),
        action,
        reason: reason.map(str::to_string),
    }
}
