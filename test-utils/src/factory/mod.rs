//! Factory methods for seeding test data.
//!
//! Each table has a `Factory` builder for customization and a `create_*` convenience
//! function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Settings with defaults apart from the staff role
//! let settings = factory::guild_settings::GuildSettingsFactory::new(&db, 1)
//!     .staff_role_id(Some(200))
//!     .build()
//!     .await?;
//!
//! // Three warnings for the same member
//! factory::warning::create_warnings(&db, 1, 10, 3).await?;
//! ```

pub mod bot_status;
pub mod guild_settings;
pub mod helpers;
pub mod warning;

pub use bot_status::create_bot_status;
pub use guild_settings::create_guild_settings;
pub use warning::{create_warning, create_warnings};
