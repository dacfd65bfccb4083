use sea_orm::DatabaseConnection;

use crate::server::{
    data::guild_settings::GuildSettingsRepository, error::AppError, i18n::Catalog,
};

/// Translates messages into a guild's configured language.
pub struct TranslationService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a Catalog,
}

impl<'a> TranslationService<'a> {
    pub fn new(db: &'a DatabaseConnection, catalog: &'a Catalog) -> Self {
        Self { db, catalog }
    }

    /// Language configured for the guild, or the default language.
    pub async fn language(&self, guild_id: u64) -> Result<String, AppError> {
        Ok(GuildSettingsRepository::new(self.db)
            .get(guild_id)
            .await?
            .language)
    }

    /// Translates `key` for the guild, substituting `{name}` placeholders.
    pub async fn translate(
        &self,
        guild_id: u64,
        key: &str,
        params: &[(&str, &str)],
    ) -> Result<String, AppError> {
        let language = self.language(guild_id).await?;

        Ok(self.catalog.text(&language, key, params))
    }
}
