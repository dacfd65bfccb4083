//! Embedded translation catalog.
//!
//! Every user-facing bot message is looked up here by key in the guild's language.
//! Lookups never fail: a key missing from the requested language falls back to the
//! default language, and a key missing there is returned verbatim so the gap is
//! visible in the output instead of breaking a command.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::server::{error::AppError, model::settings::DEFAULT_LANGUAGE};

const EMBEDDED_LANGUAGES: [(&str, &str); 2] = [
    ("it", include_str!("../../locales/it.json")),
    ("en", include_str!("../../locales/en.json")),
];

/// Translation tables keyed by language code.
#[derive(Debug, Clone)]
pub struct Catalog {
    languages: BTreeMap<String, BTreeMap<String, Value>>,
}

impl Catalog {
    /// Loads the catalogs compiled into the binary.
    ///
    /// # Returns
    /// - `Ok(Catalog)` - All embedded languages parsed
    /// - `Err(AppError::InternalError)` - An embedded file is not a JSON object
    pub fn embedded() -> Result<Self, AppError> {
        let mut languages = BTreeMap::new();
        for (code, raw) in EMBEDDED_LANGUAGES {
            let table: BTreeMap<String, Value> = serde_json::from_str(raw).map_err(|e| {
                AppError::InternalError(format!("Failed to parse '{}' translations: {}", code, e))
            })?;
            languages.insert(code.to_string(), table);
        }

        tracing::debug!("Loaded {} translation catalogs", languages.len());

        Ok(Self { languages })
    }

    /// Builds a catalog from in-memory tables.
    #[cfg(test)]
    pub fn from_tables(languages: BTreeMap<String, BTreeMap<String, Value>>) -> Self {
        Self { languages }
    }

    /// Language codes with a loaded catalog, in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn supports(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    /// Raw catalog entry for `key`, with the same language fallback as `text`.
    ///
    /// Non-string entries such as lists are returned as stored.
    pub fn value(&self, language: &str, key: &str) -> Option<&Value> {
        self.languages
            .get(language)
            .and_then(|table| table.get(key))
            .or_else(|| {
                self.languages
                    .get(DEFAULT_LANGUAGE)
                    .and_then(|table| table.get(key))
            })
    }

    /// Translates `key` into `language`, substituting `{name}` placeholders.
    ///
    /// Placeholders without a matching parameter are left as written. Substituted
    /// values are inserted verbatim and never scanned for further placeholders.
    pub fn text(&self, language: &str, key: &str, params: &[(&str, &str)]) -> String {
        let Some(Value::String(template)) = self.value(language, key) else {
            return key.to_string();
        };

        substitute(template, params)
    }
}

/// Replaces `{name}` placeholders in one left-to-right pass over the template.
fn substitute(template: &str, params: &[(&str, &str)]) -> String {
    let mut text = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        text.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            rest = &rest[open..];
            break;
        };

        let name = &after[..close];
        match params.iter().find(|(param, _)| *param == name) {
            Some((_, value)) => text.push_str(value),
            None => text.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }
    text.push_str(rest);

    text
}
