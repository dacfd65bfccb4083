use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    /// Field name outside the settings allow-list.
    ///
    /// The whole change set is rejected; nothing is written.
    #[error("Unknown settings field '{0}'")]
    InvalidField(String),

    /// Field is known but the value is outside its domain.
    ///
    /// # Fields
    /// - `field` - Name of the settings field
    /// - `value` - Offending value as received
    #[error("Invalid value '{value}' for settings field '{field}'")]
    InvalidValue { field: String, value: String },
}
