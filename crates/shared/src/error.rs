use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown submission field `{0}`")]
    UnknownField(String),
    #[error("invalid value `{value}` for setting `{key}`")]
    InvalidSetting { key: String, value: String },
}

impl CatalogError {
    pub fn invalid_setting(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key: key.into(),
            value: value.into(),
        }
    }
}
