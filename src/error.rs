//! Error types for config parsing and DOM access.
//!
//! None of these reach the visitor. Mount functions in the DOM layer log them
//! and skip the affected behavior; see [`FolioError::is_absent_feature`].

/// Error returned by [`crate::config::SiteConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The inline config block is not valid JSON for [`crate::config::SiteConfig`].
    #[error("failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A numeric setting is outside its accepted range.
    #[error("invalid value for `{field}`: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Error raised while binding a controller to the page.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// An element the controller needs is not on this page.
    #[error("missing element: {0}")]
    MissingElement(String),
    /// The browser lacks a capability the controller needs.
    #[error("unsupported browser capability: {0}")]
    Unsupported(&'static str),
    /// A DOM call threw.
    #[error("javascript error: {0}")]
    Js(String),
    /// The inline config block was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl FolioError {
    /// Whether this error only means "feature not present on this page".
    ///
    /// These are logged at debug level; everything else is a warning.
    #[must_use]
    pub fn is_absent_feature(&self) -> bool {
        matches!(self, Self::MissingElement(_) | Self::Unsupported(_))
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for FolioError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
