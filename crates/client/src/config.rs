//! Client configuration: where the listing backend lives.

use anyhow::{Context, Result};

/// WordPress REST root used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://escortsacompanhantes.com/wp-json";

/// Plugin namespace appended to the REST root.
pub const API_NAMESPACE: &str = "/scortrio/v1";

/// Key under which the bearer token is persisted.
pub const TOKEN_STORAGE_KEY: &str = "scortrio_token";

/// Fixed page size of the public listing.
pub const PAGE_SIZE: u32 = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Fully-qualified API base, namespace included.
    pub api_base: String,
}

impl ClientConfig {
    /// Build a config from a REST root such as `https://example.com/wp-json`.
    pub fn new(rest_root: &str) -> Result<Self> {
        let root = rest_root.trim().trim_end_matches('/');
        let parsed = url::Url::parse(root).with_context(|| format!("Invalid API URL: {root}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("API URL must be http(s): {root}");
        }
        Ok(Self {
            api_base: format!("{root}{API_NAMESPACE}"),
        })
    }

    /// Resolve the REST root from the environment.
    ///
    /// - Native: `VITRINE_API_URL` at runtime, then at compile time.
    /// - Web: `VITRINE_API_URL` at compile time only.
    ///
    /// Falls back to [`DEFAULT_API_URL`].
    pub fn from_env() -> Result<Self> {
        Self::new(&Self::configured_root())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn configured_root() -> String {
        std::env::var("VITRINE_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| option_env!("VITRINE_API_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    #[cfg(target_arch = "wasm32")]
    fn configured_root() -> String {
        option_env!("VITRINE_API_URL")
            .unwrap_or(DEFAULT_API_URL)
            .to_string()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: format!("{DEFAULT_API_URL}{API_NAMESPACE}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_namespace_and_trims_slash() {
        let config = ClientConfig::new("http://localhost:8080/wp-json/").unwrap();
        assert_eq!(config.api_base, "http://localhost:8080/wp-json/scortrio/v1");
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(ClientConfig::new("ftp://example.com").is_err());
        assert!(ClientConfig::new("not a url").is_err());
    }

    #[test]
    fn default_points_at_production() {
        assert_eq!(
            ClientConfig::default().api_base,
            "https://escortsacompanhantes.com/wp-json/scortrio/v1"
        );
    }
}
