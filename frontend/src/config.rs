/// API server used when the build doesn't name one
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
/// `localStorage` key the login flow stores the bearer token under
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "accessToken";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub token_storage_key: String,
}

impl AppConfig {
    /// Defaults, with the base URL overridable at build time through
    /// `FINANCE_API_URL`
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("FINANCE_API_URL"))
    }

    fn with_base_url(base_url: Option<&str>) -> Self {
        let api_base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);

        Self {
            api_base_url: api_base_url.to_string(),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_base_url(None)
    }
}
