/// Where to send requests and which token to present.
///
/// Built once at start-up and handed to the API client, so request code never
/// reaches into browser storage on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    base_url: String,
    access_token: Option<String>,
}

impl Session {
    pub fn new(base_url: impl Into<String>, access_token: Option<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            // An empty stored token is the same as no token
            access_token: access_token.filter(|token| !token.trim().is_empty()),
        }
    }

    /// Session without a token, as used before login
    pub fn anonymous(base_url: impl Into<String>) -> Self {
        Self::new(base_url, None)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let session = Session::anonymous("http://localhost:5000/");
        assert_eq!(session.base_url(), "http://localhost:5000");
        assert_eq!(session.url("/budgets/"), "http://localhost:5000/budgets/");
    }

    #[test]
    fn test_blank_token_is_dropped() {
        let session = Session::new("http://localhost:5000", Some("  ".to_string()));
        assert_eq!(session.access_token(), None);

        let session = Session::new("http://localhost:5000", Some("abc".to_string()));
        assert_eq!(session.access_token(), Some("abc"));
    }
}
