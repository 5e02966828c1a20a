//! Task service configuration.
//!
//! A single base URL. The default points at the hosted service; the UI can
//! override it at compile time.

use url::Url;

use crate::domain::{DomainError, DomainResult};

/// Hosted task service
pub const DEFAULT_API_URL: &str = "https://task-manager-board.onrender.com";

/// Where the task collection lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// Parse a base URL. The path is normalized to end with `/` so that
    /// `{base}/{id}` joins append instead of replacing the last segment.
    pub fn new(base_url: &str) -> DomainResult<Self> {
        let mut url = Url::parse(base_url)
            .map_err(|e| DomainError::Config(format!("invalid base URL {base_url}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(DomainError::Config(format!("{base_url} cannot be a base URL")));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self { base_url: url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a path relative to the collection root
    pub fn endpoint(&self, path: &str) -> DomainResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| DomainError::Config(format!("cannot join {path}: {e}")))
    }

    /// URL of a static icon served next to the API
    pub fn icon_url(&self, name: &str) -> String {
        format!("{}icons/{}.svg", self.base_url, name)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL).expect("DEFAULT_API_URL is a valid base URL")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_hosted_service() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url().as_str(), "https://task-manager-board.onrender.com/");
    }

    #[test]
    fn test_base_path_gets_trailing_slash() {
        let config = ApiConfig::new("http://localhost:8080/api/tasks").unwrap();
        assert_eq!(config.base_url().as_str(), "http://localhost:8080/api/tasks/");
        assert_eq!(
            config.endpoint("12/status").unwrap().as_str(),
            "http://localhost:8080/api/tasks/12/status"
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(ApiConfig::new("not a url"), Err(DomainError::Config(_))));
        assert!(matches!(ApiConfig::new("mailto:me@example.com"), Err(DomainError::Config(_))));
    }

    #[test]
    fn test_icon_url() {
        let config = ApiConfig::default();
        assert_eq!(
            config.icon_url("edit-svgrepo-com"),
            "https://task-manager-board.onrender.com/icons/edit-svgrepo-com.svg"
        );
    }
}
