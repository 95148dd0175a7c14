//! Site configuration.
//!
//! The base path that prefixes every asset and action URL is resolved once at process startup
//! and then passed into the renderer and the HTTP surface. Request handling never reads
//! environment variables.

use crate::constants::{DEFAULT_REPOSITORY_NAME, SUBPATH_DEPLOYMENT_FLAG};
use crate::{OrdersError, OrdersResult};

/// Site configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    repository_name: String,
    base_path: String,
}

impl SiteConfig {
    /// Create a `SiteConfig` for a deployment at the site root or under `/{repository_name}`.
    pub fn new(repository_name: impl Into<String>, subpath: bool) -> OrdersResult<Self> {
        let repository_name = repository_name.into();
        let repository_name = repository_name.trim();
        if repository_name.is_empty() || repository_name.contains('/') {
            return Err(OrdersError::InvalidInput(format!(
                "repository name must be a single non-empty path segment, got {repository_name:?}"
            )));
        }

        let base_path = if subpath {
            format!("/{repository_name}")
        } else {
            String::new()
        };

        Ok(Self {
            repository_name: repository_name.to_owned(),
            base_path,
        })
    }

    /// Configuration for a root deployment with the default repository name.
    pub fn root() -> Self {
        Self {
            repository_name: DEFAULT_REPOSITORY_NAME.to_owned(),
            base_path: String::new(),
        }
    }

    /// Resolve configuration from the raw values of `GITHUB_REPOSITORY` and `GITHUB_PAGES`.
    ///
    /// `repository` is expected as `owner/name`; the `name` segment is used. A missing or
    /// malformed value falls back to [`DEFAULT_REPOSITORY_NAME`]. The deployment is treated as a
    /// subpath deployment only when `pages` is exactly `"true"`.
    pub fn from_env_values(repository: Option<String>, pages: Option<String>) -> OrdersResult<Self> {
        let name = repository
            .as_deref()
            .and_then(|r| r.split('/').nth(1))
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_REPOSITORY_NAME);
        let subpath = pages.as_deref() == Some(SUBPATH_DEPLOYMENT_FLAG);

        Self::new(name, subpath)
    }

    /// Resolve configuration from the process environment.
    pub fn from_env() -> OrdersResult<Self> {
        Self::from_env_values(
            std::env::var("GITHUB_REPOSITORY").ok(),
            std::env::var("GITHUB_PAGES").ok(),
        )
    }

    pub fn repository_name(&self) -> &str {
        &self.repository_name
    }

    /// URL prefix for every link: empty for root deployments, `/{repo}` otherwise.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Join `path` (which must start with `/`) onto the base path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_path, path)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_pages_use_repository_subpath() {
        let cfg = SiteConfig::from_env_values(
            Some("acme/orders-demo".into()),
            Some("true".into()),
        )
        .expect("valid config");
        assert_eq!(cfg.repository_name(), "orders-demo");
        assert_eq!(cfg.base_path(), "/orders-demo");
        assert_eq!(cfg.url("/assets/styles.css"), "/orders-demo/assets/styles.css");
    }

    #[test]
    fn root_deployment_has_empty_base_path() {
        let cfg = SiteConfig::from_env_values(Some("acme/orders-demo".into()), None)
            .expect("valid config");
        assert_eq!(cfg.base_path(), "");
        assert_eq!(cfg.url("/"), "/");
    }

    #[test]
    fn only_exact_true_enables_subpath() {
        let cfg = SiteConfig::from_env_values(None, Some("TRUE".into())).expect("valid config");
        assert_eq!(cfg.base_path(), "");
        let cfg = SiteConfig::from_env_values(None, Some("1".into())).expect("valid config");
        assert_eq!(cfg.base_path(), "");
    }

    #[test]
    fn missing_repository_falls_back_to_default_name() {
        let cfg = SiteConfig::from_env_values(None, Some("true".into())).expect("valid config");
        assert_eq!(cfg.base_path(), "/medical-orders");

        let cfg = SiteConfig::from_env_values(Some("no-slash".into()), Some("true".into()))
            .expect("valid config");
        assert_eq!(cfg.base_path(), "/medical-orders");
    }

    #[test]
    fn rejects_names_with_slashes() {
        let err = SiteConfig::new("a/b", true).expect_err("should reject");
        assert!(matches!(err, OrdersError::InvalidInput(_)));
    }
}
