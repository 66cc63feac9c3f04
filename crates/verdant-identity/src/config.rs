//! Backend endpoint configuration

/// Connection settings for the auth/profile backend.
#[derive(Clone, Debug)]
pub struct BackendConfig {
    /// Project base URL
    pub url: String,
    /// Publishable anon key sent with every request
    pub anon_key: String,
}

impl BackendConfig {
    /// Create a config for a project
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
        }
    }

    /// Auth endpoint path
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path)
    }

    /// REST endpoint path for a table
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }
}
