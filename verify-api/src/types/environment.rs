//! Environment configuration for different deployment stages

use std::env;

use crate::world_id::VerifierConfig;

/// Default published key set of the identity provider
const DEFAULT_JWKS_URL: &str = "https://id.worldcoin.org/jwks.json";

/// Expected token issuer
const DEFAULT_ISSUER: &str = "https://id.worldcoin.org";

/// Application environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    #[must_use]
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => Self::Development,
            _ => panic!("Invalid environment: {env}"),
        }
    }

    /// URL of the identity provider's JWKS document
    #[must_use]
    pub fn jwks_url(&self) -> String {
        env::var("WORLD_ID_JWKS_URL").unwrap_or_else(|_| DEFAULT_JWKS_URL.to_string())
    }

    /// Issuer every verified token must carry
    #[must_use]
    pub fn issuer(&self) -> String {
        env::var("WORLD_ID_ISSUER").unwrap_or_else(|_| DEFAULT_ISSUER.to_string())
    }

    /// Audience to enforce, if configured. Unset disables the audience check,
    /// matching how the original deployment ran.
    #[must_use]
    pub fn audience(&self) -> Option<String> {
        env::var("WORLD_ID_AUDIENCE")
            .ok()
            .filter(|aud| !aud.is_empty())
    }

    /// Verifier configuration assembled from the environment
    #[must_use]
    pub fn verifier_config(&self) -> VerifierConfig {
        VerifierConfig {
            issuer: self.issuer(),
            audience: self.audience(),
        }
    }

    /// Whether to show API docs
    #[must_use]
    pub const fn show_api_docs(&self) -> bool {
        matches!(self, Self::Development | Self::Staging)
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_environment_from_env() {
        env::remove_var("APP_ENV");
        assert_eq!(Environment::from_env(), Environment::Development);

        env::set_var("APP_ENV", "staging");
        assert_eq!(Environment::from_env(), Environment::Staging);

        env::set_var("APP_ENV", "production");
        assert_eq!(Environment::from_env(), Environment::Production);

        env::remove_var("APP_ENV");
    }

    #[test]
    #[serial]
    #[should_panic(expected = "Invalid environment: invalid")]
    fn test_invalid_environment() {
        env::set_var("APP_ENV", "invalid");
        let _ = Environment::from_env();
    }

    #[test]
    #[serial]
    fn test_audience_defaults_to_disabled() {
        env::remove_var("WORLD_ID_AUDIENCE");
        let config = Environment::Development.verifier_config();
        assert_eq!(config.issuer, DEFAULT_ISSUER);
        assert!(config.audience.is_none());

        env::set_var("WORLD_ID_AUDIENCE", "");
        assert!(Environment::Development.audience().is_none());

        env::set_var("WORLD_ID_AUDIENCE", "app_123");
        assert_eq!(
            Environment::Development.audience().as_deref(),
            Some("app_123")
        );

        env::remove_var("WORLD_ID_AUDIENCE");
    }

    #[test]
    fn test_api_docs_visibility() {
        assert!(Environment::Development.show_api_docs());
        assert!(Environment::Staging.show_api_docs());
        assert!(!Environment::Production.show_api_docs());
    }
}
