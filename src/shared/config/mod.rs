//! Application configuration module
//!
//! Provides the configuration consumed by the server: database location,
//! token signing parameters, listen address, password hashing cost and an
//! optional bootstrap administrator.
//!
//! Configuration can be assembled three ways:
//!
//! - [`AppConfig::builder`] for code and tests
//! - [`AppConfig::from_env`] reading `DATABASE_URL`, `JWT_SECRET`, ... from the
//!   process environment (call `dotenv::dotenv()` first to honour a `.env` file)
//! - [`AppConfig::from_file`] reading a TOML document
//!
//! Every path ends in [`AppConfig::validate`].

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Signing secret used when none is configured. Only suitable for development.
pub const DEFAULT_JWT_SECRET: &str = "studio-booking-dev-secret-change-me";

/// Default token lifetime: 24 hours.
pub const DEFAULT_JWT_EXPIRATION_MS: u64 = 86_400_000;

/// Default database location.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://studio.db";

/// Lowest and highest cost accepted by bcrypt.
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Account created at startup when it does not already exist
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdminAccount {
    pub email: String,
    pub password: String,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// sqlx connection URL (`sqlite://path.db` or `sqlite::memory:`)
    pub database_url: String,
    /// HMAC secret for signing tokens
    pub jwt_secret: String,
    /// Token lifetime in milliseconds
    pub jwt_expiration_ms: u64,
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
    /// Optional administrator to create at startup
    pub admin: Option<AdminAccount>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            jwt_expiration_ms: DEFAULT_JWT_EXPIRATION_MS,
            host: "0.0.0.0".to_string(),
            port: 3000,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            admin: None,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup (the environment, a map in tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(raw) = lookup("JWT_EXPIRATION_MS") {
            builder = builder.jwt_expiration_ms(parse_number("JWT_EXPIRATION_MS", &raw)?);
        }
        if let Some(host) = lookup("SERVER_HOST") {
            builder = builder.host(host);
        }
        if let Some(raw) = lookup("SERVER_PORT") {
            builder = builder.port(parse_number("SERVER_PORT", &raw)?);
        }
        if let Some(raw) = lookup("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_number("BCRYPT_COST", &raw)?);
        }
        match (lookup("ADMIN_EMAIL"), lookup("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => builder = builder.admin(email, password),
            (Some(_), None) => return Err(ConfigError::MissingValue("ADMIN_PASSWORD")),
            (None, Some(_)) => return Err(ConfigError::MissingValue("ADMIN_EMAIL")),
            (None, None) => {}
        }

        builder.build()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from a TOML document; absent keys keep their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(contents)?;
        let mut builder = Self::builder();

        if let Some(database) = file.database {
            if let Some(url) = database.url {
                builder = builder.database_url(url);
            }
        }
        if let Some(jwt) = file.jwt {
            if let Some(secret) = jwt.secret {
                builder = builder.jwt_secret(secret);
            }
            if let Some(expiration_ms) = jwt.expiration_ms {
                builder = builder.jwt_expiration_ms(expiration_ms);
            }
        }
        if let Some(server) = file.server {
            if let Some(host) = server.host {
                builder = builder.host(host);
            }
            if let Some(port) = server.port {
                builder = builder.port(port);
            }
        }
        if let Some(cost) = file.bcrypt_cost {
            builder = builder.bcrypt_cost(cost);
        }
        if let Some(admin) = file.admin {
            builder = builder.admin(admin.email, admin.password);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("database_url"));
        }
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("jwt_secret"));
        }
        if self.jwt_expiration_ms == 0 {
            return Err(ConfigError::invalid("jwt_expiration_ms", "must be greater than zero"));
        }
        if !BCRYPT_COST_RANGE.contains(&self.bcrypt_cost) {
            return Err(ConfigError::invalid(
                "bcrypt_cost",
                format!("must be between {} and {}", BCRYPT_COST_RANGE.start(), BCRYPT_COST_RANGE.end()),
            ));
        }
        if let Some(admin) = &self.admin {
            if admin.email.trim().is_empty() || admin.password.is_empty() {
                return Err(ConfigError::invalid("admin", "email and password must not be empty"));
            }
        }
        Ok(())
    }

    /// Whether the development signing secret is in use
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }

    /// `host:port` string suitable for binding a listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    jwt_expiration_ms: Option<u64>,
    host: Option<String>,
    port: Option<u16>,
    bcrypt_cost: Option<u32>,
    admin: Option<AdminAccount>,
}

impl AppConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the token lifetime in milliseconds
    pub fn jwt_expiration_ms(mut self, expiration_ms: u64) -> Self {
        self.jwt_expiration_ms = Some(expiration_ms);
        self
    }

    /// Set the listen host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the bcrypt cost
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Configure a bootstrap administrator
    pub fn admin(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.admin = Some(AdminAccount {
            email: email.into(),
            password: password.into(),
        });
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            database_url: self.database_url.unwrap_or(defaults.database_url),
            jwt_secret: self.jwt_secret.unwrap_or(defaults.jwt_secret),
            jwt_expiration_ms: self.jwt_expiration_ms.unwrap_or(defaults.jwt_expiration_ms),
            host: self.host.unwrap_or(defaults.host),
            port: self.port.unwrap_or(defaults.port),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(defaults.bcrypt_cost),
            admin: self.admin,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration file: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ConfigError {
    fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            message: message.into(),
        }
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::invalid(key, format!("'{}' is not a valid number", raw)))
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    database: Option<DatabaseSection>,
    jwt: Option<JwtSection>,
    server: Option<ServerSection>,
    bcrypt_cost: Option<u32>,
    admin: Option<AdminAccount>,
}

#[derive(Debug, Deserialize)]
struct DatabaseSection {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JwtSection {
    secret: Option<String>,
    expiration_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ServerSection {
    host: Option<String>,
    port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::builder().build().unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.uses_default_secret());
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_from_lookup() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "s3cret"),
            ("JWT_EXPIRATION_MS", "60000"),
            ("SERVER_PORT", "8080"),
            ("BCRYPT_COST", "4"),
            ("ADMIN_EMAIL", "yoga@studio.com"),
            ("ADMIN_PASSWORD", "test!1234"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.jwt_expiration_ms, 60_000);
        assert_eq!(config.port, 8080);
        assert_eq!(config.bcrypt_cost, 4);
        assert_eq!(
            config.admin,
            Some(AdminAccount {
                email: "yoga@studio.com".to_string(),
                password: "test!1234".to_string(),
            })
        );
        assert!(!config.uses_default_secret());
    }

    #[test]
    fn test_from_lookup_rejects_bad_numbers() {
        let result = AppConfig::from_lookup(lookup_from(&[("SERVER_PORT", "eighty")]));
        assert_matches!(result, Err(ConfigError::InvalidValue { key: "SERVER_PORT", .. }));
    }

    #[test]
    fn test_from_lookup_requires_admin_pair() {
        let result = AppConfig::from_lookup(lookup_from(&[("ADMIN_EMAIL", "yoga@studio.com")]));
        assert_matches!(result, Err(ConfigError::MissingValue("ADMIN_PASSWORD")));
    }

    #[test]
    fn test_validate_rejects_out_of_range_cost() {
        let result = AppConfig::builder().bcrypt_cost(3).build();
        assert_matches!(result, Err(ConfigError::InvalidValue { key: "bcrypt_cost", .. }));
    }

    #[test]
    fn test_validate_rejects_empty_secret() {
        let result = AppConfig::builder().jwt_secret("").build();
        assert_matches!(result, Err(ConfigError::MissingValue("jwt_secret")));
    }

    #[test]
    fn test_validate_rejects_zero_expiration() {
        let result = AppConfig::builder().jwt_expiration_ms(0).build();
        assert_matches!(result, Err(ConfigError::InvalidValue { key: "jwt_expiration_ms", .. }));
    }

    #[test]
    fn test_from_toml_str() {
        let config = AppConfig::from_toml_str(
            r#"
            bcrypt_cost = 5

            [database]
            url = "sqlite://bookings.db"

            [jwt]
            secret = "toml-secret"

            [server]
            port = 9000
            "#,
        )
        .unwrap();

        assert_eq!(config.database_url, "sqlite://bookings.db");
        assert_eq!(config.jwt_secret, "toml-secret");
        assert_eq!(config.jwt_expiration_ms, DEFAULT_JWT_EXPIRATION_MS);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.bcrypt_cost, 5);
    }

    #[test]
    fn test_from_toml_str_rejects_garbage() {
        assert_matches!(AppConfig::from_toml_str("port = = 1"), Err(ConfigError::Toml(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[jwt]\nexpiration_ms = 1000").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.jwt_expiration_ms, 1000);
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::from_file(dir.path().join("absent.toml"));
        assert_matches!(result, Err(ConfigError::Io(_)));
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env() {
        std::env::set_var("JWT_SECRET", "env-secret");
        std::env::set_var("SERVER_PORT", "4321");
        let config = AppConfig::from_env();
        std::env::remove_var("JWT_SECRET");
        std::env::remove_var("SERVER_PORT");

        let config = config.unwrap();
        assert_eq!(config.jwt_secret, "env-secret");
        assert_eq!(config.port, 4321);
    }
}
