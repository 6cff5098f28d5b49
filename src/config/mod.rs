use serde::Deserialize;
use std::path::PathBuf;

use config::ConfigError;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub entsoe: EntsoeConfig,
    pub currency: CurrencyConfig,
    pub resolver: ResolverConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntsoeConfig {
    #[serde(default)]
    pub security_token: String,
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyConfig {
    pub base_url: String,
    pub target_currency: String,
    pub fallback_rate: f64,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolverConfig {
    pub default_zone: String,
    pub reference_timezone: String,
    #[serde(default)]
    pub strict_zones: bool,
}

impl ResolverConfig {
    pub fn get_timezone(&self) -> Result<chrono_tz::Tz, String> {
        self.reference_timezone
            .parse::<chrono_tz::Tz>()
            .map_err(|e| format!("Invalid timezone {}: {}", self.reference_timezone, e))
    }
}

impl AppConfig {
    /// Loads `default.toml`, an optional `local.toml` and `APP__*` environment
    /// overrides. `ENTSOE_API_KEY` takes precedence over the configured token.
    pub fn load() -> Result<Self, ConfigError> {
        let config_dir =
            std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::from(
                PathBuf::from(&config_dir).join("default.toml"),
            ))
            .add_source(
                config::File::from(PathBuf::from(&config_dir).join("local.toml"))
                    .required(false),
            )
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .set_override_option("entsoe.security_token", std::env::var("ENTSOE_API_KEY").ok())?;

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entsoe.security_token.trim().is_empty() {
            return Err(ConfigError::Message(
                "ENTSOE security token is required (set ENTSOE_API_KEY)".to_string(),
            ));
        }

        self.resolver.get_timezone().map_err(ConfigError::Message)?;

        if !(self.currency.fallback_rate.is_finite() && self.currency.fallback_rate > 0.0) {
            return Err(ConfigError::Message(format!(
                "currency.fallback_rate must be positive, got {}",
                self.currency.fallback_rate
            )));
        }

        Ok(())
    }
}
