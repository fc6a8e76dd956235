use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    /// Espera artificial antes de guardar el pedido (placeholder del backend)
    pub submit_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            submit_delay_ms: 1000,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("SUBMIT_DELAY_MS"),
        )
    }

    fn from_values(
        environment: Option<&str>,
        enable_logging: Option<&str>,
        submit_delay_ms: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            environment: environment
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            submit_delay_ms: submit_delay_ms
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.submit_delay_ms),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log para wasm_logger (producción sin debug)
    pub fn log_level(&self) -> log::Level {
        match (self.enable_logging, self.is_production()) {
            (false, _) => log::Level::Warn,
            (true, true) => log::Level::Info,
            (true, false) => log::Level::Debug,
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_env_missing() {
        let config = AppConfig::from_values(None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.submit_delay_ms, 1000);
        assert!(!config.is_production());
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(Some("production"), Some("maybe"), Some("soon"));
        assert!(config.is_production());
        assert!(config.enable_logging);
        assert_eq!(config.submit_delay_ms, 1000);
    }

    #[test]
    fn test_log_level_follows_flag() {
        let quiet = AppConfig::from_values(None, Some("false"), Some("0"));
        assert_eq!(quiet.log_level(), log::Level::Warn);
        assert_eq!(quiet.submit_delay_ms, 0);
        assert_eq!(AppConfig::default().log_level(), log::Level::Debug);

        let production = AppConfig::from_values(Some("production"), Some("true"), None);
        assert_eq!(production.log_level(), log::Level::Info);
        let quiet_production = AppConfig::from_values(Some("production"), Some("false"), None);
        assert_eq!(quiet_production.log_level(), log::Level::Warn);
    }
}
