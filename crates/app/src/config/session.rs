//! Authoring Session Config

use std::time::Duration;

use catalog::presenter::MoneyFormatter;
use clap::Args;

use super::ConfigError;

/// Authoring session settings.
#[derive(Debug, Clone, Args)]
pub struct SessionConfig {
    /// Delay between a successful submission and the close request, in milliseconds
    #[arg(long, env = "CLOSE_DELAY_MS", default_value_t = 1_500_u64)]
    pub close_delay_ms: u64,

    /// ISO 4217 code prices are displayed in
    #[arg(long, env = "CATALOG_CURRENCY", default_value = "UZS")]
    pub currency: String,
}

impl SessionConfig {
    /// Close delay as a duration.
    #[must_use]
    pub fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms)
    }

    /// Price formatter for the configured currency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownCurrency`] when the code is not an ISO 4217 code.
    pub fn formatter(&self) -> Result<MoneyFormatter, ConfigError> {
        MoneyFormatter::from_code(&self.currency.trim().to_ascii_uppercase())
            .ok_or_else(|| ConfigError::UnknownCurrency(self.currency.clone()))
    }
}
