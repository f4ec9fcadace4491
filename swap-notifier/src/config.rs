//! Base URLs of the two services, taken from the environment.

/// Base URL of the exchange service, the Bitcoin side of the trade.
pub const EXCHANGE_SERVICE_URL: &str = "BOB_COMIT_NODE_PID";
/// Base URL of the trading service, the Ethereum side of the trade.
pub const TRADING_SERVICE_URL: &str = "ALICE_COMIT_NODE_PID";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    exchange_service: String,
    trading_service: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("env variable {variable} must be set to the base URL of the {service}")]
pub struct ConfigError {
    pub variable: &'static str,
    pub service: &'static str,
}

impl Endpoints {
    /// Both variables are required, whichever action is going to run.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let exchange_service = base_url(&lookup, EXCHANGE_SERVICE_URL, "exchange service")?;
        let trading_service = base_url(&lookup, TRADING_SERVICE_URL, "trading service")?;

        tracing::debug!(
            "exchange service at {}, trading service at {}",
            exchange_service,
            trading_service
        );

        Ok(Endpoints {
            exchange_service,
            trading_service,
        })
    }

    pub fn exchange_service(&self) -> &str {
        &self.exchange_service
    }

    pub fn trading_service(&self) -> &str {
        &self.trading_service
    }
}

fn base_url<F>(lookup: &F, variable: &'static str, service: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(variable) {
        Some(url) if !url.is_empty() => Ok(url.trim_end_matches('/').to_owned()),
        _ => Err(ConfigError { variable, service }),
    }
}
