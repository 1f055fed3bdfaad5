//! Environment configuration for the precis server.
//!
//! | Variable          | Meaning                                   | Default        |
//! |-------------------|-------------------------------------------|----------------|
//! | `OPENAI_API_KEY`  | Provider credential (read by the SDK)     | required       |
//! | `PRECIS_MAX_COST` | Per-request cost ceiling, currency units  | `0.05`         |
//! | `PRECIS_MODEL`    | Pin all requests to one model tier        | auto-select    |
//! | `PRECIS_BIND`     | Listen address                            | `0.0.0.0:3000` |

use precis_core::{CostCeiling, ModelTier};

/// Default listen address.
pub const DEFAULT_BIND: &str = "0.0.0.0:3000";

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {var}={value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Resolved server configuration.
///
/// Read once at startup; immutable afterwards. The provider credential is
/// deliberately not part of this struct - the SDK reads and validates it
/// when the client is constructed, keeping the secret out of config dumps.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Per-request cost ceiling.
    pub max_cost: CostCeiling,

    /// Pin requests to this tier instead of selecting by input size.
    pub model_override: Option<ModelTier>,

    /// Listen address for the HTTP server.
    pub bind: String,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(get: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let max_cost = match get("PRECIS_MAX_COST") {
            Some(raw) => {
                let amount: f64 = raw.parse().map_err(|_| ConfigError::Invalid {
                    var: "PRECIS_MAX_COST",
                    value: raw.clone(),
                    reason: "not a number".to_string(),
                })?;
                if !amount.is_finite() || amount < 0.0 {
                    return Err(ConfigError::Invalid {
                        var: "PRECIS_MAX_COST",
                        value: raw,
                        reason: "must be a non-negative amount".to_string(),
                    });
                }
                CostCeiling::new(amount)
            }
            None => CostCeiling::default(),
        };

        // Unlike pricing lookups, configuration is strict: a typo here
        // should stop the server, not silently select the baseline tier.
        let model_override = match get("PRECIS_MODEL") {
            Some(raw) => Some(ModelTier::parse(&raw).ok_or_else(|| ConfigError::Invalid {
                var: "PRECIS_MODEL",
                value: raw.clone(),
                reason: "unknown model tier".to_string(),
            })?),
            None => None,
        };

        let bind = get("PRECIS_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());

        Ok(Self {
            max_cost,
            model_override,
            bind,
        })
    }
}
