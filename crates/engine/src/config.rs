//! # Engine Configuration Module
//!
//! Loads availability-engine settings from environment variables, providing
//! defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `AVAILABILITY_HORIZON_DAYS`: Number of days ahead to compute
//!   availability for (default: 14)
//! - `AVAILABILITY_LEDGER_TIMEOUT_SECONDS`: Deadline for the booking-ledger
//!   read; exceeding it fails the invocation (default: 10)

use std::env;
use std::time::Duration;

use eyre::{Result, WrapErr, ensure};

/// Configuration for the availability engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Forward-looking window, in days, over which availability is computed
    pub horizon_days: u32,

    /// Deadline for the booking-ledger fetch. A timeout is treated as a
    /// non-permission-class failure, so the invocation fails rather than
    /// degrades.
    pub ledger_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            horizon_days: 14,
            ledger_timeout: Duration::from_secs(10),
        }
    }
}

impl EngineConfig {
    /// Creates an EngineConfig from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// horizon is zero.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let horizon_days = match env::var("AVAILABILITY_HORIZON_DAYS") {
            Ok(value) => value
                .parse()
                .wrap_err("Invalid AVAILABILITY_HORIZON_DAYS value")?,
            Err(_) => defaults.horizon_days,
        };
        ensure!(horizon_days > 0, "AVAILABILITY_HORIZON_DAYS must be positive");

        let ledger_timeout = match env::var("AVAILABILITY_LEDGER_TIMEOUT_SECONDS") {
            Ok(value) => Duration::from_secs(
                value
                    .parse()
                    .wrap_err("Invalid AVAILABILITY_LEDGER_TIMEOUT_SECONDS value")?,
            ),
            Err(_) => defaults.ledger_timeout,
        };

        Ok(Self {
            horizon_days,
            ledger_timeout,
        })
    }
}
