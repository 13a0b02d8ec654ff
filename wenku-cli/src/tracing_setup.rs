//! Tracing setup for the wenku CLI
//!
//! Usage:
//!   wenku --debug serve              # Debug logging to console
//!   RUST_LOG=wenku_server=debug wenku serve
//!
//! `RUST_LOG` always wins over `--debug` when it is set.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConfig {
    /// Default to `debug` instead of `info`
    pub debug: bool,
}

impl TracingConfig {
    fn default_directive(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

/// Install the global compact console subscriber.
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_selects_directive() {
        assert_eq!(TracingConfig { debug: true }.default_directive(), "debug");
        assert_eq!(TracingConfig::default().default_directive(), "info");
    }

    // The error reaches main, which reports it instead of running unlogged.
    #[test]
    fn second_init_is_an_error() {
        let _ = init(&TracingConfig::default());
        assert!(init(&TracingConfig::default()).is_err());
    }
}
