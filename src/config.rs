use crate::cycle::{DEFAULT_CYCLE_LENGTH, is_valid_cycle_length};
use crate::meditation::{DEFAULT_DURATION_MINUTES, is_duration_preset};
use std::{env, net::SocketAddr};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub cycle_length: u32,
    pub meditation_minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            cycle_length: DEFAULT_CYCLE_LENGTH,
            meditation_minutes: DEFAULT_DURATION_MINUTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Invalid values fall back to the defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup("PORT").map(|v| v.parse::<u16>()) {
            Some(Ok(value)) => value,
            Some(Err(err)) => {
                warn!("PORT is not a valid port ({err}), using {}", defaults.port);
                defaults.port
            }
            None => defaults.port,
        };

        let cycle_length = match lookup("DEFAULT_CYCLE_LENGTH").map(|v| v.parse::<u32>()) {
            Some(Ok(value)) if is_valid_cycle_length(value) => value,
            Some(_) => {
                warn!(
                    "DEFAULT_CYCLE_LENGTH must be between 21 and 35, using {}",
                    defaults.cycle_length
                );
                defaults.cycle_length
            }
            None => defaults.cycle_length,
        };

        let meditation_minutes =
            match lookup("DEFAULT_MEDITATION_MINUTES").map(|v| v.parse::<u32>()) {
                Some(Ok(value)) if is_duration_preset(value) => value,
                Some(_) => {
                    warn!(
                        "DEFAULT_MEDITATION_MINUTES must be one of 1, 3, 5, 10, 15, 20, using {}",
                        defaults.meditation_minutes
                    );
                    defaults.meditation_minutes
                }
                None => defaults.meditation_minutes,
            };

        Self {
            port,
            cycle_length,
            meditation_minutes,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
