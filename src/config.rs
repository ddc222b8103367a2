//! Startup configuration.
//!
//! Defaults match the classic 80×80 board at 15 ticks per second; the grid
//! size and tick rate can be overridden through environment variables.

use crate::error::{ConfigError, Result};
use std::str::FromStr;

/// Environment variable overriding [`Config::grid_size`]
pub const GRID_SIZE_VAR: &str = "LIFE_GRID_SIZE";
/// Environment variable overriding [`Config::ticks_per_second`]
pub const TICK_RATE_VAR: &str = "LIFE_TICKS_PER_SECOND";

/// Largest grid that still steps comfortably in real time on one thread
pub const MAX_GRID_SIZE: usize = 512;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Side length N of the square grid
    pub grid_size: usize,
    /// Upper bound on simulation ticks per second
    pub ticks_per_second: f64,
    pub window_width: i32,
    pub window_height: i32,
    pub window_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: 80,
            ticks_per_second: 15.0,
            window_width: 1200,
            window_height: 1200,
            window_title: "Conway's Game of Life".to_owned(),
        }
    }
}

impl Config {
    /// Defaults with overrides from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides from `lookup`, validated
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(size) = parse_var(&lookup, GRID_SIZE_VAR)? {
            config.grid_size = size;
        }
        if let Some(rate) = parse_var(&lookup, TICK_RATE_VAR)? {
            config.ticks_per_second = rate;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridSize {
                size: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }
        if !self.ticks_per_second.is_finite() || self.ticks_per_second <= 0.0 {
            return Err(ConfigError::TickRate(self.ticks_per_second));
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key, value })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.grid_size, 80);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (GRID_SIZE_VAR, " 120 "),
            (TICK_RATE_VAR, "30"),
        ]))
        .unwrap();
        assert_eq!(config.grid_size, 120);
        assert_eq!(config.ticks_per_second, 30.0);
    }

    #[test]
    fn test_unparsable_value() {
        let err = Config::from_lookup(lookup_from(&[(GRID_SIZE_VAR, "big")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: GRID_SIZE_VAR,
                value: "big".to_owned()
            }
        );
    }

    #[test]
    fn test_grid_size_range() {
        for size in ["0", "513"] {
            let err = Config::from_lookup(lookup_from(&[(GRID_SIZE_VAR, size)])).unwrap_err();
            assert!(matches!(err, ConfigError::GridSize { .. }), "{size}: {err}");
        }
    }

    #[test]
    fn test_tick_rate_must_be_positive() {
        for rate in ["0", "-2", "inf", "NaN"] {
            let err = Config::from_lookup(lookup_from(&[(TICK_RATE_VAR, rate)])).unwrap_err();
            assert!(matches!(err, ConfigError::TickRate(_)), "{rate}: {err}");
        }
    }
}
