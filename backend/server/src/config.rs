use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

use crate::error::AppError;

pub const PORT_KEY: &str = "RUST_PORT";
pub const DATA_KEY: &str = "PRESIDENTS_CSV";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        Ok(Self {
            port: try_load(PORT_KEY, "5000")?,
            data_path: try_load(DATA_KEY, bank::BANK_PATH)?,
        })
    }

    /// Command line flags win over the environment.
    pub fn with_overrides(mut self, port: Option<u16>, data_path: Option<PathBuf>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(data_path) = data_path {
            self.data_path = data_path;
        }
        self
    }

    pub fn address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, AppError>
where
    T::Err: Display,
{
    let raw = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    parse_value(key, &raw)
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, AppError>
where
    T::Err: Display,
{
    raw.parse::<T>().map_err(|e| {
        warn!("Invalid {key} value: {e}");

        AppError::Config {
            key: key.to_string(),
            message: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port() {
        let port: u16 = parse_value(PORT_KEY, "8080").unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_parse_data_path() {
        let path: PathBuf = parse_value(DATA_KEY, "data/other.csv").unwrap();
        assert_eq!(path, PathBuf::from("data/other.csv"));
    }

    #[test]
    fn test_invalid_port() {
        let err = parse_value::<u16>(PORT_KEY, "not-a-port").unwrap_err();
        assert!(matches!(err, AppError::Config { ref key, .. } if key == PORT_KEY));

        assert!(parse_value::<u16>(PORT_KEY, "70000").is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config {
            port: 5000,
            data_path: PathBuf::from(bank::BANK_PATH),
        };

        let kept = config.clone().with_overrides(None, None);
        assert_eq!(kept.port, 5000);
        assert_eq!(kept.data_path, PathBuf::from(bank::BANK_PATH));

        let overridden = config.with_overrides(Some(8080), Some(PathBuf::from("other.csv")));
        assert_eq!(overridden.port, 8080);
        assert_eq!(overridden.data_path, PathBuf::from("other.csv"));
    }

    #[test]
    fn test_address() {
        let config = Config {
            port: 5000,
            data_path: PathBuf::from(bank::BANK_PATH),
        };
        assert_eq!(config.address(), "0.0.0.0:5000");
    }
}
