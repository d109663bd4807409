use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error parsing .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
    #[error("Error parsing environment: {0}")]
    Envy(#[from] envy::Error),
}

/// Server settings read from `HOST` and `PORT`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    3001
}

impl Config {
    /// Loads `.env` if there is one, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if e.not_found() {
                debug!("No .env file found");
            } else {
                return Err(e.into());
            }
        }

        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars).map_err(ConfigError::from)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_vars(Vec::new()).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:3001".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn reads_host_and_port() {
        let config = Config::from_vars(vec![
            ("HOST".to_owned(), "127.0.0.1".to_owned()),
            ("PORT".to_owned(), "8080".to_owned()),
        ])
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn rejects_bad_port() {
        let result = Config::from_vars(vec![("PORT".to_owned(), "nope".to_owned())]);
        assert!(matches!(result, Err(ConfigError::Envy(_))));
    }
}
