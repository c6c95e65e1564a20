use std::{
    env,
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

/// Address bound when `HOST` is unset
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Port bound when `PORT` is unset
pub const DEFAULT_PORT: u16 = 8080;

/// Error raised when the environment or `.env` file holds an unusable value
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidDotEnv(String),
    InvalidHost(String),
    InvalidPort(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::InvalidDotEnv(reason) => write!(f, "Failed to load .env file: {reason}"),
            Self::InvalidHost(value) => write!(f, "HOST is not a valid IP address: {value:?}"),
            Self::InvalidPort(value) => write!(f, "PORT is not a valid port number: {value:?}"),
        }
    }
}

impl Error for ConfigError {}

/// Server settings read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment, after loading `.env` if present
    pub fn from_env() -> Result<Self, ConfigError> {
        check_dotenv(dotenvy::dotenv())?;

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup
    ///
    /// # Arguments
    /// * `lookup` - Returns the value for a variable name, or `None` when unset
    ///
    /// # Returns
    /// * The parsed `Config`, with defaults for unset or empty variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = match read("HOST") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(value))?,
            None => DEFAULT_HOST,
        };

        let port = match read("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    /// Socket address the server listens on
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Accepts a missing `.env` file but rejects one that exists and cannot be read or parsed
fn check_dotenv<T>(loaded: dotenvy::Result<T>) -> Result<(), ConfigError> {
    match loaded {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(ConfigError::InvalidDotEnv(e.to_string())),
    }
}
