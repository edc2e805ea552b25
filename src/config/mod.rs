use std::env;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ROSTER_URL: &str =
    "https://raw.githubusercontent.com/I-Am-Mei/Nation_State_images/main/delegates.json";
pub const DEFAULT_API_URL: &str = "https://www.nationstates.net/cgi-bin/api.cgi";
pub const DEFAULT_USER_AGENT: &str =
    "Delegate Vote Watcher (set VOTE_USER_AGENT to add contact info)";
const DEFAULT_DELAY_MS: u64 = 1000;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a whole number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("VOTE_USER_AGENT must not be blank; the vote API rejects anonymous clients")]
    MissingUserAgent,
    #[error("REQUEST_TIMEOUT_SECS must be greater than zero")]
    ZeroTimeout,
}

/// Startup parameters for a polling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub roster_url: String,
    pub api_url: String,
    pub user_agent: String,
    /// Pause between two consecutive vote requests.
    pub request_delay: Duration,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_url: DEFAULT_ROSTER_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_delay: Duration::from_millis(DEFAULT_DELAY_MS),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let user_agent = lookup("VOTE_USER_AGENT").unwrap_or(defaults.user_agent);
        if user_agent.trim().is_empty() {
            return Err(ConfigError::MissingUserAgent);
        }

        let delay_ms = parse_u64(&lookup, "REQUEST_DELAY_MS", DEFAULT_DELAY_MS)?;
        let timeout_secs = parse_u64(&lookup, "REQUEST_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            roster_url: lookup("ROSTER_URL").unwrap_or(defaults.roster_url),
            api_url: lookup("VOTE_API_URL").unwrap_or(defaults.api_url),
            user_agent,
            request_delay: Duration::from_millis(delay_ms),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_u64<F>(lookup: &F, key: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
    }
}
