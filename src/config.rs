use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::fetch::client::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::text::stopwords::{ExcludedWords, StopwordList};

/// Number of ranked words kept per title unless configured otherwise.
pub const DEFAULT_TOP_N: usize = 10;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default, so an empty environment is valid.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    /// How many ranked words to keep per title
    pub top_n: usize,
    /// Which exclusion list to rank against
    pub stopwords: StopwordList,
    pub fetch_timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("./wordrank.db"),
            top_n: DEFAULT_TOP_N,
            stopwords: StopwordList::Builtin,
            fetch_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. `load` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let top_n = match lookup("WORDRANK_TOP_N") {
            Some(raw) => parse_top_n(&raw)?,
            None => defaults.top_n,
        };

        let stopwords = match lookup("WORDRANK_STOPWORDS").as_deref() {
            None | Some("builtin") => StopwordList::Builtin,
            Some("english") => StopwordList::English,
            Some(other) => anyhow::bail!(
                "WORDRANK_STOPWORDS must be 'builtin' or 'english', got '{other}'"
            ),
        };

        let fetch_timeout = match lookup("WORDRANK_FETCH_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().with_context(|| {
                    format!("WORDRANK_FETCH_TIMEOUT_SECS must be a whole number of seconds, got '{raw}'")
                })?;
                Duration::from_secs(secs)
            }
            None => defaults.fetch_timeout,
        };

        Ok(Self {
            db_path: lookup("WORDRANK_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            top_n,
            stopwords,
            fetch_timeout,
            user_agent: lookup("WORDRANK_USER_AGENT").unwrap_or(defaults.user_agent),
        })
    }

    /// The exclusion set selected by `stopwords`.
    pub fn excluded_words(&self) -> ExcludedWords {
        ExcludedWords::for_list(self.stopwords)
    }
}

/// Parse a top-N override; zero is rejected because it would store nothing.
pub fn parse_top_n(raw: &str) -> Result<usize> {
    let n: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("WORDRANK_TOP_N must be a positive integer, got '{raw}'"))?;
    if n == 0 {
        anyhow::bail!("WORDRANK_TOP_N must be at least 1");
    }
    Ok(n)
}
