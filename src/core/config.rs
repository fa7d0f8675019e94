use std::path::PathBuf;

pub const DEFAULT_FEED_URL: &str = "https://remoteok.io/remote-dev-jobs.rss";
pub const CACHE_FILE_NAME: &str = ".rok";

const FEED_URL_ENV: &str = "ROK_FEED_URL";
const CACHE_FILE_ENV: &str = "ROK_CACHE_FILE";
const HOME_ENV: &str = "HOME";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("home directory is not set; cannot locate the .rok cache file")]
    MissingHome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub feed_url: String,
    pub cache_path: PathBuf,
}

impl Config {
    pub fn new(feed_url: impl Into<String>, cache_path: impl Into<PathBuf>) -> Self {
        Self {
            feed_url: feed_url.into(),
            cache_path: cache_path.into(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::from_filename(".env.local");
        Self::resolve(
            std::env::var(FEED_URL_ENV).ok(),
            std::env::var_os(CACHE_FILE_ENV).map(PathBuf::from),
            home_dir(),
        )
    }

    fn resolve(
        feed_url: Option<String>,
        cache_path: Option<PathBuf>,
        home: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let feed_url = feed_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FEED_URL.to_string());
        let cache_path = match cache_path {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => home.ok_or(ConfigError::MissingHome)?.join(CACHE_FILE_NAME),
        };
        Ok(Self::new(feed_url, cache_path))
    }
}

// An empty HOME counts as unset.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os(HOME_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_public_feed_and_home_cache() {
        let config = Config::resolve(None, None, Some(PathBuf::from("/home/jobs")))
            .expect("home is set");
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
        assert_eq!(config.cache_path, PathBuf::from("/home/jobs/.rok"));
    }

    #[test]
    fn overrides_take_precedence() {
        let config = Config::resolve(
            Some("http://localhost:9000/feed.rss".to_string()),
            Some(PathBuf::from("/tmp/jobs.json")),
            None,
        )
        .expect("override needs no home");
        assert_eq!(config.feed_url, "http://localhost:9000/feed.rss");
        assert_eq!(config.cache_path, PathBuf::from("/tmp/jobs.json"));
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let config = Config::resolve(
            Some("  ".to_string()),
            Some(PathBuf::new()),
            Some(PathBuf::from("/home/jobs")),
        )
        .expect("home is set");
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
        assert_eq!(config.cache_path, PathBuf::from("/home/jobs/.rok"));
    }

    #[test]
    fn missing_home_is_an_error() {
        let error = Config::resolve(None, None, None).expect_err("must fail");
        assert!(matches!(error, ConfigError::MissingHome));
    }

    // Only test touching the process environment.
    #[test]
    fn from_env_reads_home_variable() {
        let saved_home = std::env::var_os(HOME_ENV);
        let saved_cache = std::env::var_os(CACHE_FILE_ENV);
        std::env::remove_var(CACHE_FILE_ENV);

        std::env::remove_var(HOME_ENV);
        let unset = Config::from_env();
        std::env::set_var(HOME_ENV, "");
        let empty = Config::from_env();
        std::env::set_var(HOME_ENV, "/home/jobs");
        let set = Config::from_env();

        match saved_home {
            Some(value) => std::env::set_var(HOME_ENV, value),
            None => std::env::remove_var(HOME_ENV),
        }
        if let Some(value) = saved_cache {
            std::env::set_var(CACHE_FILE_ENV, value);
        }

        assert!(matches!(unset, Err(ConfigError::MissingHome)));
        assert!(matches!(empty, Err(ConfigError::MissingHome)));
        assert_eq!(
            set.expect("home is set").cache_path,
            PathBuf::from("/home/jobs/.rok")
        );
    }
}
