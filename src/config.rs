use crate::constants::{
    DEFAULT_BATCH_SIZE, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, ENV_API_BASE, ENV_API_KEY,
    ENV_API_KEY_FALLBACK, ENV_BATCH_SIZE, ENV_MODEL, ENV_TIMEOUT_SECS, GEMINI_API_BASE,
};
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub batch_size: usize,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: GEMINI_API_BASE.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `GEMINI_API_KEY`, falling back to `API_KEY`. Blank values count
    /// as unset; unparsable numbers keep the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        let api_key = non_blank_var(ENV_API_KEY).or_else(|| non_blank_var(ENV_API_KEY_FALLBACK));
        if let Some(key) = api_key {
            config = config.with_api_key(key);
        }
        if let Some(model) = non_blank_var(ENV_MODEL) {
            config = config.with_model(model);
        }
        if let Some(api_base) = non_blank_var(ENV_API_BASE) {
            config = config.with_api_base(api_base);
        }
        if let Some(batch_size) = parsed_var(ENV_BATCH_SIZE) {
            config = config.with_batch_size(batch_size);
        }
        if let Some(secs) = parsed_var(ENV_TIMEOUT_SECS) {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn non_blank_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parsed_var<T: FromStr>(name: &str) -> Option<T> {
    non_blank_var(name).and_then(|value| value.trim().parse().ok())
}
