use std::env;

const DEFAULT_GEMINI_MODEL: &str = "models/gemini-2.0-flash";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub host: String,
    pub port: u16,
    pub generation_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let gemini_api_key = lookup("GEMINI_API_KEY").filter(|key| !key.trim().is_empty());
        let gemini_model =
            lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
        let host = lookup("API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("API_PORT") {
            Some(value) => value
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid API_PORT '{}': {}", value, e))?,
            None => DEFAULT_PORT,
        };

        let generation_timeout_secs = match lookup("GENERATION_TIMEOUT_SECS") {
            Some(value) => value.parse().map_err(|e| {
                anyhow::anyhow!("Invalid GENERATION_TIMEOUT_SECS '{}': {}", value, e)
            })?,
            None => DEFAULT_GENERATION_TIMEOUT_SECS,
        };

        Ok(Self {
            gemini_api_key,
            gemini_model,
            host,
            port,
            generation_timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.gemini_api_key, None);
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.generation_timeout_secs, 30);
    }

    #[test]
    fn test_blank_api_key_is_ignored() {
        let config = config_from(&[("GEMINI_API_KEY", "  ")]).unwrap();
        assert_eq!(config.gemini_api_key, None);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("GEMINI_API_KEY", "secret"),
            ("API_PORT", "9090"),
            ("GENERATION_TIMEOUT_SECS", "5"),
        ])
        .unwrap();

        assert_eq!(config.gemini_api_key.as_deref(), Some("secret"));
        assert_eq!(config.port, 9090);
        assert_eq!(config.generation_timeout_secs, 5);
    }

    #[test]
    fn test_invalid_port() {
        assert!(config_from(&[("API_PORT", "eighty")]).is_err());
    }
}
