//! Server settings read from the environment.
//!
//! | variable                   | default     |
//! |----------------------------|-------------|
//! | `COMMENT_BOX_HOST`         | `127.0.0.1` |
//! | `COMMENT_BOX_PORT`         | `8080`      |
//! | `COMMENT_BOX_OPEN_BROWSER` | `true`      |

use std::env;

const HOST_VAR: &str = "COMMENT_BOX_HOST";
const PORT_VAR: &str = "COMMENT_BOX_PORT";
const OPEN_BROWSER_VAR: &str = "COMMENT_BOX_OPEN_BROWSER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            open_browser: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source; unset or blank values
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(host) = get(HOST_VAR) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = get(PORT_VAR) {
            config.port = port
                .trim()
                .parse()
                .map_err(|e| format!("{} must be a port number, got {:?}: {}", PORT_VAR, port, e))?;
        }
        if let Some(flag) = get(OPEN_BROWSER_VAR) {
            config.open_browser = parse_flag(&flag)
                .ok_or_else(|| format!("{} must be true or false, got {:?}", OPEN_BROWSER_VAR, flag))?;
        }
        Ok(config)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_all_variables() {
        let config = config_from(&[
            (HOST_VAR, "0.0.0.0"),
            (PORT_VAR, " 9000 "),
            (OPEN_BROWSER_VAR, "No"),
        ])
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert!(!config.open_browser);
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = config_from(&[(HOST_VAR, "  "), (PORT_VAR, "")]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn rejects_bad_port() {
        let err = config_from(&[(PORT_VAR, "70000")]).unwrap_err();
        assert!(err.contains(PORT_VAR));
        assert!(config_from(&[(PORT_VAR, "http")]).is_err());
    }

    #[test]
    fn rejects_bad_flag() {
        let err = config_from(&[(OPEN_BROWSER_VAR, "maybe")]).unwrap_err();
        assert!(err.contains(OPEN_BROWSER_VAR));
    }
}
