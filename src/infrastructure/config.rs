use anyhow::Context;
use serde::Deserialize;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_USER: &str = "admin";
const DEFAULT_PASS: &str = "admin";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Raw process environment, lowercased by `config::Environment`.
#[derive(Debug, Deserialize)]
struct EnvSettings {
    sheet_id: Option<String>,
    cases_gid: Option<String>,
    suspects_gid: Option<String>,
    seizures_gid: Option<String>,
    app_user: Option<String>,
    basic_auth_user: Option<String>,
    app_pass: Option<String>,
    basic_auth_pass: Option<String>,
    bind_addr: Option<String>,
    fetch_timeout_secs: Option<String>,
}

/// Spreadsheet id and the three tab ids. Empty means not configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetConfig {
    pub sheet_id: String,
    pub cases_gid: String,
    pub suspects_gid: String,
    pub seizures_gid: String,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sheets: SheetConfig,
    pub credentials: Credentials,
    pub bind_addr: SocketAddr,
    pub fetch_timeout: Duration,
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_from(config::Environment::default())
}

fn load_from(source: config::Environment) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(source)
        .build()
        .context("Failed to read environment")?;

    let env: EnvSettings = settings
        .try_deserialize()
        .context("Invalid environment configuration")?;

    AppConfig::from_env(env)
}

impl AppConfig {
    fn from_env(env: EnvSettings) -> anyhow::Result<Self> {
        let bind_addr = env
            .bind_addr
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .with_context(|| format!("Invalid BIND_ADDR: {}", bind_addr))?;

        let fetch_timeout_secs = match env.fetch_timeout_secs.filter(|s| !s.is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("Invalid FETCH_TIMEOUT_SECS: {}", raw))?,
            None => DEFAULT_FETCH_TIMEOUT_SECS,
        };
        if fetch_timeout_secs == 0 {
            anyhow::bail!("FETCH_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Self {
            sheets: SheetConfig {
                sheet_id: env.sheet_id.unwrap_or_default(),
                cases_gid: env.cases_gid.unwrap_or_default(),
                suspects_gid: env.suspects_gid.unwrap_or_default(),
                seizures_gid: env.seizures_gid.unwrap_or_default(),
            },
            credentials: Credentials {
                username: first_non_empty(env.app_user, env.basic_auth_user, DEFAULT_USER),
                password: first_non_empty(env.app_pass, env.basic_auth_pass, DEFAULT_PASS),
            },
            bind_addr,
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
        })
    }
}

fn first_non_empty(primary: Option<String>, fallback: Option<String>, default: &str) -> String {
    primary
        .filter(|s| !s.is_empty())
        .or(fallback.filter(|s| !s.is_empty()))
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        load_from(config::Environment::default().source(Some(map)))
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.sheets, SheetConfig::default());
        assert_eq!(config.credentials.username, "admin");
        assert_eq!(config.credentials.password, "admin");
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_sheet_values() {
        let config = load(&[
            ("SHEET_ID", "1AbC"),
            ("CASES_GID", "0"),
            ("SUSPECTS_GID", "123"),
            ("SEIZURES_GID", "456"),
        ])
        .unwrap();

        assert_eq!(config.sheets.sheet_id, "1AbC");
        assert_eq!(config.sheets.cases_gid, "0");
        assert_eq!(config.sheets.suspects_gid, "123");
        assert_eq!(config.sheets.seizures_gid, "456");
    }

    #[test]
    fn test_app_credentials_win_over_basic_auth_names() {
        let config = load(&[
            ("APP_USER", "alice"),
            ("BASIC_AUTH_USER", "bob"),
            ("APP_PASS", "s3cret"),
            ("BASIC_AUTH_PASS", "other"),
        ])
        .unwrap();

        assert_eq!(config.credentials.username, "alice");
        assert_eq!(config.credentials.password, "s3cret");
    }

    #[test]
    fn test_empty_primary_falls_back() {
        let config = load(&[
            ("APP_USER", ""),
            ("BASIC_AUTH_USER", "bob"),
            ("BASIC_AUTH_PASS", "pw"),
        ])
        .unwrap();

        assert_eq!(config.credentials.username, "bob");
        assert_eq!(config.credentials.password, "pw");
    }

    #[test]
    fn test_server_settings() {
        let config = load(&[("BIND_ADDR", "127.0.0.1:9000"), ("FETCH_TIMEOUT_SECS", "3")]).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.fetch_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_empty_fetch_timeout_uses_default() {
        let config = load(&[("FETCH_TIMEOUT_SECS", ""), ("BIND_ADDR", "")]).unwrap();

        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn test_invalid_fetch_timeout() {
        let zero = load(&[("FETCH_TIMEOUT_SECS", "0")]).unwrap_err();
        assert!(zero.to_string().contains("greater than zero"));

        let garbage = load(&[("FETCH_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(garbage.to_string().contains("Invalid FETCH_TIMEOUT_SECS"));
    }

    #[test]
    fn test_invalid_bind_addr() {
        assert!(load(&[("BIND_ADDR", "not-an-address")]).is_err());
    }

    #[test]
    fn test_password_is_redacted() {
        let creds = Credentials {
            username: "admin".to_string(),
            password: "hunter2".to_string(),
        };
        let debug = format!("{:?}", creds);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }
}
