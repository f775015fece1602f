use std::fmt;
use std::time::Duration;

use crate::args::Args;
use crate::utils::constants::{DEFAULT_ACCT_BASE, DEFAULT_TIMEOUT_SECS};

/// Connection settings for one ACCT group lookup, resolved once at start-up.
#[derive(Clone, PartialEq, Eq)]
pub struct AcctConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub group_id: String,
    pub timeout: Duration,
}

impl Default for AcctConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ACCT_BASE.to_string(),
            username: String::new(),
            password: String::new(),
            group_id: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl From<&Args> for AcctConfig {
    fn from(args: &Args) -> Self {
        Self {
            base_url: args.base.clone(),
            username: args.user.clone(),
            password: args.pass.clone(),
            group_id: args.group_id.clone(),
            timeout: Duration::from_secs(args.timeout),
        }
    }
}

// Keeps the password out of debug logs.
impl fmt::Debug for AcctConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AcctConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"***")
            .field("group_id", &self.group_id)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    fn default_of(id: &str) -> String {
        let cmd = Args::command();
        let arg = cmd
            .get_arguments()
            .find(|a| a.get_id() == id)
            .expect("argument exists");
        arg.get_default_values()
            .first()
            .map(|v| v.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = AcctConfig::default();
        assert_eq!(config.base_url, "https://test.acct.dk/rest/current");
        assert_eq!(config.username, "");
        assert_eq!(config.password, "");
        assert_eq!(config.group_id, "");
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn cli_defaults_agree_with_config_defaults() {
        assert_eq!(default_of("base"), "https://test.acct.dk/rest/current");
        assert_eq!(default_of("user"), "");
        assert_eq!(default_of("pass"), "");
        assert_eq!(default_of("group_id"), "");
        assert_eq!(default_of("timeout"), "15");
    }

    #[test]
    fn flags_flow_into_config() {
        let args = Args::try_parse_from([
            "acct-group-users",
            "--base",
            "http://localhost:8080/rest",
            "--user",
            "svc",
            "--pass",
            "secret",
            "--group-id",
            "g-1",
            "--timeout",
            "3",
        ])
        .expect("parse");
        let config = AcctConfig::from(&args);

        assert_eq!(config.base_url, "http://localhost:8080/rest");
        assert_eq!(config.username, "svc");
        assert_eq!(config.password, "secret");
        assert_eq!(config.group_id, "g-1");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn debug_output_hides_password() {
        let config = AcctConfig {
            password: "hunter2".to_string(),
            ..AcctConfig::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("***"));
    }
}
