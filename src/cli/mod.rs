//! CLI module — Clap argument parser, output helpers, pickers, and commands.

pub mod commands;
pub mod output;
pub mod prompt;

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::config::{Credentials, Settings, Target};
use crate::errors::Result;

/// kvpeek CLI: browse Workers KV namespaces and keys, then print a value.
#[derive(Parser)]
#[command(
    name = "kvpeek",
    about = "Browse Cloudflare Workers KV namespaces and keys, then print a value",
    version
)]
pub struct Cli {
    /// Cloudflare account ID
    #[arg(long, env = "CLOUDFLARE_ACCOUNT_ID", value_name = "ID")]
    pub account_id: Option<String>,

    /// Cloudflare account email
    #[arg(long, env = "CLOUDFLARE_AUTH_EMAIL", value_name = "EMAIL")]
    pub account_email: Option<String>,

    /// Cloudflare global API key
    #[arg(long, env = "CLOUDFLARE_AUTH_KEY", value_name = "KEY", hide_env_values = true)]
    pub account_key: Option<String>,

    /// Namespace title (picked interactively if omitted or not found)
    #[arg(short, long, env = "CLOUDFLARE_KV_NAMESPACE", value_name = "TITLE")]
    pub namespace: Option<String>,

    /// Key name (picked interactively if omitted)
    #[arg(short, long, env = "CLOUDFLARE_KV_KEY", value_name = "NAME")]
    pub key: Option<String>,

    /// List namespaces in a table and exit
    #[arg(long)]
    pub list: bool,

    /// Path to config file (default: ~/.config/kvpeek/config.toml)
    #[arg(long, env = "KVPEEK_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log requests to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Merge flag/env credentials into a validated `Credentials`.
    pub fn credentials(&self) -> Result<Credentials> {
        Credentials::resolve(
            self.account_id.as_deref(),
            self.account_email.as_deref(),
            self.account_key.as_deref(),
        )
    }

    /// Namespace and key requested up front, if any.
    pub fn target(&self) -> Target {
        Target::new(self.namespace.as_deref(), self.key.as_deref())
    }

    /// Load settings from `--config`, or the default location.
    pub fn settings(&self) -> Result<Settings> {
        match self.config.clone().or_else(Settings::default_path) {
            Some(path) => Settings::load(&path),
            None => Ok(Settings::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_map_to_target() {
        let cli = Cli::try_parse_from(["kvpeek", "-n", "prod", "--key", "feature-flag"]).unwrap();
        let target = cli.target();
        assert_eq!(target.namespace.as_deref(), Some("prod"));
        assert_eq!(target.key.as_deref(), Some("feature-flag"));
    }

    #[test]
    fn flags_map_to_credentials() {
        let cli = Cli::try_parse_from([
            "kvpeek",
            "--account-id",
            "acc",
            "--account-email",
            "ops@example.com",
            "--account-key",
            "k",
        ])
        .unwrap();
        let creds = cli.credentials().unwrap();
        assert_eq!(creds.account_id, "acc");
        assert_eq!(creds.auth_email, "ops@example.com");
    }

    #[test]
    fn completions_shell_is_validated_by_clap() {
        let cli = Cli::try_parse_from(["kvpeek", "--completions", "zsh"]).unwrap();
        assert_eq!(cli.completions, Some(Shell::Zsh));

        let err = Cli::try_parse_from(["kvpeek", "--completions", "csh"])
            .err()
            .expect("unknown shell should be rejected");
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn blank_namespace_flag_is_ignored() {
        let cli = Cli::try_parse_from(["kvpeek", "-n", "  ", "-k", "feature-flag"]).unwrap();
        assert_eq!(cli.target().namespace, None);
    }

    #[test]
    fn explicit_config_path_is_used() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("kvpeek.toml");
        std::fs::write(&path, "prompt_limit = 4\n").unwrap();

        let cli = Cli::try_parse_from(["kvpeek", "--config", path.to_str().unwrap()]).unwrap();
        assert_eq!(cli.settings().unwrap().prompt_limit, 4);
    }
}
