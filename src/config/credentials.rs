use std::fmt;

use zeroize::Zeroizing;

use crate::errors::{KvPeekError, Result};

pub const ACCOUNT_ID_VAR: &str = "CLOUDFLARE_ACCOUNT_ID";
pub const AUTH_EMAIL_VAR: &str = "CLOUDFLARE_AUTH_EMAIL";
pub const AUTH_KEY_VAR: &str = "CLOUDFLARE_AUTH_KEY";

/// Account credentials for the Cloudflare API, resolved once at startup.
///
/// The auth key is held in a `Zeroizing<String>` so it is wiped from
/// memory on drop, and `Debug` never prints it.
#[derive(Clone)]
pub struct Credentials {
    pub account_id: String,
    pub auth_email: String,
    pub auth_key: Zeroizing<String>,
}

impl Credentials {
    /// Build credentials from already-merged flag/env values.
    ///
    /// Values are checked in order (account id, email, key); the first
    /// missing or empty one is reported by its environment variable name.
    pub fn resolve(
        account_id: Option<&str>,
        auth_email: Option<&str>,
        auth_key: Option<&str>,
    ) -> Result<Self> {
        let account_id = require(account_id, ACCOUNT_ID_VAR)?;
        let auth_email = require(auth_email, AUTH_EMAIL_VAR)?;
        let auth_key = require(auth_key, AUTH_KEY_VAR)?;

        Ok(Self {
            account_id,
            auth_email,
            auth_key: Zeroizing::new(auth_key),
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("auth_email", &self.auth_email)
            .field("auth_key", &"<redacted>")
            .finish()
    }
}

fn require(value: Option<&str>, var: &'static str) -> Result<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(KvPeekError::MissingCredential(var)),
    }
}

/// What the operator asked for up front. Anything left `None` is picked
/// interactively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Target {
    /// Namespace title.
    pub namespace: Option<String>,
    /// Key name.
    pub key: Option<String>,
}

impl Target {
    pub fn new(namespace: Option<&str>, key: Option<&str>) -> Self {
        let non_empty = |v: Option<&str>| v.filter(|s| !s.trim().is_empty()).map(str::to_string);
        Self {
            namespace: non_empty(namespace),
            key: non_empty(key),
        }
    }
}
