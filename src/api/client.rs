//! Authenticated GET requests against the Workers KV endpoints.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::models::{Envelope, KeyEntry, Namespace, Page};
use super::pagination::collect_pages;
use crate::config::{Credentials, Settings};
use crate::errors::{KvPeekError, Result};

pub const OP_GET_NAMESPACES: &str = "get namespaces";
pub const OP_GET_KEYS: &str = "get keys";
pub const OP_GET_KEY: &str = "get key";

const NAMESPACES_PATH: &str = "storage/kv/namespaces";

/// Workers KV allows values up to 25 MiB; leave headroom for JSON framing.
const MAX_BODY_BYTES: u64 = 32 * 1024 * 1024;

/// Characters left unescaped in path segments and query values.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Blocking HTTP GET. Any status code is a successful exchange; only
/// connection-level failures are errors.
pub trait Transport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> std::result::Result<HttpResponse, String>;
}

/// Production transport backed by a `ureq` agent.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> std::result::Result<HttpResponse, String> {
        let mut request = self.agent.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let mut response = request.call().map_err(|e| e.to_string())?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .with_config()
            .limit(MAX_BODY_BYTES)
            .read_to_string()
            .map_err(|e| e.to_string())?;

        Ok(HttpResponse { status, body })
    }
}

/// Read-only client for one account's KV namespaces.
pub struct KvClient<T = UreqTransport> {
    transport: T,
    credentials: Credentials,
    base_url: String,
    max_pages: usize,
}

impl KvClient<UreqTransport> {
    pub fn new(credentials: Credentials, settings: &Settings) -> Self {
        Self::with_transport(UreqTransport::new(), credentials, settings)
    }
}

impl<T: Transport> KvClient<T> {
    pub fn with_transport(transport: T, credentials: Credentials, settings: &Settings) -> Self {
        Self {
            transport,
            credentials,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            max_pages: settings.max_pages,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// List every namespace in the account, in service order.
    pub fn list_namespaces(&self) -> Result<Vec<Namespace>> {
        let body = self.get(OP_GET_NAMESPACES, &self.namespaces_url())?;
        let envelope: Envelope<Vec<Namespace>> = decode(OP_GET_NAMESPACES, &body)?;
        Ok(envelope.result)
    }

    /// Fetch a single page of keys, starting at `cursor` if given.
    pub fn list_keys_page(&self, namespace_id: &str, cursor: Option<&str>) -> Result<Page<KeyEntry>> {
        let mut url = format!("{}/{}/keys", self.namespaces_url(), encode(namespace_id));
        if let Some(cursor) = cursor {
            url.push_str("?cursor=");
            url.push_str(&encode(cursor));
        }

        let body = self.get(OP_GET_KEYS, &url)?;
        let envelope: Envelope<Vec<KeyEntry>> = decode(OP_GET_KEYS, &body)?;
        Ok(Page::from(envelope))
    }

    /// List every key in a namespace, following cursors across pages.
    pub fn list_keys(&self, namespace_id: &str) -> Result<Vec<KeyEntry>> {
        let keys = collect_pages(self.max_pages, |cursor| {
            self.list_keys_page(namespace_id, cursor)
        })?;
        debug!(namespace = namespace_id, keys = keys.len(), "listed keys");
        Ok(keys)
    }

    /// Fetch the value stored under `key` and decode it as JSON.
    pub fn get_value(&self, namespace_id: &str, key: &str) -> Result<serde_json::Value> {
        let url = format!(
            "{}/{}/values/{}",
            self.namespaces_url(),
            encode(namespace_id),
            encode(key)
        );
        let body = self.get(OP_GET_KEY, &url)?;
        decode(OP_GET_KEY, &body)
    }

    fn namespaces_url(&self) -> String {
        format!(
            "{}/{}/{NAMESPACES_PATH}",
            self.base_url,
            encode(&self.credentials.account_id)
        )
    }

    /// GET `url` and return the body of a 200 response.
    fn get(&self, operation: &'static str, url: &str) -> Result<String> {
        debug!(operation, url, "request");

        let user_agent = format!("kvpeek/{}", env!("CARGO_PKG_VERSION"));
        let headers = [
            ("X-Auth-Email", self.credentials.auth_email.as_str()),
            ("X-Auth-Key", self.credentials.auth_key.as_str()),
            ("Content-Type", "application/json"),
            ("User-Agent", user_agent.as_str()),
        ];

        let response = self
            .transport
            .get(url, &headers)
            .map_err(|message| KvPeekError::Transport { operation, message })?;

        if response.status != 200 {
            return Err(KvPeekError::Api {
                operation,
                status: response.status,
                body: response.body,
            });
        }

        Ok(response.body)
    }
}

fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

fn decode<D: DeserializeOwned>(operation: &'static str, body: &str) -> Result<D> {
    serde_json::from_str(body).map_err(|e| KvPeekError::Decode {
        operation,
        message: e.to_string(),
    })
}
