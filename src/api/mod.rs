//! Workers KV REST API — models, cursor pagination, and the HTTP client.

pub mod client;
pub mod models;
pub mod pagination;

pub use client::{HttpResponse, KvClient, Transport, UreqTransport};
pub use models::{KeyEntry, Namespace};
