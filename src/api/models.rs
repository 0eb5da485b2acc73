//! Wire types for the Workers KV REST endpoints.

use serde::Deserialize;

/// A KV namespace as returned by the namespace listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Namespace {
    pub id: String,
    pub title: String,
}

/// One entry of a key listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeyEntry {
    pub name: String,
    /// Unix timestamp after which the key expires, if set.
    #[serde(default)]
    pub expiration: Option<u64>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// Standard `{ "result": ..., "result_info": ... }` response wrapper.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub result: T,
    #[serde(default)]
    pub result_info: Option<ResultInfo>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResultInfo {
    #[serde(default)]
    pub cursor: Option<String>,
}

/// One page of a cursor-paginated listing.
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Continuation token; `None` on the last page.
    pub cursor: Option<String>,
}

impl<T> From<Envelope<Vec<T>>> for Page<T> {
    fn from(envelope: Envelope<Vec<T>>) -> Self {
        let cursor = envelope
            .result_info
            .and_then(|info| info.cursor)
            .filter(|c| !c.is_empty());
        Self {
            items: envelope.result,
            cursor,
        }
    }
}

/// Something the operator can pick by its display label.
pub trait Labeled {
    fn label(&self) -> &str;
}

impl Labeled for Namespace {
    fn label(&self) -> &str {
        &self.title
    }
}

impl Labeled for KeyEntry {
    fn label(&self) -> &str {
        &self.name
    }
}

/// Find the item whose label equals `label` exactly.
pub fn find_by_label<'a, T: Labeled>(items: &'a [T], label: &str) -> Option<&'a T> {
    items.iter().find(|item| item.label() == label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_keeps_non_empty_cursor() {
        let envelope: Envelope<Vec<KeyEntry>> = serde_json::from_str(
            r#"{"result":[{"name":"a"},{"name":"b","expiration":1700000000}],
                "result_info":{"count":2,"cursor":"abc"}}"#,
        )
        .unwrap();
        let page = Page::from(envelope);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].expiration, Some(1_700_000_000));
        assert_eq!(page.cursor.as_deref(), Some("abc"));
    }

    #[test]
    fn page_without_result_info_is_last() {
        let envelope: Envelope<Vec<KeyEntry>> =
            serde_json::from_str(r#"{"result":[{"name":"only"}]}"#).unwrap();
        assert!(Page::from(envelope).cursor.is_none());
    }

    #[test]
    fn empty_cursor_counts_as_last_page() {
        let envelope: Envelope<Vec<KeyEntry>> =
            serde_json::from_str(r#"{"result":[],"result_info":{"cursor":""}}"#).unwrap();
        assert!(Page::from(envelope).cursor.is_none());
    }

    #[test]
    fn namespace_ignores_extra_fields() {
        let ns: Namespace = serde_json::from_str(
            r#"{"id":"0f2ac74b","title":"prod","supports_url_encoding":true}"#,
        )
        .unwrap();
        assert_eq!(ns.label(), "prod");
    }

    #[test]
    fn find_by_label_is_exact() {
        let namespaces = vec![
            Namespace { id: "1".into(), title: "prod".into() },
            Namespace { id: "2".into(), title: "prod-eu".into() },
        ];
        assert_eq!(find_by_label(&namespaces, "prod-eu").unwrap().id, "2");
        assert!(find_by_label(&namespaces, "Prod").is_none());
        assert!(find_by_label(&namespaces, "pro").is_none());
    }
}
