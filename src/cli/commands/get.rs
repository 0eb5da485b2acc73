//! Default command — pick a namespace and key, then print the value.

use std::io::{self, Write};

use tracing::debug;

use crate::api::models::{find_by_label, Labeled};
use crate::api::{KvClient, Namespace, Transport};
use crate::cli::output;
use crate::cli::prompt::{Prompter, TerminalPrompter};
use crate::config::{Credentials, Settings, Target};
use crate::errors::{KvPeekError, Result};

/// Execute the fetch flow against the live API with a terminal picker.
pub fn execute(credentials: Credentials, settings: &Settings, target: &Target) -> Result<()> {
    let client = KvClient::new(credentials, settings);
    let mut prompter = TerminalPrompter::new(settings.prompt_limit);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    fetch_value(&client, target, &mut prompter, &mut out)
}

/// List namespaces, resolve the namespace and key (from `target` or the
/// prompter), fetch the value, and write it to `out` as pretty JSON.
pub fn fetch_value<T, P, W>(
    client: &KvClient<T>,
    target: &Target,
    prompter: &mut P,
    out: &mut W,
) -> Result<()>
where
    T: Transport,
    P: Prompter,
    W: Write,
{
    let namespaces = client.list_namespaces()?;
    let namespace = resolve_namespace(&namespaces, target.namespace.as_deref(), prompter)?;
    debug!(title = %namespace.title, id = %namespace.id, "namespace resolved");

    // A key given up front is trusted as-is; a bad name surfaces at fetch time.
    let key = match target.key.as_deref() {
        Some(key) => key.to_string(),
        None => {
            let keys = client.list_keys(&namespace.id)?;
            pick(prompter, "keys", "Key?", &keys)?.name.clone()
        }
    };

    let value = client.get_value(&namespace.id, &key)?;
    output::write_json(out, &value)
}

fn resolve_namespace<'a, P: Prompter>(
    namespaces: &'a [Namespace],
    requested: Option<&str>,
    prompter: &mut P,
) -> Result<&'a Namespace> {
    if let Some(title) = requested {
        if let Some(ns) = find_by_label(namespaces, title) {
            return Ok(ns);
        }
        output::warning(&format!("Namespace '{title}' not found, pick one instead."));
    }
    pick(prompter, "namespaces", "Namespace?", namespaces)
}

/// Ask the prompter to choose among `items` by label and map the answer back.
fn pick<'a, P, I>(prompter: &mut P, kind: &'static str, message: &str, items: &'a [I]) -> Result<&'a I>
where
    P: Prompter,
    I: Labeled,
{
    if items.is_empty() {
        return Err(KvPeekError::NothingToSelect(kind));
    }

    let labels: Vec<String> = items.iter().map(|i| i.label().to_string()).collect();
    let chosen = prompter.select(message, &labels)?;

    find_by_label(items, &chosen).ok_or(KvPeekError::SelectionNotFound(chosen))
}
