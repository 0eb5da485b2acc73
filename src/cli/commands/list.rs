//! `kvpeek --list` — display the account's namespaces in a table.

use tracing::debug;

use crate::api::KvClient;
use crate::cli::output;
use crate::config::{Credentials, Settings};
use crate::errors::Result;

/// Execute the `--list` command.
pub fn execute(credentials: Credentials, settings: &Settings) -> Result<()> {
    let client = KvClient::new(credentials, settings);
    let namespaces = client.list_namespaces()?;
    debug!(count = namespaces.len(), "listed namespaces");

    output::print_namespaces_table(&namespaces);

    Ok(())
}
