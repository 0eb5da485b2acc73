//! Colored terminal output helpers.
//!
//! Status lines go through these functions so styling stays consistent.
//! Requested data (values, tables, completion scripts) and the fatal error
//! that ends a run go to stdout; warnings and hints go to stderr.

use std::io::Write;

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::api::Namespace;
use crate::errors::{KvPeekError, Result};

/// Print the red error that ends the run: "x_mark {msg}"
pub fn fatal(msg: &str) {
    println!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    eprintln!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    eprintln!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Write `value` as 2-space indented JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, value: &serde_json::Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| KvPeekError::SerializationError(e.to_string()))?;
    writeln!(out, "{text}")?;
    Ok(())
}

/// Build a Title / ID table of namespaces.
pub fn namespace_table(namespaces: &[Namespace]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Title", "ID"]);

    for ns in namespaces {
        table.add_row(vec![ns.title.clone(), ns.id.clone()]);
    }

    table
}

/// Print the namespace table, or a hint when the account has none.
pub fn print_namespaces_table(namespaces: &[Namespace]) {
    if namespaces.is_empty() {
        info("No KV namespaces in this account.");
        tip("Create one with `wrangler kv namespace create <NAME>`.");
        return;
    }

    println!("{}", namespace_table(namespaces));
}
