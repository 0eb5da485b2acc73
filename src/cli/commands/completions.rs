//! `kvpeek --completions <shell>` — generate shell completion scripts.
//!
//! Usage:
//!   kvpeek --completions bash > ~/.bash_completion.d/kvpeek
//!   kvpeek --completions zsh

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;

/// Execute the `--completions` command.
pub fn execute(shell: Shell) {
    write_script(shell, &mut io::stdout());
}

/// Generate the completion script for `shell` into `out`.
pub fn write_script<W: Write>(shell: Shell, out: &mut W) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, out);
}
