//! Interactive pickers — filter by substring, then choose from the matches.

use std::io;

use dialoguer::{Input, Select};

use crate::cli::output;
use crate::errors::{KvPeekError, Result};

/// Something that can ask the operator to pick one label out of many.
pub trait Prompter {
    /// Return the label the operator chose. `choices` is never empty.
    fn select(&mut self, message: &str, choices: &[String]) -> Result<String>;
}

/// Labels that contain `input` (case-sensitive), in their original order.
pub fn filter_candidates<'a>(input: &str, choices: &'a [String]) -> Vec<&'a String> {
    choices.iter().filter(|c| c.contains(input)).collect()
}

/// Terminal prompter built on `dialoguer`.
///
/// Asks for a filter string first, then shows the matching labels in a
/// scrollable list of at most `limit` rows.
pub struct TerminalPrompter {
    limit: usize,
}

impl TerminalPrompter {
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, message: &str, choices: &[String]) -> Result<String> {
        loop {
            let filter = Input::<String>::new()
                .with_prompt(format!("{message} (filter, Enter for all)"))
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_error)?;

            let visible = filter_candidates(&filter, choices);
            if visible.is_empty() {
                output::warning(&format!("Nothing matches '{filter}'. Try again."));
                continue;
            }

            let picked = Select::new()
                .with_prompt(message)
                .items(&visible)
                .default(0)
                .max_length(self.limit)
                .interact_opt()
                .map_err(prompt_error)?;

            return match picked {
                Some(index) => Ok(visible[index].clone()),
                None => Err(KvPeekError::UserCancelled),
            };
        }
    }
}

fn prompt_error(e: dialoguer::Error) -> KvPeekError {
    match e {
        dialoguer::Error::IO(err) if err.kind() == io::ErrorKind::Interrupted => {
            KvPeekError::UserCancelled
        }
        other => KvPeekError::PromptFailed(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let choices = labels(&["prod", "staging", "dev"]);
        assert_eq!(filter_candidates("", &choices).len(), 3);
    }

    #[test]
    fn filter_is_substring_and_ordered() {
        let choices = labels(&["user:1", "session:9", "user:22", "flags"]);
        let got: Vec<_> = filter_candidates("user", &choices)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(got, labels(&["user:1", "user:22"]));

        let got = filter_candidates("s", &choices);
        assert_eq!(got, vec![&choices[1], &choices[3]]);
    }

    #[test]
    fn filter_is_case_sensitive() {
        let choices = labels(&["Prod", "prod-eu"]);
        let got = filter_candidates("prod", &choices);
        assert_eq!(got, vec![&choices[1]]);
    }

    #[test]
    fn filter_with_no_match_is_empty() {
        let choices = labels(&["alpha", "beta"]);
        assert!(filter_candidates("gamma", &choices).is_empty());
    }

    #[test]
    fn terminal_prompter_limit_is_at_least_one() {
        assert_eq!(TerminalPrompter::new(0).limit, 1);
        assert_eq!(TerminalPrompter::new(10).limit, 10);
    }
}
