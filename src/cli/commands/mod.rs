pub mod completions;
pub mod get;
pub mod list;
