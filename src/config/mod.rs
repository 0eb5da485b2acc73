//! Configuration — credentials and targets from flags/env, tuning from `config.toml`.

pub mod credentials;
pub mod settings;

pub use credentials::{Credentials, Target};
pub use settings::Settings;
