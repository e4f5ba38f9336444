//! Configuration validation
//!
//! - `trait_def`: core Validate trait definition
//! - `url`: endpoint URL checks
//! - `config_validators`: validators for every configuration model
//! - `tests`: test suite for all validators

mod config_validators;
mod trait_def;
mod url;

pub use trait_def::Validate;
pub use url::validate_endpoint_url;
