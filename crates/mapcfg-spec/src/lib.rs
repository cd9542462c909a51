#![deny(unsafe_code)]

//! Loading of parameter specifications and user configurations.
//!
//! This is the I/O collar around the validation core: YAML specification
//! parsing, JSON configuration parsing, the embedded default map-UI
//! specification, and the example configuration. Anything unreadable or
//! unparseable fails fast here with a clear message, before the core runs.

pub mod error;
mod example;
mod loaders;

pub use error::{Result, SpecError};
pub use example::example_config;
pub use loaders::{default_spec, load_spec, load_user_params, parse_spec, parse_user_params};
