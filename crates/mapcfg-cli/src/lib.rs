#![deny(unsafe_code)]

//! CLI library components for the map configuration validator.

pub mod logging;
