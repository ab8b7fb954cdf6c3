pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod github;
pub mod output;

pub use error::{Result, VersionGateError};
