//! ak - Agent Kit CLI
//!
//! Install bundled agent skills and workflows into the current project.

pub mod app;
pub mod cli;
pub mod error;
pub mod installer;
pub mod utils;

pub use error::{AkError, Result};
