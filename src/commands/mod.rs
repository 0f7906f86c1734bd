//! Command implementations for instill CLI

pub mod agents;
pub mod completions;
pub mod detect;
pub mod helpers;
pub mod install;
pub mod remove;
pub mod show;
pub mod version;

pub use helpers::Context;
