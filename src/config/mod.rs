//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::WealthPaths;
pub use settings::{BackendKind, Settings};
