pub mod assistant;
pub mod config;
pub mod document;
pub mod error;
pub mod io;
pub mod paths;
pub mod templates;
pub mod types;
pub mod workspace;

pub use error::{Result, SpeckitError};
