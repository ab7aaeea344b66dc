pub mod config;
pub mod error;
pub mod llm;
pub mod parser;
pub mod server;

pub use error::{Error, Result};
