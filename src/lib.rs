pub mod config;
pub mod error;
pub mod ideas;
pub mod server;
pub mod vertex;

pub use error::{Error, Result};
