pub mod cmd;
pub mod config;
pub mod error;
pub mod fs;
pub mod hybrid;
pub mod keys;
pub mod ops;
pub mod sym;
pub mod term;
pub mod vault;

pub use error::{Error, Result};
