pub mod catalog;
pub mod cli;
pub mod config;
pub mod demos;
pub mod error;
pub mod logging;
pub mod output;
pub mod runner;

pub use error::{QuickrefError, Result};
