pub mod cli;
pub mod commands;
pub mod config;
pub mod converter;
pub mod error;
pub mod field;
pub mod output;
pub mod reader;
pub mod scanner;
pub mod tag;
pub mod validator;

pub use error::{Result, TagGuardError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CHECKS_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
