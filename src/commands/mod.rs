pub mod check;
mod context;
pub mod init;

pub use check::{check_exit_code, run_check};
pub use init::{generate_config_template, run_init, run_init_impl};
