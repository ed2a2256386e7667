//! CLI integration tests, run against the built binary with snapshot files.

mod cli_test;
mod config_test;
mod get_test;
mod helpers;
mod set_test;
