//! Command implementations

mod init;
mod lint;
mod show_config;

pub use init::init;
pub use lint::lint;
pub use show_config::show_config;
