//! CLI subcommand implementations

mod init;
mod serve;
mod transform;

pub use init::init_config;
pub use serve::serve;
pub use transform::run_transform;
