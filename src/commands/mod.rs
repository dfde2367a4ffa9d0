//! CLI command implementations

mod deploy;
mod import;
mod init;
mod status;

pub use deploy::cmd_deploy;
pub use import::cmd_import;
pub use init::cmd_init;
pub use status::cmd_status;
