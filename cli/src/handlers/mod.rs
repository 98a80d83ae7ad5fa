mod check;
mod init;
mod inspect;

pub use check::handle_check;
pub use init::{InitOptions, build_default_config, handle_init};
pub use inspect::{describe, handle_inspect};
