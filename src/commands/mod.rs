//! Command implementations for the git-anchors CLI.

pub mod add;
pub mod init_bare;
pub mod list;
pub mod remove;
pub mod resolve;

pub use add::execute_add;
pub use init_bare::execute_init_bare;
pub use list::execute_list;
pub use remove::execute_remove;
pub use resolve::execute_resolve;
