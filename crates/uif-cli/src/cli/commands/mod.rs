//! CLI command handlers. Each command is in its own file for clarity.

mod checksum;
mod completions;
mod fetch;
mod man;

pub use checksum::run_checksum;
pub use completions::run_completions;
pub use fetch::run_fetch;
pub use man::run_man;
