//! CLI command handlers. Each command is in its own file.

mod check;
mod completions;
mod import;
mod list;
mod names;
mod random;
mod reset;
mod setup;
mod show;
mod sync;

pub use check::run_check;
pub use completions::{run_completions, run_man};
pub use import::run_import;
pub use list::run_list;
pub use names::run_names;
pub use random::run_random;
pub use reset::run_reset;
#[cfg(test)]
pub(crate) use reset::is_confirmation as is_reset_confirmation;
pub use setup::run_setup;
pub use show::run_show;
pub use sync::{run_sync, SyncOverrides};
#[cfg(test)]
pub(crate) use sync::{effective_config as sync_effective_config, run_sync_with};
