pub mod presence;
pub mod app;

pub use presence::{branch_on_presence, run_if_absent, run_if_present, ExistenceBranch, OptionPresenceExt};
