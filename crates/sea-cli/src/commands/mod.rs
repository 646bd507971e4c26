//! Command implementations for sea-cli

pub mod apply;
pub mod folder;
pub mod list;
pub mod restore;
pub mod status;

pub use apply::{run_apply, run_pick};
pub use folder::run_folder;
pub use list::run_list;
pub use restore::run_restore;
pub use status::run_status;
