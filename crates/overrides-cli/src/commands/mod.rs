//! Command implementations for overrides-cli

pub mod add;
pub mod apply;
pub mod list;

pub use add::run_add;
pub use apply::run_apply;
pub use list::run_list;
