//! Command implementations for the slink CLI
//!
//! This module contains all CLI command implementations, with each command
//! in its own submodule for better organization and maintainability.

mod browse;
mod expand;
mod list;
mod shorten;
mod slug;

pub use browse::execute as browse;
pub use expand::execute as expand;
pub use list::execute as list;
pub use shorten::execute as shorten;
pub use slug::execute as slug;
