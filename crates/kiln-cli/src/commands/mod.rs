//! Command implementations for the kiln CLI.
//!
//! - [`resolve`] - print the resolved configuration
//! - [`check`] - validate it
//! - [`classify`] - classify paths
//! - [`asset`] - inline-or-emit decisions
//! - [`schema`] - JSON Schema of `kiln.toml`
//!
//! Each module exposes an `execute` function taking the parsed arguments.

pub mod asset;
pub mod check;
pub mod classify;
pub mod resolve;
pub mod schema;
pub(crate) mod utils;

pub use asset::execute as asset_execute;
pub use check::execute as check_execute;
pub use classify::execute as classify_execute;
pub use resolve::execute as resolve_execute;
pub use schema::execute as schema_execute;
