//! kiln CLI - inspect the build configuration the kiln resolver produces.
//!
//! The resolver itself lives in `kiln-config`; this crate wraps it in a
//! command-line interface.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - `commands` - one module per subcommand
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - colored status lines on stderr
//!
//! # Example
//!
//! ```rust
//! use kiln_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, true, true);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
