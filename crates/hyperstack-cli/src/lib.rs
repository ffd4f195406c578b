//! # hyperstack-cli
//!
//! Hyperstack command-line interface.
//!
//! Provides commands for:
//! - Environment management
//! - Keypair registration
//! - Flavor, image and GPU stock catalogs
//! - Virtual machine lifecycle
//!
//! # Architecture
//!
//! Each invocation resolves one API key, maps the parsed subcommand to a
//! single request, sends it and prints the JSON response.
//!
//! ```text
//! ┌───────────┐   cli::Commands   ┌──────────────┐   Request   ┌──────────────────┐
//! │  clap CLI │──────────────────►│  Dispatcher  │────────────►│ HyperstackClient │──► HTTPS
//! └───────────┘                   └──────┬───────┘             └──────────────────┘
//!                                        │ serde_json::Value
//!                                        ▼
//!                                 ┌──────────────┐
//!                                 │ OutputFormat │──► stdout
//!                                 └──────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod dispatch;
pub mod error;
pub mod output;

pub use cli::{Cli, Commands, Format};
pub use dispatch::{Dispatcher, request_for};
pub use error::CliError;
pub use output::OutputFormat;
