//! # hyperstack
//!
//! Client plumbing for the Hyperstack cloud-management REST API.
//!
//! Provides:
//! - Credential resolution from an explicit key, `HYPERSTACK_KEY`, or
//!   `~/.hyperstack/credentials`
//! - Immutable request descriptors and typed request payloads
//! - A thin HTTP adapter that authenticates, sends one request, and
//!   translates failures into [`Error`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use hyperstack::{ClientConfig, CredentialResolver, HyperstackClient, Request};
//!
//! # async fn example() -> hyperstack::Result<()> {
//! let key = CredentialResolver::from_env().resolve(None)?;
//! let client = HyperstackClient::new(ClientConfig::default())?;
//! let flavors = client.send(&Request::get("/core/flavors"), &key).await?;
//! println!("{flavors}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod models;
pub mod request;

pub use client::HyperstackClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use credentials::{ApiKey, CREDENTIALS_ENV_VAR, CredentialResolver, CredentialSource};
pub use error::{Error, Result};
pub use models::{
    EnvironmentRequest, KeypairRequest, Region, UpdateEnvironmentRequest, VirtualMachineRequest,
};
pub use request::Request;
pub use reqwest::Method;
