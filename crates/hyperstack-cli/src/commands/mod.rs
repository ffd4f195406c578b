//! Request builders for each API resource.
//!
//! Each submodule turns parsed arguments into a [`hyperstack::Request`]:
//! - [`environment`] - Environment CRUD
//! - [`keypair`] - SSH keypair registration
//! - [`catalog`] - Flavors, images and GPU stock
//! - [`vm`] - Virtual machine lifecycle

pub mod catalog;
pub mod environment;
pub mod keypair;
pub mod vm;

pub use vm::VmAction;
