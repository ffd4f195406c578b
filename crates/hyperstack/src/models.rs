//! Request payloads, using the field names the API expects.

use serde::Serialize;

/// Regions an environment can be created in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Region {
    /// `CANADA-1`
    #[serde(rename = "CANADA-1")]
    Canada1,
    /// `NORWAY-1`
    #[serde(rename = "NORWAY-1")]
    Norway1,
}

/// Body of `POST /core/environments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentRequest {
    /// Environment name.
    pub name: String,
    /// Region the environment lives in.
    pub region: Region,
}

/// Body of `PUT /core/environments/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateEnvironmentRequest {
    /// New environment name.
    pub name: String,
}

/// Body of `POST /core/keypairs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeypairRequest {
    /// Keypair name.
    pub name: String,
    /// Environment the keypair belongs to.
    pub environment_name: String,
    /// SSH public key in OpenSSH format.
    pub public_key: String,
}

/// Body of `POST /core/virtual-machines`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VirtualMachineRequest {
    /// VM name.
    pub name: String,
    /// Environment to create the VM in.
    pub environment_name: String,
    /// Image to boot from.
    pub image_name: String,
    /// Whether to create a bootable volume.
    pub create_bootable_volume: bool,
    /// Instance flavor.
    pub flavor_name: String,
    /// Keypair to install.
    pub key_name: String,
    /// cloud-init user data.
    pub user_data: String,
    /// Whether to attach a public IP.
    pub assign_floating_ip: bool,
    /// Number of VMs to create.
    pub count: u32,
}
