//! Command-line argument parsing with clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use hyperstack::{DEFAULT_BASE_URL, Region};

/// Hyperstack CLI - manage environments, keypairs and virtual machines.
#[derive(Parser, Debug, Clone)]
#[command(name = "hyperstack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Hyperstack API key (defaults to HYPERSTACK_KEY or ~/.hyperstack/credentials).
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, global = true, default_value_t = Format::Pretty)]
    pub format: Format,

    /// API base URL.
    #[arg(long, global = true, env = "HYPERSTACK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds.
    #[arg(
        long,
        global = true,
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[derive(Default)]
pub enum Format {
    /// Indented JSON for reading.
    #[default]
    Pretty,
    /// Compact JSON for scripting.
    Json,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a new environment.
    CreateEnvironment(CreateEnvironmentArgs),

    /// Fetch details of a specific environment.
    GetEnvironment {
        /// The ID of the environment to retrieve.
        #[arg(long)]
        environment_id: String,
    },

    /// Fetch a list of environments.
    ListEnvironments(ListEnvironmentsArgs),

    /// Update an existing environment.
    UpdateEnvironment(UpdateEnvironmentArgs),

    /// Permanently delete an environment.
    DeleteEnvironment {
        /// The ID of the environment to delete.
        #[arg(long)]
        environment_id: String,
    },

    /// Create a new keypair.
    CreateKeypair(CreateKeypairArgs),

    /// Fetch available instance flavors.
    GetFlavors,

    /// Fetch available system images.
    GetImages,

    /// Fetch information on current and upcoming GPU availability.
    GetGpuStocks,

    /// Create a new virtual machine.
    CreateVm(CreateVmArgs),

    /// Fetch a list of virtual machines.
    ListVms(ListVmsArgs),

    /// Fetch details of a specific virtual machine.
    GetVm(VmIdArgs),

    /// Start a virtual machine.
    StartVm(VmIdArgs),

    /// Stop (shut down) a virtual machine.
    StopVm(VmIdArgs),

    /// Hard-reboot a virtual machine.
    RebootVm(VmIdArgs),

    /// Hibernate a virtual machine.
    HibernateVm(VmIdArgs),

    /// Restore a virtual machine from hibernation.
    RestoreVm(VmIdArgs),

    /// Permanently delete a virtual machine.
    DeleteVm(VmIdArgs),
}

impl Commands {
    /// Subcommand name as typed on the command line.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateEnvironment(_) => "create-environment",
            Self::GetEnvironment { .. } => "get-environment",
            Self::ListEnvironments(_) => "list-environments",
            Self::UpdateEnvironment(_) => "update-environment",
            Self::DeleteEnvironment { .. } => "delete-environment",
            Self::CreateKeypair(_) => "create-keypair",
            Self::GetFlavors => "get-flavors",
            Self::GetImages => "get-images",
            Self::GetGpuStocks => "get-gpu-stocks",
            Self::CreateVm(_) => "create-vm",
            Self::ListVms(_) => "list-vms",
            Self::GetVm(_) => "get-vm",
            Self::StartVm(_) => "start-vm",
            Self::StopVm(_) => "stop-vm",
            Self::RebootVm(_) => "reboot-vm",
            Self::HibernateVm(_) => "hibernate-vm",
            Self::RestoreVm(_) => "restore-vm",
            Self::DeleteVm(_) => "delete-vm",
        }
    }
}

/// Region argument for environment creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RegionArg {
    /// Canada.
    #[value(name = "CANADA-1")]
    Canada1,
    /// Norway.
    #[value(name = "NORWAY-1")]
    Norway1,
}

impl From<RegionArg> for Region {
    fn from(arg: RegionArg) -> Self {
        match arg {
            RegionArg::Canada1 => Self::Canada1,
            RegionArg::Norway1 => Self::Norway1,
        }
    }
}

/// Arguments for `create-environment`.
#[derive(Args, Debug, Clone)]
pub struct CreateEnvironmentArgs {
    /// Name for the environment.
    #[arg(long)]
    pub name: String,

    /// Region where the environment will be created.
    #[arg(long, value_enum)]
    pub region: RegionArg,
}

/// Arguments for `list-environments`.
#[derive(Args, Debug, Clone)]
pub struct ListEnvironmentsArgs {
    /// Search for environments by name, ID, or region.
    #[arg(long)]
    pub search: Option<String>,

    /// Page number to retrieve.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: Option<u32>,

    /// Number of environments per page.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,
}

/// Arguments for `update-environment`.
#[derive(Args, Debug, Clone)]
pub struct UpdateEnvironmentArgs {
    /// The ID of the environment to update.
    #[arg(long)]
    pub environment_id: String,

    /// New name for the environment.
    #[arg(long)]
    pub new_name: String,
}

/// Arguments for `create-keypair`.
#[derive(Args, Debug, Clone)]
pub struct CreateKeypairArgs {
    /// Name for the keypair.
    #[arg(long)]
    pub name: String,

    /// Name of the environment.
    #[arg(long)]
    pub environment_name: String,

    /// SSH public key in OpenSSH format.
    #[arg(long, required_unless_present = "public_key_file", conflicts_with = "public_key_file")]
    pub public_key: Option<String>,

    /// File containing the SSH public key.
    #[arg(long, value_name = "PATH")]
    pub public_key_file: Option<PathBuf>,
}

/// Arguments for `create-vm`.
#[derive(Args, Debug, Clone)]
pub struct CreateVmArgs {
    /// Name for the virtual machine.
    #[arg(long)]
    pub name: String,

    /// Name of the environment.
    #[arg(long)]
    pub environment_name: String,

    /// Name of the image to use.
    #[arg(long)]
    pub image_name: String,

    /// Name of the flavor to use.
    #[arg(long)]
    pub flavor_name: String,

    /// Name of the keypair to use.
    #[arg(long)]
    pub key_name: String,

    /// Create a bootable volume.
    #[arg(long)]
    pub create_bootable_volume: bool,

    /// User data for cloud-init.
    #[arg(long, default_value = "", conflicts_with = "user_data_file")]
    pub user_data: String,

    /// File containing user data for cloud-init.
    #[arg(long, value_name = "PATH")]
    pub user_data_file: Option<PathBuf>,

    /// Assign a floating IP (the default).
    #[arg(long, overrides_with = "no_floating_ip")]
    pub assign_floating_ip: bool,

    /// Do not assign a floating IP.
    #[arg(long)]
    pub no_floating_ip: bool,

    /// Number of instances to create.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,
}

impl CreateVmArgs {
    /// Whether a floating IP should be assigned.
    #[must_use]
    pub const fn floating_ip(&self) -> bool {
        !self.no_floating_ip
    }
}

/// Arguments for `list-vms`.
#[derive(Args, Debug, Clone)]
pub struct ListVmsArgs {
    /// Search for virtual machines by name or ID.
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by environment name or ID.
    #[arg(long)]
    pub environment: Option<String>,

    /// Page number to retrieve.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: Option<u32>,

    /// Number of virtual machines per page.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,
}

/// Arguments for commands addressing a single virtual machine.
#[derive(Args, Debug, Clone)]
pub struct VmIdArgs {
    /// The ID of the virtual machine.
    #[arg(long)]
    pub vm_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_help_does_not_panic() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_defaults() {
        let cli = Cli::parse_from(["hyperstack", "get-flavors"]);
        assert!(matches!(cli.command, Commands::GetFlavors));
        assert_eq!(cli.format, Format::Pretty);
        assert!(cli.api_key.is_none());
        assert_eq!(cli.timeout, 30);
    }

    #[test]
    fn parse_rejects_zero_timeout() {
        let result = Cli::try_parse_from(["hyperstack", "--timeout", "0", "get-flavors"]);
        assert!(result.is_err());

        let cli = Cli::parse_from(["hyperstack", "--timeout", "1", "get-flavors"]);
        assert_eq!(cli.timeout, 1);
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "hyperstack", "get-images", "--format", "json", "--api-key", "abc",
        ]);
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.api_key.as_deref(), Some("abc"));
    }

    #[test]
    fn parse_base_url_flag() {
        let cli = Cli::parse_from(["hyperstack", "--base-url", "http://127.0.0.1:9000/v1", "get-images"]);
        assert_eq!(cli.base_url, "http://127.0.0.1:9000/v1");
    }

    #[test]
    fn parse_create_environment() {
        let cli = Cli::parse_from([
            "hyperstack", "create-environment",
            "--name", "my-environment",
            "--region", "CANADA-1",
        ]);
        match cli.command {
            Commands::CreateEnvironment(args) => {
                assert_eq!(args.name, "my-environment");
                assert_eq!(args.region, RegionArg::Canada1);
            }
            _ => panic!("expected create-environment command"),
        }
    }

    #[test]
    fn parse_create_environment_rejects_unknown_region() {
        let result = Cli::try_parse_from([
            "hyperstack", "create-environment", "--name", "env", "--region", "MARS-1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_get_environment_requires_id() {
        assert!(Cli::try_parse_from(["hyperstack", "get-environment"]).is_err());
    }

    #[test]
    fn parse_list_environments_paging() {
        let cli = Cli::parse_from([
            "hyperstack", "list-environments", "--search", "gpu", "--page", "2", "--page-size", "50",
        ]);
        match cli.command {
            Commands::ListEnvironments(args) => {
                assert_eq!(args.search.as_deref(), Some("gpu"));
                assert_eq!(args.page, Some(2));
                assert_eq!(args.page_size, Some(50));
            }
            _ => panic!("expected list-environments command"),
        }
    }

    #[test]
    fn parse_list_environments_rejects_zero_page() {
        assert!(Cli::try_parse_from(["hyperstack", "list-environments", "--page", "0"]).is_err());
    }

    #[test]
    fn parse_update_environment() {
        let cli = Cli::parse_from([
            "hyperstack", "update-environment", "--environment-id", "42", "--new-name", "renamed",
        ]);
        match cli.command {
            Commands::UpdateEnvironment(args) => {
                assert_eq!(args.environment_id, "42");
                assert_eq!(args.new_name, "renamed");
            }
            _ => panic!("expected update-environment command"),
        }
    }

    #[test]
    fn parse_create_keypair_requires_a_key_source() {
        let result = Cli::try_parse_from([
            "hyperstack", "create-keypair", "--name", "laptop", "--environment-name", "env",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_create_keypair_rejects_both_key_sources() {
        let result = Cli::try_parse_from([
            "hyperstack", "create-keypair",
            "--name", "laptop",
            "--environment-name", "env",
            "--public-key", "ssh-ed25519 AAAA",
            "--public-key-file", "/tmp/id.pub",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_create_keypair_with_file() {
        let cli = Cli::parse_from([
            "hyperstack", "create-keypair",
            "--name", "laptop",
            "--environment-name", "env",
            "--public-key-file", "/tmp/id.pub",
        ]);
        match cli.command {
            Commands::CreateKeypair(args) => {
                assert!(args.public_key.is_none());
                assert_eq!(args.public_key_file, Some(PathBuf::from("/tmp/id.pub")));
            }
            _ => panic!("expected create-keypair command"),
        }
    }

    #[test]
    fn parse_create_vm_defaults() {
        let cli = Cli::parse_from([
            "hyperstack", "create-vm",
            "--name", "vm",
            "--environment-name", "env",
            "--image-name", "Ubuntu Server 22.04 LTS",
            "--flavor-name", "n3-RTX-A6000x1",
            "--key-name", "laptop",
        ]);
        match cli.command {
            Commands::CreateVm(args) => {
                assert!(!args.create_bootable_volume);
                assert!(args.floating_ip());
                assert_eq!(args.count, 1);
                assert_eq!(args.user_data, "");
                assert!(args.user_data_file.is_none());
            }
            _ => panic!("expected create-vm command"),
        }
    }

    #[test]
    fn parse_create_vm_no_floating_ip() {
        let cli = Cli::parse_from([
            "hyperstack", "create-vm",
            "--name", "vm",
            "--environment-name", "env",
            "--image-name", "img",
            "--flavor-name", "flv",
            "--key-name", "key",
            "--no-floating-ip",
            "--create-bootable-volume",
            "--count", "3",
        ]);
        match cli.command {
            Commands::CreateVm(args) => {
                assert!(!args.floating_ip());
                assert!(args.create_bootable_volume);
                assert_eq!(args.count, 3);
            }
            _ => panic!("expected create-vm command"),
        }
    }

    #[test]
    fn parse_create_vm_rejects_zero_count() {
        let result = Cli::try_parse_from([
            "hyperstack", "create-vm",
            "--name", "vm",
            "--environment-name", "env",
            "--image-name", "img",
            "--flavor-name", "flv",
            "--key-name", "key",
            "--count", "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_list_vms_environment() {
        let cli = Cli::parse_from(["hyperstack", "list-vms", "--environment", "my-environment"]);
        match cli.command {
            Commands::ListVms(args) => {
                assert_eq!(args.environment.as_deref(), Some("my-environment"));
                assert!(args.search.is_none());
            }
            _ => panic!("expected list-vms command"),
        }
    }

    #[test]
    fn parse_vm_lifecycle_commands() {
        for (name, expected) in [
            ("get-vm", "get"),
            ("start-vm", "start"),
            ("stop-vm", "stop"),
            ("reboot-vm", "reboot"),
            ("hibernate-vm", "hibernate"),
            ("restore-vm", "restore"),
            ("delete-vm", "delete"),
        ] {
            let cli = Cli::parse_from(["hyperstack", name, "--vm-id", "99"]);
            let (kind, args) = match cli.command {
                Commands::GetVm(args) => ("get", args),
                Commands::StartVm(args) => ("start", args),
                Commands::StopVm(args) => ("stop", args),
                Commands::RebootVm(args) => ("reboot", args),
                Commands::HibernateVm(args) => ("hibernate", args),
                Commands::RestoreVm(args) => ("restore", args),
                Commands::DeleteVm(args) => ("delete", args),
                other => panic!("unexpected command {other:?}"),
            };
            assert_eq!(kind, expected);
            assert_eq!(args.vm_id, "99");
        }
    }

    #[test]
    fn command_name_matches_subcommand() {
        let cli = Cli::parse_from(["hyperstack", "reboot-vm", "--vm-id", "1"]);
        assert_eq!(cli.command.name(), "reboot-vm");

        let cli = Cli::parse_from(["hyperstack", "get-gpu-stocks"]);
        assert_eq!(cli.command.name(), "get-gpu-stocks");
    }

    #[test]
    fn region_arg_converts_to_region() {
        assert_eq!(Region::from(RegionArg::Canada1), Region::Canada1);
        assert_eq!(Region::from(RegionArg::Norway1), Region::Norway1);
    }

    #[test]
    fn format_default_is_pretty() {
        assert_eq!(Format::default(), Format::Pretty);
    }
}
