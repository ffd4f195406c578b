//! Command dispatch.
//!
//! [`request_for`] is the fixed mapping from a parsed command to the API
//! call it stands for. [`Dispatcher`] sends that call and hands the response
//! to the output formatter. The only validation past clap is that
//! identifiers stay single path segments.

use std::io::Write;

use hyperstack::{ApiKey, HyperstackClient, Request};
use serde_json::Value;
use tracing::info;

use crate::cli::Commands;
use crate::commands::{VmAction, catalog, environment, keypair, vm};
use crate::error::CliError;
use crate::output::OutputFormat;

/// Builds the request descriptor for `command`.
///
/// # Errors
///
/// Returns an error if an input file named by the command cannot be read or
/// an identifier cannot be used as a path segment.
pub fn request_for(command: &Commands) -> Result<Request, CliError> {
    let request = match command {
        Commands::CreateEnvironment(args) => environment::create(args)?,
        Commands::GetEnvironment { environment_id } => environment::get(environment_id)?,
        Commands::ListEnvironments(args) => environment::list(args),
        Commands::UpdateEnvironment(args) => environment::update(args)?,
        Commands::DeleteEnvironment { environment_id } => environment::delete(environment_id)?,
        Commands::CreateKeypair(args) => keypair::create(args)?,
        Commands::GetFlavors => catalog::flavors(),
        Commands::GetImages => catalog::images(),
        Commands::GetGpuStocks => catalog::gpu_stocks(),
        Commands::CreateVm(args) => vm::create(args)?,
        Commands::ListVms(args) => vm::list(args),
        Commands::GetVm(args) => VmAction::Get.request(&args.vm_id)?,
        Commands::StartVm(args) => VmAction::Start.request(&args.vm_id)?,
        Commands::StopVm(args) => VmAction::Stop.request(&args.vm_id)?,
        Commands::RebootVm(args) => VmAction::HardReboot.request(&args.vm_id)?,
        Commands::HibernateVm(args) => VmAction::Hibernate.request(&args.vm_id)?,
        Commands::RestoreVm(args) => VmAction::Restore.request(&args.vm_id)?,
        Commands::DeleteVm(args) => VmAction::Delete.request(&args.vm_id)?,
    };
    Ok(request)
}

/// Sends commands through an authenticated client.
#[derive(Debug)]
pub struct Dispatcher<'a> {
    client: &'a HyperstackClient,
    key: &'a ApiKey,
}

impl<'a> Dispatcher<'a> {
    /// Creates a dispatcher over an existing client and resolved key.
    #[must_use]
    pub const fn new(client: &'a HyperstackClient, key: &'a ApiKey) -> Self {
        Self { client, key }
    }

    /// Sends `command` and returns the response envelope.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or the API call fails.
    pub async fn dispatch(&self, command: &Commands) -> Result<Value, CliError> {
        let request = request_for(command)?;
        info!(
            command = command.name(),
            method = %request.method(),
            path = %request.path(),
            "dispatching command"
        );
        Ok(self.client.send(&request, self.key).await?)
    }

    /// Sends `command` and writes the formatted response to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails or the output cannot be written.
    pub async fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        command: &Commands,
    ) -> Result<(), CliError> {
        let envelope = self.dispatch(command).await?;
        format.write(out, &envelope)
    }
}
