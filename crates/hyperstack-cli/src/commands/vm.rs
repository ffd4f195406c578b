//! Virtual machine requests.

use hyperstack::{Method, Request, VirtualMachineRequest};
use tracing::debug;

use crate::cli::{CreateVmArgs, ListVmsArgs};
use crate::error::CliError;

const VMS_PATH: &str = "/core/virtual-machines";

/// Operations on a single existing virtual machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VmAction {
    /// Fetch details.
    Get,
    /// Power on.
    Start,
    /// Shut down.
    Stop,
    /// Hard reboot.
    HardReboot,
    /// Hibernate.
    Hibernate,
    /// Restore from hibernation.
    Restore,
    /// Delete permanently.
    Delete,
}

impl VmAction {
    /// Builds the request for `vm_id`.
    ///
    /// Power actions are `GET`s on a sub-resource of the VM.
    ///
    /// # Errors
    ///
    /// Returns an error if `vm_id` is empty, `.` or `..`.
    pub fn request(self, vm_id: &str) -> Result<Request, CliError> {
        let (method, action) = match self {
            Self::Get => (Method::GET, None),
            Self::Start => (Method::GET, Some("start")),
            Self::Stop => (Method::GET, Some("stop")),
            Self::HardReboot => (Method::GET, Some("hard-reboot")),
            Self::Hibernate => (Method::GET, Some("hibernate")),
            Self::Restore => (Method::GET, Some("hibernate-restore")),
            Self::Delete => (Method::DELETE, None),
        };
        let request = Request::new(method, VMS_PATH).with_segment(vm_id)?;
        Ok(match action {
            Some(action) => request.with_segment(action)?,
            None => request,
        })
    }
}

/// `POST /core/virtual-machines`
///
/// `--user-data-file`, when given, replaces `--user-data` verbatim.
pub fn create(args: &CreateVmArgs) -> Result<Request, CliError> {
    let user_data = match &args.user_data_file {
        Some(path) => {
            debug!(path = %path.display(), "reading user data file");
            std::fs::read_to_string(path).map_err(|e| CliError::input_file(path, e))?
        }
        None => args.user_data.clone(),
    };

    let body = VirtualMachineRequest {
        name: args.name.clone(),
        environment_name: args.environment_name.clone(),
        image_name: args.image_name.clone(),
        create_bootable_volume: args.create_bootable_volume,
        flavor_name: args.flavor_name.clone(),
        key_name: args.key_name.clone(),
        user_data,
        assign_floating_ip: args.floating_ip(),
        count: args.count,
    };
    Ok(Request::post(VMS_PATH).with_json(&body)?)
}

/// `GET /core/virtual-machines`, with optional filters and paging.
#[must_use]
pub fn list(args: &ListVmsArgs) -> Request {
    Request::get(VMS_PATH)
        .with_optional_query("search", args.search.as_deref())
        .with_optional_query("environment", args.environment.as_deref())
        .with_optional_query("page", args.page)
        .with_optional_query("pageSize", args.page_size)
}
